use crate::config::{Geocoding, GeocodingGateway};
use anyhow::Result;
use osmgeo_gateways::{http::ReqwestTransport, nominatim::Nominatim};

pub fn geocoding_gateway(cfg: &Geocoding) -> Result<Nominatim> {
    match &cfg.gateway {
        GeocodingGateway::Nominatim {
            base_url,
            user_agent,
            timeout,
        } => {
            log::info!("Use Nominatim gateway ({base_url})");
            let transport = ReqwestTransport::try_new(user_agent, *timeout)?;
            Ok(Nominatim::new(base_url.as_str(), transport))
        }
    }
}
