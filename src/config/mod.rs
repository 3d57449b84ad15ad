use anyhow::{anyhow, Result};
use osmgeo_gateways::{http, nominatim};
use std::{
    env, fs,
    io::ErrorKind,
    path::Path,
    time::Duration,
};
use url::Url;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "osmgeo.toml";

const ENV_NAME_NOMINATIM_BASE_URL: &str = "NOMINATIM_BASE_URL";
const ENV_NAME_NOMINATIM_USER_AGENT: &str = "NOMINATIM_USER_AGENT";

pub struct Config {
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        override_from_env(&mut raw_config);
        Self::try_from(raw_config)
    }
}

fn override_from_env(cfg: &mut raw::Config) {
    let base_url = env::var(ENV_NAME_NOMINATIM_BASE_URL).ok();
    let user_agent = env::var(ENV_NAME_NOMINATIM_USER_AGENT).ok();
    if base_url.is_none() && user_agent.is_none() {
        return;
    }
    let nominatim = cfg
        .gateway
        .get_or_insert_with(Default::default)
        .nominatim
        .get_or_insert_with(Default::default);
    if let Some(base_url) = base_url {
        log::debug!("Use Nominatim base URL from {ENV_NAME_NOMINATIM_BASE_URL}");
        nominatim.base_url = Some(base_url);
    }
    if let Some(user_agent) = user_agent {
        nominatim.user_agent = Some(user_agent);
    }
}

pub struct Geocoding {
    pub gateway: GeocodingGateway,
}

pub enum GeocodingGateway {
    Nominatim {
        base_url: Url,
        user_agent: String,
        timeout: Duration,
    },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { geocoding, gateway } = from;

        let raw::Geocoding { gateway: gw_name } = geocoding.unwrap_or_default();
        let gw_name = gw_name.ok_or_else(|| anyhow!("No geocoding gateway configured"))?;
        let toml_name = gw_name.name();
        let gateway = gateway.unwrap_or_default();

        let gateway = match gw_name {
            raw::GeocodingGateway::Nominatim => {
                let raw::Nominatim {
                    base_url,
                    user_agent,
                    timeout,
                } = gateway.nominatim.unwrap_or_default().or_default();
                let base_url = base_url
                    .as_deref()
                    .unwrap_or(nominatim::DEFAULT_BASE_URL)
                    .parse::<Url>()
                    .map_err(|err| anyhow!("Invalid '{toml_name}' base URL: {err}"))?;
                let user_agent =
                    user_agent.ok_or_else(|| anyhow!("Missing '{toml_name}' user agent"))?;
                if user_agent.trim().is_empty() {
                    return Err(anyhow!("Empty '{toml_name}' user agent"));
                }
                let timeout = timeout.unwrap_or(http::DEFAULT_TIMEOUT);
                GeocodingGateway::Nominatim {
                    base_url,
                    user_agent,
                    timeout,
                }
            }
        };
        let geocoding = Geocoding { gateway };

        Ok(Self { geocoding })
    }
}
