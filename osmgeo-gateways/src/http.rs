use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Unexpected response status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fetch a JSON document with a GET request.
pub trait JsonTransport {
    fn get_json(&self, url: &str) -> Result<Value, Error>;
}

impl<T> JsonTransport for &T
where
    T: JsonTransport + ?Sized,
{
    fn get_json(&self, url: &str) -> Result<Value, Error> {
        (**self).get_json(url)
    }
}

/// A blocking HTTP client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn try_new(user_agent: &str, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl JsonTransport for ReqwestTransport {
    fn get_json(&self, url: &str) -> Result<Value, Error> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.text()?;
        json_body(status, &body)
    }
}

fn json_body(status: StatusCode, body: &str) -> Result<Value, Error> {
    if !status.is_success() {
        return Err(Error::Status {
            status: status.as_u16(),
            body: body.to_owned(),
        });
    }
    Ok(serde_json::from_str(body)?)
}
