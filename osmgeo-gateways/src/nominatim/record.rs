use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// A single match as returned by the `/search` endpoint
/// with `addressdetails=1`.
///
/// Only `lon` and `lat` are required. Everything else
/// that is missing or not a string is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Record {
    #[serde(deserialize_with = "deserialize_coord")]
    pub lon: f64,
    #[serde(deserialize_with = "deserialize_coord")]
    pub lat: f64,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub display_name: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "deserialize_lenient_string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub class: Option<String>,
    #[serde(default)]
    pub address: Address,
}

/// The `address` details of a [`Record`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address(HashMap<String, String>);

impl Address {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// The value of the first name that is present.
    pub fn first_of(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.get(name))
    }
}

impl<K, V> FromIterator<(K, V)> for Address
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = match Value::deserialize(deserializer)? {
            Value::Object(fields) => fields,
            _ => return Ok(Self::default()),
        };
        Ok(fields
            .into_iter()
            .filter_map(|(name, value)| match value {
                Value::String(value) => Some((name, value)),
                _ => None,
            })
            .collect())
    }
}

#[derive(Debug, Error)]
#[error("Invalid coordinate '{0}'")]
struct CoordError(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoord {
    Number(f64),
    Text(String),
}

fn deserialize_coord<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawCoord::deserialize(deserializer)? {
        RawCoord::Number(deg) => Ok(deg),
        RawCoord::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(CoordError(text))),
    }
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}
