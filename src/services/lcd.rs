use crate::config::Config;
use crate::error::{LcdError, Result};
use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Read-only access to an LCD: `GET path` returning the parsed JSON body.
#[async_trait]
pub trait LcdTransport: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value>;
}

pub struct HttpLcd {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLcd {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.lcd_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl LcdTransport for HttpLcd {
    async fn get(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("GET {} failed with status {}", url, status);
            return Err(LcdError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

/// Legacy LCD endpoints wrap payloads as `{"height": .., "result": ..}`.
pub fn unwrap_envelope(json: Value) -> Value {
    match json {
        Value::Object(mut map)
            if map.contains_key("result") && map.keys().all(|k| k == "height" || k == "result") =>
        {
            map.remove("result").unwrap_or(Value::Null)
        }
        other => other,
    }
}

pub(crate) fn decode<T: DeserializeOwned>(path: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| LcdError::Decode {
        path: path.to_string(),
        source,
    })
}

pub(crate) fn field<'a>(path: &str, value: &'a Value, name: &'static str) -> Result<&'a Value> {
    value.get(name).ok_or_else(|| LcdError::MissingField {
        path: path.to_string(),
        field: name,
    })
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::collections::HashMap;

    /// Serves canned bodies per path; unknown paths fail like a 500.
    #[derive(Default)]
    pub struct MockLcd {
        responses: HashMap<String, Value>,
    }

    impl MockLcd {
        pub fn with(mut self, path: &str, body: Value) -> Self {
            self.responses.insert(path.to_string(), body);
            self
        }
    }

    #[async_trait]
    impl LcdTransport for MockLcd {
        async fn get(&self, path: &str) -> Result<Value> {
            match self.responses.get(path) {
                Some(body) => Ok(body.clone()),
                None => Err(LcdError::Status {
                    path: path.to_string(),
                    status: 500,
                    body: "no canned response".to_string(),
                }),
            }
        }
    }
}
