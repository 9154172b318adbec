use crate::client::LcdClient;
use crate::error::Result;
use crate::models::Validator;
use crate::services::lcd::decode;
use log::debug;
use serde_json::Value;

pub struct StakingApi<'a> {
    lcd: &'a LcdClient,
}

impl<'a> StakingApi<'a> {
    pub fn new(lcd: &'a LcdClient) -> Self {
        Self { lcd }
    }

    /// Current validators known to the staking module.
    pub async fn validators(&self) -> Result<Vec<Validator>> {
        let path = "/staking/validators";
        let res = match self.lcd.get(path).await? {
            Value::Object(mut m) if m.contains_key("validators") => {
                m.remove("validators").unwrap_or_default()
            }
            other => other,
        };
        let validators: Vec<Validator> = decode(path, res)?;
        debug!("Fetched {} staking validators", validators.len());
        Ok(validators)
    }
}
