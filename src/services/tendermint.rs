use crate::client::LcdClient;
use crate::error::Result;
use crate::models::ValidatorSet;
use crate::services::lcd::decode;
use log::debug;

pub struct TendermintApi<'a> {
    lcd: &'a LcdClient,
}

impl<'a> TendermintApi<'a> {
    pub fn new(lcd: &'a LcdClient) -> Self {
        Self { lcd }
    }

    /// Latest consensus validator set.
    pub async fn validator_set(&self) -> Result<ValidatorSet> {
        let path = "/validatorsets/latest";
        let res = self.lcd.get(path).await?;
        let set: ValidatorSet = decode(path, res)?;
        debug!(
            "Fetched validator set at height {} with {} entries",
            set.block_height,
            set.validators.len()
        );
        Ok(set)
    }
}
