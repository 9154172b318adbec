use crate::config::Config;
use crate::error::Result;
use crate::models::{AccAddress, ValAddress};
use crate::services::{
    unwrap_envelope, DistributionApi, HttpLcd, LcdTransport, StakingApi, TendermintApi,
};
use crate::utils::LcdUtils;
use serde_json::Value;
use std::sync::Arc;

/// Entry point: owns the transport and hands out per-module query views.
#[derive(Clone)]
pub struct LcdClient {
    transport: Arc<dyn LcdTransport>,
    config: Config,
}

impl LcdClient {
    pub fn new(config: Config) -> Result<Self> {
        let transport = HttpLcd::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    pub fn with_transport(config: Config, transport: impl LcdTransport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// GETs `path` and strips the legacy `{height, result}` envelope, if any.
    pub async fn get(&self, path: &str) -> Result<Value> {
        Ok(unwrap_envelope(self.transport.get(path).await?))
    }

    pub fn acc_address(&self, addr: &str) -> Result<AccAddress> {
        AccAddress::parse(addr, &self.config.account_prefix)
    }

    pub fn val_address(&self, addr: &str) -> Result<ValAddress> {
        ValAddress::parse(addr, &self.config.validator_prefix())
    }

    pub fn distribution(&self) -> DistributionApi<'_> {
        DistributionApi::new(self)
    }

    pub fn staking(&self) -> StakingApi<'_> {
        StakingApi::new(self)
    }

    pub fn tendermint(&self) -> TendermintApi<'_> {
        TendermintApi::new(self)
    }

    pub fn utils(&self) -> LcdUtils<'_> {
        LcdUtils::new(self)
    }
}
