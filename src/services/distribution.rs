use crate::client::LcdClient;
use crate::error::{LcdError, Result};
use crate::models::{AccAddress, Coins, Rewards, ValAddress, ValidatorRewards};
use crate::services::lcd::{decode, field};
use log::debug;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Queries against the distribution module.
pub struct DistributionApi<'a> {
    lcd: &'a LcdClient,
}

fn coins(path: &str, data: &Value) -> Result<Coins> {
    Coins::from_data(data).map_err(|source| LcdError::Decode {
        path: path.to_string(),
        source,
    })
}

fn shape_error(path: &str, msg: &str) -> LcdError {
    LcdError::Decode {
        path: path.to_string(),
        source: <serde_json::Error as serde::de::Error>::custom(msg),
    }
}

impl<'a> DistributionApi<'a> {
    pub fn new(lcd: &'a LcdClient) -> Self {
        Self { lcd }
    }

    /// Fetches the staking rewards of a delegator, per validator and in total.
    ///
    /// Entries with no accrued reward map to an empty `Coins`.
    pub async fn rewards(&self, delegator: &str) -> Result<Rewards> {
        let delegator = self.lcd.acc_address(delegator)?;
        let path = format!("/distribution/delegators/{}/rewards", delegator);
        let res = self.lcd.get(&path).await?;

        let items = match res.get("rewards").unwrap_or(&Value::Null) {
            Value::Null => &[][..],
            Value::Array(items) => items.as_slice(),
            _ => return Err(shape_error(&path, "`rewards` is not an array")),
        };

        let mut rewards = HashMap::with_capacity(items.len());
        for item in items {
            let validator: ValAddress =
                decode(&path, field(&path, item, "validator_address")?.clone())?;
            let reward = coins(&path, item.get("reward").unwrap_or(&Value::Null))?;
            rewards.insert(validator, reward);
        }
        let total = coins(&path, field(&path, &res, "total")?)?;

        debug!(
            "Delegator {} has rewards from {} validators",
            delegator,
            rewards.len()
        );
        Ok(Rewards { rewards, total })
    }

    /// Fetches self-delegation rewards and available commission for a validator.
    ///
    /// Unlike [`rewards`](Self::rewards), an empty or absent amount is reported
    /// as a single zero coin of the configured staking denom, so both fields
    /// always hold at least one entry.
    pub async fn validator_rewards(&self, validator: &str) -> Result<ValidatorRewards> {
        let validator = self.lcd.val_address(validator)?;
        let path = format!("/distribution/validators/{}", validator);
        let res = self.lcd.get(&path).await?;

        let operator_address: String =
            decode(&path, field(&path, &res, "operator_address")?.clone())?;

        let self_bond_rewards =
            self.or_zero(coins(&path, res.get("self_bond_rewards").unwrap_or(&Value::Null))?);

        // Older LCDs return the commission coins directly instead of nesting them.
        let commission = match res.get("val_commission") {
            Some(Value::Object(m)) => m.get("commission").unwrap_or(&Value::Null),
            Some(other) => other,
            None => &Value::Null,
        };
        let val_commission = self.or_zero(coins(&path, commission)?);

        Ok(ValidatorRewards {
            self_bond_rewards,
            val_commission,
            operator_address,
        })
    }

    pub async fn withdraw_address(&self, delegator: &str) -> Result<AccAddress> {
        let delegator = self.lcd.acc_address(delegator)?;
        let path = format!("/distribution/delegators/{}/withdraw_address", delegator);
        let res = self.lcd.get(&path).await?;
        decode(&path, res)
    }

    pub async fn community_pool(&self) -> Result<Coins> {
        let path = "/distribution/community_pool";
        let res = self.lcd.get(path).await?;
        let pool = match &res {
            Value::Object(m) if m.contains_key("pool") => &m["pool"],
            other => other,
        };
        let pool = coins(path, pool)?;
        debug!("Community pool: {}", pool);
        Ok(pool)
    }

    /// Raw module parameters; no schema is imposed on them.
    pub async fn parameters(&self) -> Result<Map<String, Value>> {
        let path = "/distribution/parameters";
        let res = self.lcd.get(path).await?;
        match res {
            Value::Object(params) => Ok(params),
            _ => Err(shape_error(path, "parameters are not an object")),
        }
    }

    fn or_zero(&self, coins: Coins) -> Coins {
        if coins.is_empty() {
            Coins::zero(self.lcd.config().staking_denom.clone())
        } else {
            coins
        }
    }
}
