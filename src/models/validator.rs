use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Consensus public key, compared by its key string.
///
/// Legacy LCDs report it as a bech32 string, newer ones as
/// `{"@type": .., "key": ..}`; both collapse to the inner key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ConsensusPubKey(String);

impl ConsensusPubKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConsensusPubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPubKey {
    Plain(String),
    Typed {
        #[serde(alias = "value")]
        key: String,
    },
}

impl<'de> Deserialize<'de> for ConsensusPubKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawPubKey::deserialize(deserializer)? {
            RawPubKey::Plain(key) | RawPubKey::Typed { key } => ConsensusPubKey(key),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInt {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

/// Integers arrive as JSON strings from the LCD but as numbers from some proxies.
fn deserialize_int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64> + TryFrom<i64>,
    <T as FromStr>::Err: fmt::Display,
{
    match RawInt::deserialize(deserializer)? {
        RawInt::Text(s) => s.trim().parse::<T>().map_err(de::Error::custom),
        RawInt::Unsigned(n) => {
            T::try_from(n).map_err(|_| de::Error::custom(format!("{} out of range", n)))
        }
        RawInt::Signed(n) => {
            T::try_from(n).map_err(|_| de::Error::custom(format!("{} out of range", n)))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Description {
    pub moniker: String,
    pub identity: String,
    pub website: String,
    pub security_contact: String,
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommissionRates {
    pub rate: String,
    pub max_rate: String,
    pub max_change_rate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commission {
    pub commission_rates: CommissionRates,
    pub update_time: String,
}

/// Staking-module validator record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validator {
    pub operator_address: String,
    pub consensus_pubkey: ConsensusPubKey,
    #[serde(default)]
    pub jailed: bool,
    /// Numeric on legacy LCDs, `BOND_STATUS_*` on newer ones.
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub tokens: String,
    #[serde(default)]
    pub delegator_shares: String,
    #[serde(default)]
    pub description: Description,
    #[serde(default)]
    pub commission: Commission,
    #[serde(default)]
    pub min_self_delegation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorSetEntry {
    #[serde(default)]
    pub address: String,
    pub pub_key: ConsensusPubKey,
    #[serde(deserialize_with = "deserialize_int")]
    pub voting_power: u64,
    #[serde(deserialize_with = "deserialize_int")]
    pub proposer_priority: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorSet {
    #[serde(default)]
    pub block_height: String,
    pub validators: Vec<ValidatorSetEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatorWithVotingPower {
    pub validator_info: Validator,
    pub voting_power: u64,
    pub proposer_priority: i64,
}
