use num_bigint::BigUint;
use num_traits::{FromPrimitive, Zero};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A single `(denom, amount)` pair in the chain's minimal unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    #[serde(
        serialize_with = "serialize_amount",
        deserialize_with = "deserialize_amount"
    )]
    pub amount: BigUint,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<BigUint>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    pub fn zero(denom: impl Into<String>) -> Self {
        Self::new(denom, BigUint::zero())
    }

    pub fn from_data(data: &Value) -> Result<Self, serde_json::Error> {
        Coin::deserialize(data)
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Parses an LCD amount. Decimal amounts (as reported for accrued rewards)
/// are truncated to their integer part.
pub fn parse_amount(amount_str: &str) -> Result<BigUint, String> {
    let cleaned_str = amount_str
        .trim()
        .trim_matches('"')
        .split('.')
        .next()
        .unwrap_or("0");

    BigUint::from_str(cleaned_str).map_err(|e| format!("{:?}: {}", amount_str, e))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Number(serde_json::Number),
}

fn number_amount(n: &serde_json::Number) -> Result<BigUint, String> {
    if let Some(n) = n.as_u64() {
        return Ok(BigUint::from(n));
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f >= 0.0 => {
            BigUint::from_f64(f.trunc()).ok_or_else(|| format!("{}: out of range", n))
        }
        _ => Err(format!("{}: not a non-negative amount", n)),
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
where
    D: Deserializer<'de>,
{
    match RawAmount::deserialize(deserializer)? {
        RawAmount::Text(s) => parse_amount(&s).map_err(de::Error::custom),
        RawAmount::Number(n) => number_amount(&n).map_err(de::Error::custom),
    }
}

fn serialize_amount<S>(amount: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&amount.to_string())
}

/// Coins ordered by denom, one entry per denom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Coins(Vec<Coin>);

impl Coins {
    /// Builds a collection, summing entries that share a denom.
    pub fn new(coins: impl IntoIterator<Item = Coin>) -> Self {
        let mut merged: Vec<Coin> = Vec::new();
        for coin in coins {
            match merged.iter_mut().find(|c| c.denom == coin.denom) {
                Some(existing) => existing.amount += coin.amount,
                None => merged.push(coin),
            }
        }
        merged.sort_by(|a, b| a.denom.cmp(&b.denom));
        Coins(merged)
    }

    pub fn zero(denom: impl Into<String>) -> Self {
        Coins(vec![Coin::zero(denom)])
    }

    /// Accepts `null`, a coin array or a single coin object.
    pub fn from_data(data: &Value) -> Result<Self, serde_json::Error> {
        Coins::deserialize(data)
    }

    pub fn get(&self, denom: &str) -> Option<&Coin> {
        self.0.iter().find(|c| c.denom == denom)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coin> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoins {
    Many(Vec<Coin>),
    One(Coin),
}

impl<'de> Deserialize<'de> for Coins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawCoins>::deserialize(deserializer)? {
            None => Coins::default(),
            Some(RawCoins::Many(coins)) => Coins::new(coins),
            Some(RawCoins::One(coin)) => Coins::new([coin]),
        })
    }
}

impl IntoIterator for Coins {
    type Item = Coin;
    type IntoIter = std::vec::IntoIter<Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Coins {
    type Item = &'a Coin;
    type IntoIter = std::slice::Iter<'a, Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_single_coin_array() {
        let data = json!([{"denom": "uakt", "amount": "100"}]);
        let coins = Coins::from_data(&data).unwrap();
        assert_eq!(coins.len(), 1);
        let coin = coins.get("uakt").unwrap();
        assert_eq!(coin.amount, BigUint::from(100u32));
        assert_eq!(serde_json::to_value(&coins).unwrap(), data);
    }

    #[test]
    fn truncates_decimal_amounts() {
        let coin = Coin::from_data(&json!({"denom": "uakt", "amount": "1234.987654321"})).unwrap();
        assert_eq!(coin.amount, BigUint::from(1234u32));
    }

    #[test]
    fn keeps_precision_beyond_u128() {
        let big = "340282366920938463463374607431768211456000";
        let coin = Coin::from_data(&json!({"denom": "uakt", "amount": big})).unwrap();
        assert_eq!(coin.amount.to_string(), big);
    }

    #[test]
    fn accepts_numeric_amounts() {
        let coin = Coin::from_data(&json!({"denom": "uakt", "amount": 0})).unwrap();
        assert_eq!(coin, Coin::zero("uakt"));
    }

    #[test]
    fn numeric_amounts_truncate_like_strings() {
        let coin = Coin::from_data(&json!({"denom": "uakt", "amount": 10.5})).unwrap();
        assert_eq!(coin.amount, BigUint::from(10u32));

        let coin = Coin::from_data(&json!({"denom": "uakt", "amount": 1e20})).unwrap();
        assert_eq!(coin.amount.to_string(), "100000000000000000000");

        assert!(Coin::from_data(&json!({"denom": "uakt", "amount": -3})).is_err());
        assert!(Coin::from_data(&json!({"denom": "uakt", "amount": -0.5})).is_err());
    }

    #[test]
    fn rejects_negative_amounts() {
        assert!(Coin::from_data(&json!({"denom": "uakt", "amount": "-5"})).is_err());
    }

    #[test]
    fn null_is_empty() {
        assert!(Coins::from_data(&Value::Null).unwrap().is_empty());
    }

    #[test]
    fn sorts_and_merges_denoms() {
        let coins = Coins::from_data(&json!([
            {"denom": "uusdc", "amount": "3"},
            {"denom": "uakt", "amount": "1"},
            {"denom": "uusdc", "amount": "4"}
        ]))
        .unwrap();
        let denoms: Vec<&str> = coins.iter().map(|c| c.denom.as_str()).collect();
        assert_eq!(denoms, vec!["uakt", "uusdc"]);
        assert_eq!(coins.get("uusdc").unwrap().amount, BigUint::from(7u32));
        assert_eq!(coins.to_string(), "1uakt,7uusdc");
    }
}
