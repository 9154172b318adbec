use crate::error::{LcdError, Result};
use bech32::{FromBase32, Variant};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

fn validate_bech32(addr: &str, prefix: &str) -> Result<()> {
    let (decoded_prefix, decoded_data, variant) =
        bech32::decode(addr).map_err(|e| LcdError::Validation(format!("{}: {}", addr, e)))?;
    if decoded_prefix != prefix {
        return Err(LcdError::Validation(format!(
            "{}: expected prefix {}, got {}",
            addr, prefix, decoded_prefix
        )));
    }
    if variant == Variant::Bech32m {
        return Err(LcdError::Validation(format!("{}: wrong bech32 variant", addr)));
    }
    let bytes = Vec::<u8>::from_base32(&decoded_data)
        .map_err(|_| LcdError::Validation(format!("{}: invalid bech32 data", addr)))?;
    if bytes.is_empty() || bytes.len() > 255 {
        return Err(LcdError::Validation(format!(
            "{}: invalid address length",
            addr
        )));
    }
    Ok(())
}

macro_rules! bech32_address {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Validates `addr` as a bech32 string with the given human readable part.
            pub fn parse(addr: &str, prefix: &str) -> Result<Self> {
                validate_bech32(addr, prefix)?;
                Ok(Self(addr.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

bech32_address!(
    /// Account (delegator / withdraw) address.
    AccAddress
);
bech32_address!(
    /// Validator operator address.
    ValAddress
);

#[cfg(test)]
mod tests {
    use super::*;

    const DELEGATOR: &str = "akash1qyqszqgpqyqszqgpqyqszqgpqyqszqgplgve5x";
    const VALOPER: &str = "akashvaloper1qvpsxqcrqvpsxqcrqvpsxqcrqvpsxqcr979m9m";

    #[test]
    fn accepts_well_formed_addresses() {
        assert_eq!(AccAddress::parse(DELEGATOR, "akash").unwrap().as_str(), DELEGATOR);
        assert!(ValAddress::parse(VALOPER, "akashvaloper").is_ok());
    }

    #[test]
    fn rejects_wrong_prefix() {
        let err = AccAddress::parse(VALOPER, "akash").unwrap_err();
        assert!(matches!(err, LcdError::Validation(_)));
    }

    #[test]
    fn rejects_bad_checksum() {
        let broken = DELEGATOR.replace("lgve5x", "lgve5y");
        assert!(AccAddress::parse(&broken, "akash").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(AccAddress::parse("not-an-address", "akash").is_err());
        assert!(AccAddress::parse("", "akash").is_err());
    }
}
