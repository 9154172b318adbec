mod address;
mod coin;
mod rewards;
mod validator;

pub use address::{AccAddress, ValAddress};
pub use coin::{parse_amount, Coin, Coins};
pub use rewards::{Rewards, ValidatorRewards};
pub use validator::{
    Commission, CommissionRates, ConsensusPubKey, Description, Validator, ValidatorSet,
    ValidatorSetEntry, ValidatorWithVotingPower,
};
