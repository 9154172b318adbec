use crate::models::{Coins, ValAddress};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rewards {
    /// Delegator rewards, indexed by validator operator address.
    pub rewards: HashMap<ValAddress, Coins>,
    pub total: Coins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatorRewards {
    /// Rewards accrued from self-delegation.
    pub self_bond_rewards: Coins,
    /// Rewards accrued from delegation commissions.
    pub val_commission: Coins,
    pub operator_address: String,
}
