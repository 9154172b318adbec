use crate::client::LcdClient;
use crate::error::Result;
use crate::models::{ConsensusPubKey, Validator, ValidatorSetEntry, ValidatorWithVotingPower};
use log::{debug, info};
use std::collections::HashMap;

/// Indexes validator set entries by consensus public key.
///
/// Keys are expected to be unique; if two entries share one, the later entry wins.
pub fn index_by_pub_key(
    entries: Vec<ValidatorSetEntry>,
) -> HashMap<ConsensusPubKey, ValidatorSetEntry> {
    let mut index = HashMap::with_capacity(entries.len());
    for entry in entries {
        index.insert(entry.pub_key.clone(), entry);
    }
    index
}

/// Joins staking validators with the consensus set on their public key.
///
/// Validators missing from the set (outside the active set, or a set fetched
/// at a different height) are dropped without error.
pub fn merge_voting_power(
    validators: Vec<Validator>,
    validator_set: Vec<ValidatorSetEntry>,
) -> HashMap<String, ValidatorWithVotingPower> {
    let index = index_by_pub_key(validator_set);
    let mut merged = HashMap::with_capacity(validators.len());
    let mut skipped = 0;

    for validator in validators {
        let Some(entry) = index.get(&validator.consensus_pubkey) else {
            // TODO: confirm with chain operators whether a staking validator
            // missing from the consensus set should be reported instead of dropped.
            debug!(
                "Validator {} not in current validator set, skipping",
                validator.operator_address
            );
            skipped += 1;
            continue;
        };
        merged.insert(
            validator.operator_address.clone(),
            ValidatorWithVotingPower {
                voting_power: entry.voting_power,
                proposer_priority: entry.proposer_priority,
                validator_info: validator,
            },
        );
    }

    info!(
        "Merged voting power for {} validators ({} skipped)",
        merged.len(),
        skipped
    );
    merged
}

pub struct LcdUtils<'a> {
    lcd: &'a LcdClient,
}

impl<'a> LcdUtils<'a> {
    pub fn new(lcd: &'a LcdClient) -> Self {
        Self { lcd }
    }

    /// Current validators keyed by operator address, with voting power and
    /// proposer priority taken from the latest validator set.
    pub async fn validators_with_voting_power(
        &self,
    ) -> Result<HashMap<String, ValidatorWithVotingPower>> {
        let validator_set = self.lcd.tendermint().validator_set().await?;
        let validators = self.lcd.staking().validators().await?;
        Ok(merge_voting_power(validators, validator_set.validators))
    }
}
