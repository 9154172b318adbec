mod distribution;
pub(crate) mod lcd;
mod staking;
mod tendermint;

pub use distribution::DistributionApi;
pub use lcd::{unwrap_envelope, HttpLcd, LcdTransport};
pub use staking::StakingApi;
pub use tendermint::TendermintApi;
