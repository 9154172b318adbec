mod voting_power;

pub use voting_power::{index_by_pub_key, merge_voting_power, LcdUtils};
