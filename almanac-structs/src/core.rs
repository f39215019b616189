use crate::serializable_struct_with_getters;
use almanac_core::challenge::Difficulty;
use almanac_utils::{jsonify, u8s_from_str};
use serde::{Deserialize, Serialize};

serializable_struct_with_getters! {
    ChallengeSettings {
        rand_hash: String,
        nonce: u64,
        difficulty: Difficulty,
    }
}
impl ChallengeSettings {
    /// Seed for instance generation: blake3 of the key-sorted settings JSON.
    pub fn calc_seed(&self) -> anyhow::Result<[u8; 32]> {
        Ok(u8s_from_str(&jsonify(self)?))
    }
}

serializable_struct_with_getters! {
    OutputData {
        num_seeds: usize,
        num_sections: usize,
        scalar_lowest: Option<i64>,
        range_lowest: Option<i64>,
    }
}
