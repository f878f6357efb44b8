use serde::{Deserialize, Serialize};

use crate::provider::Provider;

/// A named collection of submissions on a provider.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PoolDetail {
    /// The ID of the upstream record.
    #[serde(rename = "_id")]
    pub id: String,

    pub provider: Provider,

    /// The provider's own ID for the pool.
    pub pool_id: PoolId,

    pub name: String,
    pub description: String,

    /// The file IDs in the pool, in pool order.
    pub files: Vec<u64>,
}

/// Providers identify pools by number or by name; either is kept as given.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PoolId {
    Number(u64),
    Text(String),
}

impl PoolDetail {
    pub fn contains(&self, file_id: u64) -> bool {
        self.files.contains(&file_id)
    }
}
