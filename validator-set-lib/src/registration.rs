use crate::ids::{Id, NodeId};
use serde::{Deserialize, Serialize};

/// A single stake as exported by the staking state: `node_id` puts `weight`
/// on the primary network, or on `subnet_id` when one is given.
///
/// Registrations are checked when folded into
/// [`CurrentStakers`](crate::CurrentStakers), not when parsed, so a raw
/// snapshot may well contain entries that are rejected later on.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct StakeRegistration {
    pub node_id: NodeId,
    /// Absent (or null) for primary network stakes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<Id>,
    pub weight: u64,
    /// Transaction that registered this stake.
    pub tx_id: Id,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RawStakers(pub(crate) Vec<StakeRegistration>);

impl RawStakers {
    pub fn registrations(&self) -> &[StakeRegistration] {
        &self.0
    }
}

impl From<Vec<StakeRegistration>> for RawStakers {
    fn from(from: Vec<StakeRegistration>) -> Self {
        Self(from)
    }
}
