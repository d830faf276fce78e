use crate::Error;
use serde::Serialize;
use validator_set_lib::{CurrentStakers, Id, NodeId};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidatorWeight {
    pub node_id: NodeId,
    pub weight: u64,
}

/// The validator set of one network, validators ordered by node id.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NetworkValidators {
    pub network_id: Id,
    pub total_weight: u64,
    pub validators: Vec<ValidatorWeight>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NetworkSummary {
    pub network_id: Id,
    pub validators: usize,
    pub total_weight: u64,
}

impl NetworkValidators {
    pub fn project(stakers: &CurrentStakers, network_id: Id) -> Result<Self, Error> {
        let set = stakers.validator_set(&network_id).map_err(|e| {
            tracing::error!(%network_id, error = %e, "validator set projection failed");
            e
        })?;
        tracing::info!(
            %network_id,
            validators = set.len(),
            total_weight = set.total_weight(),
            "projected validator set"
        );
        Ok(Self {
            network_id,
            total_weight: set.total_weight(),
            validators: set
                .to_sorted_vec()
                .into_iter()
                .map(|(node_id, weight)| ValidatorWeight { node_id, weight })
                .collect(),
        })
    }
}

/// One summary line per network, primary network first.
pub fn summarize(stakers: &CurrentStakers) -> Result<Vec<NetworkSummary>, Error> {
    stakers
        .network_ids()
        .into_iter()
        .map(|network_id| -> Result<NetworkSummary, Error> {
            let set = stakers.validator_set(&network_id)?;
            Ok(NetworkSummary {
                network_id,
                validators: set.len(),
                total_weight: set.total_weight(),
            })
        })
        .collect()
}
