use crate::ids::{Id, NodeId, PRIMARY_NETWORK_ID};
use crate::registration::{RawStakers, StakeRegistration};
use crate::stake::Stake;
use crate::validator::Validator;
use crate::weighted::WeightedValidatorSet;
use crate::Error;
use std::collections::{BTreeSet, HashMap};

/// Snapshot of every node currently staking on the primary network or on
/// any subnet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrentStakers {
    by_node: HashMap<NodeId, Validator>,
}

impl CurrentStakers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a raw list of registrations into a snapshot. Every registration
    /// of the same node ends up in a single [`Validator`].
    pub fn from_raw_stakers(raw_stakers: RawStakers) -> Result<Self, Error> {
        let by_node = raw_stakers.0.into_iter().try_fold(
            HashMap::<NodeId, Validator>::new(),
            |mut acc,
             StakeRegistration {
                 node_id,
                 subnet_id,
                 weight,
                 tx_id,
             }| {
                if node_id.is_empty() {
                    return Err(Error::EmptyNodeId);
                }
                let stake = Stake::try_new(weight, tx_id)?;
                let validator = acc.entry(node_id).or_default();
                match subnet_id {
                    None => validator.set_primary_stake(node_id, stake)?,
                    Some(subnet_id) => validator.add_subnet_stake(node_id, subnet_id, stake)?,
                }
                Ok(acc)
            },
        )?;
        Ok(Self { by_node })
    }

    /// Flattens the snapshot back into registrations, ordered by node and
    /// with the primary stake first.
    pub fn to_raw_stakers(&self) -> RawStakers {
        let mut nodes = self.by_node.iter().collect::<Vec<_>>();
        nodes.sort_unstable_by_key(|(node_id, _)| **node_id);

        let mut registrations = Vec::new();
        for (node_id, validator) in nodes {
            if let Some(stake) = validator.primary_stake() {
                registrations.push(StakeRegistration {
                    node_id: *node_id,
                    subnet_id: None,
                    weight: stake.weight(),
                    tx_id: stake.tx_id(),
                });
            }
            let mut subnet_ids = validator.subnet_ids().copied().collect::<Vec<_>>();
            subnet_ids.sort_unstable();
            for subnet_id in subnet_ids {
                if let Some(stake) = validator.subnet_stake(&subnet_id) {
                    registrations.push(StakeRegistration {
                        node_id: *node_id,
                        subnet_id: Some(subnet_id),
                        weight: stake.weight(),
                        tx_id: stake.tx_id(),
                    });
                }
            }
        }
        RawStakers(registrations)
    }

    pub fn insert(&mut self, node_id: NodeId, validator: Validator) -> Result<(), Error> {
        if node_id.is_empty() {
            return Err(Error::EmptyNodeId);
        }
        if !validator.is_staking() {
            return Err(Error::NoStake(node_id));
        }
        if self.by_node.contains_key(&node_id) {
            return Err(Error::DuplicateNode(node_id));
        }
        self.by_node.insert(node_id, validator);
        Ok(())
    }

    pub fn validator(&self, node_id: &NodeId) -> Option<&Validator> {
        self.by_node.get(node_id)
    }

    pub fn len(&self) -> usize {
        self.by_node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_node.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &Validator)> {
        self.by_node.iter()
    }

    /// Every network at least one node currently stakes on.
    pub fn network_ids(&self) -> BTreeSet<Id> {
        self.by_node
            .values()
            .flat_map(|validator| {
                validator
                    .primary_stake()
                    .map(|_| PRIMARY_NETWORK_ID)
                    .into_iter()
                    .chain(validator.subnet_ids().copied())
            })
            .collect()
    }

    /// Weighted validator set of `network_id`.
    ///
    /// A network nobody stakes on yields an empty set. The only failure is
    /// [`Error::Overflow`], when the total weight does not fit in a `u64`.
    pub fn validator_set(&self, network_id: &Id) -> Result<WeightedValidatorSet, Error> {
        WeightedValidatorSet::try_from_weights(self.by_node.iter().filter_map(
            |(node_id, validator)| {
                validator
                    .weight_for(network_id)
                    .map(|weight| (*node_id, weight))
            },
        ))
    }
}
