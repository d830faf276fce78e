use crate::ids::{Id, NodeId, PRIMARY_NETWORK_ID};
use crate::stake::Stake;
use crate::Error;
use std::collections::HashMap;

/// Everything one node currently stakes.
///
/// A live validator always carries a primary network stake, but a validator
/// built with [`Validator::default`] may hold subnet stakes only. Such a node
/// simply never shows up in the primary network projection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validator {
    primary: Option<Stake>,
    subnets: HashMap<Id, Stake>,
}

impl Validator {
    pub fn new(primary: Stake) -> Self {
        Self {
            primary: Some(primary),
            subnets: HashMap::new(),
        }
    }

    pub fn primary_stake(&self) -> Option<&Stake> {
        self.primary.as_ref()
    }

    pub fn subnet_stake(&self, subnet_id: &Id) -> Option<&Stake> {
        self.subnets.get(subnet_id)
    }

    pub fn subnet_ids(&self) -> impl Iterator<Item = &Id> {
        self.subnets.keys()
    }

    /// `node_id` is only used to report which node a conflict belongs to.
    pub fn set_primary_stake(&mut self, node_id: NodeId, stake: Stake) -> Result<(), Error> {
        if self.primary.is_some() {
            return Err(Error::DuplicatePrimaryStake(node_id));
        }
        self.primary = Some(stake);
        Ok(())
    }

    pub fn add_subnet_stake(
        &mut self,
        node_id: NodeId,
        subnet_id: Id,
        stake: Stake,
    ) -> Result<(), Error> {
        if subnet_id == PRIMARY_NETWORK_ID {
            return Err(Error::ReservedSubnetId);
        }
        if self.subnets.contains_key(&subnet_id) {
            return Err(Error::DuplicateSubnetStake { node_id, subnet_id });
        }
        self.subnets.insert(subnet_id, stake);
        Ok(())
    }

    /// Whether this node stakes on at least one network.
    pub fn is_staking(&self) -> bool {
        self.primary.is_some() || !self.subnets.is_empty()
    }

    /// Weight this node contributes to `network_id`, if any.
    pub fn weight_for(&self, network_id: &Id) -> Option<u64> {
        if *network_id == PRIMARY_NETWORK_ID {
            self.primary.as_ref().map(Stake::weight)
        } else {
            self.subnets.get(network_id).map(Stake::weight)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NODE: NodeId = NodeId::new([1u8; 20]);
    const SUBNET: Id = Id::new([9u8; 32]);

    fn stake(weight: u64) -> Stake {
        Stake::try_new(weight, Id::new([weight as u8; 32])).unwrap()
    }

    #[test]
    fn default_validator_stakes_nowhere() {
        let mut validator = Validator::default();
        assert!(!validator.is_staking());
        validator.add_subnet_stake(NODE, SUBNET, stake(1)).unwrap();
        assert!(validator.is_staking());
        assert!(Validator::new(stake(1)).is_staking());
    }

    #[test]
    fn primary_weight() {
        let validator = Validator::new(stake(5));
        assert_eq!(validator.weight_for(&PRIMARY_NETWORK_ID), Some(5));
        assert_eq!(validator.weight_for(&SUBNET), None);
    }

    #[test]
    fn subnet_only() {
        let mut validator = Validator::default();
        validator.add_subnet_stake(NODE, SUBNET, stake(3)).unwrap();
        assert_eq!(validator.weight_for(&SUBNET), Some(3));
        assert_eq!(validator.weight_for(&PRIMARY_NETWORK_ID), None);
        assert_eq!(validator.subnet_stake(&SUBNET), Some(&stake(3)));
    }

    #[test]
    fn primary_and_subnet_weights_are_independent() {
        let mut validator = Validator::new(stake(10));
        validator.add_subnet_stake(NODE, SUBNET, stake(2)).unwrap();
        assert_eq!(validator.weight_for(&PRIMARY_NETWORK_ID), Some(10));
        assert_eq!(validator.weight_for(&SUBNET), Some(2));
        assert_eq!(validator.subnet_ids().collect::<Vec<_>>(), vec![&SUBNET]);
    }

    #[test]
    fn primary_network_id_is_not_a_subnet() {
        let mut validator = Validator::new(stake(1));
        assert!(matches!(
            validator.add_subnet_stake(NODE, PRIMARY_NETWORK_ID, stake(2)),
            Err(Error::ReservedSubnetId)
        ));
        assert_eq!(validator.weight_for(&PRIMARY_NETWORK_ID), Some(1));
    }

    #[test]
    fn duplicate_stakes() {
        let mut validator = Validator::new(stake(1));
        assert!(matches!(
            validator.set_primary_stake(NODE, stake(2)),
            Err(Error::DuplicatePrimaryStake(node_id)) if node_id == NODE
        ));
        validator.add_subnet_stake(NODE, SUBNET, stake(3)).unwrap();
        assert!(matches!(
            validator.add_subnet_stake(NODE, SUBNET, stake(4)),
            Err(Error::DuplicateSubnetStake { subnet_id, .. }) if subnet_id == SUBNET
        ));
        assert_eq!(validator.weight_for(&SUBNET), Some(3));
    }
}
