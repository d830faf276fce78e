use crate::ids::{Id, NodeId};
use crate::registration::{RawStakers, StakeRegistration};
use crate::stake::Stake;
use crate::stakers::CurrentStakers;
use crate::validator::Validator;
use proptest::collection::{hash_map, vec};
use proptest::option;
use proptest::prelude::*;

/// Arbitrary stakers draw their subnets from a small pool so that nodes
/// actually share networks.
pub const SUBNET_POOL: u8 = 4;

pub fn subnet_id(n: u8) -> Id {
    Id::new([n; 32])
}

impl Arbitrary for NodeId {
    type Parameters = ();
    type Strategy = BoxedStrategy<NodeId>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        any::<[u8; 20]>()
            .prop_map(NodeId::new)
            .prop_filter("the empty node id can not validate", |id| !id.is_empty())
            .boxed()
    }
}

impl Arbitrary for Id {
    type Parameters = ();
    type Strategy = BoxedStrategy<Id>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        any::<[u8; 32]>().prop_map(Id::new).boxed()
    }
}

impl Arbitrary for Stake {
    type Parameters = ();
    type Strategy = BoxedStrategy<Stake>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (1..45_000_000u64, any::<Id>())
            .prop_map(|(weight, tx_id)| {
                Stake::try_new(weight, tx_id).expect("weight is strictly positive")
            })
            .boxed()
    }
}

impl Arbitrary for Validator {
    type Parameters = ();
    type Strategy = BoxedStrategy<Validator>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (
            option::of(any::<Stake>()),
            hash_map(1..=SUBNET_POOL, any::<Stake>(), 0..SUBNET_POOL as usize),
        )
            .prop_filter("a validator stakes somewhere", |(primary, subnets)| {
                primary.is_some() || !subnets.is_empty()
            })
            .prop_map(|(primary, subnets)| {
                let mut validator = primary.map(Validator::new).unwrap_or_default();
                for (n, stake) in subnets {
                    validator
                        .add_subnet_stake(NodeId::EMPTY, subnet_id(n), stake)
                        .expect("pool subnets are distinct and never the primary network");
                }
                validator
            })
            .boxed()
    }
}

impl Arbitrary for CurrentStakers {
    type Parameters = ();
    type Strategy = BoxedStrategy<CurrentStakers>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        hash_map(any::<NodeId>(), any::<Validator>(), 0..32)
            .prop_map(|by_node| {
                let mut stakers = CurrentStakers::new();
                for (node_id, validator) in by_node {
                    stakers
                        .insert(node_id, validator)
                        .expect("node ids are unique and not empty");
                }
                stakers
            })
            .boxed()
    }
}

impl Arbitrary for StakeRegistration {
    type Parameters = ();
    type Strategy = BoxedStrategy<StakeRegistration>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (
            any::<NodeId>(),
            option::of(1..=SUBNET_POOL),
            1..45_000_000u64,
            any::<Id>(),
        )
            .prop_map(|(node_id, subnet, weight, tx_id)| StakeRegistration {
                node_id,
                subnet_id: subnet.map(subnet_id),
                weight,
                tx_id,
            })
            .boxed()
    }
}

impl Arbitrary for RawStakers {
    type Parameters = ();
    type Strategy = BoxedStrategy<RawStakers>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        vec(any::<StakeRegistration>(), 0..32)
            .prop_map(RawStakers)
            .boxed()
    }
}
