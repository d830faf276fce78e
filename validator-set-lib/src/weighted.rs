use crate::ids::NodeId;
use crate::Error;
use std::collections::{HashMap, HashSet};

/// Stake weights of every validator of one network, as seen by consensus.
///
/// The set is never modified after construction, equality compares
/// membership and weights only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightedValidatorSet {
    weights: HashMap<NodeId, u64>,
    total_weight: u64,
}

impl WeightedValidatorSet {
    /// Builds a set out of `(node, weight)` pairs.
    ///
    /// Fails on a zero weight, on a node listed twice, or if the total weight
    /// does not fit in a `u64`. No partially built set is ever returned.
    pub fn try_from_weights<I>(weights: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (NodeId, u64)>,
    {
        let weights = weights.into_iter();
        let mut set = Self {
            weights: HashMap::with_capacity(weights.size_hint().0),
            total_weight: 0,
        };
        for (node_id, weight) in weights {
            if weight == 0 {
                return Err(Error::ZeroWeight);
            }
            set.total_weight = set
                .total_weight
                .checked_add(weight)
                .ok_or(Error::Overflow)?;
            if set.weights.insert(node_id, weight).is_some() {
                return Err(Error::DuplicateNode(node_id));
            }
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn weight_of(&self, node_id: &NodeId) -> Option<u64> {
        self.weights.get(node_id).copied()
    }

    pub fn contains(&self, node_id: &NodeId) -> bool {
        self.weights.contains_key(node_id)
    }

    /// Combined weight of the members among `node_ids`. Non members and
    /// repeated ids are ignored. Never exceeds [`Self::total_weight`].
    pub fn subset_weight<'a, I>(&self, node_ids: I) -> u64
    where
        I: IntoIterator<Item = &'a NodeId>,
    {
        node_ids
            .into_iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .filter_map(|node_id| self.weight_of(node_id))
            .sum()
    }

    /// Iterates in no particular order, see [`Self::to_sorted_vec`].
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, u64)> {
        self.weights.iter().map(|(node_id, weight)| (node_id, *weight))
    }

    pub fn to_sorted_vec(&self) -> Vec<(NodeId, u64)> {
        let mut validators = self
            .weights
            .iter()
            .map(|(node_id, weight)| (*node_id, *weight))
            .collect::<Vec<_>>();
        validators.sort_unstable_by_key(|(node_id, _)| *node_id);
        validators
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::hash_map;
    use proptest::prelude::any;
    use test_strategy::proptest;

    fn node_id(byte: u8) -> NodeId {
        NodeId::new([byte; 20])
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn shareable_across_threads() {
        assert_send_sync::<WeightedValidatorSet>();
        assert_send_sync::<crate::CurrentStakers>();
    }

    #[test]
    fn empty() {
        let set = WeightedValidatorSet::try_from_weights(Vec::<(NodeId, u64)>::new()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.total_weight(), 0);
        assert_eq!(set.weight_of(&node_id(1)), None);
        assert_eq!(set, WeightedValidatorSet::default());
    }

    #[test]
    fn lookups() {
        let set =
            WeightedValidatorSet::try_from_weights(vec![(node_id(1), 1), (node_id(2), 2)]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.total_weight(), 3);
        assert_eq!(set.weight_of(&node_id(2)), Some(2));
        assert!(set.contains(&node_id(1)));
        assert!(!set.contains(&node_id(3)));
    }

    #[test]
    fn overflow() {
        let result =
            WeightedValidatorSet::try_from_weights(vec![(node_id(1), u64::MAX), (node_id(2), 1)]);
        assert!(matches!(result, Err(Error::Overflow)));
    }

    #[test]
    fn max_total_fits() {
        let set = WeightedValidatorSet::try_from_weights(vec![
            (node_id(1), u64::MAX - 1),
            (node_id(2), 1),
        ])
        .unwrap();
        assert_eq!(set.total_weight(), u64::MAX);
    }

    #[test]
    fn zero_weight_and_duplicates_are_rejected() {
        assert!(matches!(
            WeightedValidatorSet::try_from_weights(vec![(node_id(1), 0)]),
            Err(Error::ZeroWeight)
        ));
        assert!(matches!(
            WeightedValidatorSet::try_from_weights(vec![(node_id(1), 1), (node_id(1), 1)]),
            Err(Error::DuplicateNode(n)) if n == node_id(1)
        ));
    }

    #[test]
    fn subset_weight_ignores_repeats_and_strangers() {
        let set = WeightedValidatorSet::try_from_weights(vec![
            (node_id(1), 1),
            (node_id(2), 2),
            (node_id(3), 4),
        ])
        .unwrap();
        assert_eq!(
            set.subset_weight(&[node_id(1), node_id(3), node_id(3), node_id(9)]),
            5
        );
        assert_eq!(set.subset_weight(Vec::<NodeId>::new().iter()), 0);
    }

    #[test]
    fn sorted_vec_is_ordered_by_node() {
        let set = WeightedValidatorSet::try_from_weights(vec![
            (node_id(3), 3),
            (node_id(1), 1),
            (node_id(2), 2),
        ])
        .unwrap();
        assert_eq!(
            set.to_sorted_vec(),
            vec![(node_id(1), 1), (node_id(2), 2), (node_id(3), 3)]
        );
    }

    #[proptest]
    fn total_is_sum_of_members(
        #[strategy(hash_map(any::<[u8; 20]>(), 1..u32::MAX as u64, 0..64))]
        weights: HashMap<[u8; 20], u64>,
    ) {
        let set = WeightedValidatorSet::try_from_weights(
            weights.iter().map(|(node, w)| (NodeId::new(*node), *w)),
        )
        .unwrap();
        assert_eq!(set.len(), weights.len());
        assert_eq!(set.total_weight(), weights.values().sum::<u64>());
        assert_eq!(set.subset_weight(set.iter().map(|(n, _)| n)), set.total_weight());
    }
}
