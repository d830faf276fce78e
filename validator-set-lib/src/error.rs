use crate::ids::{Id, NodeId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Value overflowed its maximum value")]
    Overflow,
    #[error("Stake weight must be strictly positive")]
    ZeroWeight,
    #[error("The empty node id can not validate")]
    EmptyNodeId,
    #[error("Node {0} has no stake on any network")]
    NoStake(NodeId),
    #[error("Node {0} is already present")]
    DuplicateNode(NodeId),
    #[error("Node {0} already has a primary network stake")]
    DuplicatePrimaryStake(NodeId),
    #[error("Node {node_id} already has a stake for subnet {subnet_id}")]
    DuplicateSubnetStake { node_id: NodeId, subnet_id: Id },
    #[error("The primary network id can not be used as a subnet id")]
    ReservedSubnetId,
    #[error("Expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}
