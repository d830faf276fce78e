//! Projection of the currently staking validators into the weighted
//! validator set of a single network.
//!
//! A [`CurrentStakers`] snapshot maps every staking node to its
//! [`Validator`] entry: an optional primary network [`Stake`] plus one stake
//! per subnet. [`CurrentStakers::validator_set`] derives, for any network id,
//! the immutable [`WeightedValidatorSet`] consensus uses for quorum and
//! sampling decisions.

#[cfg(any(test, feature = "proptest"))]
pub mod arbitrary;
mod error;
pub mod ids;
pub mod registration;
mod stake;
mod stakers;
mod validator;
mod weighted;

pub use error::Error;
pub use ids::{Id, NodeId, PRIMARY_NETWORK_ID};
pub use registration::{RawStakers, StakeRegistration};
pub use stake::Stake;
pub use stakers::CurrentStakers;
pub use validator::Validator;
pub use weighted::WeightedValidatorSet;
