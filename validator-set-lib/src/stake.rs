use crate::ids::Id;
use crate::Error;
use std::num::NonZeroU64;

/// Weight committed by one node to one network, together with the
/// transaction that registered it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Stake {
    weight: NonZeroU64,
    tx_id: Id,
}

impl Stake {
    pub fn new(weight: NonZeroU64, tx_id: Id) -> Self {
        Self { weight, tx_id }
    }

    pub fn try_new(weight: u64, tx_id: Id) -> Result<Self, Error> {
        NonZeroU64::new(weight)
            .map(|weight| Self::new(weight, tx_id))
            .ok_or(Error::ZeroWeight)
    }

    pub fn weight(&self) -> u64 {
        self.weight.get()
    }

    pub fn tx_id(&self) -> Id {
        self.tx_id
    }
}
