// One-shot factory binding

use soroban_sdk::{contracttype, Address};

/// Link from a satellite contract to the factory it serves.
///
/// Starts `Unbound` and moves to `BoundTo` exactly once. There is no
/// transition out of `BoundTo`, whoever asks and whatever address they pass.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FactoryBinding {
    Unbound,
    BoundTo(Address),
}

impl FactoryBinding {
    /// Next state after binding to `factory`, or `None` if already bound
    pub fn bind(&self, factory: Address) -> Option<FactoryBinding> {
        match self {
            FactoryBinding::Unbound => Some(FactoryBinding::BoundTo(factory)),
            FactoryBinding::BoundTo(_) => None,
        }
    }

    pub fn factory(&self) -> Option<Address> {
        match self {
            FactoryBinding::Unbound => None,
            FactoryBinding::BoundTo(factory) => Some(factory.clone()),
        }
    }

    pub fn is_bound_to(&self, address: &Address) -> bool {
        matches!(self, FactoryBinding::BoundTo(factory) if factory == address)
    }
}
