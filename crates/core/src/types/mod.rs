pub mod action;
pub mod coin;
pub mod registry;

pub use action::{Action, ActionBatch, Approval, CombinedBatch};
pub use coin::Coin;
pub use registry::{AddressRegistry, Handlers};
