//! Client-side batching of DeFi protocol interactions.
//!
//! Callers build [`types::Action`]s through per-protocol constructors,
//! assemble them into an ordered [`types::ActionBatch`] (optionally nesting a
//! sub-batch inside a flash-loan or flash-swap composite), and hand the batch
//! to [`client::DefiClient`], which injects any required token approvals and
//! submits everything as one atomic transaction against a trusted proxy
//! contract.

pub mod approvals;
pub mod bindings;
pub mod client;
pub mod composite;
pub mod config;
pub mod error;
pub mod gas;
pub mod gateway;
pub mod protocols;
pub mod types;

pub use client::{BATCH_GAS_LIMIT, DefiClient};
pub use config::Config;
pub use error::BatchError;
pub use gateway::{ChainGateway, ExecutionReceipt, TransactionSubmission};
pub use types::{Action, ActionBatch, AddressRegistry, Approval, Coin, CombinedBatch};

// Re-exported so downstream binaries can parse chain values without naming
// alloy themselves.
pub use alloy::primitives::{Address, U256};
