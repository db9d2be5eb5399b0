use crate::error::BatchError;
use alloy::primitives::{Address, B256, Bytes, U256};
use async_trait::async_trait;

pub mod rpc;

#[cfg(test)]
pub(crate) mod mock;

/// One outbound transaction, fully specified by the executor. The sending
/// account and its signature are supplied by the gateway implementation.
#[derive(Debug, Clone)]
pub struct TransactionSubmission {
    pub to: Address,
    pub value: U256,
    pub gas_limit: u64,
    pub gas_price: u128,
    pub payload: Bytes,
}

/// The confirmed outcome of a submitted transaction.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionReceipt {
    pub tx_hash: B256,
    /// False when the transaction was mined but reverted.
    pub success: bool,
}

/// Everything batch execution needs from the chain: balance reads for
/// approval clamping, block reads for gas estimation, and signed submission.
/// Batch assembly itself never touches this trait, which keeps the builders
/// pure and lets the executor run against an in-memory double in tests.
#[async_trait]
pub trait ChainGateway: Send + Sync {
    async fn balance_of(&self, token: Address, owner: Address) -> Result<U256, BatchError>;

    async fn latest_block_number(&self) -> Result<u64, BatchError>;

    /// Gas price of every transaction in the given block. Empty when the
    /// block contains no transactions.
    async fn block_gas_prices(&self, number: u64) -> Result<Vec<u128>, BatchError>;

    async fn submit_transaction(&self, tx: TransactionSubmission) -> Result<B256, BatchError>;

    /// Blocks until the chain produces a receipt for the transaction.
    async fn wait_for_receipt(&self, tx_hash: B256) -> Result<ExecutionReceipt, BatchError>;
}
