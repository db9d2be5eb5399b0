use super::{ChainGateway, ExecutionReceipt, TransactionSubmission};
use crate::error::BatchError;
use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory chain double for executor, injector and estimator tests.
/// Balances are keyed by token only; blocks without an entry read as empty.
#[derive(Default)]
pub(crate) struct MockGateway {
    pub balances: HashMap<Address, U256>,
    pub blocks: HashMap<u64, Vec<u128>>,
    pub latest_block: u64,
    pub revert_on_chain: bool,
    pub submissions: Mutex<Vec<TransactionSubmission>>,
}

impl MockGateway {
    pub fn with_balance(mut self, token: Address, balance: U256) -> Self {
        self.balances.insert(token, balance);
        self
    }

    pub fn with_block(mut self, number: u64, gas_prices: Vec<u128>) -> Self {
        self.blocks.insert(number, gas_prices);
        if number > self.latest_block {
            self.latest_block = number;
        }
        self
    }

    pub fn submissions(&self) -> Vec<TransactionSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChainGateway for MockGateway {
    async fn balance_of(&self, token: Address, _owner: Address) -> Result<U256, BatchError> {
        Ok(self.balances.get(&token).copied().unwrap_or(U256::ZERO))
    }

    async fn latest_block_number(&self) -> Result<u64, BatchError> {
        Ok(self.latest_block)
    }

    async fn block_gas_prices(&self, number: u64) -> Result<Vec<u128>, BatchError> {
        Ok(self.blocks.get(&number).cloned().unwrap_or_default())
    }

    async fn submit_transaction(&self, tx: TransactionSubmission) -> Result<B256, BatchError> {
        let mut submissions = self.submissions.lock().unwrap();
        submissions.push(tx);
        Ok(B256::with_last_byte(submissions.len() as u8))
    }

    async fn wait_for_receipt(&self, tx_hash: B256) -> Result<ExecutionReceipt, BatchError> {
        Ok(ExecutionReceipt {
            tx_hash,
            success: !self.revert_on_chain,
        })
    }
}
