use crate::approvals;
use crate::bindings::erc20::IERC20;
use crate::bindings::funds::FundsHandler;
use crate::bindings::proxy::Proxy;
use crate::error::BatchError;
use crate::gas;
use crate::gateway::{ChainGateway, ExecutionReceipt, TransactionSubmission};
use crate::protocols::{
    aave::AaveClient, balancer::BalancerClient, compound::CompoundClient, curve::CurveClient,
    kyber::KyberClient, maker::MakerClient, sushiswap::SushiswapClient, uniswap::UniswapClient,
    yearn::YearnClient,
};
use crate::types::{Action, ActionBatch, AddressRegistry, Coin};
use alloy::primitives::{Address, U256};
use alloy::sol_types::SolCall;
use log::{debug, info};

/// Gas allotted to one batch submission.
pub const BATCH_GAS_LIMIT: u64 = 5_000_000;

/// Gas allotted to a standalone ERC-20 approve.
const APPROVE_GAS_LIMIT: u64 = 500_000;

/// Entry point for composing and executing batched protocol interactions.
///
/// Per-protocol accessors hand out pure action builders; `execute_actions`
/// turns an assembled batch into one proxy transaction. The client borrows a
/// batch only for the duration of a submission and keeps no state between
/// calls, so each execution attempt is fully self-contained.
pub struct DefiClient<G> {
    gateway: G,
    owner: Address,
    registry: AddressRegistry,
}

impl<G> DefiClient<G> {
    pub fn registry(&self) -> &AddressRegistry {
        &self.registry
    }
}

impl<G: ChainGateway> DefiClient<G> {
    pub fn new(gateway: G, owner: Address, registry: AddressRegistry) -> Self {
        Self {
            gateway,
            owner,
            registry,
        }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub(crate) fn gateway(&self) -> &G {
        &self.gateway
    }

    /// ERC-20 balance of the client's account for the given coin.
    pub async fn balance_of(&self, coin: Coin) -> Result<U256, BatchError> {
        let token = self.registry.token(coin)?;
        self.gateway.balance_of(token, self.owner).await
    }

    /// Submits a standalone ERC-20 `approve`, typically to authorize the
    /// proxy before executing a batch that pulls tokens from the account.
    pub async fn approve(
        &self,
        coin: Coin,
        spender: Address,
        amount: U256,
    ) -> Result<ExecutionReceipt, BatchError> {
        let token = self.registry.token(coin)?;
        let payload = IERC20::approveCall::new((spender, amount)).abi_encode();
        let gas_price = self.suggest_gas_price(None).await?;

        let tx_hash = self
            .gateway
            .submit_transaction(TransactionSubmission {
                to: token,
                value: U256::ZERO,
                gas_limit: APPROVE_GAS_LIMIT,
                gas_price,
                payload: payload.into(),
            })
            .await?;
        let receipt = self.gateway.wait_for_receipt(tx_hash).await?;
        if !receipt.success {
            return Err(BatchError::ExecutionFailure(receipt.tx_hash));
        }
        Ok(receipt)
    }

    /// An action that moves `amount` of `coin` from the account into the
    /// proxy, for batches whose later steps spend tokens rather than value.
    pub fn supply_fund_actions(&self, amount: U256, coin: Coin) -> Result<ActionBatch, BatchError> {
        let token = self.registry.token(coin)?;
        let payload = FundsHandler::injectCall::new((vec![token], vec![amount])).abi_encode();
        Ok(ActionBatch::from(Action::new(
            self.registry.handlers().funds,
            payload.into(),
        )))
    }

    /// Mean gas price of the transactions in the given block (the latest
    /// block when `None`), walking past empty blocks. See [`crate::gas`].
    pub async fn suggest_gas_price(&self, block_number: Option<u64>) -> Result<u128, BatchError> {
        gas::suggest_gas_price(&self.gateway, block_number).await
    }

    /// Executes a batch with an estimated gas price.
    pub async fn execute_actions(&self, batch: &ActionBatch) -> Result<ExecutionReceipt, BatchError> {
        let gas_price = self.suggest_gas_price(None).await?;
        self.execute_actions_with_gas_price(batch, gas_price).await
    }

    /// Executes a batch as one transaction against the proxy: runs approval
    /// injection, combines the batch, and submits `batchExec` carrying the
    /// aggregated native value. Blocks until the receipt arrives; a reverted
    /// receipt surfaces as [`BatchError::ExecutionFailure`]. Never retries —
    /// a failed attempt must be resubmitted by the caller as a fresh batch.
    pub async fn execute_actions_with_gas_price(
        &self,
        batch: &ActionBatch,
        gas_price: u128,
    ) -> Result<ExecutionReceipt, BatchError> {
        let injected = approvals::build_injection(
            &self.gateway,
            self.owner,
            self.registry.handlers().funds,
            batch,
        )
        .await?;

        let combined = batch.combine();
        let mut targets = combined.targets;
        let mut payloads = combined.payloads;
        if let Some(action) = injected {
            // The injection must run before any action that spends the
            // approved tokens.
            targets.insert(0, action.target);
            payloads.insert(0, action.payload);
        }

        debug!(
            "submitting batch of {} actions, total value {}",
            targets.len(),
            combined.total_value
        );

        let payload = Proxy::batchExecCall::new((targets, payloads)).abi_encode();
        let tx_hash = self
            .gateway
            .submit_transaction(TransactionSubmission {
                to: self.registry.proxy(),
                value: combined.total_value,
                gas_limit: BATCH_GAS_LIMIT,
                gas_price,
                payload: payload.into(),
            })
            .await?;

        let receipt = self.gateway.wait_for_receipt(tx_hash).await?;
        if !receipt.success {
            return Err(BatchError::ExecutionFailure(receipt.tx_hash));
        }
        info!("batch confirmed in transaction {}", receipt.tx_hash);
        Ok(receipt)
    }

    pub fn uniswap(&self) -> UniswapClient<'_, G> {
        UniswapClient::new(self)
    }

    pub fn sushiswap(&self) -> SushiswapClient<'_, G> {
        SushiswapClient::new(self)
    }

    pub fn compound(&self) -> CompoundClient<'_, G> {
        CompoundClient::new(self)
    }

    pub fn aave(&self) -> AaveClient<'_, G> {
        AaveClient::new(self)
    }

    pub fn maker(&self) -> MakerClient<'_, G> {
        MakerClient::new(self)
    }

    pub fn curve(&self) -> CurveClient<'_, G> {
        CurveClient::new(self)
    }

    pub fn yearn(&self) -> YearnClient<'_, G> {
        YearnClient::new(self)
    }

    pub fn kyber(&self) -> KyberClient<'_, G> {
        KyberClient::new(self)
    }

    pub fn balancer(&self) -> BalancerClient<'_, G> {
        BalancerClient::new(self)
    }
}
