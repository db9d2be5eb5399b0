use super::{ChainGateway, ExecutionReceipt, TransactionSubmission};
use crate::bindings::erc20::IERC20;
use crate::error::BatchError;
use alloy::consensus::Transaction as _;
use alloy::network::EthereumWallet;
use alloy::primitives::{Address, B256, TxKind, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::{Block, BlockNumberOrTag, TransactionInput, TransactionRequest};
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;
use eyre::Result;
use log::debug;
use std::borrow::Cow;
use std::time::Duration;

/// Chain access through an alloy provider. The provider carries the signing
/// context, so submissions come out signed with the wallet it was built with.
#[derive(Clone)]
pub struct RpcGateway<P> {
    provider: P,
}

const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(1);

impl<P> RpcGateway<P>
where
    P: Provider + Clone + Send + Sync + 'static,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

/// Read-only gateway; submissions will be rejected by the node for lack of a
/// signature, so use this only for balance and block queries.
pub async fn connect(
    rpc_url: String,
) -> Result<RpcGateway<impl Provider + Clone + Send + Sync + 'static>> {
    let provider = ProviderBuilder::new().on_builtin(&rpc_url).await?;
    Ok(RpcGateway::new(provider))
}

/// Gateway with a local signer; the key is given as a hex string. Also
/// returns the signer's address, which is the account batches execute from.
pub async fn connect_with_signer(
    rpc_url: String,
    private_key: String,
) -> Result<(
    RpcGateway<impl Provider + Clone + Send + Sync + 'static>,
    Address,
)> {
    let signer: PrivateKeySigner = private_key.parse()?;
    let owner = signer.address();
    let wallet = EthereumWallet::from(signer);
    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .on_builtin(&rpc_url)
        .await?;
    Ok((RpcGateway::new(provider), owner))
}

#[async_trait]
impl<P> ChainGateway for RpcGateway<P>
where
    P: Provider + Clone + Send + Sync + 'static,
{
    async fn balance_of(&self, token: Address, owner: Address) -> Result<U256, BatchError> {
        let erc20 = IERC20::new(token, self.provider.clone());
        let balance = erc20
            .balanceOf(owner)
            .call()
            .await
            .map_err(|e| BatchError::Io(e.to_string()))?;
        Ok(balance._0)
    }

    async fn latest_block_number(&self) -> Result<u64, BatchError> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| BatchError::Io(e.to_string()))
    }

    async fn block_gas_prices(&self, number: u64) -> Result<Vec<u128>, BatchError> {
        // Raw request with full transaction objects; the typed provider
        // helpers only expose hashes by default.
        let block: Option<Block> = self
            .provider
            .raw_request(
                Cow::Borrowed("eth_getBlockByNumber"),
                (BlockNumberOrTag::Number(number), true),
            )
            .await
            .map_err(|e| BatchError::Io(e.to_string()))?;

        let block = block.ok_or_else(|| BatchError::Io(format!("block {} not found", number)))?;
        Ok(block
            .transactions
            .txns()
            .map(|tx| tx.gas_price().unwrap_or_else(|| tx.max_fee_per_gas()))
            .collect())
    }

    async fn submit_transaction(&self, tx: TransactionSubmission) -> Result<B256, BatchError> {
        let request = TransactionRequest {
            to: Some(TxKind::Call(tx.to)),
            value: Some(tx.value),
            gas: Some(tx.gas_limit),
            gas_price: Some(tx.gas_price),
            input: TransactionInput::new(tx.payload),
            ..Default::default()
        };

        let pending = self
            .provider
            .send_transaction(request)
            .await
            .map_err(|e| BatchError::Submission(e.to_string()))?;
        let tx_hash = *pending.tx_hash();
        debug!("submitted transaction {}", tx_hash);
        Ok(tx_hash)
    }

    async fn wait_for_receipt(&self, tx_hash: B256) -> Result<ExecutionReceipt, BatchError> {
        loop {
            match self.provider.get_transaction_receipt(tx_hash).await {
                Ok(Some(receipt)) => {
                    return Ok(ExecutionReceipt {
                        tx_hash,
                        success: receipt.status(),
                    });
                }
                Ok(None) => tokio::time::sleep(RECEIPT_POLL_INTERVAL).await,
                Err(e) => return Err(BatchError::Io(e.to_string())),
            }
        }
    }
}
