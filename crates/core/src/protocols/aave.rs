use crate::bindings::aave::AaveHandler;
use crate::client::DefiClient;
use crate::composite;
use crate::error::BatchError;
use crate::types::{Action, ActionBatch, Coin};
use alloy::primitives::U256;
use alloy::sol_types::SolCall;

/// Builds the Aave flash-loan composite action.
pub struct AaveClient<'a, G> {
    client: &'a DefiClient<G>,
}

impl<'a, G> AaveClient<'a, G> {
    pub(crate) fn new(client: &'a DefiClient<G>) -> Self {
        Self { client }
    }

    /// Wraps `inner` as the callback of an Aave flash loan of `amount` of
    /// `coin`. The single resulting action targets the Aave handler; the
    /// lending pool calls the proxy back with the embedded sub-batch and
    /// expects repayment within the same transaction, so a failure anywhere
    /// inside reverts the whole batch.
    pub fn flash_loan_actions(
        &self,
        amount: U256,
        coin: Coin,
        inner: &ActionBatch,
    ) -> Result<ActionBatch, BatchError> {
        let registry = self.client.registry();
        let (payload, total_value) = composite::callback_payload(inner);
        let data =
            AaveHandler::flashLoanCall::new((registry.token(coin)?, amount, payload)).abi_encode();

        Ok(ActionBatch::from(Action {
            target: registry.handlers().aave,
            payload: data.into(),
            value: total_value,
            approvals: Vec::new(),
        }))
    }
}
