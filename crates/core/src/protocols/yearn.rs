use crate::bindings::yearn::YearnHandler;
use crate::client::DefiClient;
use crate::error::BatchError;
use crate::types::{Action, ActionBatch, Approval, Coin};
use alloy::primitives::U256;
use alloy::sol_types::SolCall;

/// Builds Yearn vault deposit/withdraw actions. ETH goes through the
/// dedicated wrapped-ETH vault; other assets use their registered vault.
pub struct YearnClient<'a, G> {
    client: &'a DefiClient<G>,
}

impl<'a, G> YearnClient<'a, G> {
    pub(crate) fn new(client: &'a DefiClient<G>) -> Self {
        Self { client }
    }

    pub fn add_liquidity_actions(&self, amount: U256, coin: Coin) -> Result<ActionBatch, BatchError> {
        let registry = self.client.registry();
        let handler = registry.handlers().yearn;

        if coin == Coin::Eth {
            let payload =
                YearnHandler::depositETHCall::new((amount, registry.yweth_vault())).abi_encode();
            Ok(ActionBatch::from(Action {
                target: handler,
                payload: payload.into(),
                value: amount,
                approvals: Vec::new(),
            }))
        } else {
            let vault = registry.yearn_vault(coin)?;
            let payload = YearnHandler::depositCall::new((vault, amount)).abi_encode();
            Ok(ActionBatch::from(Action {
                target: handler,
                payload: payload.into(),
                value: U256::ZERO,
                approvals: vec![Approval {
                    token: registry.token(coin)?,
                    amount,
                }],
            }))
        }
    }

    /// Burns `shares` of the vault token back into the underlying. The vault
    /// share itself is what the handler pulls, so it is what gets approved.
    pub fn remove_liquidity_actions(
        &self,
        shares: U256,
        coin: Coin,
    ) -> Result<ActionBatch, BatchError> {
        let registry = self.client.registry();
        let handler = registry.handlers().yearn;

        if coin == Coin::Eth {
            let vault = registry.yweth_vault();
            let payload = YearnHandler::withdrawETHCall::new((vault, shares)).abi_encode();
            Ok(ActionBatch::from(Action {
                target: handler,
                payload: payload.into(),
                value: U256::ZERO,
                approvals: vec![Approval {
                    token: vault,
                    amount: shares,
                }],
            }))
        } else {
            let vault = registry.yearn_vault(coin)?;
            let payload = YearnHandler::withdrawCall::new((vault, shares)).abi_encode();
            Ok(ActionBatch::from(Action {
                target: handler,
                payload: payload.into(),
                value: U256::ZERO,
                approvals: vec![Approval {
                    token: vault,
                    amount: shares,
                }],
            }))
        }
    }
}
