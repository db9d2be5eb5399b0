use crate::bindings::swapper::Swapper;
use crate::bindings::uniswap::UniswapHandler;
use crate::client::DefiClient;
use crate::composite;
use crate::error::BatchError;
use crate::types::{Action, ActionBatch, AddressRegistry, Approval, Coin};
use alloy::primitives::{Address, U256};
use alloy::sol_types::SolCall;

/// Builds Uniswap swap actions and the Uniswap flash-swap composite.
pub struct UniswapClient<'a, G> {
    client: &'a DefiClient<G>,
}

impl<'a, G> UniswapClient<'a, G> {
    pub(crate) fn new(client: &'a DefiClient<G>) -> Self {
        Self { client }
    }

    /// Swaps `amount` of `quote` into `base`. ETH on the quote side carries
    /// the amount as native value; token inputs declare an approval instead.
    pub fn swap_actions(
        &self,
        amount: U256,
        base: Coin,
        quote: Coin,
    ) -> Result<ActionBatch, BatchError> {
        let registry = self.client.registry();
        router_swap(registry, registry.handlers().uniswap, amount, base, quote)
    }

    /// Wraps `inner` as the callback of a flash swap: borrow `amount` of
    /// `borrow`, run the inner actions inside the callback, repay in `repay`
    /// before the transaction ends. The resulting single action targets the
    /// swapper contract, never the proxy directly, and carries the inner
    /// batch's total native requirement.
    pub fn flash_swap_actions(
        &self,
        amount: U256,
        borrow: Coin,
        repay: Coin,
        inner: &ActionBatch,
    ) -> Result<ActionBatch, BatchError> {
        let registry = self.client.registry();
        let (payload, total_value) = composite::callback_payload(inner);
        let data = Swapper::startSwapCall::new((
            registry.token(borrow)?,
            amount,
            registry.token(repay)?,
            payload,
        ))
        .abi_encode();

        Ok(ActionBatch::from(Action {
            target: registry.handlers().swapper,
            payload: data.into(),
            value: total_value,
            approvals: Vec::new(),
        }))
    }
}

/// Router-style swap shared by the Uniswap and Sushiswap handlers; token
/// pairs route through WETH.
// TODO: amountOutMin is pinned to zero, so callers get no slippage control.
pub(crate) fn router_swap(
    registry: &AddressRegistry,
    handler: Address,
    amount: U256,
    base: Coin,
    quote: Coin,
) -> Result<ActionBatch, BatchError> {
    let weth = registry.token(Coin::Eth)?;
    let min_out = U256::ZERO;

    let (payload, value, approvals) = if quote == Coin::Eth {
        let path = vec![weth, registry.token(base)?];
        let data = UniswapHandler::swapExactETHForTokensCall::new((amount, min_out, path))
            .abi_encode();
        (data, amount, Vec::new())
    } else if base == Coin::Eth {
        let quote_token = registry.token(quote)?;
        let path = vec![quote_token, weth];
        let data =
            UniswapHandler::swapExactTokensForETHCall::new((amount, min_out, path)).abi_encode();
        (
            data,
            U256::ZERO,
            vec![Approval {
                token: quote_token,
                amount,
            }],
        )
    } else {
        let quote_token = registry.token(quote)?;
        let path = vec![quote_token, weth, registry.token(base)?];
        let data =
            UniswapHandler::swapExactTokensForTokensCall::new((amount, min_out, path)).abi_encode();
        (
            data,
            U256::ZERO,
            vec![Approval {
                token: quote_token,
                amount,
            }],
        )
    };

    Ok(ActionBatch::from(Action {
        target: handler,
        payload: payload.into(),
        value,
        approvals,
    }))
}
