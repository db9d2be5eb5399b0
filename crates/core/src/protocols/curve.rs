use crate::bindings::curve::CurveHandler;
use crate::client::DefiClient;
use crate::error::BatchError;
use crate::types::{Action, ActionBatch, Approval};
use alloy::primitives::{Address, U256};
use alloy::sol_types::SolCall;

/// Builds Curve stable-swap actions. Pool addresses are passed in by the
/// caller (see [`crate::types::registry::curve_pools`] for well-known ones);
/// `i` and `j` are the token indices within the pool.
pub struct CurveClient<'a, G> {
    client: &'a DefiClient<G>,
}

impl<'a, G> CurveClient<'a, G> {
    pub(crate) fn new(client: &'a DefiClient<G>) -> Self {
        Self { client }
    }

    /// Swaps `dx` of the pool's token `i` into at least `min_dy` of token `j`.
    #[allow(clippy::too_many_arguments)]
    pub fn exchange_actions(
        &self,
        pool: Address,
        token_i: Address,
        token_j: Address,
        i: i128,
        j: i128,
        dx: U256,
        min_dy: U256,
    ) -> Result<ActionBatch, BatchError> {
        let payload =
            CurveHandler::exchangeCall::new((pool, token_i, token_j, i, j, dx, min_dy))
                .abi_encode();
        Ok(self.swap_action(payload.into(), token_i, dx))
    }

    /// Like [`Self::exchange_actions`] but through the pool's underlying
    /// tokens (e.g. DAI rather than cDAI on lending pools).
    #[allow(clippy::too_many_arguments)]
    pub fn exchange_underlying_actions(
        &self,
        pool: Address,
        token_i: Address,
        token_j: Address,
        i: i128,
        j: i128,
        dx: U256,
        min_dy: U256,
    ) -> Result<ActionBatch, BatchError> {
        let payload =
            CurveHandler::exchangeUnderlyingCall::new((pool, token_i, token_j, i, j, dx, min_dy))
                .abi_encode();
        Ok(self.swap_action(payload.into(), token_i, dx))
    }

    fn swap_action(&self, payload: alloy::primitives::Bytes, token_i: Address, dx: U256) -> ActionBatch {
        ActionBatch::from(Action {
            target: self.client.registry().handlers().curve,
            payload,
            value: U256::ZERO,
            approvals: vec![Approval {
                token: token_i,
                amount: dx,
            }],
        })
    }

    /// Deposits `amounts` of `tokens` into the pool for at least
    /// `min_pool_amount` of the pool token. Every deposited token needs an
    /// approval, so the two arrays must line up.
    pub fn add_liquidity_actions(
        &self,
        pool: Address,
        pool_token: Address,
        tokens: Vec<Address>,
        amounts: Vec<U256>,
        min_pool_amount: U256,
    ) -> Result<ActionBatch, BatchError> {
        if tokens.len() != amounts.len() {
            return Err(BatchError::InvalidArgument(format!(
                "add_liquidity: {} tokens but {} amounts",
                tokens.len(),
                amounts.len()
            )));
        }

        let approvals = tokens
            .iter()
            .zip(&amounts)
            .map(|(token, amount)| Approval {
                token: *token,
                amount: *amount,
            })
            .collect();

        let payload = CurveHandler::addLiquidityCall::new((
            pool,
            pool_token,
            tokens,
            amounts,
            min_pool_amount,
        ))
        .abi_encode();

        Ok(ActionBatch::from(Action {
            target: self.client.registry().handlers().curve,
            payload: payload.into(),
            value: U256::ZERO,
            approvals,
        }))
    }

    /// Withdraws a single token (`token_i`, index `i`) by burning
    /// `pool_amount` of the pool token.
    #[allow(clippy::too_many_arguments)]
    pub fn remove_liquidity_actions(
        &self,
        pool: Address,
        pool_token: Address,
        token_i: Address,
        pool_amount: U256,
        i: i128,
        min_amount: U256,
    ) -> Result<ActionBatch, BatchError> {
        let payload = CurveHandler::removeLiquidityOneCoinCall::new((
            pool,
            pool_token,
            token_i,
            pool_amount,
            i,
            min_amount,
        ))
        .abi_encode();

        Ok(ActionBatch::from(Action {
            target: self.client.registry().handlers().curve,
            payload: payload.into(),
            value: U256::ZERO,
            approvals: vec![Approval {
                token: pool_token,
                amount: pool_amount,
            }],
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::mock::MockGateway;
    use crate::types::registry::curve_pools;
    use crate::types::{AddressRegistry, Coin};

    fn client() -> DefiClient<MockGateway> {
        DefiClient::new(
            MockGateway::default(),
            Address::repeat_byte(0xEE),
            AddressRegistry::mainnet(),
        )
    }

    #[test]
    fn exchange_approves_the_input_token() {
        let client = client();
        let registry = client.registry();
        let dai = registry.token(Coin::Dai).unwrap();
        let usdc = registry.token(Coin::Usdc).unwrap();

        let batch = client
            .curve()
            .exchange_actions(
                curve_pools::THREE_POOL,
                dai,
                usdc,
                0,
                1,
                U256::from(1_000u64),
                U256::from(990u64),
            )
            .unwrap();

        let action = &batch.actions()[0];
        assert_eq!(action.target, registry.handlers().curve);
        assert_eq!(
            action.approvals,
            vec![Approval {
                token: dai,
                amount: U256::from(1_000u64),
            }]
        );

        let call = CurveHandler::exchangeCall::abi_decode(&action.payload, true).unwrap();
        assert_eq!(call.i, 0);
        assert_eq!(call.j, 1);
        assert_eq!(call.minDy, U256::from(990u64));
    }

    #[test]
    fn add_liquidity_approves_every_deposited_token() {
        let client = client();
        let registry = client.registry();
        let tokens = vec![
            registry.token(Coin::Dai).unwrap(),
            registry.token(Coin::Usdc).unwrap(),
            registry.token(Coin::Usdt).unwrap(),
        ];
        let amounts = vec![U256::from(10u64), U256::ZERO, U256::ZERO];

        let batch = client
            .curve()
            .add_liquidity_actions(
                curve_pools::THREE_POOL,
                curve_pools::THREE_POOL_TOKEN,
                tokens.clone(),
                amounts.clone(),
                U256::ZERO,
            )
            .unwrap();

        let action = &batch.actions()[0];
        assert_eq!(action.approvals.len(), 3);
        assert_eq!(action.approvals[0].token, tokens[0]);
        assert_eq!(action.approvals[0].amount, amounts[0]);
    }

    #[test]
    fn add_liquidity_rejects_mismatched_arrays() {
        let client = client();
        let err = client
            .curve()
            .add_liquidity_actions(
                curve_pools::THREE_POOL,
                curve_pools::THREE_POOL_TOKEN,
                vec![Address::repeat_byte(1)],
                vec![U256::ZERO, U256::ZERO],
                U256::ZERO,
            )
            .unwrap_err();
        assert!(matches!(err, BatchError::InvalidArgument(_)));
    }

    #[test]
    fn remove_liquidity_approves_the_pool_token() {
        let client = client();
        let registry = client.registry();
        let batch = client
            .curve()
            .remove_liquidity_actions(
                curve_pools::THREE_POOL,
                curve_pools::THREE_POOL_TOKEN,
                registry.token(Coin::Dai).unwrap(),
                U256::from(25u64),
                0,
                U256::from(24u64),
            )
            .unwrap();

        let action = &batch.actions()[0];
        assert_eq!(
            action.approvals,
            vec![Approval {
                token: curve_pools::THREE_POOL_TOKEN,
                amount: U256::from(25u64),
            }]
        );
    }
}
