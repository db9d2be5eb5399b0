use crate::bindings::balancer::BalancerHandler;
use crate::client::DefiClient;
use crate::error::BatchError;
use crate::types::{Action, ActionBatch, Approval, Coin};
use alloy::primitives::U256;
use alloy::sol_types::SolCall;

/// Smart-order-router pools sampled per swap.
const SWAP_POOL_COUNT: u64 = 10;

/// Builds Balancer exchange actions.
pub struct BalancerClient<'a, G> {
    client: &'a DefiClient<G>,
}

impl<'a, G> BalancerClient<'a, G> {
    pub(crate) fn new(client: &'a DefiClient<G>) -> Self {
        Self { client }
    }

    pub fn swap_actions(
        &self,
        input: Coin,
        output: Coin,
        amount: U256,
    ) -> Result<ActionBatch, BatchError> {
        let registry = self.client.registry();
        let input_token = registry.token(input)?;
        let payload = BalancerHandler::smartSwapExactInCall::new((
            input_token,
            registry.token(output)?,
            amount,
            U256::ZERO,
            U256::from(SWAP_POOL_COUNT),
        ))
        .abi_encode();

        let (value, approvals) = if input == Coin::Eth {
            (amount, Vec::new())
        } else {
            (
                U256::ZERO,
                vec![Approval {
                    token: input_token,
                    amount,
                }],
            )
        };

        Ok(ActionBatch::from(Action {
            target: registry.handlers().balancer,
            payload: payload.into(),
            value,
            approvals,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::mock::MockGateway;
    use crate::types::AddressRegistry;
    use alloy::primitives::Address;

    fn client() -> DefiClient<MockGateway> {
        DefiClient::new(
            MockGateway::default(),
            Address::repeat_byte(0xEE),
            AddressRegistry::mainnet(),
        )
    }

    #[test]
    fn token_input_declares_an_approval() {
        let client = client();
        let batch = client
            .balancer()
            .swap_actions(Coin::Dai, Coin::Eth, U256::from(6u64))
            .unwrap();

        let action = &batch.actions()[0];
        assert_eq!(action.target, client.registry().handlers().balancer);
        assert_eq!(action.value, U256::ZERO);
        assert_eq!(
            action.approvals[0].token,
            client.registry().token(Coin::Dai).unwrap()
        );

        let call =
            BalancerHandler::smartSwapExactInCall::abi_decode(&action.payload, true).unwrap();
        assert_eq!(call.nPools, U256::from(SWAP_POOL_COUNT));
    }

    #[test]
    fn ether_input_carries_value() {
        let client = client();
        let batch = client
            .balancer()
            .swap_actions(Coin::Eth, Coin::Dai, U256::from(6u64))
            .unwrap();
        assert_eq!(batch.actions()[0].value, U256::from(6u64));
    }
}
