use crate::bindings::kyber::KyberHandler;
use crate::client::DefiClient;
use crate::error::BatchError;
use crate::types::{Action, ActionBatch, Approval, Coin};
use alloy::primitives::U256;
use alloy::sol_types::SolCall;

/// Builds Kyber swap actions.
pub struct KyberClient<'a, G> {
    client: &'a DefiClient<G>,
}

impl<'a, G> KyberClient<'a, G> {
    pub(crate) fn new(client: &'a DefiClient<G>) -> Self {
        Self { client }
    }

    /// Swaps `amount` of `quote` into `base` at any rate.
    pub fn swap_actions(
        &self,
        amount: U256,
        base: Coin,
        quote: Coin,
    ) -> Result<ActionBatch, BatchError> {
        let registry = self.client.registry();
        let min_rate = U256::ZERO;

        let (payload, value, approvals) = if quote == Coin::Eth {
            let data =
                KyberHandler::swapEtherToTokenCall::new((amount, registry.token(base)?, min_rate))
                    .abi_encode();
            (data, amount, Vec::new())
        } else if base == Coin::Eth {
            let quote_token = registry.token(quote)?;
            let data = KyberHandler::swapTokenToEtherCall::new((quote_token, amount, min_rate))
                .abi_encode();
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
            let data = KyberHandler::swapTokenToTokenCall::new((
                quote_token,
                amount,
                registry.token(base)?,
                min_rate,
            ))
            .abi_encode();
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
            target: registry.handlers().kyber,
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
    fn ether_input_carries_value() {
        let client = client();
        let batch = client
            .kyber()
            .swap_actions(U256::from(3u64), Coin::Dai, Coin::Eth)
            .unwrap();

        let action = &batch.actions()[0];
        assert_eq!(action.target, client.registry().handlers().kyber);
        assert_eq!(action.value, U256::from(3u64));
        assert!(action.approvals.is_empty());
    }

    #[test]
    fn token_input_is_the_quote_side() {
        let client = client();
        let batch = client
            .kyber()
            .swap_actions(U256::from(3u64), Coin::Eth, Coin::Dai)
            .unwrap();

        let action = &batch.actions()[0];
        let call = KyberHandler::swapTokenToEtherCall::abi_decode(&action.payload, true).unwrap();
        assert_eq!(call.token, client.registry().token(Coin::Dai).unwrap());
        assert_eq!(action.approvals[0].token, call.token);
    }
}
