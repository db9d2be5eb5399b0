use super::uniswap::router_swap;
use crate::client::DefiClient;
use crate::error::BatchError;
use crate::types::{ActionBatch, Coin};
use alloy::primitives::U256;

/// Sushiswap shares the router call shapes with Uniswap; only the handler
/// address differs.
pub struct SushiswapClient<'a, G> {
    client: &'a DefiClient<G>,
}

impl<'a, G> SushiswapClient<'a, G> {
    pub(crate) fn new(client: &'a DefiClient<G>) -> Self {
        Self { client }
    }

    pub fn swap_actions(
        &self,
        amount: U256,
        base: Coin,
        quote: Coin,
    ) -> Result<ActionBatch, BatchError> {
        let registry = self.client.registry();
        router_swap(registry, registry.handlers().sushiswap, amount, base, quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::mock::MockGateway;
    use crate::types::{AddressRegistry, Approval};
    use alloy::primitives::Address;

    #[test]
    fn token_swap_targets_the_sushiswap_handler() {
        let client = DefiClient::new(
            MockGateway::default(),
            Address::repeat_byte(0xEE),
            AddressRegistry::mainnet(),
        );
        let batch = client
            .sushiswap()
            .swap_actions(U256::from(9u64), Coin::Eth, Coin::Dai)
            .unwrap();

        let action = &batch.actions()[0];
        assert_eq!(action.target, client.registry().handlers().sushiswap);
        assert_eq!(
            action.approvals,
            vec![Approval {
                token: client.registry().token(Coin::Dai).unwrap(),
                amount: U256::from(9u64),
            }]
        );
    }
}
