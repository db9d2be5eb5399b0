use crate::bindings::compound::{CEtherHandler, CTokenHandler};
use crate::client::DefiClient;
use crate::error::BatchError;
use crate::gateway::ChainGateway;
use crate::types::{Action, ActionBatch, Approval, Coin};
use alloy::primitives::U256;
use alloy::sol_types::SolCall;

/// Builds Compound supply/redeem actions; ETH goes through the cEther
/// handler, everything else through the generic cToken handler.
pub struct CompoundClient<'a, G> {
    client: &'a DefiClient<G>,
}

impl<'a, G> CompoundClient<'a, G> {
    pub(crate) fn new(client: &'a DefiClient<G>) -> Self {
        Self { client }
    }

    pub fn supply_actions(&self, amount: U256, coin: Coin) -> Result<ActionBatch, BatchError> {
        let registry = self.client.registry();
        if coin == Coin::Eth {
            let payload = CEtherHandler::mintCall::new((amount,)).abi_encode();
            Ok(ActionBatch::from(Action {
                target: registry.handlers().cether,
                payload: payload.into(),
                value: amount,
                approvals: Vec::new(),
            }))
        } else {
            let pool = registry.compound_pool(coin)?;
            let payload = CTokenHandler::mintCall::new((pool, amount)).abi_encode();
            Ok(ActionBatch::from(Action {
                target: registry.handlers().ctoken,
                payload: payload.into(),
                value: U256::ZERO,
                approvals: vec![Approval {
                    token: registry.token(coin)?,
                    amount,
                }],
            }))
        }
    }

    /// Redeems `amount` of cTokens back into the underlying asset. The
    /// cToken itself must be approved so the handler can pull the shares.
    pub fn redeem_actions(&self, amount: U256, coin: Coin) -> Result<ActionBatch, BatchError> {
        let registry = self.client.registry();
        if coin == Coin::Eth {
            let payload = CEtherHandler::redeemCall::new((amount,)).abi_encode();
            Ok(ActionBatch::from(Action::new(
                registry.handlers().cether,
                payload.into(),
            )))
        } else {
            let pool = registry.compound_pool(coin)?;
            let payload = CTokenHandler::redeemCall::new((pool, amount)).abi_encode();
            Ok(ActionBatch::from(Action {
                target: registry.handlers().ctoken,
                payload: payload.into(),
                value: U256::ZERO,
                approvals: vec![Approval {
                    token: pool,
                    amount,
                }],
            }))
        }
    }
}

impl<'a, G: ChainGateway> CompoundClient<'a, G> {
    /// The account's cToken balance for the given underlying coin.
    pub async fn balance_of(&self, coin: Coin) -> Result<U256, BatchError> {
        let pool = self.client.registry().compound_pool(coin)?;
        self.client
            .gateway()
            .balance_of(pool, self.client.owner())
            .await
    }
}
