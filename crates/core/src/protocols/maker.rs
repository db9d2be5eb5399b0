use crate::bindings::maker::MakerHandler;
use crate::client::DefiClient;
use crate::error::BatchError;
use crate::types::{Action, ActionBatch, Approval, Coin};
use alloy::primitives::U256;
use alloy::sol_types::SolCall;

/// Builds MakerDao vault actions: open a vault and draw DAI, top up
/// collateral, or wipe debt.
pub struct MakerClient<'a, G> {
    client: &'a DefiClient<G>,
}

impl<'a, G> MakerClient<'a, G> {
    pub(crate) fn new(client: &'a DefiClient<G>) -> Self {
        Self { client }
    }

    /// Opens a vault with `collateral` of `coin` and draws `dai_amount`.
    pub fn generate_dai_actions(
        &self,
        collateral: U256,
        dai_amount: U256,
        coin: Coin,
    ) -> Result<ActionBatch, BatchError> {
        let registry = self.client.registry();
        let handler = registry.handlers().maker;
        let dai_join = registry.maker_join(Coin::Dai)?;

        if coin == Coin::Eth {
            let payload = MakerHandler::openLockETHAndDrawCall::new((
                collateral,
                registry.maker_join(Coin::Eth)?,
                dai_join,
                registry.maker_ilk(Coin::Eth)?,
                dai_amount,
            ))
            .abi_encode();
            Ok(ActionBatch::from(Action {
                target: handler,
                payload: payload.into(),
                value: collateral,
                approvals: Vec::new(),
            }))
        } else {
            let payload = MakerHandler::openLockGemAndDrawCall::new((
                registry.maker_join(coin)?,
                dai_join,
                registry.maker_ilk(coin)?,
                collateral,
                dai_amount,
            ))
            .abi_encode();
            Ok(ActionBatch::from(Action {
                target: handler,
                payload: payload.into(),
                value: U256::ZERO,
                approvals: vec![Approval {
                    token: registry.token(coin)?,
                    amount: collateral,
                }],
            }))
        }
    }

    /// Locks additional collateral into an existing vault.
    pub fn deposit_collateral_actions(
        &self,
        collateral: U256,
        coin: Coin,
        cdp: U256,
    ) -> Result<ActionBatch, BatchError> {
        let registry = self.client.registry();
        let handler = registry.handlers().maker;

        if coin == Coin::Eth {
            let payload = MakerHandler::safeLockETHCall::new((
                collateral,
                registry.maker_join(Coin::Eth)?,
                cdp,
            ))
            .abi_encode();
            Ok(ActionBatch::from(Action {
                target: handler,
                payload: payload.into(),
                value: collateral,
                approvals: Vec::new(),
            }))
        } else {
            let payload =
                MakerHandler::safeLockGemCall::new((registry.maker_join(coin)?, cdp, collateral))
                    .abi_encode();
            Ok(ActionBatch::from(Action {
                target: handler,
                payload: payload.into(),
                value: U256::ZERO,
                approvals: vec![Approval {
                    token: registry.token(coin)?,
                    amount: collateral,
                }],
            }))
        }
    }

    /// Pays down `dai_amount` of debt on the given vault. The DAI to burn is
    /// expected to already sit in the proxy (e.g. via a fund-supply action
    /// earlier in the batch).
    pub fn wipe_actions(&self, dai_amount: U256, cdp: U256) -> Result<ActionBatch, BatchError> {
        let registry = self.client.registry();
        let payload =
            MakerHandler::wipeCall::new((registry.maker_join(Coin::Dai)?, cdp, dai_amount))
                .abi_encode();
        Ok(ActionBatch::from(Action::new(
            registry.handlers().maker,
            payload.into(),
        )))
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
    fn eth_vault_carries_the_collateral_as_value() {
        let client = client();
        let batch = client
            .maker()
            .generate_dai_actions(U256::from(2_000u64), U256::from(500u64), Coin::Eth)
            .unwrap();

        let action = &batch.actions()[0];
        assert_eq!(action.target, client.registry().handlers().maker);
        assert_eq!(action.value, U256::from(2_000u64));

        let call = MakerHandler::openLockETHAndDrawCall::abi_decode(&action.payload, true).unwrap();
        assert_eq!(call.wadD, U256::from(500u64));
        assert_eq!(&call.ilk[..5], b"ETH-A");
    }

    #[test]
    fn gem_vault_approves_the_collateral_token() {
        let client = client();
        let batch = client
            .maker()
            .generate_dai_actions(U256::from(1_000u64), U256::from(500u64), Coin::Usdc)
            .unwrap();

        let action = &batch.actions()[0];
        assert_eq!(action.value, U256::ZERO);
        assert_eq!(
            action.approvals,
            vec![Approval {
                token: client.registry().token(Coin::Usdc).unwrap(),
                amount: U256::from(1_000u64),
            }]
        );
    }

    #[test]
    fn wipe_targets_the_dai_join() {
        let client = client();
        let batch = client
            .maker()
            .wipe_actions(U256::from(100u64), U256::from(777u64))
            .unwrap();

        let action = &batch.actions()[0];
        assert!(action.approvals.is_empty());
        let call = MakerHandler::wipeCall::abi_decode(&action.payload, true).unwrap();
        assert_eq!(call.daiJoin, client.registry().maker_join(Coin::Dai).unwrap());
        assert_eq!(call.cdp, U256::from(777u64));
    }

    #[test]
    fn collateral_without_an_ilk_is_rejected() {
        let client = client();
        assert!(matches!(
            client
                .maker()
                .generate_dai_actions(U256::from(1u64), U256::from(1u64), Coin::Bat),
            Err(BatchError::Encoding(_))
        ));
    }
}
