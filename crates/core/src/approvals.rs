use crate::bindings::funds::FundsHandler;
use crate::error::BatchError;
use crate::gateway::ChainGateway;
use crate::types::{Action, ActionBatch};
use alloy::primitives::Address;
use alloy::sol_types::SolCall;
use log::debug;

/// Collects every approval requirement in the batch (in batch order) and, if
/// any exist, synthesizes the `inject(tokens, amounts)` action the executor
/// prepends so approvals are in place before the first consuming action runs.
///
/// Each requested amount is clamped to the owner's live balance: authorizing
/// more than the account holds achieves nothing and has caused on-chain
/// revert noise with fee-bearing and rebasing tokens. Duplicate tokens stay
/// as separate entries, exactly as requested.
pub async fn build_injection<G: ChainGateway>(
    gateway: &G,
    owner: Address,
    funds_handler: Address,
    batch: &ActionBatch,
) -> Result<Option<Action>, BatchError> {
    let mut tokens = Vec::new();
    let mut amounts = Vec::new();

    for action in batch.actions() {
        for approval in &action.approvals {
            let balance = gateway.balance_of(approval.token, owner).await?;
            let granted = if balance > approval.amount {
                approval.amount
            } else {
                balance
            };
            if granted < approval.amount {
                debug!(
                    "clamping approval for {} from {} to balance {}",
                    approval.token, approval.amount, granted
                );
            }
            tokens.push(approval.token);
            amounts.push(granted);
        }
    }

    if tokens.is_empty() {
        return Ok(None);
    }

    let payload = FundsHandler::injectCall::new((tokens, amounts)).abi_encode();
    Ok(Some(Action::new(funds_handler, payload.into())))
}
