use crate::bindings::proxy::Proxy;
use crate::types::ActionBatch;
use alloy::primitives::{Bytes, U256};
use alloy::sol_types::SolCall;

/// Length of the function selector prefixing encoded calls.
const SELECTOR_LEN: usize = 4;

/// Encodes an inner batch as the callback payload of a flash operation.
///
/// The inner actions are combined and wrapped in the proxy's `execs` call,
/// then the leading selector is stripped: the lending/swap contract re-wraps
/// the remaining argument bytes itself when it invokes the proxy back. The
/// returned value is the inner batch's aggregated native requirement, which
/// the outer contract must forward to the proxy during the callback.
///
/// If any inner action fails during the callback the whole outer transaction
/// reverts, so no partial execution can survive.
pub fn callback_payload(batch: &ActionBatch) -> (Bytes, U256) {
    let combined = batch.combine();
    let encoded = Proxy::execsCall::new((combined.targets, combined.payloads)).abi_encode();
    (
        Bytes::copy_from_slice(&encoded[SELECTOR_LEN..]),
        combined.total_value,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Action;
    use alloy::primitives::Address;

    fn sample_batch() -> ActionBatch {
        let mut batch = ActionBatch::from(Action {
            target: Address::repeat_byte(1),
            payload: Bytes::from(vec![0xAA; 8]),
            value: U256::from(3u64),
            approvals: Vec::new(),
        });
        batch.add([ActionBatch::from(Action {
            target: Address::repeat_byte(2),
            payload: Bytes::from(vec![0xBB; 8]),
            value: U256::from(4u64),
            approvals: Vec::new(),
        })]);
        batch
    }

    #[test]
    fn strips_exactly_the_selector() {
        let batch = sample_batch();
        let combined = batch.combine();
        let full = Proxy::execsCall::new((combined.targets, combined.payloads)).abi_encode();

        let (payload, _) = callback_payload(&batch);
        assert_eq!(payload.len(), full.len() - 4);
        assert_eq!(payload.as_ref(), &full[4..]);
    }

    #[test]
    fn carries_the_inner_value_requirement() {
        let (_, value) = callback_payload(&sample_batch());
        assert_eq!(value, U256::from(7u64));
    }

    #[test]
    fn empty_inner_batch_encodes_empty_sequences() {
        let (payload, value) = callback_payload(&ActionBatch::new());
        assert_eq!(value, U256::ZERO);
        // Still a well-formed execs argument blob: two empty dynamic arrays.
        assert!(!payload.is_empty());
    }
}
