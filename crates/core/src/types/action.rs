use alloy::primitives::{Address, Bytes, U256};
use serde_json::{Value, json};

/// A token amount that must be pre-authorized before an action can pull funds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approval {
    pub token: Address,
    pub amount: U256,
}

/// One unit of on-chain work: an encoded call the proxy will forward to a
/// protocol handler, plus the resources the call needs (native value and
/// token approvals). Immutable once built.
#[derive(Debug, Clone)]
pub struct Action {
    /// Handler contract the proxy invokes.
    pub target: Address,
    /// ABI-encoded call data. Never inspected by batch assembly.
    pub payload: Bytes,
    /// Native currency that must accompany this action.
    pub value: U256,
    /// Tokens that must be authorized before this action runs.
    pub approvals: Vec<Approval>,
}

impl Action {
    /// An action with no value and no approval requirements.
    pub fn new(target: Address, payload: Bytes) -> Self {
        Self {
            target,
            payload,
            value: U256::ZERO,
            approvals: Vec::new(),
        }
    }

    pub fn describe(&self) -> Value {
        json!({
            "target": self.target.to_string(),
            "value": self.value.to_string(),
            "payload": format!("0x{}", hex::encode(&self.payload)),
            "approvals": self.approvals.iter().map(|a| json!({
                "token": a.token.to_string(),
                "amount": a.amount.to_string(),
            })).collect::<Vec<_>>(),
        })
    }
}

/// The three aligned sequences handed to the executor: one target and one
/// payload per action, and the sum of the actions' native-value requirements.
#[derive(Debug, Clone, Default)]
pub struct CombinedBatch {
    pub targets: Vec<Address>,
    pub payloads: Vec<Bytes>,
    pub total_value: U256,
}

/// An ordered list of actions. Insertion order is execution order: later
/// actions may depend on state left behind by earlier ones, so assembly is
/// append-only.
#[derive(Debug, Clone, Default)]
pub struct ActionBatch {
    actions: Vec<Action>,
}

impl ActionBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the actions of each given batch, in argument order.
    pub fn add(&mut self, batches: impl IntoIterator<Item = ActionBatch>) -> &mut Self {
        for batch in batches {
            self.actions.extend(batch.actions);
        }
        self
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Flattens the batch into aligned target/payload sequences and the total
    /// native value. A zero-action batch combines to empty sequences and zero
    /// value, which is still a valid (degenerate) submission.
    pub fn combine(&self) -> CombinedBatch {
        let mut combined = CombinedBatch::default();
        for action in &self.actions {
            combined.targets.push(action.target);
            combined.payloads.push(action.payload.clone());
            combined.total_value += action.value;
        }
        combined
    }

    pub fn describe(&self) -> Value {
        Value::Array(self.actions.iter().map(Action::describe).collect())
    }
}

impl From<Action> for ActionBatch {
    fn from(action: Action) -> Self {
        Self {
            actions: vec![action],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    fn action(byte: u8, value: u64) -> Action {
        Action {
            target: Address::repeat_byte(byte),
            payload: Bytes::from(vec![byte; 4]),
            value: U256::from(value),
            approvals: Vec::new(),
        }
    }

    #[test]
    fn combine_of_empty_batch_is_empty() {
        let combined = ActionBatch::new().combine();
        assert!(combined.targets.is_empty());
        assert!(combined.payloads.is_empty());
        assert_eq!(combined.total_value, U256::ZERO);
    }

    #[test]
    fn add_concatenates_in_argument_order() {
        let mut batch = ActionBatch::from(action(1, 10));
        batch.add([
            ActionBatch::from(action(2, 20)),
            ActionBatch::from(action(3, 30)),
        ]);

        let combined = batch.combine();
        assert_eq!(
            combined.targets,
            vec![
                Address::repeat_byte(1),
                Address::repeat_byte(2),
                Address::repeat_byte(3)
            ]
        );
        assert_eq!(combined.payloads[1], Bytes::from(vec![2u8; 4]));
    }

    #[test]
    fn combined_value_is_sum_of_parts() {
        let mut left = ActionBatch::from(action(1, 7));
        left.add([ActionBatch::from(action(2, 11))]);
        let right = ActionBatch::from(action(3, 13));

        let left_value = left.combine().total_value;
        let right_value = right.combine().total_value;

        let mut whole = ActionBatch::new();
        whole.add([left, right]);
        assert_eq!(whole.combine().total_value, left_value + right_value);
        assert_eq!(whole.combine().total_value, U256::from(31u64));
    }

    #[test]
    fn describe_reports_approvals() {
        let mut action = action(5, 0);
        action.approvals.push(Approval {
            token: address!("0x6b175474e89094c44da98b954eedeac495271d0f"),
            amount: U256::from(100u64),
        });
        let described = ActionBatch::from(action).describe();
        assert_eq!(described[0]["approvals"][0]["amount"], "100");
    }
}
