use alloy::primitives::B256;
use thiserror::Error;

/// Failure classes surfaced by batch building and execution.
///
/// Every failure short-circuits: a builder that cannot construct its action
/// returns no partial batch, and the executor never retries on its own.
#[derive(Debug, Error)]
pub enum BatchError {
    /// A protocol call could not be encoded, e.g. the registry has no address
    /// for the requested asset. Fatal to that one action.
    #[error("failed to encode call: {0}")]
    Encoding(String),

    /// Malformed input to a builder, e.g. mismatched parameter arrays.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A read from the chain failed. The caller may retry the whole operation.
    #[error("chain read failed: {0}")]
    Io(String),

    /// The batch transaction could not be built or sent. Fatal for this attempt.
    #[error("transaction submission failed: {0}")]
    Submission(String),

    /// The transaction was mined but reverted. Fatal for this attempt; a
    /// resubmission is a fresh transaction with a fresh nonce, never a
    /// gas-bumped replacement.
    #[error("transaction {0} reverted on chain")]
    ExecutionFailure(B256),

    /// Gas estimation walked back through `scanned` blocks without finding a
    /// single transaction to sample.
    #[error("no transactions found within {scanned} blocks at or below block {start}")]
    NoRecentTransactions { start: u64, scanned: u64 },
}
