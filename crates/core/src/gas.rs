use crate::error::BatchError;
use crate::gateway::ChainGateway;
use log::debug;

/// How many blocks the estimator will walk back past empty blocks before
/// giving up. Keeps the scan bounded on sparse chains.
pub const MAX_LOOKBACK: u64 = 64;

/// Suggests a gas price from recent block data: the arithmetic mean (floor
/// division) of the gas prices of every transaction in the sampled block.
/// With no block number given, sampling starts at the chain tip. Empty blocks
/// are skipped by walking backward, at most [`MAX_LOOKBACK`] blocks.
///
/// This is a congestion proxy, not a fee-market model: no percentiles, no
/// priority-fee awareness.
pub async fn suggest_gas_price<G: ChainGateway>(
    gateway: &G,
    block_number: Option<u64>,
) -> Result<u128, BatchError> {
    let start = match block_number {
        Some(number) => number,
        None => gateway.latest_block_number().await?,
    };

    let mut number = start;
    for _ in 0..MAX_LOOKBACK {
        let prices = gateway.block_gas_prices(number).await?;
        if !prices.is_empty() {
            let sum: u128 = prices.iter().sum();
            let average = sum / prices.len() as u128;
            debug!(
                "gas estimate {} from {} transactions in block {}",
                average,
                prices.len(),
                number
            );
            return Ok(average);
        }
        if number == 0 {
            break;
        }
        number -= 1;
    }

    Err(BatchError::NoRecentTransactions {
        start,
        scanned: MAX_LOOKBACK,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::mock::MockGateway;

    #[tokio::test]
    async fn averages_with_floor_division() {
        let gateway = MockGateway::default().with_block(100, vec![3, 4]);
        assert_eq!(suggest_gas_price(&gateway, Some(100)).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn defaults_to_latest_block() {
        let gateway = MockGateway::default()
            .with_block(90, vec![1])
            .with_block(100, vec![50, 70]);
        assert_eq!(suggest_gas_price(&gateway, None).await.unwrap(), 60);
    }

    #[tokio::test]
    async fn walks_back_past_empty_blocks() {
        let gateway = MockGateway::default()
            .with_block(98, vec![20, 30, 40])
            .with_block(100, vec![]);
        assert_eq!(suggest_gas_price(&gateway, Some(100)).await.unwrap(), 30);
    }

    #[tokio::test]
    async fn fails_when_lookback_is_exhausted() {
        let gateway = MockGateway::default().with_block(1000, vec![]);
        let err = suggest_gas_price(&gateway, Some(1000)).await.unwrap_err();
        assert!(matches!(
            err,
            BatchError::NoRecentTransactions {
                start: 1000,
                scanned: MAX_LOOKBACK
            }
        ));
    }

    #[tokio::test]
    async fn stops_at_genesis() {
        let gateway = MockGateway::default();
        let err = suggest_gas_price(&gateway, Some(3)).await.unwrap_err();
        assert!(matches!(err, BatchError::NoRecentTransactions { .. }));
    }
}
