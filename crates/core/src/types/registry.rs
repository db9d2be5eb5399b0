use super::coin::Coin;
use crate::error::BatchError;
use alloy::primitives::{Address, FixedBytes, address, fixed_bytes};
use std::collections::HashMap;

/// Proxy-side handler contracts, one per protocol.
#[derive(Debug, Clone, Copy)]
pub struct Handlers {
    /// Funds-injection handler; also the target of the synthesized approval
    /// action prepended by the executor.
    pub funds: Address,
    pub uniswap: Address,
    pub sushiswap: Address,
    pub cether: Address,
    pub ctoken: Address,
    pub maker: Address,
    pub curve: Address,
    pub yearn: Address,
    pub aave: Address,
    pub kyber: Address,
    pub balancer: Address,
    /// Flash-swap entry contract.
    pub swapper: Address,
}

/// Immutable address configuration for one network: the proxy, its protocol
/// handlers, and the asset tables. Passed into the client at construction so
/// testnet or fork deployments swap addresses without recompiling.
#[derive(Debug, Clone)]
pub struct AddressRegistry {
    proxy: Address,
    handlers: Handlers,
    tokens: HashMap<Coin, Address>,
    compound_pools: HashMap<Coin, Address>,
    maker_joins: HashMap<Coin, Address>,
    maker_ilks: HashMap<Coin, FixedBytes<32>>,
    yearn_vaults: HashMap<Coin, Address>,
    yweth_vault: Address,
}

/// Well-known Curve pools, handy as `exchange`/`add_liquidity` parameters.
pub mod curve_pools {
    use alloy::primitives::{Address, address};

    pub const THREE_POOL: Address = address!("0xbebc44782c7db0a1a60cb6fe97d0b483032ff1c7");
    pub const THREE_POOL_TOKEN: Address = address!("0x6c3f90f043a72fa612cbac8115ee7e52bde6e490");
    pub const SUSD_POOL: Address = address!("0xa5407eae9ba41422680e2e00537571bcc53efbfd");
    pub const SUSD_POOL_TOKEN: Address = address!("0xc25a3a3b969415c80451098fa907ec722572917f");
}

impl AddressRegistry {
    /// The stock mainnet deployment.
    pub fn mainnet() -> Self {
        let tokens = HashMap::from([
            // ETH is addressed through WETH.
            (Coin::Eth, address!("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2")),
            (Coin::Bat, address!("0x0d8775f648430679a709e98d2b0cb6250d2887ef")),
            (Coin::Comp, address!("0xc00e94cb662c3520282e6f5717214004a7f26888")),
            (Coin::Dai, address!("0x6b175474e89094c44da98b954eedeac495271d0f")),
            (Coin::Usdc, address!("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48")),
            (Coin::Usdt, address!("0xdac17f958d2ee523a2206206994597c13d831ec7")),
            (Coin::Busd, address!("0x4fabb145d64652a948d72533023f6e7a623c7c53")),
            (Coin::CEth, address!("0x4ddc2d193948926d02f9b1fe9e1daa0718270ed5")),
            (Coin::CDai, address!("0x5d3a536e4d6dbd6114cc1ead35777bab948e3643")),
            (Coin::CUsdc, address!("0x39aa39c021dfbae8fac545936693ac917d5e7563")),
            (Coin::YWeth, address!("0xe1237aa7f535b0cc33fd973d66cbf830354d16c7")),
        ]);

        let compound_pools = HashMap::from([
            (Coin::Eth, address!("0x4ddc2d193948926d02f9b1fe9e1daa0718270ed5")),
            (Coin::Dai, address!("0x5d3a536e4d6dbd6114cc1ead35777bab948e3643")),
            (Coin::Usdc, address!("0x39aa39c021dfbae8fac545936693ac917d5e7563")),
        ]);

        // Joins are the MakerDao adapters that move collateral in and out of
        // the vault engine.
        let maker_joins = HashMap::from([
            (Coin::Dai, address!("0x9759a6ac90977b93b58547b4a71c78317f391a28")),
            (Coin::Eth, address!("0x2f0b23f53734252bda2277357e97e1517d6b042a")),
            (Coin::Usdc, address!("0x2600004fd1585f7270756ddc88ad9cfa10dd0428")),
            (Coin::Yfi, address!("0x3ff33d9162ad47660083d7dc4bc02fb231c81677")),
            (Coin::Usdt, address!("0x0ac6a1d74e84c2df9063bddc31699ff2a2bb22a2")),
            (Coin::Uni, address!("0x2502f65d77ca13f183850b5f9272270454094a08")),
            (Coin::Aave, address!("0x24e459f61ceaa7b1ce70dbaea938940a7c5ad46e")),
        ]);

        // An ilk names a MakerDao collateral type, e.g. "ETH-A".
        let maker_ilks = HashMap::from([
            (
                Coin::Eth,
                fixed_bytes!("0x4554482d41000000000000000000000000000000000000000000000000000000"),
            ),
            (
                Coin::Yfi,
                fixed_bytes!("0x5946492d41000000000000000000000000000000000000000000000000000000"),
            ),
            (
                Coin::Usdc,
                fixed_bytes!("0x555344432d420000000000000000000000000000000000000000000000000000"),
            ),
            (
                Coin::Usdt,
                fixed_bytes!("0x555344542d410000000000000000000000000000000000000000000000000000"),
            ),
            (
                Coin::Uni,
                fixed_bytes!("0x554e4956324441494554482d4100000000000000000000000000000000000000"),
            ),
            (
                Coin::Aave,
                fixed_bytes!("0x414156452d410000000000000000000000000000000000000000000000000000"),
            ),
        ]);

        let yearn_vaults = HashMap::from([
            (Coin::Dai, address!("0xacd43e627e64355f1861cec6d3a6688b31a6f952")),
            (Coin::Usdc, address!("0x597ad1e0c13bfe8025993d9e79c69e1c0233522e")),
            (Coin::Usdt, address!("0x2f08119c6f07c006695e079aafc638b8789faf18")),
        ]);

        Self {
            proxy: address!("0x57805e5a227937bac2b0fdacaa30413ddac6b8e1"),
            handlers: Handlers {
                funds: address!("0xf9b03e9ea64b2311b0221b2854edd6df97669c09"),
                uniswap: address!("0x58a21cfcee675d65d577b251668f7dc46ea9c3a0"),
                sushiswap: address!("0xb6f469a8930dd5111c0ea76571c7e86298a171f7"),
                cether: address!("0x9a1049f7f87dbb0468c745d9b3952e23d5d6ce5e"),
                ctoken: address!("0x8973d623d883c5641dd3906625aac31cdc8790c5"),
                maker: address!("0x294fbca49c8a855e04d7d82b28256b086d39afea"),
                curve: address!("0xa36dfb057010c419c5917f3d68b4520db3671cdb"),
                yearn: address!("0xc50c8f34c9955217a6b3e385a069184dce17fd2a"),
                aave: address!("0xf579b009748a62b1978639d6b54259f8dc915229"),
                kyber: address!("0xe2a3431508cd8e72d53a0e4b57c24af2899322a0"),
                balancer: address!("0x892dd6ebd2e3e1c0d6592309ba82a0095830d6d6"),
                swapper: address!("0x017f3f2eb0c55ddf49b95ad38cd2737acf64ab4d"),
            },
            tokens,
            compound_pools,
            maker_joins,
            maker_ilks,
            yearn_vaults,
            yweth_vault: address!("0xe1237aa7f535b0cc33fd973d66cbf830354d16c7"),
        }
    }

    pub fn proxy(&self) -> Address {
        self.proxy
    }

    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    pub fn token(&self, coin: Coin) -> Result<Address, BatchError> {
        self.tokens
            .get(&coin)
            .copied()
            .ok_or_else(|| BatchError::Encoding(format!("no token address registered for {}", coin)))
    }

    pub fn compound_pool(&self, coin: Coin) -> Result<Address, BatchError> {
        self.compound_pools
            .get(&coin)
            .copied()
            .ok_or_else(|| BatchError::Encoding(format!("no compound pool registered for {}", coin)))
    }

    pub fn maker_join(&self, coin: Coin) -> Result<Address, BatchError> {
        self.maker_joins
            .get(&coin)
            .copied()
            .ok_or_else(|| BatchError::Encoding(format!("no maker join registered for {}", coin)))
    }

    pub fn maker_ilk(&self, coin: Coin) -> Result<FixedBytes<32>, BatchError> {
        self.maker_ilks
            .get(&coin)
            .copied()
            .ok_or_else(|| BatchError::Encoding(format!("no maker ilk registered for {}", coin)))
    }

    pub fn yearn_vault(&self, coin: Coin) -> Result<Address, BatchError> {
        self.yearn_vaults
            .get(&coin)
            .copied()
            .ok_or_else(|| BatchError::Encoding(format!("no yearn vault registered for {}", coin)))
    }

    pub fn yweth_vault(&self) -> Address {
        self.yweth_vault
    }
}
