use std::fmt;
use std::str::FromStr;

/// Assets the registry knows about. Wrapped and protocol-minted tokens
/// (cTokens, vault shares) are listed alongside the plain ERC-20s so that
/// balances and approvals can be expressed against them uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coin {
    /// Ether, addressed through its wrapped form.
    Eth,
    /// Basic Attention Token.
    Bat,
    /// Compound governance token.
    Comp,
    Dai,
    /// Augur reputation token.
    Rep,
    /// Single Collateral DAI.
    Sai,
    /// Uniswap governance token.
    Uni,
    Usdc,
    Usdt,
    /// Wrapped BTC.
    Wbtc,
    /// 0x utility token.
    Zrx,
    Busd,
    /// Yearn governance token.
    Yfi,
    /// Aave governance token.
    Aave,
    /// Compound interest-bearing ETH.
    CEth,
    /// Compound interest-bearing DAI.
    CDai,
    /// Compound interest-bearing USDC.
    CUsdc,
    /// Yearn wrapped-ETH vault share.
    YWeth,
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Coin::Eth => "ETH",
            Coin::Bat => "BAT",
            Coin::Comp => "COMP",
            Coin::Dai => "DAI",
            Coin::Rep => "REP",
            Coin::Sai => "SAI",
            Coin::Uni => "UNI",
            Coin::Usdc => "USDC",
            Coin::Usdt => "USDT",
            Coin::Wbtc => "WBTC",
            Coin::Zrx => "ZRX",
            Coin::Busd => "BUSD",
            Coin::Yfi => "YFI",
            Coin::Aave => "AAVE",
            Coin::CEth => "cETH",
            Coin::CDai => "cDAI",
            Coin::CUsdc => "cUSDC",
            Coin::YWeth => "yWETH",
        };
        f.write_str(name)
    }
}

impl FromStr for Coin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ETH" => Ok(Coin::Eth),
            "BAT" => Ok(Coin::Bat),
            "COMP" => Ok(Coin::Comp),
            "DAI" => Ok(Coin::Dai),
            "REP" => Ok(Coin::Rep),
            "SAI" => Ok(Coin::Sai),
            "UNI" => Ok(Coin::Uni),
            "USDC" => Ok(Coin::Usdc),
            "USDT" => Ok(Coin::Usdt),
            "WBTC" => Ok(Coin::Wbtc),
            "ZRX" => Ok(Coin::Zrx),
            "BUSD" => Ok(Coin::Busd),
            "YFI" => Ok(Coin::Yfi),
            "AAVE" => Ok(Coin::Aave),
            "CETH" => Ok(Coin::CEth),
            "CDAI" => Ok(Coin::CDai),
            "CUSDC" => Ok(Coin::CUsdc),
            "YWETH" => Ok(Coin::YWeth),
            other => Err(format!("unknown coin: {}", other)),
        }
    }
}
