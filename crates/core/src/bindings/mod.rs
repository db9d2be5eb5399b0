pub mod aave;
pub mod balancer;
pub mod compound;
pub mod curve;
pub mod erc20;
pub mod funds;
pub mod kyber;
pub mod maker;
pub mod proxy;
pub mod swapper;
pub mod uniswap;
pub mod yearn;
