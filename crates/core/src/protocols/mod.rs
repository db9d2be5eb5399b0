pub mod aave;
pub mod balancer;
pub mod compound;
pub mod curve;
pub mod kyber;
pub mod maker;
pub mod sushiswap;
pub mod uniswap;
pub mod yearn;
