use alloy::sol;

sol! {
    #[sol(rpc)]
    contract BalancerHandler {
        function smartSwapExactIn(address tokenIn, address tokenOut, uint256 totalAmountIn, uint256 minTotalAmountOut, uint256 nPools) external payable returns(uint256);
    }
}
