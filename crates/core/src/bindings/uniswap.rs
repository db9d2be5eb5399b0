use alloy::sol;

sol! {
    /// Router handler shared by the Uniswap and Sushiswap integrations.
    #[sol(rpc)]
    contract UniswapHandler {
        function swapExactETHForTokens(uint256 value, uint256 amountOutMin, address[] memory path) external payable returns(uint256);
        function swapExactTokensForETH(uint256 amountIn, uint256 amountOutMin, address[] memory path) external payable returns(uint256);
        function swapExactTokensForTokens(uint256 amountIn, uint256 amountOutMin, address[] memory path) external payable returns(uint256);
    }
}
