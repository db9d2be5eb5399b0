use alloy::sol;

sol! {
    #[sol(rpc)]
    contract CurveHandler {
        function exchange(address handler, address tokenI, address tokenJ, int128 i, int128 j, uint256 dx, uint256 minDy) external payable;
        function exchangeUnderlying(address handler, address tokenI, address tokenJ, int128 i, int128 j, uint256 dx, uint256 minDy) external payable;
        function addLiquidity(address handler, address pool, address[] memory tokens, uint256[] memory amounts, uint256 minPoolAmount) external payable;
        function removeLiquidityOneCoin(address handler, address pool, address tokenI, uint256 poolAmount, int128 i, uint256 minAmount) external payable;
    }
}
