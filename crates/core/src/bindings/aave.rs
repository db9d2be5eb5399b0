use alloy::sol;

sol! {
    #[sol(rpc)]
    contract AaveHandler {
        function flashLoan(address token, uint256 amount, bytes memory data) external payable;
    }
}
