use alloy::sol;

sol! {
    #[sol(rpc)]
    contract FundsHandler {
        function inject(address[] memory tokens, uint256[] memory amounts) external payable;
    }
}
