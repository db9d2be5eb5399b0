use alloy::sol;

sol! {
    #[sol(rpc)]
    contract CEtherHandler {
        function mint(uint256 value) external payable;
        function redeem(uint256 redeemTokens) external payable;
    }
}

sol! {
    #[sol(rpc)]
    contract CTokenHandler {
        function mint(address cToken, uint256 mintAmount) external payable;
        function redeem(address cToken, uint256 redeemTokens) external payable;
    }
}
