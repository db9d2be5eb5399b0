use alloy::sol;

sol! {
    #[sol(rpc)]
    contract YearnHandler {
        function depositETH(uint256 value, address vault) external payable;
        function deposit(address vault, uint256 amount) external payable;
        function withdrawETH(address vault, uint256 shares) external payable;
        function withdraw(address vault, uint256 shares) external payable;
    }
}
