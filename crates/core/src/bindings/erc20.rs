use alloy::sol;

sol! {
    #[sol(rpc)]
    contract IERC20 {
        function balanceOf(address owner) external view returns(uint256);
        function approve(address spender, uint256 amount) external returns(bool);
        function allowance(address owner, address spender) external view returns(uint256);
    }
}
