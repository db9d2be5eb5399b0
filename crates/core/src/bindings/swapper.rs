use alloy::sol;

sol! {
    /// Flash-swap entry point. The contract borrows `amount` of `tokenBorrow`,
    /// invokes the proxy callback with `data`, and expects repayment in
    /// `tokenPay` before the transaction ends.
    #[sol(rpc)]
    contract Swapper {
        function startSwap(address tokenBorrow, uint256 amount, address tokenPay, bytes memory data) external payable;
    }
}
