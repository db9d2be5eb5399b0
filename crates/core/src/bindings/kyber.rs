use alloy::sol;

sol! {
    #[sol(rpc)]
    contract KyberHandler {
        function swapEtherToToken(uint256 value, address token, uint256 minRate) external payable returns(uint256);
        function swapTokenToEther(address token, uint256 tokenQty, uint256 minRate) external payable returns(uint256);
        function swapTokenToToken(address srcToken, uint256 srcQty, address destToken, uint256 minRate) external payable returns(uint256);
    }
}
