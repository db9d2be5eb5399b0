use alloy::sol;

sol! {
    #[sol(rpc)]
    contract MakerHandler {
        function openLockETHAndDraw(uint256 value, address ethJoin, address daiJoin, bytes32 ilk, uint256 wadD) external payable returns(uint256);
        function openLockGemAndDraw(address gemJoin, address daiJoin, bytes32 ilk, uint256 wadC, uint256 wadD) external payable returns(uint256);
        function safeLockETH(uint256 value, address ethJoin, uint256 cdp) external payable;
        function safeLockGem(address gemJoin, uint256 cdp, uint256 wad) external payable;
        function wipe(address daiJoin, uint256 cdp, uint256 wad) external payable;
    }
}
