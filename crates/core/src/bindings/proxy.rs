use alloy::sol;

sol! {
    #[sol(rpc)]
    contract Proxy {
        function batchExec(address[] memory tos, bytes[] memory datas) external payable;
        function execs(address[] memory tos, bytes[] memory datas) external payable;
    }
}
