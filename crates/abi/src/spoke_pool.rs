use alloy_sol_macro::sol;

sol! {
    // FILE: ISpokePool.sol
    #[derive(Debug, PartialEq, Eq)]
    struct SegmentData {
        uint256[2][] tokenIn;
        uint256[2][] tokenOut;
        address originModule;
        address originWETHAddress;
        uint256 originChainId;
        uint256 compactNonce;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct IntentFillPayload {
        SegmentData[] segments;
        bytes message;
        bytes orchestratorSig;
    }

    #[derive(Debug, PartialEq, Eq)]
    interface ISpokePool {
        event Fill(bytes32 indexed intentHash, address indexed filler);

        function fill(
            IntentFillPayload calldata payload,
            address exclusiveRelayer,
            address[] calldata repaymentAddresses,
            uint256[] calldata repaymentChainIds
        ) external;

        function refund(IntentFillPayload calldata payload) external;
    }
}
