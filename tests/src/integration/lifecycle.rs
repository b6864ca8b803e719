//! # Token Lifecycle
//!
//! A foreign token arrives wrapped and leaves burned; a native token leaves
//! into custody at wire precision and comes back scaled to its decimals.

#[cfg(test)]
mod tests {
    use bridge_runtime::SubmitOutcome;
    use bridge_types::U256;
    use gb_04_token_bridge::{
        fixed_string, AssetMeta, RedeemEffect, TokenId, Transfer, TransferPayload, TransferRequest,
    };

    use crate::fixtures::*;

    const ONE_ETHER: u64 = 1_000_000_000_000_000_000;

    fn attest_foreign(network: &Network, decimals: u8) {
        let meta = TransferPayload::AssetMeta(AssetMeta {
            token_address: FOREIGN_TOKEN,
            token_chain: FOREIGN,
            decimals,
            symbol: fixed_string("LUNA"),
            name: fixed_string("Luna"),
        });
        network.submit(&network.foreign(&meta)).unwrap();
    }

    fn inbound(token_chain: bridge_types::ChainId, token: [u8; 32], amount: u64, fee: u64) -> TransferPayload {
        TransferPayload::Transfer(Transfer {
            amount: U256::from(amount),
            token_address: token,
            token_chain,
            recipient: ALICE,
            recipient_chain: HOST,
            fee: U256::from(fee),
        })
    }

    // =========================================================================
    // FOREIGN TOKENS
    // =========================================================================

    #[test]
    fn test_wrapped_round_trip() {
        let network = Network::with_foreign_bridge(7);
        attest_foreign(&network, 6);

        let origin = TokenId::new(FOREIGN, FOREIGN_TOKEN);
        let outcome = network
            .submit(&network.foreign(&inbound(FOREIGN, FOREIGN_TOKEN, 2_500_000, 500_000)))
            .unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Redeemed(RedeemEffect::Completed {
                token: origin,
                recipient: ALICE,
                amount: U256::from(2_000_000u64),
                fee: U256::from(500_000u64),
                relayer: RELAYER,
                payload: None,
            })
        );

        let bridge = network.node.token_bridge();
        let wrapped = bridge.wrapped_asset(&origin).unwrap();
        assert_eq!(wrapped.decimals, 6);
        assert_eq!(wrapped.supply, U256::from(2_500_000u64));

        bridge
            .transfer(TransferRequest {
                sender: ALICE,
                token: origin,
                amount: U256::from(2_000_000u64),
                recipient_chain: FOREIGN,
                recipient: BOB,
                fee: U256::zero(),
                message_fee: U256::zero(),
                nonce: 0,
                payload: None,
            })
            .unwrap();

        assert_eq!(bridge.balance_of(&origin, &ALICE), U256::zero());
        assert_eq!(bridge.wrapped_asset(&origin).unwrap().supply, U256::from(500_000u64));

        let message = bridge.publisher().last().unwrap();
        match TransferPayload::decode(&message.payload).unwrap() {
            TransferPayload::Transfer(t) => {
                assert_eq!(t.amount, U256::from(2_000_000u64));
                assert_eq!(t.token_chain, FOREIGN);
                assert_eq!(t.recipient, BOB);
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    // =========================================================================
    // NATIVE TOKENS
    // =========================================================================

    #[test]
    fn test_native_round_trip_drops_dust() {
        let network = Network::with_foreign_bridge(4);
        let bridge = network.node.token_bridge();
        let native = TokenId::new(HOST, NATIVE_TOKEN);
        bridge.register_native_asset(NATIVE_TOKEN, 18, "WETH", "Wrapped Ether");

        let deposit = U256::from(ONE_ETHER) * U256::from(5u64);
        bridge.deposit(NATIVE_TOKEN, ALICE, deposit).unwrap();

        // 1e18 + 1 leaves as 1e8 wire units; the trailing wei stays with Alice
        let sent = U256::from(ONE_ETHER) + U256::one();
        bridge
            .transfer(TransferRequest {
                sender: ALICE,
                token: native,
                amount: sent,
                recipient_chain: FOREIGN,
                recipient: BOB,
                fee: U256::zero(),
                message_fee: U256::zero(),
                nonce: 7,
                payload: None,
            })
            .unwrap();

        let message = bridge.publisher().last().unwrap();
        assert_eq!(message.nonce, 7);
        match TransferPayload::decode(&message.payload).unwrap() {
            TransferPayload::Transfer(t) => assert_eq!(t.amount, U256::from(100_000_000u64)),
            other => panic!("unexpected payload {other:?}"),
        }
        assert_eq!(bridge.custody_of(&NATIVE_TOKEN), U256::from(ONE_ETHER));
        assert_eq!(
            bridge.balance_of(&native, &ALICE),
            deposit - U256::from(ONE_ETHER)
        );

        // Half of it comes back
        network
            .submit(&network.foreign(&inbound(HOST, NATIVE_TOKEN, 50_000_000, 0)))
            .unwrap();
        let half = U256::from(ONE_ETHER / 2);
        assert_eq!(bridge.custody_of(&NATIVE_TOKEN), half);
        assert_eq!(
            bridge.balance_of(&native, &ALICE),
            deposit - U256::from(ONE_ETHER) + half
        );
    }

    #[test]
    fn test_release_beyond_custody_is_deferred() {
        let network = Network::with_foreign_bridge(4);
        network
            .node
            .token_bridge()
            .register_native_asset(NATIVE_TOKEN, 8, "NAT", "Native");

        let vaa = network.foreign(&inbound(HOST, NATIVE_TOKEN, 10, 0));
        let err = network.submit(&vaa).unwrap_err();
        assert_eq!(err.disposition(), bridge_runtime::Disposition::Deferred);

        // Custody arrives later; the same VAA now redeems
        let bridge = network.node.token_bridge();
        bridge.deposit(NATIVE_TOKEN, BOB, U256::from(10u64)).unwrap();
        bridge
            .transfer(TransferRequest {
                sender: BOB,
                token: TokenId::new(HOST, NATIVE_TOKEN),
                amount: U256::from(10u64),
                recipient_chain: FOREIGN,
                recipient: BOB,
                fee: U256::zero(),
                message_fee: U256::zero(),
                nonce: 0,
                payload: None,
            })
            .unwrap();
        network.submit(&vaa).unwrap();
        assert_eq!(
            bridge.balance_of(&TokenId::new(HOST, NATIVE_TOKEN), &ALICE),
            U256::from(10u64)
        );
    }

    #[test]
    fn test_attest_native_token_publishes_meta() {
        let network = Network::new(1);
        let bridge = network.node.token_bridge();
        bridge.register_native_asset(NATIVE_TOKEN, 18, "WETH", "Wrapped Ether");

        let sequence = bridge.attest_token(NATIVE_TOKEN, ALICE, U256::zero(), 3).unwrap();
        assert_eq!(sequence, 0);
        match TransferPayload::decode(&bridge.publisher().last().unwrap().payload).unwrap() {
            TransferPayload::AssetMeta(meta) => {
                assert_eq!(meta.token_chain, HOST);
                assert_eq!(meta.decimals, 18);
                assert_eq!(meta.symbol_str(), "WETH");
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }
}
