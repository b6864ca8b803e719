//! # Exactly-Once Execution
//!
//! The same `(emitter chain, emitter address, sequence)` executes once no
//! matter how often, or how concurrently, it is submitted.

#[cfg(test)]
mod tests {
    use std::thread;

    use bridge_runtime::Disposition;
    use bridge_types::U256;
    use gb_02_vaa_verification::test_utils::VaaBuilder;
    use gb_04_token_bridge::{fixed_string, AssetMeta, TokenId, Transfer, TransferPayload};
    use gb_05_governance::CoreAction;

    use crate::fixtures::*;

    fn attested_network() -> Network {
        let network = Network::with_foreign_bridge(4);
        let meta = TransferPayload::AssetMeta(AssetMeta {
            token_address: FOREIGN_TOKEN,
            token_chain: FOREIGN,
            decimals: 8,
            symbol: fixed_string("FRN"),
            name: fixed_string("Foreign"),
        });
        network.submit(&network.foreign(&meta)).unwrap();
        network
    }

    fn transfer(amount: u64) -> TransferPayload {
        TransferPayload::Transfer(Transfer {
            amount: U256::from(amount),
            token_address: FOREIGN_TOKEN,
            token_chain: FOREIGN,
            recipient: ALICE,
            recipient_chain: HOST,
            fee: U256::zero(),
        })
    }

    #[test]
    fn test_sequential_resubmission() {
        let network = attested_network();
        let vaa = network.foreign(&transfer(100));

        network.submit(&vaa).unwrap();
        for _ in 0..3 {
            let err = network.submit(&vaa).unwrap_err();
            assert_eq!(err.disposition(), Disposition::AlreadyApplied);
        }

        let token = TokenId::new(FOREIGN, FOREIGN_TOKEN);
        assert_eq!(
            network.node.token_bridge().balance_of(&token, &ALICE),
            U256::from(100u64)
        );
    }

    #[test]
    fn test_concurrent_submission_executes_once() {
        let network = attested_network();
        let vaa = network.foreign(&transfer(100));

        let results: Vec<_> = thread::scope(|s| {
            let handles: Vec<_> = (0..8).map(|_| s.spawn(|| network.submit(&vaa))).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| e.is_replay()));

        let token = TokenId::new(FOREIGN, FOREIGN_TOKEN);
        assert_eq!(
            network.node.token_bridge().balance_of(&token, &ALICE),
            U256::from(100u64)
        );
    }

    #[test]
    fn test_resigned_vaa_is_still_a_replay() {
        let network = Network::new(4);
        let action = CoreAction::SetMessageFee { fee: U256::one() };
        let payload = gb_05_governance::GovernancePayload {
            module: gb_05_governance::CORE_MODULE,
            action: action.action_id(),
            target_chain: bridge_types::ChainId::ANY,
            action_data: action.encode(),
        }
        .encode();

        let build = || {
            VaaBuilder::new()
                .emitter(bridge_types::ChainId::SOLANA, GOVERNANCE)
                .sequence(42)
                .timestamp(GENESIS_TIME)
                .payload(&payload)
        };
        network
            .submit(&build().sign_with(&network.guardians, &[0, 1, 2]).serialize().unwrap())
            .unwrap();

        // Different signer subset, different nonce: same claim key
        let again = build()
            .nonce(9)
            .sign_with(&network.guardians, &[1, 2, 3])
            .serialize().unwrap();
        assert!(network.submit(&again).unwrap_err().is_replay());
    }

    #[test]
    fn test_same_sequence_from_different_emitters() {
        let network = attested_network();
        let first = network
            .builder(FOREIGN, FOREIGN_BRIDGE, &transfer(10).encode())
            .sequence(500)
            .sign_all(&network.guardians)
            .serialize().unwrap();
        let governance = network
            .builder(
                bridge_types::ChainId::SOLANA,
                GOVERNANCE,
                &gb_05_governance::GovernancePayload {
                    module: gb_05_governance::CORE_MODULE,
                    action: CoreAction::SET_MESSAGE_FEE,
                    target_chain: HOST,
                    action_data: CoreAction::SetMessageFee { fee: U256::zero() }.encode(),
                }
                .encode(),
            )
            .sequence(500)
            .sign_all(&network.guardians)
            .serialize().unwrap();

        network.submit(&first).unwrap();
        network.submit(&governance).unwrap();
    }
}
