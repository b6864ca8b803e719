//! # Forged Governance
//!
//! Governance payloads from anywhere but the governance emitter, signed by
//! anyone but the guardians, or aimed at another chain must not execute.

#[cfg(test)]
mod tests {
    use bridge_runtime::{BridgeError, Disposition};
    use bridge_types::{ChainId, Emitter, U256};
    use gb_02_vaa_verification::test_utils::GuardianFixture;
    use gb_02_vaa_verification::{VaaVerificationApi, VerificationError};
    use gb_04_token_bridge::TokenBridgeError;
    use gb_05_governance::{CoreAction, GovernanceError, GovernancePayload, CORE_MODULE};

    use crate::fixtures::*;

    fn hostile_rotation(attacker: &GuardianFixture) -> Vec<u8> {
        let action = CoreAction::GuardianSetUpgrade {
            new_index: 1,
            guardians: attacker.addresses(),
        };
        GovernancePayload {
            module: CORE_MODULE,
            action: action.action_id(),
            target_chain: ChainId::ANY,
            action_data: action.encode(),
        }
        .encode()
    }

    fn assert_untouched(network: &Network) {
        assert_eq!(network.node.active_guardian_set(), 0);
        assert!(network.node.ledger().is_empty());
    }

    #[test]
    fn test_governance_payload_from_token_bridge_emitter() {
        let network = Network::new(4);
        let attacker = GuardianFixture::with_seed(4, 66);

        // Authentic guardian signatures over a message the attacker's
        // contract emitted
        let vaa = network
            .builder(FOREIGN, FOREIGN_BRIDGE, &hostile_rotation(&attacker))
            .sign_all(&network.guardians)
            .serialize().unwrap();

        let err = network.submit(&vaa).unwrap_err();
        assert!(matches!(err, BridgeError::TokenBridge(_)));
        assert_untouched(&network);
    }

    #[test]
    fn test_governance_address_on_wrong_chain() {
        let network = Network::new(4);
        let attacker = GuardianFixture::with_seed(4, 66);
        let vaa = network
            .builder(ChainId::ETHEREUM, GOVERNANCE, &hostile_rotation(&attacker))
            .sign_all(&network.guardians)
            .serialize().unwrap();

        assert!(network.submit(&vaa).is_err());
        assert_untouched(&network);
    }

    #[test]
    fn test_executor_rejects_foreign_emitter_directly() {
        let network = Network::new(4);
        let attacker = GuardianFixture::with_seed(4, 66);
        let vaa = network
            .builder(ChainId::SOLANA, [0x66; 32], &hostile_rotation(&attacker))
            .sign_all(&network.guardians);
        let verified = network.node.verifier().verify(vaa).unwrap();

        let err = network
            .node
            .executor()
            .execute(&verified, network.node.ledger(), network.node.core())
            .unwrap_err();
        assert_eq!(
            err,
            GovernanceError::InvalidGovernanceEmitter(Emitter::new(ChainId::SOLANA, [0x66; 32]))
        );
        assert_untouched(&network);
    }

    #[test]
    fn test_self_signed_governance() {
        let network = Network::new(4);
        let attacker = GuardianFixture::with_seed(4, 66);
        let vaa = network
            .builder(ChainId::SOLANA, GOVERNANCE, &hostile_rotation(&attacker))
            .sign_all(&attacker)
            .serialize().unwrap();

        let err = network.submit(&vaa).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Verification(VerificationError::InvalidSignature { guardian_index: 0 })
        ));
        assert_untouched(&network);
    }

    #[test]
    fn test_governance_for_another_chain() {
        let network = Network::new(4);
        let action = CoreAction::TransferFees {
            amount: U256::zero(),
            recipient: [0x66; 32],
        };
        let vaa = network.governance(CORE_MODULE, action.action_id(), ChainId::POLYGON, action.encode());

        let err = network.submit(&vaa).unwrap_err();
        assert_eq!(err.disposition(), Disposition::PermanentlyInvalid);
        assert_untouched(&network);
    }

    #[test]
    fn test_spoofed_token_bridge_emitter() {
        let network = Network::with_foreign_bridge(4);
        let claims = network.node.ledger().len();
        let transfer = gb_04_token_bridge::TransferPayload::Transfer(gb_04_token_bridge::Transfer {
            amount: U256::from(1_000_000u64),
            token_address: NATIVE_TOKEN,
            token_chain: HOST,
            recipient: [0x66; 32],
            recipient_chain: HOST,
            fee: U256::zero(),
        });
        let vaa = network
            .builder(FOREIGN, [0x66; 32], &transfer.encode())
            .sign_all(&network.guardians)
            .serialize().unwrap();

        let err = network.submit(&vaa).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::TokenBridge(TokenBridgeError::UnregisteredEmitter(_))
        ));
        assert_eq!(network.node.ledger().len(), claims);
    }
}
