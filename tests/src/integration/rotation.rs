//! # Guardian Set Rotation
//!
//! After a rotation the superseded set keeps verifying until its expiration
//! time, judged by VAA timestamps, but only the active set can govern the
//! core bridge.

#[cfg(test)]
mod tests {
    use bridge_runtime::{BridgeError, Disposition};
    use bridge_types::{ChainId, U256};
    use gb_01_guardian_sets::{GuardianSetError, DEFAULT_EXPIRY_SECS};
    use gb_02_vaa_verification::test_utils::GuardianFixture;
    use gb_02_vaa_verification::VerificationError;
    use gb_04_token_bridge::{fixed_string, AssetMeta, TransferPayload};
    use gb_05_governance::{CoreAction, GovernanceError, GovernancePayload, CORE_MODULE};

    use crate::fixtures::*;

    fn fee_payload(fee: u64) -> Vec<u8> {
        let action = CoreAction::SetMessageFee {
            fee: U256::from(fee),
        };
        GovernancePayload {
            module: CORE_MODULE,
            action: action.action_id(),
            target_chain: ChainId::ANY,
            action_data: action.encode(),
        }
        .encode()
    }

    fn rotate(network: &Network, next: &GuardianFixture) {
        network
            .submit(&network.core(CoreAction::GuardianSetUpgrade {
                new_index: 1,
                guardians: next.addresses(),
            }))
            .unwrap();
    }

    fn attestation(decimals: u8) -> Vec<u8> {
        TransferPayload::AssetMeta(AssetMeta {
            token_address: FOREIGN_TOKEN,
            token_chain: FOREIGN,
            decimals,
            symbol: fixed_string("LUNA"),
            name: fixed_string("Luna"),
        })
        .encode()
    }

    #[test]
    fn test_old_set_valid_through_grace_period() {
        let network = Network::with_foreign_bridge(4);
        let next = GuardianFixture::with_seed(7, 1);
        network.clock.set(5_000);
        rotate(&network, &next);
        assert_eq!(network.node.active_guardian_set(), 1);

        let expires_at = 5_000 + DEFAULT_EXPIRY_SECS;
        let old_signed_at = |timestamp, decimals| {
            network
                .builder(FOREIGN, FOREIGN_BRIDGE, &attestation(decimals))
                .guardian_set_index(0)
                .timestamp(timestamp)
                .sign_all(&network.guardians)
                .serialize().unwrap()
        };

        // Expiry is strict: a VAA stamped at the expiration time still passes
        assert_eq!(
            network.submit(&old_signed_at(expires_at, 6)).unwrap().kind(),
            "wrapped_created"
        );

        let err = network.submit(&old_signed_at(expires_at + 1, 8)).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Verification(VerificationError::GuardianSetExpired { index: 0, .. })
        ));
        assert_eq!(err.disposition(), Disposition::PermanentlyInvalid);

        // The new set signs from now on
        let fresh = network
            .builder(ChainId::SOLANA, GOVERNANCE, &fee_payload(2))
            .guardian_set_index(1)
            .sign_quorum(&next)
            .serialize().unwrap();
        network.submit(&fresh).unwrap();
        assert_eq!(network.node.core().message_fee(), U256::from(2u64));
    }

    #[test]
    fn test_superseded_set_cannot_govern_core() {
        let network = Network::new(4);
        let next = GuardianFixture::with_seed(4, 1);
        rotate(&network, &next);
        let claims = network.node.ledger().len();

        // Inside the grace period the old set still verifies
        let stale = network
            .builder(ChainId::SOLANA, GOVERNANCE, &fee_payload(999))
            .guardian_set_index(0)
            .sign_all(&network.guardians)
            .serialize().unwrap();
        let err = network.submit(&stale).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Governance(GovernanceError::NotCurrentGuardianSet {
                signed_by: 0,
                active: 1,
            })
        ));
        assert_eq!(err.disposition(), Disposition::PermanentlyInvalid);

        let upgrade = network.core(CoreAction::ContractUpgrade {
            new_contract: [0xBA; 32],
        });
        assert!(network.submit(&upgrade).is_err());

        assert_eq!(network.node.core().message_fee(), U256::zero());
        assert_eq!(network.node.core().state().contract, None);
        assert_eq!(network.node.ledger().len(), claims);
    }

    #[test]
    fn test_superseded_set_cannot_rotate() {
        let network = Network::new(4);
        let next = GuardianFixture::with_seed(4, 1);
        rotate(&network, &next);

        // Still inside the grace period, but rotation needs the active set
        let third = GuardianFixture::with_seed(4, 2);
        let err = network
            .submit(&network.core(CoreAction::GuardianSetUpgrade {
                new_index: 2,
                guardians: third.addresses(),
            }))
            .unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Governance(GovernanceError::NotCurrentGuardianSet {
                signed_by: 0,
                active: 1,
            })
        ));
        assert_eq!(network.node.active_guardian_set(), 1);
    }

    #[test]
    fn test_rotation_must_be_sequential() {
        let network = Network::new(4);
        let err = network
            .submit(&network.core(CoreAction::GuardianSetUpgrade {
                new_index: 2,
                guardians: GuardianFixture::with_seed(4, 1).addresses(),
            }))
            .unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Governance(GovernanceError::GuardianSet(
                GuardianSetError::InvalidIndex { expected: 1, got: 2 }
            ))
        ));
        assert!(network.node.ledger().is_empty());
    }

    #[test]
    fn test_unknown_set_index() {
        let network = Network::new(4);
        let vaa = network
            .builder(ChainId::SOLANA, GOVERNANCE, &fee_payload(1))
            .guardian_set_index(3)
            .sign_all(&network.guardians)
            .serialize().unwrap();
        assert!(matches!(
            network.submit(&vaa).unwrap_err(),
            BridgeError::Verification(VerificationError::GuardianSetNotFound(3))
        ));
    }
}
