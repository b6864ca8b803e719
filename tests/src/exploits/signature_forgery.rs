//! # Signature Forgery
//!
//! Ways to fake a quorum with fewer honest signatures than required:
//! repeating one guardian, reordering, reusing a signature under another
//! index, and flipping an ECDSA signature to its high-S twin.

use bridge_types::Vaa;
use k256::ecdsa::Signature;

/// The high-S twin of a guardian signature. Recovers the same key with the
/// other recovery id.
pub fn malleate(signature: &[u8; 65]) -> Option<[u8; 65]> {
    let parsed = Signature::from_slice(&signature[..64]).ok()?;
    let (r, s) = parsed.split_scalars();
    let flipped = Signature::from_scalars(r.to_bytes(), (-*s).to_bytes()).ok()?;

    let mut out = [0u8; 65];
    out[..64].copy_from_slice(&flipped.to_bytes());
    out[64] = signature[64] ^ 1;
    Some(out)
}

/// Wire bytes of `vaa` with its signature list replaced.
pub fn with_signatures(vaa: &Vaa, signatures: Vec<bridge_types::GuardianSignature>) -> Vec<u8> {
    let mut forged = vaa.clone();
    forged.signatures = signatures;
    forged.serialize().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_runtime::{BridgeError, Disposition};
    use bridge_types::{ChainId, GuardianSignature, U256};
    use gb_02_vaa_verification::VerificationError;
    use gb_05_governance::{CoreAction, GovernancePayload, CORE_MODULE};

    use crate::fixtures::*;

    /// A fee change signed by guardian 0 only. 4 guardians need 3.
    fn single_signer(network: &Network) -> Vaa {
        let action = CoreAction::SetMessageFee {
            fee: U256::from(1_000_000u64),
        };
        let payload = GovernancePayload {
            module: CORE_MODULE,
            action: action.action_id(),
            target_chain: ChainId::ANY,
            action_data: action.encode(),
        }
        .encode();
        network
            .builder(ChainId::SOLANA, GOVERNANCE, &payload)
            .sign_with(&network.guardians, &[0])
    }

    fn verification_error(network: &Network, bytes: &[u8]) -> VerificationError {
        match network.submit(bytes).unwrap_err() {
            BridgeError::Verification(e) => e,
            other => panic!("expected a verification error, got {other}"),
        }
    }

    fn assert_fee_untouched(network: &Network) {
        assert_eq!(network.node.core().message_fee(), U256::zero());
        assert!(network.node.ledger().is_empty());
    }

    #[test]
    fn test_one_guardian_repeated() {
        let network = Network::new(4);
        let vaa = single_signer(&network);
        let sig = vaa.signatures[0];

        let err = verification_error(
            &network,
            &with_signatures(&vaa, vec![sig, sig, sig]),
        );
        assert!(matches!(
            err,
            VerificationError::InvalidSignatureOrder {
                position: 1,
                guardian_index: 0
            }
        ));
        assert_fee_untouched(&network);
    }

    #[test]
    fn test_signature_reused_under_other_indices() {
        let network = Network::new(4);
        let vaa = single_signer(&network);
        let sig = vaa.signatures[0].signature;

        let forged: Vec<GuardianSignature> = (0..3)
            .map(|i| GuardianSignature {
                guardian_index: i,
                signature: sig,
            })
            .collect();
        let err = verification_error(&network, &with_signatures(&vaa, forged));
        assert!(matches!(
            err,
            VerificationError::InvalidSignature { guardian_index: 1 }
        ));
        assert_fee_untouched(&network);
    }

    #[test]
    fn test_reordered_quorum() {
        let network = Network::new(4);
        let vaa = network
            .builder(ChainId::SOLANA, GOVERNANCE, &[0u8; 40])
            .sign_with(&network.guardians, &[0, 2, 1]);

        let err = verification_error(&network, &vaa.serialize().unwrap());
        assert!(matches!(
            err,
            VerificationError::InvalidSignatureOrder {
                position: 2,
                guardian_index: 1
            }
        ));
    }

    #[test]
    fn test_below_quorum() {
        let network = Network::new(4);
        let vaa = network
            .builder(ChainId::SOLANA, GOVERNANCE, &[0u8; 40])
            .sign_with(&network.guardians, &[0, 3]);
        let err = verification_error(&network, &vaa.serialize().unwrap());
        assert_eq!(
            err,
            VerificationError::InsufficientQuorum {
                signatures: 2,
                required: 3
            }
        );
    }

    #[test]
    fn test_high_s_twin_cannot_execute_twice() {
        let network = Network::new(4);
        let action = CoreAction::SetMessageFee { fee: U256::one() };
        let vaa = network
            .builder(
                ChainId::SOLANA,
                GOVERNANCE,
                &GovernancePayload {
                    module: CORE_MODULE,
                    action: action.action_id(),
                    target_chain: ChainId::ANY,
                    action_data: action.encode(),
                }
                .encode(),
            )
            .sign_all(&network.guardians);
        network.submit(&vaa.serialize().unwrap()).unwrap();

        let twins: Vec<GuardianSignature> = vaa
            .signatures
            .iter()
            .map(|s| GuardianSignature {
                guardian_index: s.guardian_index,
                signature: malleate(&s.signature).unwrap(),
            })
            .collect();
        let err = network.submit(&with_signatures(&vaa, twins)).unwrap_err();

        // Rejected as a bad signature or as a replay of the same body
        assert!(matches!(
            err.disposition(),
            Disposition::PermanentlyInvalid | Disposition::AlreadyApplied
        ));
        assert_eq!(network.node.ledger().len(), 1);
    }
}
