//! # Quorum Verification
//!
//! Checks, in order:
//! 1. the guardian set exists and had not expired at the VAA timestamp
//! 2. the signature count reaches quorum
//! 3. each signature's guardian index is strictly above the previous one,
//!    in range, and recovers to the guardian at that index
//!
//! Quorum is counted on submitted signatures before any recovery because
//! every submitted signature must be valid anyway. Checking the count first
//! avoids ECDSA recovery work on VAAs that can never pass.

use bridge_crypto::{double_keccak256, recover_guardian_address};
use bridge_types::Vaa;
use gb_01_guardian_sets::{GuardianSet, GuardianSetRegistry};
use tracing::debug;

use super::entities::VerifiedVaa;
use super::errors::VerificationError;

/// Verify `vaa` against the set it names in `registry`.
pub fn verify_vaa(
    vaa: Vaa,
    registry: &GuardianSetRegistry,
) -> Result<VerifiedVaa, VerificationError> {
    let set = registry.get_unexpired(vaa.guardian_set_index, vaa.timestamp)?;
    verify_with_set(vaa, set)
}

/// Verify `vaa` against an explicit guardian set.
///
/// The caller is responsible for index and expiry checks.
pub fn verify_with_set(vaa: Vaa, set: &GuardianSet) -> Result<VerifiedVaa, VerificationError> {
    let required = set.quorum();
    if vaa.signatures.len() < required {
        return Err(VerificationError::InsufficientQuorum {
            signatures: vaa.signatures.len(),
            required,
        });
    }

    let digest = double_keccak256(&vaa.body_bytes());

    let mut previous: Option<u8> = None;
    for (position, sig) in vaa.signatures.iter().enumerate() {
        if previous.is_some_and(|p| sig.guardian_index <= p) {
            return Err(VerificationError::InvalidSignatureOrder {
                position,
                guardian_index: sig.guardian_index,
            });
        }
        previous = Some(sig.guardian_index);

        let expected = set
            .guardian(sig.guardian_index)
            .ok_or(VerificationError::InvalidSignature {
                guardian_index: sig.guardian_index,
            })?;

        let recovered = recover_guardian_address(&digest, &sig.signature).map_err(|_| {
            VerificationError::InvalidSignature {
                guardian_index: sig.guardian_index,
            }
        })?;

        if &recovered != expected {
            return Err(VerificationError::InvalidSignature {
                guardian_index: sig.guardian_index,
            });
        }
    }

    debug!(
        guardian_set = set.index,
        signatures = vaa.signatures.len(),
        sequence = vaa.sequence,
        "VAA signatures verified"
    );
    Ok(VerifiedVaa::new(vaa, digest))
}
