//! # Guardian Signatures (secp256k1)
//!
//! Guardians sign the 32-byte VAA digest with recoverable ECDSA. A signature
//! on the wire is 65 bytes: `r (32) || s (32) || recovery id (1)`. Verifiers
//! never see public keys; they recover one from the signature and compare the
//! derived 20-byte address against the guardian set.

use crate::hashing::keccak256;
use crate::CryptoError;
use bridge_types::{GuardianAddress, Hash};
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use zeroize::{Zeroize, Zeroizing};

/// Recover the 20-byte guardian address that produced `signature` over
/// `digest`.
///
/// Accepts recovery ids `0`, `1`, `27` and `28`.
pub fn recover_guardian_address(
    digest: &Hash,
    signature: &[u8; 65],
) -> Result<GuardianAddress, CryptoError> {
    let recovery_id = parse_recovery_id(signature[64])?;

    let sig =
        Signature::from_slice(&signature[..64]).map_err(|_| CryptoError::InvalidSignatureFormat)?;

    let recovered = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| CryptoError::RecoveryFailed)?;

    Ok(address_from_verifying_key(&recovered))
}

/// Derive the guardian address: last 20 bytes of keccak256 of the
/// uncompressed public key without its `0x04` prefix.
pub fn address_from_verifying_key(key: &VerifyingKey) -> GuardianAddress {
    let encoded = key.to_encoded_point(false);
    let hash = keccak256(&encoded.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

fn parse_recovery_id(v: u8) -> Result<RecoveryId, CryptoError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(CryptoError::InvalidRecoveryId(v)),
    };
    RecoveryId::from_byte(id).ok_or(CryptoError::InvalidRecoveryId(v))
}

/// A guardian's secp256k1 signing key.
///
/// Used by devnet tooling and test fixtures; production guardians sign
/// outside this system.
pub struct GuardianKeyPair {
    signing_key: SigningKey,
}

impl GuardianKeyPair {
    /// Generate a random keypair.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut rand::thread_rng()),
        }
    }

    /// Create from secret key bytes (32 bytes). The passed copy is wiped.
    pub fn from_bytes(mut bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key = SigningKey::from_bytes((&bytes).into());
        bytes.zeroize();
        Ok(Self {
            signing_key: signing_key.map_err(|_| CryptoError::InvalidPrivateKey)?,
        })
    }

    /// The 20-byte address this key signs as.
    pub fn address(&self) -> GuardianAddress {
        address_from_verifying_key(self.signing_key.verifying_key())
    }

    /// Sign a 32-byte digest, producing `r || s || v` with `v` in `{0, 1}`.
    pub fn sign_digest(&self, digest: &Hash) -> Result<[u8; 65], CryptoError> {
        let (sig, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

        let mut out = [0u8; 65];
        out[..64].copy_from_slice(&sig.to_bytes());
        out[64] = recovery_id.to_byte();
        Ok(out)
    }

    /// Secret key bytes, wiped when the returned buffer drops.
    pub fn to_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.signing_key.to_bytes().into())
    }
}
