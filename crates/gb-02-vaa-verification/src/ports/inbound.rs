//! # Inbound Ports (Driving Ports / API)

use crate::domain::entities::VerifiedVaa;
use crate::domain::errors::VerificationError;
use bridge_types::Vaa;

/// VAA verification API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait VaaVerificationApi: Send + Sync {
    /// Verify a parsed VAA.
    fn verify(&self, vaa: Vaa) -> Result<VerifiedVaa, VerificationError>;

    /// Parse wire bytes and verify.
    fn parse_and_verify(&self, bytes: &[u8]) -> Result<VerifiedVaa, VerificationError> {
        let vaa = Vaa::parse(bytes)?;
        self.verify(vaa)
    }

    /// Verify independent VAAs in parallel. Results keep input order.
    fn verify_batch(&self, vaas: Vec<Vaa>) -> Vec<Result<VerifiedVaa, VerificationError>>;
}
