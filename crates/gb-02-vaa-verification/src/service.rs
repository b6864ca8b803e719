//! # VAA Verification Service
//!
//! Implements [`VaaVerificationApi`] over a registry shared with the
//! governance subsystem. Each verification holds the registry read guard for
//! its full duration, so a rotation (write guard) is either entirely before
//! or entirely after it.

use std::sync::Arc;

use bridge_types::Vaa;
use gb_01_guardian_sets::GuardianSetRegistry;
use parking_lot::RwLock;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::domain::entities::VerifiedVaa;
use crate::domain::errors::VerificationError;
use crate::domain::verifier::verify_vaa;
use crate::ports::inbound::VaaVerificationApi;

/// Guardian set registry shared between verification and rotation.
pub type SharedRegistry = Arc<RwLock<GuardianSetRegistry>>;

/// VAA verification service.
pub struct VaaVerificationService {
    registry: SharedRegistry,
}

impl VaaVerificationService {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    /// The shared registry this service reads.
    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }
}

impl VaaVerificationApi for VaaVerificationService {
    fn verify(&self, vaa: Vaa) -> Result<VerifiedVaa, VerificationError> {
        let registry = self.registry.read();
        let emitter = vaa.emitter();
        let sequence = vaa.sequence;

        verify_vaa(vaa, &registry).inspect_err(|e| {
            warn!(%emitter, sequence, reason = e.reason(), "VAA rejected: {e}");
        })
    }

    fn verify_batch(&self, vaas: Vec<Vaa>) -> Vec<Result<VerifiedVaa, VerificationError>> {
        let guard = self.registry.read();
        let registry: &GuardianSetRegistry = &guard;

        let results: Vec<_> = vaas
            .into_par_iter()
            .map(|vaa| verify_vaa(vaa, registry))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        debug!(total = results.len(), failed, "batch verification complete");
        results
    }
}
