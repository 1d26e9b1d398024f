pub mod error;
pub mod identity_claims;
pub mod identity_verifier;
pub mod jwt_algorithm;
pub mod reconcile_outcome;
pub mod reconciler;
pub mod sync_error;

pub use error::{AuthError, Result};
pub use identity_claims::IdentityClaims;
pub use identity_verifier::{IdentityVerifier, VerifierOptions};
pub use jwt_algorithm::JwtAlgorithm;
pub use reconcile_outcome::ReconcileOutcome;
pub use reconciler::IdentityReconciler;
pub use sync_error::{SyncError, SyncResult};
