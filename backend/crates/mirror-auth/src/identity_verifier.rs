use crate::{AuthError, IdentityClaims, JwtAlgorithm, Result as AuthErrorResult};

use mirror_core::{ErrorLocation, ExternalIdentity};

use std::panic::Location;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

const BEARER_PREFIX: &str = "Bearer ";

/// Optional claim checks on top of signature and expiry
#[derive(Debug, Clone, Default)]
pub struct VerifierOptions {
    pub issuer: Option<String>,
    pub audience: Option<String>,
    /// Clock skew tolerance in seconds
    pub leeway_secs: u64,
}

/// Verifies identity assertions signed by the external provider
pub struct IdentityVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
    algorithm: Algorithm,
}

impl IdentityVerifier {
    #[track_caller]
    pub fn new(key: &JwtAlgorithm, options: &VerifierOptions) -> AuthErrorResult<Self> {
        match key {
            JwtAlgorithm::HS256 { secret } => Ok(Self::with_hs256(secret, options)),
            JwtAlgorithm::RS256 { public_key_pem } => Self::with_rs256(public_key_pem, options),
        }
    }

    /// Create verifier with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], options: &VerifierOptions) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation: Self::validation(Algorithm::HS256, options),
            algorithm: Algorithm::HS256,
        }
    }

    /// Create verifier with RS256 (asymmetric public key)
    #[track_caller]
    pub fn with_rs256(public_key_pem: &str, options: &VerifierOptions) -> AuthErrorResult<Self> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
            AuthError::InvalidToken {
                message: format!("Invalid RSA public key: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Self {
            decoding_key,
            validation: Self::validation(Algorithm::RS256, options),
            algorithm: Algorithm::RS256,
        })
    }

    fn validation(algorithm: Algorithm, options: &VerifierOptions) -> Validation {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = options.leeway_secs;

        if let Some(ref issuer) = options.issuer {
            validation.set_issuer(&[issuer]);
        }
        match options.audience {
            Some(ref audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        validation
    }

    /// Verify the assertion and return the identity it carries
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<ExternalIdentity> {
        let token_data =
            decode::<IdentityClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims.into_identity())
    }

    /// Verify the value of an `Authorization` header
    #[track_caller]
    pub fn verify_bearer(&self, header: Option<&str>) -> AuthErrorResult<ExternalIdentity> {
        let header = header.ok_or_else(|| AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        })?;

        let token = header
            .strip_prefix(BEARER_PREFIX)
            .ok_or_else(|| AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.verify(token.trim())
    }

    /// Get the algorithm being used (for logging/debugging)
    pub fn algorithm(&self) -> &str {
        match self.algorithm {
            Algorithm::HS256 => "HS256",
            Algorithm::RS256 => "RS256",
            _ => "unknown",
        }
    }
}
