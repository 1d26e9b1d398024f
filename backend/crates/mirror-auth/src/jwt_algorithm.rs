/// Key material the provider signs identity assertions with
#[derive(Debug, Clone)]
pub enum JwtAlgorithm {
    /// HMAC with SHA-256 (shared secret)
    HS256 { secret: Vec<u8> },
    /// RSA with SHA-256 (provider's public key, PEM)
    RS256 { public_key_pem: String },
}

impl JwtAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HS256 { .. } => "HS256",
            Self::RS256 { .. } => "RS256",
        }
    }
}
