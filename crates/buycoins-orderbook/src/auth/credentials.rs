/*
[INPUT]:  Public/secret key strings or environment variables
[OUTPUT]: Credentials and the `Authorization: Basic ...` header value
[POS]:    Auth layer - credential storage and header encoding
[UPDATE]: When changing credential sources or header encoding
*/

use std::fmt;

use base64::{Engine as _, engine::general_purpose::URL_SAFE};

use crate::http::{BuycoinsError, Result};

/// Environment variable holding the API public key
pub const PUBLIC_KEY_ENV: &str = "BUYCOINS_PUBLIC_KEY";
/// Environment variable holding the API secret key
pub const SECRET_KEY_ENV: &str = "BUYCOINS_SECRET_KEY";

/// API key pair used for Basic authentication
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    public_key: String,
    secret_key: String,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Load credentials from `BUYCOINS_PUBLIC_KEY` and `BUYCOINS_SECRET_KEY`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(read_env(PUBLIC_KEY_ENV)?, read_env(SECRET_KEY_ENV)?))
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Header value: `Basic base64url(public_key:secret_key)`
    pub fn basic_auth_header(&self) -> String {
        let pair = format!("{}:{}", self.public_key, self.secret_key);
        format!("Basic {}", URL_SAFE.encode(pair.as_bytes()))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

fn read_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(BuycoinsError::Config(format!("{name} is empty"))),
        Err(e) => Err(BuycoinsError::Config(format!("{name}: {e}"))),
    }
}
