/*
[INPUT]:  HTTP configuration (endpoint, timeouts, credentials)
[OUTPUT]: Configured reqwest client ready for GraphQL calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::auth::Credentials;
use crate::http::{BuycoinsError, Result};
use reqwest::{Client, RequestBuilder, Url};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use std::time::Duration;

/// GraphQL endpoint for the BuyCoins API
pub const GRAPHQL_ENDPOINT: &str = "https://backend.buycoins.tech/api/graphql";

const USER_AGENT: &str = concat!("buycoins-orderbook/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Main HTTP client for the BuyCoins GraphQL API
#[derive(Debug, Clone)]
pub struct BuycoinsClient {
    http_client: Client,
    endpoint: Url,
    credentials: Credentials,
    authorization: HeaderValue,
    timeout: Duration,
}

impl BuycoinsClient {
    /// Create a new client for the given key pair with default configuration
    pub fn new(public_key: &str, secret_key: &str) -> Result<Self> {
        Self::with_config(Credentials::new(public_key, secret_key), ClientConfig::default())
    }

    /// Create a new client with credentials taken from the environment
    pub fn from_env() -> Result<Self> {
        Self::with_config(Credentials::from_env()?, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_endpoint(credentials, config, GRAPHQL_ENDPOINT)
    }

    /// Create a new client against a non-default endpoint (staging, mock server)
    pub fn with_config_and_endpoint(
        credentials: Credentials,
        config: ClientConfig,
        endpoint: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| BuycoinsError::Config(format!("failed to build HTTP client: {e}")))?;

        let mut authorization = HeaderValue::from_str(&credentials.basic_auth_header())
            .map_err(|e| BuycoinsError::Config(format!("invalid authorization header: {e}")))?;
        authorization.set_sensitive(true);

        Ok(Self {
            http_client,
            endpoint: Url::parse(endpoint)?,
            credentials,
            authorization,
            timeout: config.timeout,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Value sent in the `Authorization` header of every request
    pub fn authorization_header(&self) -> String {
        self.credentials.basic_auth_header()
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build an authenticated POST request to the GraphQL endpoint
    pub(crate) fn graphql_request(&self) -> RequestBuilder {
        self.http_client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, self.authorization.clone())
            .header(CONTENT_TYPE, "application/json")
    }
}
