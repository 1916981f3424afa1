/*
[INPUT]:  Operation descriptor, serializable variables
[OUTPUT]: Deserialized root field of the GraphQL response
[POS]:    HTTP layer - single request path shared by every operation
[UPDATE]: When changing envelope handling, headers or error mapping
*/

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::{BuycoinsClient, BuycoinsError, GraphQlError, Result};

/// A named remote operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Name used to tag errors and log lines
    pub name: &'static str,
    /// Root field read from `data`
    pub field: &'static str,
    pub query: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

/// Marker for operations that take no variables; serializes to `{}`
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoVariables {}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    /// Take the root field out of `data`, or surface the reported errors
    pub(crate) fn into_field<T: DeserializeOwned>(self, field: &str) -> Result<T> {
        if !self.errors.is_empty() {
            return Err(BuycoinsError::GraphQl {
                errors: self.errors,
            });
        }

        let value = match self.data {
            Some(Value::Object(mut data)) => data.remove(field),
            Some(Value::Null) | None => None,
            Some(other) => {
                return Err(BuycoinsError::InvalidResponse(format!(
                    "expected object in data, got {other}"
                )));
            }
        };

        match value {
            Some(Value::Null) | None => Err(BuycoinsError::InvalidResponse(format!(
                "response has no data for {field}"
            ))),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }
}

impl BuycoinsClient {
    /// Run one GraphQL operation and decode its root field.
    ///
    /// Every failure is tagged with `op.name`.
    pub(crate) async fn execute<V, T>(&self, op: Operation, variables: V) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        debug!(operation = op.name, field = op.field, "sending graphql request");

        match self.send(op, variables).await {
            Ok(value) => {
                debug!(operation = op.name, "graphql request succeeded");
                Ok(value)
            }
            Err(err) => {
                warn!(operation = op.name, error = %err, "graphql request failed");
                Err(err.in_operation(op.name))
            }
        }
    }

    async fn send<V, T>(&self, op: Operation, variables: V) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(&GraphQlRequest {
            query: op.query,
            variables,
        })?;

        let response = self
            .graphql_request()
            .body(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.transport_error(e))?;

        match serde_json::from_str::<GraphQlResponse>(&text) {
            Ok(envelope) if !envelope.errors.is_empty() || status.is_success() => {
                envelope.into_field(op.field)
            }
            Ok(_) => Err(BuycoinsError::api_error(status, text)),
            Err(_) if !status.is_success() => Err(BuycoinsError::api_error(status, text)),
            Err(e) => Err(BuycoinsError::Serialization(e)),
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> BuycoinsError {
        if err.is_timeout() {
            BuycoinsError::Timeout {
                duration: self.timeout(),
            }
        } else {
            BuycoinsError::Http(err)
        }
    }
}
