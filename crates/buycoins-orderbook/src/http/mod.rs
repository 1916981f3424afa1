/*
[INPUT]:  HTTP client configuration and GraphQL operations
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - GraphQL API communication
[UPDATE]: When adding new operations or changing client behavior
*/

/// Selection set shared by every operation that returns a pro order
macro_rules! order_fields {
    () => {
        "id pair price side status timeInForce orderType fees filled total \
         initialBaseQuantity initialQuoteQuantity remainingBaseQuantity \
         remainingQuoteQuantity meanExecutionPrice engineMessage"
    };
}

pub mod client;
pub mod error;
pub mod graphql;
pub mod public;
pub mod trade;
pub mod user;

pub use error::{BuycoinsError, GraphQlError, Result};
pub use graphql::{NoVariables, Operation};

pub use client::{BuycoinsClient, ClientConfig, GRAPHQL_ENDPOINT};
