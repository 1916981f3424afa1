/*
[INPUT]:  API key pair (public key, secret key)
[OUTPUT]: Basic authorization header value
[POS]:    Auth layer - handles BuyCoins API authentication
[UPDATE]: When the authorization scheme changes
*/

pub mod credentials;

pub use credentials::{Credentials, PUBLIC_KEY_ENV, SECRET_KEY_ENV};
