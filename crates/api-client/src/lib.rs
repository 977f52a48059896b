//! Client for the reqres user-directory demo API
//!
//! Covers the three calls a user browser needs: list a page of users,
//! replace a user's editable fields and delete a user. Also hosts the local
//! token store ([`auth::Config`]).

pub mod auth;
mod client;
mod error;
pub mod types;

#[cfg(test)]
mod test_server;

pub use client::Client;
pub use error::{Error, Result};

pub const PROD_BASEURL: &str = "https://reqres.in";

/// Header carrying the demo API key, when one is configured
pub const API_KEY_HEADER: &str = "x-api-key";

/// This crate's entry point
///
/// Builds a [`Client`] for `baseurl` (defaults to [`PROD_BASEURL`]).
///
/// The stored user token is only sent when `bearer_token` is given
/// explicitly, as `Authorization: Bearer <token>`.
#[bon::builder(
    start_fn = new,
    finish_fn = connect,
    on(String, into),
)]
pub fn connect(
    #[builder(default = PROD_BASEURL.to_string())] baseurl: String,
    api_key: Option<String>,
    bearer_token: Option<String>,
) -> Result<Client> {
    use reqwest::header::{self, HeaderMap, HeaderValue};

    let mut default_headers = HeaderMap::new();

    if let Some(api_key) = api_key {
        let value = HeaderValue::try_from(api_key)
            .map_err(|_| Error::InvalidConfig("API key is not a valid header value".to_string()))?;
        default_headers.insert(API_KEY_HEADER, value);
    }

    if let Some(token) = bearer_token {
        let mut value = HeaderValue::try_from(format!("Bearer {token}"))
            .map_err(|_| Error::InvalidConfig("token is not a valid header value".to_string()))?;
        value.set_sensitive(true);
        default_headers.insert(header::AUTHORIZATION, value);
    }

    let client = reqwest::Client::builder()
        .user_agent(concat!("userdir/", env!("CARGO_PKG_VERSION")))
        .default_headers(default_headers)
        .build()?;

    Client::new_with_client(&baseurl, client)
}
