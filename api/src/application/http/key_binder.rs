use std::str::FromStr;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use thiserror::Error;

use super::server::api_entities::api_error::ApiError;

const KEY_DELIMITER: char = ',';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed key '{token}': {reason}")]
pub struct MalformedKeyError {
    pub token: String,
    pub reason: String,
}

impl MalformedKeyError {
    fn new(token: &str, reason: &str) -> Self {
        Self {
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<MalformedKeyError> for ApiError {
    fn from(error: MalformedKeyError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

/// Keys bound from one path segment, in the order they appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundKeys<T> {
    /// `1,2,3`
    Array(Vec<T>),
    /// `key1=value1,key2=value2`
    Composite(Vec<(String, T)>),
}

/// Parses a delimited key list, optionally wrapped in parentheses.
///
/// The first token decides the format and every other token must use it. Any
/// token that does not parse fails the whole segment.
pub fn bind_keys<T: FromStr>(raw_segment: &str) -> Result<BoundKeys<T>, MalformedKeyError> {
    let segment = raw_segment.trim();
    let segment = segment
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(segment)
        .trim();

    if segment.is_empty() {
        return Err(MalformedKeyError::new(raw_segment, "no keys given"));
    }

    let tokens: Vec<&str> = segment.split(KEY_DELIMITER).map(str::trim).collect();
    let composite = tokens[0].contains('=');

    if composite {
        tokens
            .into_iter()
            .map(|token| {
                let (name, value) = token
                    .split_once('=')
                    .ok_or_else(|| MalformedKeyError::new(token, "expected key=value"))?;
                let (name, value) = (name.trim(), value.trim());
                if name.is_empty() {
                    return Err(MalformedKeyError::new(token, "missing key name"));
                }
                Ok((name.to_string(), parse_token(value)?))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(BoundKeys::Composite)
    } else {
        tokens
            .into_iter()
            .map(|token| {
                if token.contains('=') {
                    return Err(MalformedKeyError::new(
                        token,
                        "cannot mix key=value pairs with plain keys",
                    ));
                }
                parse_token(token)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(BoundKeys::Array)
    }
}

fn parse_token<T: FromStr>(token: &str) -> Result<T, MalformedKeyError> {
    if token.is_empty() {
        return Err(MalformedKeyError::new(token, "empty key"));
    }

    token
        .parse::<T>()
        .map_err(|_| MalformedKeyError::new(token, "not a valid identifier"))
}

/// Extracts `({id1},{id2},...)` from the single path parameter of a route.
///
/// Only the plain array format is accepted. Whether every key was found is for
/// the handler to decide.
#[derive(Debug, Clone)]
pub struct ArrayKeys<T>(pub Vec<T>);

impl<T, S> FromRequestParts<S> for ArrayKeys<T>
where
    T: FromStr + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw_segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        match bind_keys::<T>(&raw_segment)? {
            BoundKeys::Array(keys) => Ok(ArrayKeys(keys)),
            BoundKeys::Composite(_) => Err(MalformedKeyError::new(
                &raw_segment,
                "expected a plain list of keys",
            )
            .into()),
        }
    }
}
