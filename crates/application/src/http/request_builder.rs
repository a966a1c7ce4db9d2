//! Request builder.
//!
//! Turns a [`RequestSpec`] into the inputs a generic HTTP client needs. The
//! builder never fails: incomplete auth fields simply add nothing.

use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use courier_domain::request::{KeyValue, KeyValueList, RequestBody};
use courier_domain::{ApiKeyLocation, AuthConfig, HttpMethod, RequestSpec};

use crate::ports::{TransportBody, TransportRequest};

/// Builds the transport request for a request description.
#[must_use]
pub fn build_request(request: &RequestSpec) -> TransportRequest {
    let mut headers = build_headers(&request.headers);
    apply_auth_headers(&request.auth, &mut headers);

    let auth_param = auth_query_param(&request.auth);
    let url = build_url(&request.url, request.params.enabled().chain(auth_param.as_ref()));

    TransportRequest {
        method: request.method,
        url,
        headers,
        body: build_body(request.method, &request.body),
    }
}

/// Appends the given parameters to `base` as an encoded query string.
///
/// With no parameters the URL is returned unchanged. The separator is `&`
/// when the URL already has a `?`, otherwise `?`.
#[must_use]
pub fn build_url<'a>(base: &str, params: impl IntoIterator<Item = &'a KeyValue>) -> String {
    let query = encode_pairs(params);
    if query.is_empty() {
        return base.to_string();
    }

    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{query}")
}

/// Folds enabled headers into a map in list order; later duplicates win.
#[must_use]
pub fn build_headers(headers: &KeyValueList) -> BTreeMap<String, String> {
    headers
        .enabled()
        .map(|h| (h.key.clone(), h.value.clone()))
        .collect()
}

/// Adds header-based authentication. Must run after header assembly so it
/// can override user-supplied entries.
pub fn apply_auth_headers(auth: &AuthConfig, headers: &mut BTreeMap<String, String>) {
    match auth {
        AuthConfig::Basic { username, password } => {
            if !username.is_empty() && !password.is_empty() {
                let encoded = STANDARD.encode(format!("{username}:{password}"));
                headers.insert("Authorization".to_string(), format!("Basic {encoded}"));
            }
        }
        AuthConfig::Bearer { token } => {
            if !token.is_empty() {
                headers.insert("Authorization".to_string(), format!("Bearer {token}"));
            }
        }
        AuthConfig::ApiKey {
            key,
            value,
            add_to: ApiKeyLocation::Header,
        } => {
            if !key.is_empty() && !value.is_empty() {
                headers.insert(key.clone(), value.clone());
            }
        }
        AuthConfig::ApiKey {
            add_to: ApiKeyLocation::QueryParam,
            ..
        }
        | AuthConfig::None => {}
    }
}

/// Returns the query parameter contributed by an API key placed in the query.
#[must_use]
pub fn auth_query_param(auth: &AuthConfig) -> Option<KeyValue> {
    match auth {
        AuthConfig::ApiKey {
            key,
            value,
            add_to: ApiKeyLocation::QueryParam,
        } if !key.is_empty() && !value.is_empty() => Some(KeyValue::new(key, value)),
        _ => None,
    }
}

/// Builds the body payload. GET and HEAD never carry one.
#[must_use]
pub fn build_body(method: HttpMethod, body: &RequestBody) -> TransportBody {
    if !method.allows_body() {
        return TransportBody::None;
    }

    match body {
        RequestBody::Raw { content, .. } => TransportBody::Text(content.clone()),
        RequestBody::FormData { fields } => TransportBody::Multipart(
            fields
                .enabled()
                .map(|f| (f.key.clone(), f.value.clone()))
                .collect(),
        ),
        RequestBody::UrlEncoded { fields } => TransportBody::UrlEncoded(encode_pairs(fields.enabled())),
        RequestBody::None | RequestBody::Binary => TransportBody::None,
    }
}

fn encode_pairs<'a>(pairs: impl IntoIterator<Item = &'a KeyValue>) -> String {
    pairs
        .into_iter()
        .map(|p| {
            format!(
                "{}={}",
                urlencoding::encode(&p.key),
                urlencoding::encode(&p.value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
