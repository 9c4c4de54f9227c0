//! Origin normalization: `scheme://host`, nothing else.
//!
//! Credentials are matched on scheme + hostname only — port, path, and query
//! are discarded, so `https://example.com/login?next=/` and
//! `https://example.com:8443` both key to `https://example.com`.

use url::Url;

use crate::error::{VaultError, VaultResult};

/// Normalizes an origin-ish string to `scheme://host`.
///
/// The host is lowercased by the URL parser; matching downstream is exact on
/// the normalized string.
pub fn normalize_origin(input: &str) -> VaultResult<String> {
    let url =
        Url::parse(input).map_err(|e| VaultError::InvalidInput(format!("invalid origin: {e}")))?;
    let host = url
        .host_str()
        .ok_or_else(|| VaultError::InvalidInput(format!("origin has no host: {input}")))?;
    Ok(format!("{}://{}", url.scheme(), host))
}
