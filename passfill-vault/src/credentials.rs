//! Credential records: the persisted shape and its decrypted/metadata views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A credential as persisted: the password field is an opaque authenticated
/// ciphertext, only decryptable while the vault session is unlocked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    pub id: String,
    /// Normalized `scheme://host` — no port, path, or query.
    pub origin: String,
    pub username: String,
    pub encrypted_password: String,
    pub created_at: DateTime<Utc>,
}

/// A decrypted credential, as handed to the form-fill layer. Never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlainCredential {
    pub id: String,
    pub origin: String,
    pub username: String,
    pub password: String,
}

/// Listing view: metadata only, no password material.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSummary {
    pub id: String,
    pub origin: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&CredentialRecord> for CredentialSummary {
    fn from(record: &CredentialRecord) -> Self {
        Self {
            id: record.id.clone(),
            origin: record.origin.clone(),
            username: record.username.clone(),
            created_at: record.created_at,
        }
    }
}

/// Result of an origin lookup: decrypted matches plus the ids of records
/// whose ciphertext no longer authenticates (skipped, not fatal).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialLookup {
    pub credentials: Vec<PlainCredential>,
    pub failed_ids: Vec<String>,
}
