//! JSON command surface.
//!
//! The host's message plumbing (extension runtime, IPC, whatever) hands each
//! inbound message to [`CommandHandler::handle_json`] and forwards the
//! returned JSON verbatim. Every message counts as activity for the
//! auto-lock timer, every response carries `{success, error?}`, and no
//! request leaves the caller without a response.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::autolock::AutoLock;
use crate::vault::Vault;

/// Inbound commands, tagged by `action`.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    SetMasterPassword {
        password: String,
    },
    Unlock {
        password: String,
    },
    Lock,
    IsUnlocked,
    AddCredential {
        origin: String,
        username: String,
        password: String,
    },
    GetCredentials {
        origin: String,
    },
    GetAllCredentials,
    RemoveCredential {
        id: String,
    },
    /// Anything with an unrecognized `action` tag.
    #[serde(other)]
    Unknown,
}

/// Uniform response envelope.
#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_ids: Option<Vec<String>>,
}

impl Response {
    fn ok() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    fn from_result<T>(result: Result<T, impl std::fmt::Display>) -> Self {
        match result {
            Ok(_) => Self::ok(),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

/// Dispatches requests against a vault and keeps the auto-lock timer fed.
pub struct CommandHandler {
    vault: Arc<Vault>,
    autolock: AutoLock,
}

impl CommandHandler {
    pub fn new(vault: Arc<Vault>, autolock: AutoLock) -> Self {
        Self { vault, autolock }
    }

    /// Handles one raw JSON message, returning the JSON response.
    pub fn handle_json(&self, raw: &str) -> String {
        let response = match serde_json::from_str::<Request>(raw) {
            Ok(request) => self.handle(request),
            Err(e) => Response::failure(format!("malformed request: {e}")),
        };
        serde_json::to_string(&response)
            .unwrap_or_else(|_| r#"{"success":false,"error":"response serialization failed"}"#.into())
    }

    /// Handles one decoded request.
    pub fn handle(&self, request: Request) -> Response {
        let response = self.dispatch(request);
        // Rearm after dispatch so the timer reflects the settled session
        // state (armed after a successful unlock, disarmed after a lock).
        self.autolock.touch();
        response
    }

    fn dispatch(&self, request: Request) -> Response {
        match request {
            Request::SetMasterPassword { password } => {
                Response::from_result(self.vault.setup_master_password(&password))
            }
            Request::Unlock { password } => match self.vault.unlock(&password) {
                Ok(unlocked) => Response {
                    success: unlocked,
                    unlocked: Some(unlocked),
                    ..Response::default()
                },
                Err(e) => Response::failure(e.to_string()),
            },
            Request::Lock => {
                self.vault.lock();
                Response::ok()
            }
            Request::IsUnlocked => Response {
                unlocked: Some(self.vault.is_unlocked()),
                ..Response::ok()
            },
            Request::AddCredential {
                origin,
                username,
                password,
            } => Response::from_result(self.vault.add_credential(&origin, &username, &password)),
            Request::GetCredentials { origin } => match self.vault.get_credentials(&origin) {
                Ok(lookup) => match serde_json::to_value(&lookup.credentials) {
                    Ok(credentials) => Response {
                        credentials: Some(credentials),
                        failed_ids: (!lookup.failed_ids.is_empty()).then_some(lookup.failed_ids),
                        ..Response::ok()
                    },
                    Err(e) => Response::failure(e.to_string()),
                },
                Err(e) => Response::failure(e.to_string()),
            },
            Request::GetAllCredentials => match self.vault.get_all_credentials() {
                Ok(summaries) => match serde_json::to_value(&summaries) {
                    Ok(credentials) => Response {
                        credentials: Some(credentials),
                        ..Response::ok()
                    },
                    Err(e) => Response::failure(e.to_string()),
                },
                Err(e) => Response::failure(e.to_string()),
            },
            Request::RemoveCredential { id } => {
                Response::from_result(self.vault.remove_credential(&id))
            }
            Request::Unknown => Response::failure("Unknown action"),
        }
    }
}
