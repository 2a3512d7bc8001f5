//!
//! Session key derivation for AgentCore tenants.
//!
//! A tenant's session key is the literal prefix `agentcore:` followed by the
//! tenant identifier. The same key is sent as the `user` field of outbound
//! chat-completion requests and used to resolve session-scoped configuration,
//! so both sides must derive it identically.
//!
//! Authors:
//!   Jaro <yarenty@gmail.com>
//!
//! Copyright (c) 2026 SkyCorp

/* --- uses ------------------------------------------------------------------------------------ */

use std::fmt;

use serde::{Deserialize, Serialize};

/* --- types ----------------------------------------------------------------------------------- */

///
/// Typed session key.
///
/// Serializes as a plain string, so it can be placed directly into the
/// `user` field of a chat-completion request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SessionKey(String);

/* --- constants ------------------------------------------------------------------------------ */

/** Namespace prefix shared by every session key */
pub const SESSION_KEY_PREFIX: &str = "agentcore:";

/* --- start of code -------------------------------------------------------------------------- */

///
/// Derive the session key for a tenant.
///
/// The identifier is appended verbatim: no escaping and no validation. An
/// empty identifier yields the bare prefix.
///
/// # Arguments
///  * `tenant_id` - caller-supplied tenant identifier
///
/// # Returns
///  * `agentcore:{tenant_id}`
pub fn derive_session_key(tenant_id: &str) -> String {
    format!("{SESSION_KEY_PREFIX}{tenant_id}")
}

impl SessionKey {
    /// Session key for `tenant_id`, same derivation as [`derive_session_key`].
    pub fn for_tenant(tenant_id: &str) -> Self {
        Self(derive_session_key(tenant_id))
    }

    ///
    /// Recover a session key from its string form.
    ///
    /// # Returns
    ///  * `Some` if `raw` carries the session key prefix
    ///  * `None` for any other string
    pub fn parse(raw: &str) -> Option<Self> {
        raw.starts_with(SESSION_KEY_PREFIX).then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tenant identifier the key was derived from.
    pub fn tenant_id(&self) -> &str {
        self.0.strip_prefix(SESSION_KEY_PREFIX).unwrap_or(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SessionKey {
    type Error = String;

    fn try_from(raw: String) -> std::result::Result<Self, Self::Error> {
        if raw.starts_with(SESSION_KEY_PREFIX) {
            Ok(Self(raw))
        } else {
            Err(format!("session key must start with '{SESSION_KEY_PREFIX}': {raw}"))
        }
    }
}

impl From<SessionKey> for String {
    fn from(key: SessionKey) -> Self {
        key.0
    }
}
