//! # AgentCore Adapter - OpenAI-compatible helpers for agent invocations
//!
//! Small, side-effect-free helpers used by a request/response pipeline that
//! fronts tenant agents with an OpenAI-compatible chat-completion API:
//!
//! - [`derive_session_key`] maps a tenant identifier to the session key sent
//!   as the `user` field of chat-completion requests.
//! - [`format_invocation_response`] guarantees an invocation result is a JSON
//!   object with a `choices` array.
//!
//! ## Library Usage
//!
//! ```rust
//! use agentcore_adapter::{derive_session_key, format_invocation_response};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), agentcore_adapter::AdapterError> {
//! assert_eq!(derive_session_key("acme"), "agentcore:acme");
//!
//! let response = format_invocation_response(json!("hello"))?;
//! assert_eq!(response, json!({"choices": [{"message": {"content": "hello"}}]}));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`session`] - Session key derivation and the [`SessionKey`] type
//! - [`converter`] - Invocation payload to chat-completion response formatting
//! - [`config`] - Configuration for diagnostics
//! - [`logging`] - Tracing subscriber setup
//! - [`error`] - Error types and handling

pub mod config;
pub mod converter;
pub mod error;
pub mod logging;
pub mod session;

// Re-export commonly used types
pub use config::{Config, LogLevel, ValidationIssue, ValidationSeverity};
pub use converter::{
    InvocationResponseFormatter, PayloadShape, format_invocation_response,
    format_serializable_response,
};
pub use error::AdapterError;
pub use session::{SESSION_KEY_PREFIX, SessionKey, derive_session_key};
