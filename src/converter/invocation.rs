//!
//! Invocation payload to OpenAI chat-completion response converter.
//!
//! Agent invocations return payloads of arbitrary shape, while the runtime in
//! front of them expects an OpenAI-compatible body with a `choices` array.
//! Payloads that already carry a `choices` array pass through untouched;
//! everything else is wrapped into a single choice whose message content is
//! the payload text (strings) or its compact JSON encoding (anything else).
//!
//! Authors:
//!   Jaro <yarenty@gmail.com>
//!
//! Copyright (c) 2026 SkyCorp

/* --- uses ------------------------------------------------------------------------------------ */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{Config, LogLevel};
use crate::error::Result;

/* --- types ----------------------------------------------------------------------------------- */

///
/// Shape classification of an invocation payload.
///
/// Arrays are never treated as mappings, and only a `choices` value that is
/// itself an array makes an object a finished chat-completion response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /** object whose `choices` is an array (possibly empty) */
    ChatCompletion,
    /** any other object */
    Object,
    /** string payload, used verbatim as message content */
    Text,
    /** null, boolean, number or array */
    Other,
}

///
/// Single entry of the `choices` array produced when wrapping a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionChoice {
    /** message carrying the payload content */
    pub message: ChoiceMessage,
}

///
/// Message body of a wrapped choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    /** payload text or its JSON encoding */
    pub content: String,
}

///
/// Invocation response formatter.
///
/// Stateless apart from logging settings, so a single instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvocationResponseFormatter {
    /** logging level for debug output */
    log_level: LogLevel,
    /** whether payload content may be logged */
    log_payloads: bool,
}

/* --- constants ------------------------------------------------------------------------------ */

/** Key that marks an OpenAI chat-completion response */
pub const CHOICES_KEY: &str = "choices";

/* --- start of code -------------------------------------------------------------------------- */

impl PayloadShape {
    ///
    /// Classify a payload by its JSON type.
    ///
    /// # Arguments
    ///  * `payload` - payload to inspect
    ///
    /// # Returns
    ///  * Shape tag used to pick the formatting path
    pub fn of(payload: &Value) -> Self {
        match payload {
            Value::Object(map) => match map.get(CHOICES_KEY) {
                Some(Value::Array(_)) => PayloadShape::ChatCompletion,
                _ => PayloadShape::Object,
            },
            Value::String(_) => PayloadShape::Text,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) => {
                PayloadShape::Other
            }
        }
    }
}

impl ChatCompletionChoice {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self { message: ChoiceMessage { content: content.into() } }
    }
}

impl InvocationResponseFormatter {
    ///
    /// Create a new formatter.
    ///
    /// # Arguments
    ///  * `log_level` - logging level for debug output
    ///
    /// # Returns
    ///  * New formatter instance
    pub fn new(log_level: LogLevel) -> Self {
        Self { log_level, log_payloads: false }
    }

    /// Formatter honoring both logging settings of `config`.
    pub fn from_config(config: &Config) -> Self {
        Self { log_level: config.log_level, log_payloads: config.log_payloads }
    }

    ///
    /// Format an invocation payload as a chat-completion response.
    ///
    /// A payload that is already a chat-completion response is returned as
    /// is. Otherwise the result holds a shallow copy of the payload's own keys
    /// (objects only) followed by a one-element `choices` array, which
    /// replaces any copied `choices` value.
    ///
    /// # Arguments
    ///  * `payload` - raw value returned by the upstream invocation
    ///
    /// # Returns
    ///  * JSON object containing a `choices` array
    ///  * `AdapterError::Serialization` if the payload cannot be encoded
    pub fn format(&self, payload: Value) -> Result<Value> {
        let shape = PayloadShape::of(&payload);

        if shape == PayloadShape::ChatCompletion {
            self.debug("Payload already carries a choices array, passing through");
            return Ok(payload);
        }

        let (content, mut response) = match payload {
            Value::String(text) => (text, Map::new()),
            Value::Object(map) => (serde_json::to_string(&map)?, map),
            other => (serde_json::to_string(&other)?, Map::new()),
        };

        self.debug(&format!(
            "Wrapping {:?} payload into chat-completion response ({} copied key(s), {} content byte(s))",
            shape,
            response.len(),
            content.len()
        ));
        if self.log_payloads {
            self.debug(&format!("Wrapped content: {}", content));
        }

        let choices = serde_json::to_value([ChatCompletionChoice::with_content(content)])?;
        response.insert(CHOICES_KEY.to_string(), choices);

        Ok(Value::Object(response))
    }

    ///
    /// Format any serializable payload as a chat-completion response.
    ///
    /// # Arguments
    ///  * `payload` - value to convert to JSON and then format
    ///
    /// # Returns
    ///  * JSON object containing a `choices` array
    ///  * `AdapterError::Serialization` if the value has no JSON form
    ///    (for example a map with non-string keys)
    pub fn format_serializable<T>(&self, payload: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(payload)?;
        self.format(value)
    }

    ///
    /// Log debug message if trace logging is enabled.
    ///
    /// # Arguments
    ///  * `msg` - debug message to log
    fn debug(&self, msg: &str) {
        if self.log_level.is_trace_enabled() {
            tracing::debug!("[TRACE] {}", msg);
        }
    }
}

///
/// Format an invocation payload with the default formatter.
///
/// See [`InvocationResponseFormatter::format`].
pub fn format_invocation_response(payload: Value) -> Result<Value> {
    InvocationResponseFormatter::default().format(payload)
}

/// Serializable counterpart of [`format_invocation_response`].
pub fn format_serializable_response<T>(payload: &T) -> Result<Value>
where
    T: Serialize + ?Sized,
{
    InvocationResponseFormatter::default().format_serializable(payload)
}
