//!
//! Format conversion modules for OpenAI chat-completion compatibility.
//!
//! Converts upstream agent invocation payloads into the response shape that
//! OpenAI-compatible clients consume.
//!
//! Authors:
//!   Jaro <yarenty@gmail.com>
//!
//! Copyright (c) 2026 SkyCorp

/* --- modules --------------------------------------------------------------------------------- */

pub mod invocation;

/* --- start of code -------------------------------------------------------------------------- */

pub use invocation::{
    ChatCompletionChoice, ChoiceMessage, InvocationResponseFormatter, PayloadShape,
    format_invocation_response, format_serializable_response,
};
