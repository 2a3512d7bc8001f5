//! Invocation response formatter tests
//!
//! Covers every payload shape the upstream invocation can return and checks
//! the resulting body is a usable OpenAI chat-completion response.

use std::collections::BTreeMap;

use agentcore_adapter::{
    AdapterError, InvocationResponseFormatter, LogLevel, format_invocation_response,
    format_serializable_response,
};
use serde::Serialize;
use serde_json::{Value, json};

fn content_of(response: &Value) -> &str {
    response["choices"][0]["message"]["content"]
        .as_str()
        .expect("wrapped response should carry string content")
}

/// Test that a response with a choices array passes through unchanged
#[test]
fn test_chat_completion_passes_through() {
    let payload = json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": "hi"}}],
    });

    let response = format_invocation_response(payload.clone()).unwrap();
    assert_eq!(response, payload);
}

/// Test that an empty choices array is preserved
#[test]
fn test_empty_choices_array_passes_through() {
    let payload = json!({"choices": [], "usage": {"total_tokens": 0}});

    let response = format_invocation_response(payload.clone()).unwrap();
    assert_eq!(response, payload);
    assert!(response["choices"].as_array().unwrap().is_empty());
}

/// Test that null is wrapped as the literal text null
#[test]
fn test_null_payload() {
    let response = format_invocation_response(Value::Null).unwrap();
    assert_eq!(response, json!({"choices": [{"message": {"content": "null"}}]}));
}

/// Test that a string payload becomes the content verbatim, without quotes
#[test]
fn test_string_payload() {
    let response = format_invocation_response(json!("hello")).unwrap();
    assert_eq!(response, json!({"choices": [{"message": {"content": "hello"}}]}));
}

/// Test that a string holding JSON is not re-encoded
#[test]
fn test_string_payload_is_not_escaped() {
    let response = format_invocation_response(json!("{\"a\":1}")).unwrap();
    assert_eq!(content_of(&response), "{\"a\":1}");

    let response = format_invocation_response(json!("")).unwrap();
    assert_eq!(content_of(&response), "");
}

/// Test that object keys are copied next to the new choices
#[test]
fn test_object_without_choices() {
    let response = format_invocation_response(json!({"foo": 1})).unwrap();
    assert_eq!(
        response,
        json!({"foo": 1, "choices": [{"message": {"content": "{\"foo\":1}"}}]})
    );
}

/// Test that arrays are encoded but never copied key by key
#[test]
fn test_array_payload() {
    let response = format_invocation_response(json!([1, 2, 3])).unwrap();
    assert_eq!(response, json!({"choices": [{"message": {"content": "[1,2,3]"}}]}));
}

/// Test that an array of chat completions is still wrapped
#[test]
fn test_array_of_objects_is_wrapped() {
    let response = format_invocation_response(json!([{"choices": []}])).unwrap();

    assert_eq!(response.as_object().unwrap().len(), 1);
    assert_eq!(content_of(&response), "[{\"choices\":[]}]");
}

/// Test that a non-array choices value is overwritten by the new array
#[test]
fn test_non_array_choices_is_overwritten() {
    let response = format_invocation_response(json!({"choices": "not-an-array"})).unwrap();
    assert_eq!(
        response,
        json!({"choices": [{"message": {"content": "{\"choices\":\"not-an-array\"}"}}]})
    );
}

/// Test that scalars are encoded as JSON text
#[test]
fn test_scalar_payloads() {
    assert_eq!(content_of(&format_invocation_response(json!(42)).unwrap()), "42");
    assert_eq!(content_of(&format_invocation_response(json!(-1.5)).unwrap()), "-1.5");
    assert_eq!(content_of(&format_invocation_response(json!(true)).unwrap()), "true");
    assert_eq!(content_of(&format_invocation_response(json!(false)).unwrap()), "false");
}

/// Test that nested objects are copied shallowly and encoded fully
#[test]
fn test_nested_object_payload() {
    let payload = json!({"result": {"text": "done", "tools": ["web_search"]}, "tenant": "acme"});
    let response = format_invocation_response(payload).unwrap();

    assert_eq!(response["result"], json!({"text": "done", "tools": ["web_search"]}));
    assert_eq!(response["tenant"], "acme");
    assert_eq!(
        content_of(&response),
        r#"{"result":{"text":"done","tools":["web_search"]},"tenant":"acme"}"#
    );
}

/// Test that every wrapped response has exactly one choice
#[test]
fn test_wrapped_response_has_single_choice() {
    for payload in [Value::Null, json!(0), json!("x"), json!([]), json!({}), json!({"choices": 1})]
    {
        let response = format_invocation_response(payload).unwrap();
        let choices = response["choices"].as_array().expect("choices should be an array");
        assert_eq!(choices.len(), 1);
    }
}

/// Test that serializable types are formatted via their JSON form
#[test]
fn test_serializable_payload() {
    #[derive(Serialize)]
    struct AgentReply {
        text: String,
        tokens: u32,
    }

    let reply = AgentReply { text: "ok".to_string(), tokens: 3 };
    let response = format_serializable_response(&reply).unwrap();

    assert_eq!(response["text"], "ok");
    assert_eq!(response["tokens"], 3);
    assert_eq!(content_of(&response), r#"{"text":"ok","tokens":3}"#);
}

/// Test that a value with no JSON form propagates a serialization error
#[test]
fn test_unserializable_payload_is_an_error() {
    let mut payload = BTreeMap::new();
    payload.insert((1, 2), "tuple keys are not valid JSON object keys");

    let result = format_serializable_response(&payload);
    assert!(
        matches!(result, Err(AdapterError::Serialization(_))),
        "Should fail with a serialization error"
    );
}

/// Test that a verbose formatter yields the same output as the default one
#[test]
fn test_formatter_log_level_does_not_change_output() {
    let formatter = InvocationResponseFormatter::new(LogLevel::Trace);

    for payload in [json!({"foo": 1}), json!("hi"), json!({"choices": []})] {
        assert_eq!(
            formatter.format(payload.clone()).unwrap(),
            format_invocation_response(payload).unwrap()
        );
    }
}
