//! Provider payload and header tests
//!
//! Field-presence checks on the requests built for each provider

use llmdispatch::{ChatMessage, GenerationOptions, GenerationRequest, ProviderKind, RequestDispatcher, Settings, StopSequence};
use reqwest::header::AUTHORIZATION;
use serde_json::json;
use std::collections::BTreeSet;

fn settings_with_all_keys() -> Settings {
    let mut settings = Settings::default();
    settings.openai.api_key = Some("sk-openai".to_string());
    settings.anthropic.api_key = Some("sk-ant".to_string());
    settings.mistral.api_key = Some("mistral-key".to_string());
    settings
}

fn build_body(provider: ProviderKind, options: GenerationOptions) -> serde_json::Value {
    let dispatcher = RequestDispatcher::new(settings_with_all_keys()).unwrap();
    let request = GenerationRequest::new(provider, "test-model", vec![ChatMessage::user("hi there")]).with_options(options);
    dispatcher.build_request(&request).unwrap().body
}

fn keys(body: &serde_json::Value) -> BTreeSet<String> {
    body.as_object().unwrap().keys().cloned().collect()
}

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_openai_payload_snapshot() {
    let body = build_body(ProviderKind::OpenAi, GenerationOptions::default());
    assert_eq!(
        keys(&body),
        set(&["model", "messages", "temperature", "max_tokens", "top_p", "frequency_penalty", "presence_penalty"])
    );
}

#[test]
fn test_openai_fields_present_even_when_unset() {
    let options = GenerationOptions {
        max_tokens: None,
        ..Default::default()
    };
    let body = build_body(ProviderKind::OpenAi, options);

    assert_eq!(keys(&body).len(), 7);
    assert!(body["max_tokens"].is_null());
}

#[test]
fn test_anthropic_payload_snapshot() {
    let options = GenerationOptions {
        frequency_penalty: 0.5,
        presence_penalty: 0.5,
        stop: Some(StopSequence::Single("END".to_string())),
        ..Default::default()
    };
    let body = build_body(ProviderKind::Anthropic, options);

    assert_eq!(keys(&body), set(&["model", "temperature", "max_tokens", "top_p", "messages"]));
}

#[test]
fn test_mistral_payload_snapshot() {
    let options = GenerationOptions {
        max_tokens: None,
        ..Default::default()
    };
    let body = build_body(ProviderKind::Mistral, options);

    assert_eq!(
        keys(&body),
        set(&["model", "messages", "temperature", "top_p", "stream", "tool_choice", "safe_prompt"])
    );
}

#[test]
fn test_mistral_each_optional_field_toggles_its_key() {
    let base = GenerationOptions {
        max_tokens: None,
        ..Default::default()
    };
    let base_keys = keys(&build_body(ProviderKind::Mistral, base.clone()));

    let cases: Vec<(&str, GenerationOptions, serde_json::Value)> = vec![
        (
            "max_tokens",
            GenerationOptions { max_tokens: Some(256), ..base.clone() },
            json!(256),
        ),
        (
            "min_tokens",
            GenerationOptions { min_tokens: Some(16), ..base.clone() },
            json!(16),
        ),
        (
            "stop",
            GenerationOptions {
                stop: Some(StopSequence::Multiple(vec!["\n\n".to_string(), "END".to_string()])),
                ..base.clone()
            },
            json!(["\n\n", "END"]),
        ),
        (
            "random_seed",
            GenerationOptions { random_seed: Some(99), ..base.clone() },
            json!(99),
        ),
        (
            "response_format",
            GenerationOptions {
                response_format: Some(json!({"type": "json_object"})),
                ..base.clone()
            },
            json!({"type": "json_object"}),
        ),
        (
            "tools",
            GenerationOptions {
                tools: Some(vec![json!({"type": "function", "function": {"name": "get_weather", "parameters": {}}})]),
                ..base.clone()
            },
            json!([{"type": "function", "function": {"name": "get_weather", "parameters": {}}}]),
        ),
    ];

    for (key, options, expected) in cases {
        let body = build_body(ProviderKind::Mistral, options);

        let mut expected_keys = base_keys.clone();
        expected_keys.insert(key.to_string());
        assert_eq!(keys(&body), expected_keys, "unexpected keys when setting {}", key);
        assert_eq!(body[key], expected, "unexpected value for {}", key);
    }
}

#[test]
fn test_mistral_tool_choice_object() {
    let options = GenerationOptions {
        tool_choice: json!({"type": "function", "function": {"name": "get_weather"}}),
        ..Default::default()
    };
    let body = build_body(ProviderKind::Mistral, options);
    assert_eq!(body["tool_choice"]["function"]["name"], "get_weather");
}

#[test]
fn test_headers_per_provider() {
    let dispatcher = RequestDispatcher::new(settings_with_all_keys()).unwrap();
    let messages = vec![ChatMessage::user("hi")];

    let openai = dispatcher
        .build_request(&GenerationRequest::new(ProviderKind::OpenAi, "gpt-4o", messages.clone()))
        .unwrap();
    assert_eq!(openai.headers.get(AUTHORIZATION).unwrap(), "Bearer sk-openai");
    assert!(openai.headers.get("x-api-key").is_none());

    let anthropic = dispatcher
        .build_request(&GenerationRequest::new(ProviderKind::Anthropic, "claude", messages.clone()))
        .unwrap();
    assert_eq!(anthropic.headers.get("x-api-key").unwrap(), "sk-ant");
    assert_eq!(anthropic.headers.get("anthropic-version").unwrap(), "2023-06-01");
    assert!(anthropic.headers.get(AUTHORIZATION).is_none());

    let mistral = dispatcher
        .build_request(&GenerationRequest::new(ProviderKind::Mistral, "mistral-small", messages))
        .unwrap();
    assert_eq!(mistral.headers.get(AUTHORIZATION).unwrap(), "Bearer mistral-key");
    assert_eq!(mistral.url, "https://api.mistral.ai/v1/chat/completions");
}

#[test]
fn test_messages_passed_through_in_order() {
    let dispatcher = RequestDispatcher::new(settings_with_all_keys()).unwrap();
    let messages = vec![
        ChatMessage::system("You are terse."),
        ChatMessage::user("Name a color."),
        ChatMessage::assistant("Blue."),
        ChatMessage::user("Another."),
    ];

    for kind in ProviderKind::ALL {
        let request = GenerationRequest::new(kind, "m", messages.clone());
        let body = dispatcher.build_request(&request).unwrap().body;
        let sent: Vec<ChatMessage> = serde_json::from_value(body["messages"].clone()).unwrap();
        assert_eq!(sent, messages);
    }
}
