#![allow(dead_code)]

use serde_json::{Value, json};

use completions_client::{CompletionRequest, ModerationRequest};

pub fn sample_completion_request() -> CompletionRequest {
    CompletionRequest {
        model: "text-davinci-003".to_string(),
        prompt: Some("Say this is a test".to_string()),
        max_tokens: Some(7),
        temperature: Some(0.0),
        ..Default::default()
    }
}

pub fn sample_completion_response() -> Value {
    json!({
        "id": "cmpl-uqkvlQyYK7bGYrRHQ0eXlWi7",
        "object": "text_completion",
        "created": 1589478378,
        "model": "text-davinci-003",
        "choices": [
            {
                "text": "\n\nThis is indeed a test",
                "index": 0,
                "logprobs": null,
                "finish_reason": "length"
            }
        ],
        "usage": {
            "prompt_tokens": 5,
            "completion_tokens": 7,
            "total_tokens": 12
        }
    })
}

pub fn minimal_completion_response() -> Value {
    json!({
        "id": "cmpl-1",
        "object": "text_completion",
        "created": 1,
        "model": "x",
        "choices": [{"text": "hi", "index": 0, "finish_reason": "stop", "logprobs": null}],
        "usage": {"prompt_tokens": 1, "completion_tokens": 1, "total_tokens": 2}
    })
}

pub fn sample_completion_chunks() -> Vec<Value> {
    ["This", " is", " a test"]
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let finish_reason = if i == 2 { json!("stop") } else { Value::Null };
            json!({
                "id": "cmpl-stream-1",
                "object": "text_completion",
                "created": 1589478378,
                "model": "text-davinci-003",
                "choices": [
                    {"text": text, "index": 0, "logprobs": null, "finish_reason": finish_reason}
                ]
            })
        })
        .collect()
}

pub fn sample_moderation_request() -> ModerationRequest {
    ModerationRequest::new("I want to kill them.")
}

pub fn sample_moderation_response() -> Value {
    json!({
        "id": "modr-5MWoLO",
        "model": "text-moderation-001",
        "results": [
            {
                "categories": {
                    "hate": false,
                    "hate/threatening": true,
                    "self-harm": false,
                    "sexual": false,
                    "sexual/minors": false,
                    "violence": true,
                    "violence/graphic": false
                },
                "category_scores": {
                    "hate": 0.22714105248451233,
                    "hate/threatening": 0.4132447838783264,
                    "self-harm": 0.005232391878962517,
                    "sexual": 0.01407341007143259,
                    "sexual/minors": 0.0038522258400917053,
                    "violence": 0.9223177433013916,
                    "violence/graphic": 0.036865197122097015
                },
                "flagged": true
            }
        ]
    })
}

pub fn legacy_moderation_response() -> Value {
    json!({
        "id": "modr-legacy",
        "model": "text-moderation-001",
        "results": [
            {
                "categories": {
                    "hate": 0,
                    "hate/threatening": 0,
                    "self-harm": 1,
                    "sexual": 0,
                    "sexual/minors": 0,
                    "violence": 0,
                    "violence/graphic": 0
                },
                "category_scores": {
                    "hate": 0.5,
                    "hate/threatening": 0.25,
                    "self-harm": 0.75,
                    "sexual": 0.125,
                    "sexual/minors": 0.0625,
                    "violence": 0.5,
                    "violence/graphic": 0.03125
                },
                "flagged": 1
            }
        ]
    })
}

pub fn error_body(message: &str, error_type: &str) -> Value {
    json!({
        "error": {
            "message": message,
            "type": error_type,
            "param": null,
            "code": null
        }
    })
}
