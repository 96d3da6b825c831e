use std::collections::HashMap;

use crate::config::ClientConfig;
use crate::models::completion::CompletionRequest;

pub fn create_test_completion_request(model: &str, prompt: &str) -> CompletionRequest {
    let mut logit_bias = HashMap::new();
    logit_bias.insert("50256".to_string(), -100);

    CompletionRequest {
        model: model.to_string(),
        prompt: Some(prompt.to_string()),
        max_tokens: Some(64),
        temperature: Some(0.7),
        top_p: Some(1.0),
        n: Some(1),
        stream: Some(false),
        logprobs: Some(2),
        echo: Some(true),
        stop: Some(vec!["\n".to_string(), "END".to_string()]),
        presence_penalty: Some(0.5),
        frequency_penalty: Some(0.25),
        best_of: Some(2),
        logit_bias: Some(logit_bias),
        user: Some("user-1234".to_string()),
    }
}

pub fn create_test_config(base_url: &str) -> ClientConfig {
    ClientConfig {
        api_key: "test-key".to_string(),
        base_url: base_url.to_string(),
        connect_timeout_secs: 5,
        read_timeout_secs: 5,
        request_timeout_secs: None,
    }
}
