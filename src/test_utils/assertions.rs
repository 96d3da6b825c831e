use crate::models::completion::CompletionChoice;
use crate::models::{CompletionUsage, FinishReason};

pub fn assert_usage(
    usage: &CompletionUsage,
    expected_prompt_tokens: u32,
    expected_completion_tokens: u32,
    expected_total_tokens: u32,
) {
    assert_eq!(usage.prompt_tokens, expected_prompt_tokens);
    assert_eq!(usage.completion_tokens, expected_completion_tokens);
    assert_eq!(usage.total_tokens, expected_total_tokens);
}

pub fn assert_choice(choice: &CompletionChoice, index: u32, expected_text: &str) {
    assert_eq!(choice.index, index);
    assert_eq!(choice.text, expected_text);
    assert_eq!(choice.finish_reason, Some(FinishReason::Stop));
}
