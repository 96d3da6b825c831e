pub mod config;
pub mod consts;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod stream;

#[cfg(test)]
mod test_utils;

pub use errors::ClientError;
pub use llm_client::{Client, CompletionApi};
pub use models::completion::{CompletionChoice, CompletionRequest, CompletionResponse};
pub use models::moderation::{
    Category, ModerationInput, ModerationRequest, ModerationResponse, ModerationResult,
};
pub use stream::CompletionStream;
