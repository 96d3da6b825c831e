use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use completions_client::{
    ClientError, CompletionApi, CompletionRequest, CompletionResponse, ModerationRequest,
    ModerationResponse,
};

#[derive(Default)]
pub struct MockCompletionApi {
    completions: Arc<Mutex<VecDeque<Result<CompletionResponse, ClientError>>>>,
    moderations: Arc<Mutex<VecDeque<Result<ModerationResponse, ClientError>>>>,
    completion_calls: Arc<Mutex<Vec<CompletionRequest>>>,
    moderation_calls: Arc<Mutex<Vec<ModerationRequest>>>,
}

impl MockCompletionApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_completion(&self, response: Result<CompletionResponse, ClientError>) {
        self.completions.lock().unwrap().push_back(response);
    }

    pub fn add_moderation(&self, response: Result<ModerationResponse, ClientError>) {
        self.moderations.lock().unwrap().push_back(response);
    }

    pub fn completion_calls(&self) -> Vec<CompletionRequest> {
        self.completion_calls.lock().unwrap().clone()
    }

    pub fn moderation_calls(&self) -> Vec<ModerationRequest> {
        self.moderation_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionApi for MockCompletionApi {
    async fn create_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, ClientError> {
        self.completion_calls.lock().unwrap().push(request.clone());
        self.completions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::NetworkError("no mock response".to_string())))
    }

    async fn moderations(
        &self,
        request: &ModerationRequest,
    ) -> Result<ModerationResponse, ClientError> {
        self.moderation_calls.lock().unwrap().push(request.clone());
        self.moderations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::NetworkError("no mock response".to_string())))
    }
}
