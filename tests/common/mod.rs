#![allow(dead_code)]

pub mod sse;

use completions_client::Client;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn create_client(base_url: String) -> Client {
    init_logging();
    Client::with_base_url(reqwest::Client::new(), &base_url, "test-key")
}
