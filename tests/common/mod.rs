// tests/common/mod.rs
//! Common test utilities for probe integration tests.

pub mod mock_chat_client;

pub use mock_chat_client::MockChatClient;

/// Turn captured probe output into a string.
pub fn output_text(out: Vec<u8>) -> String {
    String::from_utf8(out).expect("probe output is utf-8")
}
