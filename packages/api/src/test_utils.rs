use crate::config::{AppConfig, AppMode, ContactConfig};
use crate::state::AppState;
use crate::transport::ContactTransport;
use crate::types::{ContactRequest, SubmitTransport};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Transport that records every request and answers with a fixed outcome.
pub struct RecordingTransport {
    requests: Mutex<Vec<ContactRequest>>,
    fail_with: Option<String>,
}

impl RecordingTransport {
    pub fn succeeding() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn requests(&self) -> Vec<ContactRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl ContactTransport for RecordingTransport {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn deliver(&self, request: &ContactRequest) -> Result<SubmitTransport> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());
        match &self.fail_with {
            Some(message) => anyhow::bail!("{message}"),
            None => Ok(SubmitTransport::Multipart),
        }
    }
}

pub struct TestContext {
    pub state: Arc<AppState>,
    pub transport: Arc<RecordingTransport>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_transport(RecordingTransport::succeeding())
    }

    pub fn with_transport(transport: RecordingTransport) -> Self {
        let transport = Arc::new(transport);
        let state = Arc::new(AppState {
            transport: transport.clone(),
            config: AppConfig {
                mode: AppMode::Local,
                contact: ContactConfig::Console,
                whatsapp_number: crate::config::DEFAULT_WHATSAPP_NUMBER.to_string(),
            },
        });
        Self { state, transport }
    }

    pub fn set_global(&self) {
        // Thread-local, so each test gets its own isolated AppState
        crate::state::TEST_STATE.with(|s| {
            *s.borrow_mut() = Some(self.state.clone());
        });
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        crate::state::TEST_STATE.with(|s| {
            *s.borrow_mut() = None;
        });
    }
}
