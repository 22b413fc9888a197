#![allow(dead_code)]
//! # Common Test Utilities
//!
//! This module provides shared mock providers so the support pipeline can be
//! exercised without a real generation backend, keeping tests isolated and
//! repeatable.

use async_trait::async_trait;
use dotenvy::dotenv;
use maya::providers::ai::AiProvider;
use maya::SupportError;
use std::fmt::Debug;
use std::sync::{Arc, Once, RwLock};

#[cfg(test)]
static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
#[cfg(test)]
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        tracing_subscriber::fmt::init();
    });
}

// --- Mock AI Provider for Logic Testing ---
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<(String, String)>>>,
    pub responses: Arc<RwLock<Vec<String>>>,
}

impl MockAiProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(responses.into_iter().rev().collect())),
        }
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, SupportError> {
        self.call_history
            .write()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        if let Some(response) = self.responses.write().unwrap().pop() {
            Ok(response)
        } else {
            Ok("Default mock response".to_string())
        }
    }
}

// --- Failing AI Provider for Fallback Testing ---

/// The failure a [`FailingAiProvider`] reports on every call.
#[derive(Clone, Debug)]
pub enum MockFailure {
    EmptyCandidates,
    Api(String),
}

/// A provider that fails every call with a fixed error class.
#[derive(Clone, Debug)]
pub struct FailingAiProvider {
    pub failure: MockFailure,
}

#[async_trait]
impl AiProvider for FailingAiProvider {
    async fn generate(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<String, SupportError> {
        match &self.failure {
            MockFailure::EmptyCandidates => Err(SupportError::EmptyCandidates),
            MockFailure::Api(text) => Err(SupportError::AiApi(text.clone())),
        }
    }
}
