//! Confirmation Gateway Contract
//!
//! The modal component that gates destructive actions and shows outcome
//! notifications. It is consumed, not owned: this crate only builds
//! well-formed prompts and reacts to the user's choice. Rendering, focus
//! handling and auto-close timing all live with the implementor.

use async_trait::async_trait;
use std::time::Duration;

/// Default auto-close delay for success/error notifications
pub const DEFAULT_AUTO_CLOSE: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Confirm,
    Success,
    Error,
}

/// Input surface of the confirmation modal
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    /// Success/error prompts auto-close after this delay unless dismissed;
    /// confirm prompts stay open until the user picks a side.
    pub auto_close: Option<Duration>,
}

impl Prompt {
    pub fn confirm(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: PromptKind::Confirm,
            title: title.into(),
            message: message.into(),
            confirm_text: "OK".to_string(),
            cancel_text: "Cancel".to_string(),
            auto_close: None,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: PromptKind::Success,
            title: title.into(),
            message: message.into(),
            confirm_text: "OK".to_string(),
            cancel_text: String::new(),
            auto_close: Some(DEFAULT_AUTO_CLOSE),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: PromptKind::Error,
            title: title.into(),
            message: message.into(),
            confirm_text: "OK".to_string(),
            cancel_text: String::new(),
            auto_close: Some(DEFAULT_AUTO_CLOSE),
        }
    }
}

/// Modal collaborator gating destructive actions
///
/// `confirm` resolves to `true` only on an explicit confirm; dismissing the
/// prompt must resolve `false` and have no other side effect.
#[async_trait]
pub trait ConfirmationGateway: Send + Sync {
    async fn confirm(&self, prompt: Prompt) -> bool;

    /// Fire-and-forget success/error notification
    async fn notify(&self, prompt: Prompt);
}
