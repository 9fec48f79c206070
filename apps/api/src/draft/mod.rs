//! Draft generator — turns a job description into an application email body
//! with exactly one LLM call per submission.
//!
//! Trait-based so the HTTP layer can be exercised without network access.
//! `AppState` holds an `Arc<dyn DraftGenerator>`; the production
//! implementation wraps the shared `LlmClient`.

use async_trait::async_trait;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::LlmClient;

pub mod prompts;

/// The draft generator seam. Implement this to swap the backend without
/// touching the handlers.
#[async_trait]
pub trait DraftGenerator: Send + Sync {
    /// Returns the trimmed body text of a drafted application email.
    async fn generate(
        &self,
        job_title: &str,
        job_description: &str,
        hr_name: &str,
    ) -> Result<String, AppError>;
}

/// Production generator backed by the Claude API.
pub struct LlmDraftGenerator {
    llm: LlmClient,
}

impl LlmDraftGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl DraftGenerator for LlmDraftGenerator {
    async fn generate(
        &self,
        job_title: &str,
        job_description: &str,
        hr_name: &str,
    ) -> Result<String, AppError> {
        let prompt = prompts::build_email_prompt(job_title, job_description, hr_name);
        let body = self
            .llm
            .call_text(&prompt, prompts::EMAIL_SYSTEM)
            .await
            .map_err(|e| AppError::Generation(format!("email drafting failed: {e}")))?;

        // The model is instructed to open with the greeting; a miss is worth
        // logging but the user can still fix it in the preview step.
        let greeting = format!("Dear {hr_name},");
        if !body.starts_with(&greeting) {
            warn!("Generated draft does not open with \"{greeting}\"");
        }

        Ok(body)
    }
}

/// Deterministic subject line for a submission.
pub fn subject_line(job_title: &str) -> String {
    format!("Application for {} | {}", job_title, prompts::CANDIDATE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_line_format() {
        assert_eq!(
            subject_line("Backend Engineer"),
            "Application for Backend Engineer | Vamsi Krishna"
        );
    }

    #[test]
    fn test_subject_line_uses_title_verbatim() {
        assert_eq!(
            subject_line("Senior Rust Engineer (Remote)"),
            "Application for Senior Rust Engineer (Remote) | Vamsi Krishna"
        );
    }
}
