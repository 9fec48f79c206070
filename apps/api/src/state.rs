use std::sync::Arc;

use crate::config::Config;
use crate::draft::DraftGenerator;
use crate::mailer::Mailer;
use crate::storage::UploadStore;
use crate::workflow::WorkflowStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable draft generator. Production: `LlmDraftGenerator` over the
    /// shared LLM client; tests swap in a stub.
    pub generator: Arc<dyn DraftGenerator>,
    /// Pluggable outbound mail. Production: `SmtpMailer` against the fixed
    /// relay; tests swap in a recorder.
    pub mailer: Arc<dyn Mailer>,
    pub uploads: UploadStore,
    pub workflows: WorkflowStore,
}
