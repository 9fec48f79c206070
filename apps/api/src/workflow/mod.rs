//! Application workflow — the typed, per-session state carrier.
//!
//! One browser session owns at most one in-flight application. The workflow
//! is created at intake, reviewed (and possibly edited) at preview, and
//! discarded once the email is sent. Stage transitions are validated at every
//! step entry; out-of-order requests get a typed error instead of a
//! missing-key fault.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::storage::StoredResume;

pub mod handlers;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("no application in progress for this session")]
    NotStarted,

    #[error("cannot {action} an application that is already {stage:?}")]
    InvalidTransition { stage: Stage, action: &'static str },
}

/// Where a session's application stands.
/// `Sent` is terminal; the workflow is discarded on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Drafted,
    Reviewed,
    Sent,
}

/// Everything collected and generated for one application.
/// Lives only in the session store; never persisted.
#[derive(Debug, Clone)]
pub struct ApplicationDraft {
    pub hr_email: String,
    pub hr_name: String,
    pub job_title: String,
    pub job_description: String,
    pub subject: String,
    pub body: String,
    pub resume: StoredResume,
}

#[derive(Debug, Clone)]
pub struct Workflow {
    pub stage: Stage,
    pub draft: ApplicationDraft,
    pub created_at: DateTime<Utc>,
}

impl Workflow {
    pub fn new(draft: ApplicationDraft) -> Self {
        Self {
            stage: Stage::Drafted,
            draft,
            created_at: Utc::now(),
        }
    }

    /// Entering the preview step. Re-rendering an already reviewed draft is
    /// legal; reviewing after send is not.
    pub fn mark_reviewed(&mut self) -> Result<(), WorkflowError> {
        match self.stage {
            Stage::Drafted | Stage::Reviewed => {
                self.stage = Stage::Reviewed;
                Ok(())
            }
            Stage::Sent => Err(WorkflowError::InvalidTransition {
                stage: self.stage,
                action: "review",
            }),
        }
    }

    /// Entering the send step. Sending straight from `Drafted` is legal (the
    /// preview form can be submitted without a re-render); double-send is not.
    pub fn mark_sent(&mut self) -> Result<(), WorkflowError> {
        match self.stage {
            Stage::Drafted | Stage::Reviewed => {
                self.stage = Stage::Sent;
                Ok(())
            }
            Stage::Sent => Err(WorkflowError::InvalidTransition {
                stage: self.stage,
                action: "send",
            }),
        }
    }
}

/// In-memory store mapping session ids to workflows.
///
/// Concurrent requests within one session race last-write-wins on the slot,
/// matching the accepted hazard in the workflow model.
#[derive(Clone, Default)]
pub struct WorkflowStore {
    inner: Arc<RwLock<HashMap<Uuid, Workflow>>>,
}

impl WorkflowStore {
    pub fn insert(&self, session_id: Uuid, workflow: Workflow) {
        self.inner
            .write()
            .expect("workflow store lock poisoned")
            .insert(session_id, workflow);
    }

    pub fn get(&self, session_id: Uuid) -> Option<Workflow> {
        self.inner
            .read()
            .expect("workflow store lock poisoned")
            .get(&session_id)
            .cloned()
    }

    pub fn remove(&self, session_id: Uuid) -> Option<Workflow> {
        self.inner
            .write()
            .expect("workflow store lock poisoned")
            .remove(&session_id)
    }
}
