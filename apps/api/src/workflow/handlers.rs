//! Axum route handlers for the application workflow: intake, preview, send.

use axum::extract::multipart::Field;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Multipart, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::draft;
use crate::errors::AppError;
use crate::session;
use crate::state::AppState;
use crate::views;
use crate::workflow::{ApplicationDraft, Workflow, WorkflowError};

/// Attachment name when the browser sends a file part without a filename.
const DEFAULT_RESUME_NAME: &str = "resume.pdf";

#[derive(Debug, Deserialize)]
pub struct SendForm {
    pub hr_email: String,
    pub subject: String,
    pub email_body: String,
}

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(views::index_page())
}

/// POST /
///
/// Intake: parse the multipart form, store the resume, generate the draft,
/// stage the workflow in the session, redirect to the preview.
pub async fn handle_intake(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut hr_email = None;
    let mut hr_name = None;
    let mut job_title = None;
    let mut job_description = None;
    let mut resume: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart request: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "hr_email" => hr_email = Some(text_field(field, "hr_email").await?),
            "hr_name" => hr_name = Some(text_field(field, "hr_name").await?),
            "job_title" => job_title = Some(text_field(field, "job_title").await?),
            "job_description" => {
                job_description = Some(text_field(field, "job_description").await?)
            }
            "resume" => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .filter(|f| !f.is_empty())
                    .unwrap_or_else(|| DEFAULT_RESUME_NAME.to_string());
                let data = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("failed to read the resume upload: {e}"))
                })?;
                resume = Some((filename, data.to_vec()));
            }
            _ => {}
        }
    }

    let hr_email = require_field(hr_email, "hr_email")?;
    let hr_name = require_field(hr_name, "hr_name")?;
    let job_title = require_field(job_title, "job_title")?;
    let job_description = require_field(job_description, "job_description")?;
    let (resume_filename, resume_data) = resume
        .filter(|(_, data)| !data.is_empty())
        .ok_or_else(|| AppError::Validation("missing required file field `resume`".to_string()))?;

    let stored = state.uploads.store(&resume_filename, &resume_data).await?;

    let body = state
        .generator
        .generate(&job_title, &job_description, &hr_name)
        .await?;
    let subject = draft::subject_line(&job_title);

    let workflow = Workflow::new(ApplicationDraft {
        hr_email,
        hr_name,
        job_title: job_title.clone(),
        job_description,
        subject,
        body,
        resume: stored,
    });

    let (session_id, new_cookie) =
        match session::from_headers(&headers, &state.config.session_secret) {
            Some(id) => (id, None),
            None => {
                let id = Uuid::new_v4();
                (id, Some(session::set_cookie(id, &state.config.session_secret)))
            }
        };

    state.workflows.insert(session_id, workflow);
    info!(job_title = %job_title, "Draft staged for preview");

    let mut response = Redirect::to("/preview").into_response();
    if let Some(cookie) = new_cookie {
        let value = HeaderValue::from_str(&cookie)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid session cookie: {e}")))?;
        response.headers_mut().insert(SET_COOKIE, value);
    }
    Ok(response)
}

/// GET /preview
///
/// Renders the staged draft with editable recipient, subject, and body.
pub async fn handle_preview(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    let session_id = session::from_headers(&headers, &state.config.session_secret)
        .ok_or(WorkflowError::NotStarted)?;
    let mut workflow = state
        .workflows
        .get(session_id)
        .ok_or(WorkflowError::NotStarted)?;

    workflow.mark_reviewed()?;
    let page = views::preview_page(&workflow.draft);
    state.workflows.insert(session_id, workflow);

    Ok(Html(page))
}

/// POST /preview
///
/// Send: the submitted values win over the staged draft, so edits take
/// effect. The staged workflow supplies only the resume attachment. On
/// success the workflow is discarded; a repeat submission finds no
/// application in progress.
pub async fn handle_send(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<SendForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(form) = form.map_err(|e| AppError::Validation(format!("invalid send form: {e}")))?;
    let hr_email = require_field(Some(form.hr_email), "hr_email")?;
    let subject = require_field(Some(form.subject), "subject")?;
    let email_body = require_field(Some(form.email_body), "email_body")?;

    let session_id = session::from_headers(&headers, &state.config.session_secret)
        .ok_or(WorkflowError::NotStarted)?;
    let mut workflow = state
        .workflows
        .get(session_id)
        .ok_or(WorkflowError::NotStarted)?;
    workflow.mark_sent()?;

    let resume_bytes = state.uploads.read(&workflow.draft.resume.storage_key).await?;

    state
        .mailer
        .send_application(
            &hr_email,
            &subject,
            &email_body,
            &workflow.draft.resume.original_filename,
            resume_bytes,
        )
        .await?;

    state.workflows.remove(session_id);
    info!(
        to = %hr_email,
        draft_age_secs = (chrono::Utc::now() - workflow.created_at).num_seconds(),
        "Application sent, workflow discarded"
    );

    Ok(Redirect::to("/success"))
}

/// GET /success
pub async fn handle_success() -> Html<String> {
    Html(views::success_page())
}

async fn text_field(field: Field<'_>, name: &str) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("failed to read field `{name}`: {e}")))
}

fn require_field(value: Option<String>, name: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!(
            "missing required field `{name}`"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_field_accepts_present_value() {
        assert_eq!(
            require_field(Some("jane@co.com".to_string()), "hr_email").unwrap(),
            "jane@co.com"
        );
    }

    #[test]
    fn test_require_field_rejects_missing_and_blank() {
        assert!(require_field(None, "hr_email").is_err());
        assert!(require_field(Some("   ".to_string()), "hr_email").is_err());
    }
}
