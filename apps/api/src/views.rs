//! HTML pages for the three-step workflow, rendered from template constants.
//! User-supplied values are escaped before substitution.

use crate::workflow::ApplicationDraft;

const PAGE_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body { font-family: sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; }
  label { display: block; margin-top: 1rem; font-weight: bold; }
  input[type=text], input[type=email], textarea { width: 100%; padding: 0.4rem; }
  textarea { min-height: 12rem; }
  button { margin-top: 1.5rem; padding: 0.5rem 1.5rem; }
  .error { color: #b00020; }
</style>
</head>
<body>
{content}
</body>
</html>"#;

const INDEX_CONTENT: &str = r#"<h1>Job Application Mailer</h1>
<form method="post" action="/" enctype="multipart/form-data">
  <label for="hr_email">HR Email</label>
  <input type="email" id="hr_email" name="hr_email" required>
  <label for="hr_name">HR Name</label>
  <input type="text" id="hr_name" name="hr_name" required>
  <label for="job_title">Job Title</label>
  <input type="text" id="job_title" name="job_title" required>
  <label for="job_description">Job Description</label>
  <textarea id="job_description" name="job_description" required></textarea>
  <label for="resume">Resume</label>
  <input type="file" id="resume" name="resume" required>
  <button type="submit">Generate Draft</button>
</form>"#;

const PREVIEW_CONTENT: &str = r#"<h1>Review Your Application</h1>
<p>Attachment: {resume_filename}</p>
<form method="post" action="/preview">
  <label for="hr_email">To</label>
  <input type="email" id="hr_email" name="hr_email" value="{hr_email}" required>
  <label for="subject">Subject</label>
  <input type="text" id="subject" name="subject" value="{subject}" required>
  <label for="email_body">Email Body</label>
  <textarea id="email_body" name="email_body" required>{email_body}</textarea>
  <button type="submit">Send Email</button>
</form>"#;

const SUCCESS_CONTENT: &str = r#"<h1>Email Sent</h1>
<p>Your application has been sent.</p>
<p><a href="/">Start another application</a></p>"#;

const ERROR_CONTENT: &str = r#"<h1 class="error">{title}</h1>
<p>{message}</p>
<p><a href="/">Back to the application form</a></p>"#;

pub fn index_page() -> String {
    render("Job Application Mailer", INDEX_CONTENT)
}

pub fn preview_page(draft: &ApplicationDraft) -> String {
    let content = PREVIEW_CONTENT
        .replace("{resume_filename}", &escape(&draft.resume.original_filename))
        .replace("{hr_email}", &escape(&draft.hr_email))
        .replace("{subject}", &escape(&draft.subject))
        .replace("{email_body}", &escape(&draft.body));
    render("Review Your Application", &content)
}

pub fn success_page() -> String {
    render("Email Sent", SUCCESS_CONTENT)
}

pub fn error_page(title: &str, message: &str) -> String {
    let content = ERROR_CONTENT
        .replace("{title}", &escape(title))
        .replace("{message}", &escape(message));
    render(title, &content)
}

fn render(title: &str, content: &str) -> String {
    PAGE_SHELL
        .replace("{title}", &escape(title))
        .replace("{content}", content)
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoredResume;

    fn draft() -> ApplicationDraft {
        ApplicationDraft {
            hr_email: "jane@co.com".to_string(),
            hr_name: "Jane".to_string(),
            job_title: "Backend Engineer".to_string(),
            job_description: "Build APIs.".to_string(),
            subject: "Application for Backend Engineer | Vamsi Krishna".to_string(),
            body: "Dear Jane,\n\nI am writing to apply.".to_string(),
            resume: StoredResume {
                storage_key: "abc.pdf".to_string(),
                original_filename: "resume.pdf".to_string(),
            },
        }
    }

    #[test]
    fn test_index_page_has_all_intake_fields() {
        let html = index_page();
        for field in ["hr_email", "hr_name", "job_title", "job_description", "resume"] {
            assert!(html.contains(&format!("name=\"{field}\"")), "missing {field}");
        }
        assert!(html.contains("multipart/form-data"));
    }

    #[test]
    fn test_preview_page_echoes_draft_fields() {
        let html = preview_page(&draft());
        assert!(html.contains("jane@co.com"));
        assert!(html.contains("Application for Backend Engineer | Vamsi Krishna"));
        assert!(html.contains("Dear Jane,"));
        assert!(html.contains("resume.pdf"));
    }

    #[test]
    fn test_preview_page_escapes_user_content() {
        let mut d = draft();
        d.body = "<script>alert('x')</script>".to_string();
        let html = preview_page(&d);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_error_page_shows_title_and_message() {
        let html = error_page("Sending failed", "The email could not be sent.");
        assert!(html.contains("Sending failed"));
        assert!(html.contains("The email could not be sent."));
    }
}
