// Prompt constants and prompt-building for the draft generator.
// The candidate identity block is compile-time fixed: this is a single-tenant
// tool and the signature must be reproduced verbatim in every email.

/// Candidate identity, embedded in every prompt and in the subject line.
pub const CANDIDATE_NAME: &str = "Vamsi Krishna";
pub const PHONE_NUMBER: &str = "+91-XXXXXXXXXX";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/your-profile";
pub const EMAIL_ADDRESS: &str = "vamsikrishna9656@gmail.com";

/// System prompt for email drafting.
pub const EMAIL_SYSTEM: &str = "You are a professional career assistant.";

/// Email drafting prompt template.
/// Replace: {hr_name}, {candidate_name}, {job_title}, {job_description},
///          {phone_number}, {linkedin_url}, {email_address}
pub const EMAIL_PROMPT_TEMPLATE: &str = r#"Write a concise, formal job application email.

Rules:
- Do NOT include a subject line
- Start with: Dear {hr_name},
- Fully based on the Job Description
- No placeholder text
- No emojis

Candidate Name: {candidate_name}
Job Title: {job_title}

Job Description:
{job_description}

Signature (use exactly):
{candidate_name}
Phone: {phone_number}
LinkedIn: {linkedin_url}
Email: {email_address}"#;

/// Renders the drafting prompt for one submission.
pub fn build_email_prompt(job_title: &str, job_description: &str, hr_name: &str) -> String {
    EMAIL_PROMPT_TEMPLATE
        .replace("{hr_name}", hr_name)
        .replace("{candidate_name}", CANDIDATE_NAME)
        .replace("{job_title}", job_title)
        .replace("{job_description}", job_description)
        .replace("{phone_number}", PHONE_NUMBER)
        .replace("{linkedin_url}", LINKEDIN_URL)
        .replace("{email_address}", EMAIL_ADDRESS)
}
