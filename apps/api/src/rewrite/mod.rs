//! Resume Rewrite: asks the LLM to tailor a resume to one job description.
//!
//! All LLM calls go through llm_client, no direct API calls here.

pub mod handlers;
pub mod prompts;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::rewrite::prompts::{REWRITE_PROMPT_TEMPLATE, REWRITE_SYSTEM};

/// Builds the user prompt. The job description goes first so the model reads
/// the target before the material it rewrites.
pub fn build_rewrite_prompt(job_description: &str, resume: &str) -> String {
    REWRITE_PROMPT_TEMPLATE
        .replace("{job_description}", job_description.trim())
        .replace("{resume}", resume.trim())
}

/// Returns the rewritten resume text.
pub async fn rewrite_resume(
    llm: &LlmClient,
    job_description: &str,
    resume: &str,
) -> Result<String, AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    if resume.trim().is_empty() {
        return Err(AppError::Validation("resume cannot be empty".to_string()));
    }

    let prompt = build_rewrite_prompt(job_description, resume);
    llm.call_text(&prompt, REWRITE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume rewrite failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_texts() {
        let prompt = build_rewrite_prompt("  Senior Rust Engineer  ", "Jane Doe\nPython dev\n");
        assert!(prompt.contains("Job Description:\nSenior Rust Engineer\n"));
        assert!(prompt.ends_with("Resume:\nJane Doe\nPython dev"));
        assert!(!prompt.contains("{resume}"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[test]
    fn test_prompt_orders_job_before_resume() {
        let prompt = build_rewrite_prompt("JOBTEXT", "RESUMETEXT");
        assert!(prompt.find("JOBTEXT").unwrap() < prompt.find("RESUMETEXT").unwrap());
    }

    #[tokio::test]
    async fn test_blank_inputs_rejected_before_llm_call() {
        let llm = LlmClient::new("unused".to_string()).unwrap();

        let err = rewrite_resume(&llm, "  ", "resume").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = rewrite_resume(&llm, "job", "").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
