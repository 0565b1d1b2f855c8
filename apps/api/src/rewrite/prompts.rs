// LLM prompt constants for the Rewrite module.

/// System prompt for resume rewriting.
pub const REWRITE_SYSTEM: &str =
    "You are an expert resume editor that rewrites resumes to align with job descriptions.";

/// Rewrite prompt template. Replace `{job_description}` and `{resume}` before sending.
pub const REWRITE_PROMPT_TEMPLATE: &str = "Rewrite the following resume to better fit the following job description.

Job Description:
{job_description}

Resume:
{resume}";
