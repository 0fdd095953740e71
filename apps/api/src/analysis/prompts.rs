// Prompts for delegated resume analysis.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

const ANALYSIS_ROLE: &str =
    "You are an experienced technical recruiter screening resumes against job descriptions.";

pub fn analysis_system() -> String {
    format!("{ANALYSIS_ROLE} {JSON_ONLY_SYSTEM}")
}

const ANALYSIS_INSTRUCTIONS: &str = r#"Compare the resume below with the job description and assess how well the candidate matches.

Return exactly this JSON shape:
{
  "success": true,
  "analysis": {
    "overallScore": <integer 0-100>,
    "matchedSkills": [<skills required by the job that the resume demonstrates>],
    "missingSkills": [<skills required by the job that the resume lacks>],
    "experienceMatch": "<one sentence on how the candidate's experience fits>",
    "educationMatch": "<one sentence on how the candidate's education fits>",
    "summary": "<two or three sentence assessment>",
    "recommendation": "strong" | "moderate" | "weak"
  }
}

Use "strong" for scores of 75 or more, "moderate" for 50 to 74 and "weak" below 50.
Capitalize the first letter of every skill name."#;

/// Documents are appended verbatim; nothing inside them is treated as a placeholder.
pub fn build_analysis_prompt(resume_text: &str, job_description_text: &str) -> String {
    format!(
        "{ANALYSIS_INSTRUCTIONS}\n\nRESUME:\n{resume_text}\n\nJOB DESCRIPTION:\n{job_description_text}"
    )
}
