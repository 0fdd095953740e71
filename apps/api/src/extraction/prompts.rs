// Prompts for AI-assisted document text extraction.

const EXTRACTION_SYSTEM_TEMPLATE: &str = "You are a document text extraction assistant. \
Your task is to extract ALL text content from the provided {file_type} document.

Rules:
- Extract every piece of text exactly as it appears
- Preserve the structure and formatting (headers, paragraphs, bullet points)
- Include all sections: personal info, experience, education, skills, etc.
- Do not summarize or interpret - just extract the raw text
- If the document appears to be a resume/CV, extract all details including contact information, job titles, dates, descriptions
- Return ONLY the extracted text, no commentary or explanations";

pub fn extraction_system(file_type: &str) -> String {
    EXTRACTION_SYSTEM_TEMPLATE.replace("{file_type}", file_type)
}

pub fn extraction_request(file_type: &str, file_name: &str) -> String {
    format!(
        "Extract all text content from this {file_type} document named \"{file_name}\". \
         Return only the extracted text."
    )
}
