// Document-to-text extraction for resume and job-description uploads.

pub mod document;
pub mod handlers;
pub mod prompts;
