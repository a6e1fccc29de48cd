pub mod file_review_prompt;
