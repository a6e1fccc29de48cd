use crate::prompts::file_review_prompt::{FILE_REVIEW_INSTRUCTIONS, MAX_POINTS_PER_CATEGORY};
use crate::structs::file_record::FileRecord;

pub fn generate_file_review_prompt(file: &FileRecord) -> String {
    format!(
        "Analyze the following code file content:\n\n{}\n\n{}",
        file.content,
        FILE_REVIEW_INSTRUCTIONS.replace("{max}", &MAX_POINTS_PER_CATEGORY.to_string())
    )
}
