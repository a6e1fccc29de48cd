use std::sync::Arc;
use futures::future::join_all;

use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::helpers::prompt_generator::generate_file_review_prompt;
use crate::prompts::file_review_prompt::MAX_POINTS_PER_CATEGORY;
use crate::structs::file_analysis::FileAnalysis;
use crate::structs::file_record::FileRecord;
use crate::structs::review_points::ReviewPoints;
use crate::traits::ai_provider::AiProvider;

/// Asks the completion model for a short review of each file.
#[derive(Clone)]
pub struct FileCommentary {
    ai_provider: Arc<dyn AiProvider>,
}

impl FileCommentary {
    pub fn new(ai_provider: Arc<dyn AiProvider>) -> Self {
        Self { ai_provider }
    }

    /// Reviews every file concurrently. Output order matches `files`.
    pub async fn review_all(&self, files: &[FileRecord]) -> Vec<FileAnalysis> {
        log::info!("🤖 Requesting reviews for {} files", files.len());

        let analyses = join_all(files.iter().map(|file| self.review(file))).await;

        let reviewed = analyses
            .iter()
            .filter(|a| !(a.good.is_empty() && a.bad.is_empty() && a.improvements.is_empty()))
            .count();
        log::info!("✅ Reviews settled: {} with feedback, {} empty", reviewed, analyses.len() - reviewed);

        analyses
    }

    /// Never fails: a failed call or an unparseable answer yields empty lists.
    pub async fn review(&self, file: &FileRecord) -> FileAnalysis {
        let prompt = generate_file_review_prompt(file);

        let response = match self.ai_provider.chat(String::new(), vec![prompt]).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("⚠️ Review request failed for {}: {}", file.path, e);
                return FileAnalysis::empty(&file.path);
            }
        };

        match parse_review(&file.path, &response) {
            Ok(review) => FileAnalysis::from_review(&file.path, review),
            Err(e) => {
                log::warn!("⚠️ {}", e);
                FileAnalysis::empty(&file.path)
            }
        }
    }
}

/// Parses the model's answer, accepting an optional markdown code fence.
pub fn parse_review(path: &str, response: &str) -> AnalyzerResult<ReviewPoints> {
    let body = strip_code_fence(response);

    serde_json::from_str::<ReviewPoints>(body)
        .map(|review| review.truncated(MAX_POINTS_PER_CATEGORY))
        .map_err(|e| AnalyzerError::CompletionParseFailure {
            path: path.to_string(),
            reason: e.to_string(),
        })
}

fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // drop the language tag on the opening line
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
