use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::services::ai_providers::openai::OpenAIProvider;
use crate::services::file_commentary::FileCommentary;
use crate::services::github_client::GithubClient;
use crate::services::hygiene_checker::check_hygiene;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::services::report_store::InMemoryReportStore;
use crate::services::tree_walker::TreeWalker;
use crate::services::url_resolver::resolve_repository;
use crate::structs::analysis_report::AnalysisReport;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::basic_info::BasicInfo;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::config::Config;
use crate::structs::config::github_config::GithubConfig;
use crate::structs::github::content_entry::ContentEntry;
use crate::structs::repo_ref::RepoRef;
use crate::traits::ai_provider::AiProvider;
use crate::traits::report_store::ReportStore;
use crate::traits::source_host::SourceHost;

/// Runs one analysis request end to end: resolve, fetch metadata, hygiene
/// checks, and (when a completion provider is configured) per-file reviews.
#[derive(Clone)]
pub struct RepositoryAnalyzer {
    source_host: Arc<dyn SourceHost>,
    walker: TreeWalker,
    commentary: Option<FileCommentary>,
    report_store: Arc<dyn ReportStore>,
}

impl RepositoryAnalyzer {
    pub fn new(
        source_host: Arc<dyn SourceHost>,
        ai_provider: Option<Arc<dyn AiProvider>>,
        report_store: Arc<dyn ReportStore>,
        config: &GithubConfig,
    ) -> Self {
        Self {
            walker: TreeWalker::new(Arc::clone(&source_host), config),
            source_host,
            commentary: ai_provider.map(FileCommentary::new),
            report_store,
        }
    }

    pub fn from_config(config: &Config) -> AnalyzerResult<Self> {
        let source_host: Arc<dyn SourceHost> = Arc::new(GithubClient::new(&config.github)?);
        let ai_provider = Self::create_ai_provider(&config.ai)?;

        Ok(Self::new(
            source_host,
            ai_provider,
            Arc::new(InMemoryReportStore::new()),
            &config.github,
        ))
    }

    fn create_ai_provider(config: &AiConfig) -> AnalyzerResult<Option<Arc<dyn AiProvider>>> {
        if !config.enabled {
            log::info!("ℹ️ Per-file review disabled in configuration");
            return Ok(None);
        }

        let Some(api_key) = config.api_key() else {
            log::warn!("⚠️ {} is not set, per-file review is disabled", config.api_key_env);
            return Ok(None);
        };

        let rate_limiter = Arc::new(ApiRateLimiter::new(config.rate_limit_per_minute, config.burst_per_second));
        let provider = OpenAIProvider::new(api_key, config, rate_limiter)
            .map_err(|e| AnalyzerError::config_error(&e.to_string()))?;

        log::info!("🤖 Per-file review enabled with model {}", config.model);
        Ok(Some(Arc::new(provider)))
    }

    pub fn ai_enabled(&self) -> bool {
        self.commentary.is_some()
    }

    pub fn latest_report(&self, repo: &RepoRef) -> Option<AnalysisReport> {
        self.report_store.latest(&repo.key()).map(|stored| stored.report)
    }

    pub async fn analyze(&self, request: &AnalyzeRequest) -> AnalyzerResult<AnalysisReport> {
        let repo = resolve_repository(&request.repo_url)?;
        let token = request.credential();

        log::info!("🔍 Analyzing repository: {} (authenticated: {})", repo, token.is_some());

        let metadata = self.source_host.repository(&repo, token).await?;
        let root_entries = self.root_entries(&repo, token).await;

        let root_paths: Vec<&str> = root_entries.iter().map(|entry| entry.path.as_str()).collect();
        let findings = check_hygiene(&metadata, &root_paths);
        let report = AnalysisReport::new(BasicInfo::from(&metadata), findings);

        let run_id = Uuid::new_v4();
        let key = repo.key();

        let Some(commentary) = self.commentary.clone() else {
            self.report_store.record(&key, run_id, report.clone());
            log::info!("✅ Hygiene report ready for {}", repo);
            return Ok(report);
        };

        if request.deferred {
            let pending = report.pending();
            self.report_store.record(&key, run_id, pending.clone());
            self.spawn_deferred_review(repo, token.map(String::from), root_entries, pending.clone(), run_id, commentary);
            return Ok(pending);
        }

        // detached so a dropped client connection leaves upstream calls running
        let walker = self.walker.clone();
        let store = Arc::clone(&self.report_store);
        let token = token.map(String::from);

        let review = tokio::spawn(async move {
            let files = walker.collect_files(&repo, token.as_deref(), root_entries).await;
            let report = report.completed_with(commentary.review_all(&files).await);

            store.record(&key, run_id, report.clone());
            log::info!("✅ Analysis complete for {}: {} files reviewed", repo, report.file_analyses.len());
            report
        });

        review
            .await
            .map_err(|e| AnalyzerError::unhandled("per-file review", &e.to_string()))
    }

    async fn root_entries(&self, repo: &RepoRef, token: Option<&str>) -> Vec<ContentEntry> {
        // empty repositories answer 404 here even though the metadata exists
        match self.source_host.list_directory(repo, "", token).await {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("⚠️ Could not list the root of {}: {}", repo, e);
                Vec::new()
            }
        }
    }

    fn spawn_deferred_review(
        &self,
        repo: RepoRef,
        token: Option<String>,
        root_entries: Vec<ContentEntry>,
        pending: AnalysisReport,
        run_id: Uuid,
        commentary: FileCommentary,
    ) {
        let walker = self.walker.clone();
        let store = Arc::clone(&self.report_store);
        let key = repo.key();

        log::info!("⏳ Deferring per-file review for {}", key);

        let review = tokio::spawn(async move {
            let files = walker.collect_files(&repo, token.as_deref(), root_entries).await;
            commentary.review_all(&files).await
        });

        tokio::spawn(async move {
            let report = match review.await {
                Ok(analyses) => pending.completed_with(analyses),
                Err(e) => {
                    log::error!("❌ Deferred review for {} aborted: {}", key, e);
                    pending.failed()
                }
            };

            let status = report.status;
            if store.complete(&key, run_id, report) {
                log::info!("✅ Deferred review for {} finished: {:?}", key, status);
            } else {
                log::info!("ℹ️ Deferred review for {} superseded by a newer run", key);
            }
        });
    }
}
