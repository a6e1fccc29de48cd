use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use repolyzer::enums::ai_provider_error::AiProviderError;
use repolyzer::enums::content_kind::ContentKind;
use repolyzer::errors::AnalyzerResult;
use repolyzer::server::api_server::routes;
use repolyzer::services::github_client::map_status;
use repolyzer::services::report_store::InMemoryReportStore;
use repolyzer::services::repository_analyzer::RepositoryAnalyzer;
use repolyzer::structs::config::github_config::GithubConfig;
use repolyzer::structs::github::content_entry::ContentEntry;
use repolyzer::structs::github::repo_metadata::RepoMetadata;
use repolyzer::structs::repo_ref::RepoRef;
use repolyzer::traits::ai_provider::AiProvider;
use repolyzer::traits::source_host::SourceHost;
use serde_json::Value;
use warp::http::StatusCode;
use warp::Filter;

/// In-memory stand-in for the GitHub contents API, serving a single repository.
pub struct FakeGithub {
    metadata: RepoMetadata,
    failure: Option<u16>,
    listing_failures: HashMap<String, u16>,
    dirs: HashMap<String, Vec<ContentEntry>>,
    files: HashMap<String, String>,
    pub calls: AtomicUsize,
    pub file_fetches: AtomicUsize,
    pub tokens: Mutex<Vec<Option<String>>>,
}

impl FakeGithub {
    pub fn new(name: &str) -> Self {
        Self {
            metadata: RepoMetadata {
                name: name.to_string(),
                description: Some("A demo repository".to_string()),
                stargazers_count: 42,
                forks_count: 7,
                open_issues_count: 3,
                language: Some("TypeScript".to_string()),
                private: false,
            },
            failure: None,
            listing_failures: HashMap::new(),
            dirs: HashMap::new(),
            files: HashMap::new(),
            calls: AtomicUsize::new(0),
            file_fetches: AtomicUsize::new(0),
            tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn description(mut self, description: Option<&str>) -> Self {
        self.metadata.description = description.map(String::from);
        self
    }

    pub fn failing_with(mut self, status: u16) -> Self {
        self.failure = Some(status);
        self
    }

    /// Makes listing `path` fail with `status` while metadata still succeeds.
    pub fn listing_fails(mut self, path: &str, status: u16) -> Self {
        self.listing_failures.insert(path.to_string(), status);
        self
    }

    pub fn dir(mut self, path: &str, entries: Vec<ContentEntry>) -> Self {
        self.dirs.insert(path.to_string(), entries);
        self
    }

    pub fn file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn track(&self, token: Option<&str>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tokens.lock().unwrap().push(token.map(String::from));
    }
}

#[async_trait]
impl SourceHost for FakeGithub {
    async fn repository(&self, repo: &RepoRef, token: Option<&str>) -> AnalyzerResult<RepoMetadata> {
        self.track(token);
        match self.failure {
            Some(status) => Err(map_status(status, r#"{"message":"upstream says no"}"#, repo)),
            None => Ok(self.metadata.clone()),
        }
    }

    async fn list_directory(&self, repo: &RepoRef, path: &str, token: Option<&str>) -> AnalyzerResult<Vec<ContentEntry>> {
        self.track(token);
        if let Some(status) = self.listing_failures.get(path) {
            return Err(map_status(*status, r#"{"message":"This repository is empty."}"#, repo));
        }
        Ok(self.dirs.get(path).cloned().unwrap_or_default())
    }

    async fn file_content(&self, _repo: &RepoRef, path: &str, token: Option<&str>) -> AnalyzerResult<Option<String>> {
        self.track(token);
        self.file_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.files.get(path).cloned())
    }
}

type Responder = dyn Fn(&str) -> Result<String, AiProviderError> + Send + Sync;

/// Completion provider that answers from a closure over the prompt.
pub struct ScriptedProvider {
    respond: Box<Responder>,
    delay: Option<Duration>,
    pub calls: AtomicUsize,
    pub finished: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&str) -> Result<String, AiProviderError> + Send + Sync + 'static,
    {
        Self {
            respond: Box::new(respond),
            delay: None,
            calls: AtomicUsize::new(0),
            finished: AtomicUsize::new(0),
        }
    }

    /// Sleeps for `delay` before answering each call.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn answering(response: &str) -> Self {
        let response = response.to_string();
        Self::new(move |_| Ok(response.clone()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn finished_count(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiProvider for ScriptedProvider {
    async fn chat(&self, _system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let response = (self.respond)(&user_prompts.join("\n"));
        self.finished.fetch_add(1, Ordering::SeqCst);
        response
    }
}

pub fn file(path: &str) -> ContentEntry {
    ContentEntry::new(path, ContentKind::File)
}

pub fn dir(path: &str) -> ContentEntry {
    ContentEntry::new(path, ContentKind::Dir)
}

pub fn analyzer(github: &Arc<FakeGithub>, provider: Option<&Arc<ScriptedProvider>>) -> Arc<RepositoryAnalyzer> {
    let source_host: Arc<dyn SourceHost> = Arc::clone(github) as Arc<dyn SourceHost>;
    let ai_provider = provider.map(|p| Arc::clone(p) as Arc<dyn AiProvider>);

    Arc::new(RepositoryAnalyzer::new(
        source_host,
        ai_provider,
        Arc::new(InMemoryReportStore::new()),
        &GithubConfig::default(),
    ))
}

pub fn api(analyzer: Arc<RepositoryAnalyzer>) -> impl Filter<Extract = (impl warp::Reply,), Error = std::convert::Infallible> + Clone + 'static {
    routes(analyzer)
}

pub async fn post_analyze<F>(api: &F, body: Value) -> (StatusCode, Value)
where
    F: Filter + 'static,
    F::Extract: warp::Reply + Send,
{
    let response = warp::test::request()
        .method("POST")
        .path("/api/analyze")
        .json(&body)
        .reply(api)
        .await;

    (response.status(), serde_json::from_slice(response.body()).unwrap())
}

pub async fn get<F>(api: &F, path: &str) -> (StatusCode, Value)
where
    F: Filter + 'static,
    F::Extract: warp::Reply + Send,
{
    let response = warp::test::request()
        .method("GET")
        .path(path)
        .reply(api)
        .await;

    (response.status(), serde_json::from_slice(response.body()).unwrap())
}
