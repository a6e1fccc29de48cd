use std::sync::Arc;
use futures::future::{join_all, BoxFuture};
use futures::stream::{self, StreamExt};
use futures::FutureExt;

use crate::config::constants::FILE_FETCH_CONCURRENCY;

use crate::enums::content_kind::ContentKind;
use crate::structs::config::github_config::GithubConfig;
use crate::structs::file_record::FileRecord;
use crate::structs::github::content_entry::ContentEntry;
use crate::structs::repo_ref::RepoRef;
use crate::traits::source_host::SourceHost;

/// Depth-first collector of reviewable source files.
///
/// Directories are listed concurrently, then at most `max_files` of the
/// matching files are fetched. Results keep the listing order.
/// Failures below a directory or on a single file are logged and treated as
/// "nothing here"; the walk itself never fails.
#[derive(Clone)]
pub struct TreeWalker {
    source_host: Arc<dyn SourceHost>,
    source_extensions: Vec<String>,
    excluded_dirs: Vec<String>,
    max_files: usize,
}

impl TreeWalker {
    pub fn new(source_host: Arc<dyn SourceHost>, config: &GithubConfig) -> Self {
        Self {
            source_host,
            source_extensions: config.source_extensions.iter().map(|ext| ext.to_ascii_lowercase()).collect(),
            excluded_dirs: config.excluded_dirs.clone(),
            max_files: config.max_files,
        }
    }

    /// Walks everything below the already-fetched root listing.
    pub async fn collect_files(&self, repo: &RepoRef, token: Option<&str>, root_entries: Vec<ContentEntry>) -> Vec<FileRecord> {
        log::info!("📂 Collecting source files for {}", repo);

        let mut paths = self.walk_entries(repo, token, root_entries).await;

        if paths.len() > self.max_files {
            log::warn!(
                "⚠️ {} source files found in {}, reviewing the first {}",
                paths.len(),
                repo,
                self.max_files
            );
            paths.truncate(self.max_files);
        }

        let files: Vec<FileRecord> = stream::iter(paths)
            .map(|path| self.fetch_file(repo, token, path))
            .buffered(FILE_FETCH_CONCURRENCY)
            .filter_map(|file| async move { file })
            .collect()
            .await;

        log::info!("📄 Collected {} source files from {}", files.len(), repo);
        files
    }

    pub fn is_source_file(&self, entry: &ContentEntry) -> bool {
        entry
            .extension()
            .is_some_and(|ext| self.source_extensions.contains(&ext))
    }

    pub fn is_excluded_dir(&self, path: &str) -> bool {
        self.excluded_dirs.iter().any(|dir| path.contains(dir.as_str()))
    }

    /// Source file paths below `entries`, depth-first.
    fn walk_entries<'a>(&'a self, repo: &'a RepoRef, token: Option<&'a str>, entries: Vec<ContentEntry>) -> BoxFuture<'a, Vec<String>> {
        async move {
            let visits = entries.into_iter().map(|entry| self.visit(repo, token, entry));
            join_all(visits).await.into_iter().flatten().collect()
        }
        .boxed()
    }

    fn visit<'a>(&'a self, repo: &'a RepoRef, token: Option<&'a str>, entry: ContentEntry) -> BoxFuture<'a, Vec<String>> {
        async move {
            match entry.kind {
                ContentKind::File if self.is_source_file(&entry) => vec![entry.path],
                ContentKind::Dir if !self.is_excluded_dir(&entry.path) => {
                    match self.source_host.list_directory(repo, &entry.path, token).await {
                        Ok(children) => self.walk_entries(repo, token, children).await,
                        Err(e) => {
                            log::warn!("⚠️ Skipping {}/{}: {}", repo, entry.path, e);
                            Vec::new()
                        }
                    }
                }
                _ => Vec::new(),
            }
        }
        .boxed()
    }

    async fn fetch_file(&self, repo: &RepoRef, token: Option<&str>, path: String) -> Option<FileRecord> {
        match self.source_host.file_content(repo, &path, token).await {
            Ok(Some(content)) => Some(FileRecord { path, content }),
            Ok(None) => {
                log::warn!("⚠️ No content found for file: {}", path);
                None
            }
            Err(e) => {
                log::warn!("⚠️ Failed to fetch {}: {}", path, e);
                None
            }
        }
    }
}
