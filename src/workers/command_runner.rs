use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::server::api_server::ApiServer;
use crate::services::repository_analyzer::RepositoryAnalyzer;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> AnalyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Serve { host, port, config } => self.serve_command(host, port, config.as_deref()).await,
            Commands::Analyze { url, token, config } => self.analyze_command(url, token, config.as_deref()).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> AnalyzerResult<()> {
        log::info!("🚀 Initializing repolyzer configuration...");

        match ConfigManager::create_sample_config() {
            Ok(path) => {
                log::info!("📝 Edit {} to adjust the server and review settings.", path.display());
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    async fn serve_command(&self, host: Option<String>, port: Option<u16>, config_path: Option<&Path>) -> AnalyzerResult<()> {
        let mut config = Self::load_config(config_path)?;
        if let Some(host) = host {
            config.server.host = host;
        }
        if let Some(port) = port {
            config.server.port = port;
        }

        let addr: SocketAddr = tokio::net::lookup_host((config.server.host.as_str(), config.server.port))
            .await?
            .next()
            .ok_or_else(|| AnalyzerError::config_error(&format!(
                "listen address {}:{} did not resolve",
                config.server.host, config.server.port
            )))?;

        let analyzer = Arc::new(RepositoryAnalyzer::from_config(&config)?);
        if !analyzer.ai_enabled() {
            log::info!("ℹ️ Serving hygiene-only reports, fileAnalyses will be empty");
        }

        let mut server = ApiServer::new(analyzer);
        server.start(addr).await?;

        tokio::signal::ctrl_c().await?;
        server.shutdown().await
    }

    async fn analyze_command(&self, url: String, token: Option<String>, config_path: Option<&Path>) -> AnalyzerResult<()> {
        let config = Self::load_config(config_path)?;
        let analyzer = RepositoryAnalyzer::from_config(&config)?;

        let report = analyzer.analyze(&AnalyzeRequest::new(&url, token)).await.map_err(|e| {
            log::error!("❌ {}", e.user_message());
            e
        })?;

        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }

    fn load_config(path: Option<&Path>) -> AnalyzerResult<Config> {
        let config = ConfigManager::load(path).map_err(|e| {
            log::error!("❌ Failed to load configuration: {}", e);
            log::error!("💡 Run 'repolyzer init' to create a configuration file.");
            e
        })?;

        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("❌ {}", error);
            }
            return Err(AnalyzerError::config_error(&errors.join("; ")));
        }

        Ok(config)
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
