pub mod terminal;

use anyhow::Context;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::{
    modules::search::{
        application::{SearchAnimeUseCase, SearchCompletion, SearchDispatcher},
        domain::HttpTransport,
        infrastructure::ReqwestTransport,
        presentation::SearchStatus,
    },
    shared::{config::SearchConfig, utils::init_logger},
};

pub use terminal::{TerminalFrontend, QUIT_COMMAND};

/// Wire the search stack from `config`.
pub fn build_dispatcher(
    config: &SearchConfig,
) -> anyhow::Result<(SearchDispatcher, mpsc::UnboundedReceiver<SearchCompletion>)> {
    let transport: Arc<dyn HttpTransport> =
        Arc::new(ReqwestTransport::new(config).context("Failed to set up the HTTP transport")?);
    let use_case = Arc::new(SearchAnimeUseCase::from_config(transport, config)?);

    log::info!("Search endpoint: {}", use_case.endpoint());
    Ok(SearchDispatcher::new(use_case))
}

/// Entry point for the binary. With arguments, runs one search; without, reads
/// queries from stdin.
pub async fn run() -> anyhow::Result<ExitCode> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let config = SearchConfig::from_env().context("Failed to load configuration")?;
    let (dispatcher, completions) = build_dispatcher(&config)?;
    let mut frontend = TerminalFrontend::new(dispatcher, completions, std::io::stdout());

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        frontend.run_interactive(stdin).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let status = frontend.run_once(&args.join(" ")).await?;
    Ok(match status {
        SearchStatus::Found { .. } | SearchStatus::Empty => ExitCode::SUCCESS,
        SearchStatus::Idle => ExitCode::from(2),
        SearchStatus::InProgress | SearchStatus::Failed { .. } => ExitCode::FAILURE,
    })
}
