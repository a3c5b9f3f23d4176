//! MarketScope Console binary
//!
//! Submits one analysis job for the stock code given on the command line,
//! prints the streamed output as it arrives, and shows the produced report
//! when the job completes.

use std::io::Write;

use tracing_subscriber::EnvFilter;

use marketscope_api::{build_http_client, AnalysisClient, ReportClient};
use marketscope_core::AnalysisOptions;

use marketscope_console::config::ClientConfig;
use marketscope_console::models::Followup;
use marketscope_console::services::{ReportDirectory, SessionController};
use marketscope_console::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(stock_code) = std::env::args().nth(1) else {
        eprintln!("usage: marketscope-console <stock-code>");
        std::process::exit(2);
    };

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "starting analysis");

    let http = build_http_client();
    let mut controller = SessionController::new(AnalysisClient::new(
        http.clone(),
        config.base_url.clone(),
    ));
    let directory = ReportDirectory::new(ReportClient::new(http, config.base_url.clone()));
    let mut state = AppState::new();

    if let Err(err) = controller
        .submit(&mut state, &stock_code, &AnalysisOptions::default())
        .await
    {
        eprintln!("{err}");
        std::process::exit(1);
    }

    let mut printed = 0;
    while let Some((epoch, event)) = controller.next_event().await {
        let followups = controller.handle_event(&mut state, epoch, event);
        for followup in followups {
            match followup {
                Followup::OutputGrew => {
                    if let Some(session) = controller.current() {
                        print!("{}", &session.accumulated_output[printed..]);
                        let _ = std::io::stdout().flush();
                        printed = session.accumulated_output.len();
                    }
                }
                Followup::LoadReport(path) => {
                    if let Err(err) = directory.load(&mut state, &path).await {
                        tracing::warn!(error = %err, path, "report could not be loaded");
                    }
                }
                Followup::RefreshReports => {
                    directory.refresh(&mut state).await;
                }
            }
        }
    }
    controller.shutdown();

    let Some(session) = controller.current() else {
        std::process::exit(1);
    };

    // Flush whatever the terminal event appended.
    print!("{}", &session.accumulated_output[printed..]);
    let _ = std::io::stdout().flush();
    println!();
    println!("状态: {}", session.status.status_text());

    if let (Some(path), Some(content)) = (&state.report_view.path, &state.report_view.content) {
        println!("报告: {path} ({} bytes)", content.len());
    }

    if session.status != marketscope_console::models::SessionStatus::Completed {
        std::process::exit(1);
    }
}
