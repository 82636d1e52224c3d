mod config;
mod errors;
mod models;
mod report;
mod services;

use chrono::Local;

use crate::config::Config;
use crate::errors::AppResult;
use crate::report::{correlate, platform_sanitizer, Reconciler, ReportAction};
use crate::services::ApiService;
use tracing_subscriber;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load()?;

    // Fetch both collections up front; without either one no report can be built
    let api_service = ApiService::new(&config.api)?;
    let tasks = api_service.fetch_tasks().await?;
    let users = api_service.fetch_users().await?;

    // Join tasks onto their owners
    let correlated = correlate(users, &tasks);

    let reconciler = Reconciler::new(config.report.output_dir, platform_sanitizer());
    reconciler.ensure_report_dir()?;

    let mut created = 0;
    let mut unchanged = 0;
    let mut replaced = 0;
    let mut failed = 0;

    // One report per user; a failed user never stops the rest of the batch
    let now = Local::now();
    for user in &correlated {
        match reconciler.reconcile(user, now) {
            Ok(ReportAction::Created) => {
                tracing::info!("Created report for {}", user.user.username);
                created += 1;
            }
            Ok(ReportAction::Unchanged) => {
                tracing::debug!("Report for {} is up to date", user.user.username);
                unchanged += 1;
            }
            Ok(ReportAction::Replaced) => {
                tracing::info!("Replaced report for {}", user.user.username);
                replaced += 1;
            }
            Err(e) => {
                tracing::error!("Failed to reconcile report for {}: {}", user.user.username, e);
                failed += 1;
            }
        }
    }

    tracing::info!(
        "Report run finished: {} created, {} unchanged, {} replaced, {} failed",
        created,
        unchanged,
        replaced,
        failed
    );

    Ok(())
}
