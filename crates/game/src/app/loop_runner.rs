use std::process::ExitCode;

use engine::resolve_app_paths;
use tracing::{error, info};

use super::bootstrap::AppWiring;
use super::session::run_session;

pub(crate) fn run(app: AppWiring) -> ExitCode {
    let paths = match resolve_app_paths() {
        Ok(paths) => paths,
        Err(err) => {
            error!(error = %err, "startup_failed");
            return ExitCode::FAILURE;
        }
    };

    match run_session(&app.config, &paths) {
        Ok(reports) => {
            let spawned: usize = reports.iter().map(|report| report.summary.spawned).sum();
            info!(levels = reports.len(), spawned, "session_complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "session_failed");
            ExitCode::FAILURE
        }
    }
}
