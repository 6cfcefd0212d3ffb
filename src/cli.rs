use crate::config::{ResolvedConfig, ResolvedConfigFile};
use crate::constants::{DATE_HELP_TEXT, DEFAULT_DATA_URL};
use crate::errors::{AppError, AppResult};
use crate::fetcher::{filter_boletines_by_range, load_dataset};
use crate::models::DatasetSource;
use crate::report::write_reports;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Parses command-line arguments and executes the aggregation run.
///
/// This function handles two subcommands:
/// - `cli`: Manual CLI with default configuration
/// - `toml`: Run using a TOML configuration file
///
/// Both subcommands execute the same workflow:
/// 1. Loads the bulletin document (remote fetch with retry, or local read)
/// 2. Filters bulletins by the specified publication date range
/// 3. Computes every derived view (summary, time series, distributions, flattened records)
/// 4. Writes one JSON report per view into the output directory
///
/// # Errors
///
/// Returns an error if:
/// - Invalid date bounds are specified
/// - The document cannot be fetched, read, or decoded
/// - Report files cannot be written
pub async fn cli() -> AppResult<()> {
    let cmd = Command::new("boletines-cli")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("cli")
                .about("Fetch the bulletin dataset, aggregate it, and write derived reports")
                .after_help("Uses the published dataset URL by default.\nExample:\n  boletines-cli cli -s 2024-01 -e 2024-06 --pretty")
                .arg(
                    Arg::new("data")
                        .short('d')
                        .long("data")
                        .help("Dataset source: URL or local JSON file")
                        .default_value(DEFAULT_DATA_URL)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("start")
                        .short('s')
                        .long("start")
                        .help(DATE_HELP_TEXT)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("end")
                        .short('e')
                        .long("end")
                        .help(DATE_HELP_TEXT)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Directory for the derived JSON reports")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("pretty")
                        .short('p')
                        .long("pretty")
                        .help("Pretty-print the derived JSON reports")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("keep_raw")
                        .long("keep-raw")
                        .alias("kr")
                        .help("Keep a raw snapshot of the fetched document")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("toml")
                .about("Run using a TOML configuration file")
                .arg(
                    Arg::new("config")
                        .help("Path to the TOML config file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        );

    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    match matches.subcommand() {
        Some(("cli", sub)) => {
            let mut resolved_config = ResolvedConfig::default();
            if let Some(data) = sub.get_one::<String>("data") {
                resolved_config.data_source = data.clone();
            }
            if let Some(output) = sub.get_one::<PathBuf>("output") {
                resolved_config.derived_dir = output.clone();
            }
            if sub.get_flag("pretty") {
                resolved_config.pretty_json = true;
            }
            if sub.get_flag("keep_raw") {
                resolved_config.keep_raw_snapshot = true;
            }
            let start = sub.get_one::<String>("start").map(|s| s.as_str());
            let end = sub.get_one::<String>("end").map(|s| s.as_str());

            run_workflow(start, end, &resolved_config).await?;
        }
        Some(("toml", sub)) => {
            let config_path = sub
                .get_one::<PathBuf>("config")
                .expect("config is required");

            let file_config = ResolvedConfigFile::from_toml_file(config_path)?;
            run_workflow(
                file_config.start.as_deref(),
                file_config.end.as_deref(),
                &file_config.resolved,
            )
            .await?;
        }
        _ => {
            cmd_for_help
                .print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        }
    }

    Ok(())
}

async fn run_workflow(
    start: Option<&str>,
    end: Option<&str>,
    resolved_config: &ResolvedConfig,
) -> AppResult<()> {
    let source = DatasetSource::from(resolved_config.data_source.as_str());

    print_run_info(&source, start, end);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(resolved_config.request_timeout_secs))
        .build()
        .map_err(|e| AppError::NetworkError(format!("Failed to build HTTP client: {e}")))?;

    let dataset = load_dataset(&client, &source, resolved_config).await?;

    let boletines = filter_boletines_by_range(&dataset.boletines, start, end)?;
    info!(
        total = dataset.boletines.len(),
        selected = boletines.len(),
        "Bulletins selected"
    );

    let stats = write_reports(
        &boletines,
        &resolved_config.derived_dir,
        resolved_config.pretty_json,
    )
    .await?;

    info!(
        boletines = boletines.len(),
        proyectos = stats.total_proyectos,
        resolutivos = stats.total_resolutivos,
        files = stats.files_written,
        "All operations completed successfully"
    );

    Ok(())
}

fn print_run_info(source: &DatasetSource, start: Option<&str>, end: Option<&str>) {
    let start_text = start.unwrap_or("first available");
    let end_text = end.unwrap_or("last available");
    info!(
        source = %source.display_name(),
        start = start_text,
        end = end_text,
        "Starting aggregation run"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Command;

    #[test]
    fn cli_command_parses_default_data_source() {
        let cmd = Command::new("boletines-cli").subcommand(
            Command::new("cli").arg(
                clap::Arg::new("data")
                    .short('d')
                    .long("data")
                    .default_value(DEFAULT_DATA_URL),
            ),
        );

        let matches = cmd
            .try_get_matches_from(vec!["boletines-cli", "cli"])
            .unwrap();
        let sub = matches.subcommand_matches("cli").unwrap();
        let data = sub.get_one::<String>("data").unwrap();
        assert!(matches!(
            DatasetSource::from(data.as_str()),
            DatasetSource::Remote(_)
        ));
    }

    #[test]
    fn toml_command_requires_path() {
        let cmd = Command::new("boletines-cli")
            .subcommand(Command::new("toml").arg(clap::Arg::new("config").required(true)));
        let err = cmd.try_get_matches_from(vec!["boletines-cli", "toml"]);
        assert!(err.is_err());
    }

    #[test]
    fn test_print_run_info_runs() {
        let source = DatasetSource::from("data/boletines.json");
        print_run_info(&source, Some("2024-01"), Some("2024-06"));
        print_run_info(&source, None, None);
    }
}
