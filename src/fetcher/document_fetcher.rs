use crate::config::ResolvedConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{BoletinDataset, DatasetSource};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Extracts HTTP status code from error message if present.
///
/// Looks for the pattern "HTTP {status_code}:" in the error message.
/// Returns `Some(status_code)` if found, `None` otherwise.
fn extract_status_code(msg: &str) -> Option<u16> {
    let prefix = "HTTP ";
    if let Some(start) = msg.find(prefix) {
        let start = start + prefix.len();
        let end = msg[start..].find(':').unwrap_or(msg[start..].len());
        msg[start..start + end].trim().parse().ok()
    } else {
        None
    }
}

/// Determines if an error should trigger a retry attempt.
///
/// Returns `true` for retryable errors (network errors, timeouts, 5xx HTTP status
/// codes). Returns `false` for 4xx client errors and every non-network error class.
fn should_retry(error: &AppError) -> bool {
    match error {
        AppError::NetworkError(msg) => {
            match extract_status_code(msg) {
                // 4xx = client error, don't retry; 5xx = server error, retry
                Some(status_code) => status_code >= 500,
                // No status code means transport/timeout error - retry by default
                None => true,
            }
        }
        _ => false,
    }
}

/// Configuration for retry behavior.
pub(crate) struct RetryConfig {
    max_retries: u32,
    initial_delay_ms: u64,
    max_delay_ms: u64,
}

impl From<&ResolvedConfig> for RetryConfig {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            initial_delay_ms: config.retry_initial_delay_ms,
            max_delay_ms: config.retry_max_delay_ms,
        }
    }
}

/// Calculates exponential backoff delay in milliseconds.
///
/// Formula: `min(initial_delay * 2^attempt, max_delay)`
fn calculate_backoff(attempt: u32, config: &RetryConfig) -> u64 {
    let delay = config.initial_delay_ms * 2_u64.pow(attempt);
    delay.min(config.max_delay_ms)
}

/// Fetches the bulletin document once, returning the body as text.
///
/// Non-2xx responses become `NetworkError`s with the status code embedded in the
/// message so the retry logic can classify them.
pub async fn fetch_document(client: &reqwest::Client, url: &str) -> AppResult<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::NetworkError(format!("Failed to fetch {url}: {e}")))?;

    let status = response.status();
    let response = response.error_for_status().map_err(|e| {
        let status_code = status.as_u16();
        AppError::NetworkError(format!("HTTP {status_code}: Failed to fetch {url}: {e}"))
    })?;

    response
        .text()
        .await
        .map_err(|e| AppError::NetworkError(format!("Failed to read body from {url}: {e}")))
}

/// Fetches with bounded retries and exponential backoff.
pub(crate) async fn fetch_with_retry(
    client: &reqwest::Client,
    url: &str,
    retry_config: &RetryConfig,
) -> AppResult<String> {
    let mut last_error: Option<AppError> = None;

    for attempt in 0..=retry_config.max_retries {
        match fetch_document(client, url).await {
            Ok(body) => return Ok(body),
            Err(e) => {
                if attempt < retry_config.max_retries && should_retry(&e) {
                    let delay_ms = calculate_backoff(attempt, retry_config);
                    warn!(
                        url = url,
                        attempt = attempt + 1,
                        max_retries = retry_config.max_retries + 1,
                        delay_ms = delay_ms,
                        error = %e,
                        "Retrying fetch after error"
                    );
                    tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                    last_error = Some(e);
                    continue;
                }
                return Err(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        AppError::NetworkError(format!(
            "Fetch of {url} failed after {} attempts (no error recorded)",
            retry_config.max_retries + 1
        ))
    }))
}

/// Persists the raw document body under `raw_dir`.
///
/// The file is written to a `.part` path and atomically renamed when complete,
/// so a crash never leaves a truncated snapshot behind.
async fn save_snapshot(raw_dir: &Path, body: &str) -> AppResult<PathBuf> {
    if !raw_dir.exists() {
        fs::create_dir_all(raw_dir).await.map_err(|e| {
            AppError::IoError(format!(
                "Failed to create directory {}: {e}",
                raw_dir.display()
            ))
        })?;
    }

    let filename = format!(
        "boletines-{}.json",
        chrono::Utc::now().format("%Y%m%dT%H%M%SZ")
    );
    let final_path = raw_dir.join(&filename);
    let tmp_path = raw_dir.join(format!("{filename}.part"));

    fs::write(&tmp_path, body).await.map_err(|e| {
        AppError::IoError(format!("Failed to write {}: {e}", tmp_path.display()))
    })?;

    fs::rename(&tmp_path, &final_path).await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to rename {} to {}: {e}",
            tmp_path.display(),
            final_path.display()
        ))
    })?;

    Ok(final_path)
}

/// Loads and decodes the bulletin document from the given source.
///
/// Remote sources are fetched with retry; local sources are read from disk.
/// When `keep_raw_snapshot` is set, the fetched body is persisted under
/// `raw_dir` before decoding. The document is parsed exactly once, here,
/// with missing arrays and fields defaulting at the boundary.
///
/// # Errors
///
/// Returns an error if the fetch or read fails, or if the body is not a
/// decodable bulletin document.
pub async fn load_dataset(
    client: &reqwest::Client,
    source: &DatasetSource,
    config: &ResolvedConfig,
) -> AppResult<BoletinDataset> {
    let body = match source {
        DatasetSource::Remote(url) => {
            info!(url = %url, "Fetching bulletin document");
            let retry_config = RetryConfig::from(config);
            let body = fetch_with_retry(client, url.as_str(), &retry_config).await?;
            if config.keep_raw_snapshot {
                let path = save_snapshot(&config.raw_dir, &body).await?;
                debug!(path = %path.display(), "Raw snapshot saved");
            }
            body
        }
        DatasetSource::Local(path) => {
            info!(path = %path.display(), "Reading bulletin document");
            fs::read_to_string(path)
                .await
                .map_err(|e| AppError::IoError(format!("Failed to read {}: {e}", path.display())))?
        }
    };

    let dataset: BoletinDataset = serde_json::from_str(&body)
        .map_err(|e| AppError::ParseError(format!("Failed to decode bulletin document: {e}")))?;

    info!(boletines = dataset.boletines.len(), "Bulletin document decoded");
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extract_status_code_present() {
        assert_eq!(
            extract_status_code("HTTP 404: Failed to fetch https://x"),
            Some(404)
        );
        assert_eq!(
            extract_status_code("HTTP 503: Failed to fetch https://x"),
            Some(503)
        );
    }

    #[test]
    fn test_extract_status_code_absent() {
        assert_eq!(extract_status_code("Connection reset by peer"), None);
    }

    #[test]
    fn test_should_retry_5xx() {
        let err = AppError::NetworkError("HTTP 500: Failed to fetch https://x".to_string());
        assert!(should_retry(&err));
    }

    #[test]
    fn test_should_not_retry_4xx() {
        let err = AppError::NetworkError("HTTP 404: Failed to fetch https://x".to_string());
        assert!(!should_retry(&err));
    }

    #[test]
    fn test_should_retry_transport_error() {
        let err = AppError::NetworkError("Connection timeout".to_string());
        assert!(should_retry(&err));
    }

    #[test]
    fn test_should_not_retry_other_classes() {
        assert!(!should_retry(&AppError::IoError("disk full".to_string())));
        assert!(!should_retry(&AppError::ParseError("bad json".to_string())));
        assert!(!should_retry(&AppError::InvalidInput("bad date".to_string())));
    }

    #[test]
    fn test_calculate_backoff_grows_and_caps() {
        let config = RetryConfig {
            max_retries: 5,
            initial_delay_ms: 1000,
            max_delay_ms: 10000,
        };
        assert_eq!(calculate_backoff(0, &config), 1000);
        assert_eq!(calculate_backoff(1, &config), 2000);
        assert_eq!(calculate_backoff(2, &config), 4000);
        assert_eq!(calculate_backoff(4, &config), 10000);
    }

    #[tokio::test]
    async fn test_load_dataset_from_local_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("boletines.json");
        std::fs::write(
            &path,
            r#"{"boletines": [{"id": 1, "fecha_publicacion": "2024-01-10"}]}"#,
        )
        .unwrap();

        let client = reqwest::Client::new();
        let source = DatasetSource::Local(path);
        let config = ResolvedConfig::default();

        let dataset = load_dataset(&client, &source, &config).await.unwrap();
        assert_eq!(dataset.boletines.len(), 1);
        assert_eq!(dataset.boletines[0].id, 1);
    }

    #[tokio::test]
    async fn test_load_dataset_missing_local_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = DatasetSource::Local(temp_dir.path().join("absent.json"));
        let client = reqwest::Client::new();
        let config = ResolvedConfig::default();

        let result = load_dataset(&client, &source, &config).await;
        assert!(matches!(result, Err(AppError::IoError(_))));
    }

    #[tokio::test]
    async fn test_load_dataset_undecodable_body() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("boletines.json");
        std::fs::write(&path, "not json").unwrap();

        let client = reqwest::Client::new();
        let source = DatasetSource::Local(path);
        let config = ResolvedConfig::default();

        let result = load_dataset(&client, &source, &config).await;
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_save_snapshot_writes_atomically() {
        let temp_dir = TempDir::new().unwrap();
        let raw_dir = temp_dir.path().join("raw");

        let path = save_snapshot(&raw_dir, r#"{"boletines": []}"#).await.unwrap();
        assert!(path.exists());
        assert!(path.file_name().unwrap().to_str().unwrap().starts_with("boletines-"));

        // No leftover partial file
        let leftovers: Vec<_> = std::fs::read_dir(&raw_dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map(|x| x == "part").unwrap_or(false))
            .collect();
        assert!(leftovers.is_empty());
    }
}
