use crate::aggregator::{
    compute_summary, compute_time_series, distribution_by_giro, distribution_by_municipio,
    flatten_proyectos, flatten_resolutivos,
};
use crate::constants::{
    GIRO_DISTRIBUTION_FILE, MUNICIPIO_DISTRIBUTION_FILE, PROYECTOS_FILE, RESOLUTIVOS_FILE,
    SUMMARY_FILE, TIME_SERIES_FILE,
};
use crate::errors::{AppError, AppResult};
use crate::models::Boletin;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tokio::fs;
use tracing::{debug, info};

/// Counts reported back to the caller after a report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStats {
    pub files_written: usize,
    pub bytes_written: u64,
    pub total_proyectos: usize,
    pub total_resolutivos: usize,
}

/// Runs every aggregation over the collection and writes one JSON document
/// per derived view into `out_dir`.
///
/// # Output files
///
/// - `resumen.json` - headline totals and category sets
/// - `serie_tiempo.json` - per-date project/resolution counts
/// - `distribucion_municipios.json` / `distribucion_giros.json` - grouped counts
/// - `proyectos.json` / `resolutivos.json` - flattened records with parent context
///
/// Each file is written to a `.part` path and atomically renamed, so readers
/// never observe a half-written report.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or any file fails to
/// serialize or write.
pub async fn write_reports(
    boletines: &[Boletin],
    out_dir: &Path,
    pretty: bool,
) -> AppResult<ReportStats> {
    fs::create_dir_all(out_dir).await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to create report directory {}: {e}",
            out_dir.display()
        ))
    })?;

    let start = Instant::now();

    let summary = compute_summary(boletines);
    let series = compute_time_series(boletines);
    let municipios = distribution_by_municipio(boletines);
    let giros = distribution_by_giro(boletines);
    let proyectos = flatten_proyectos(boletines);
    let resolutivos = flatten_resolutivos(boletines);

    let total_proyectos = summary.total_proyectos;
    let total_resolutivos = summary.total_resolutivos;

    let mut bytes_written = 0u64;
    bytes_written += write_json(out_dir, SUMMARY_FILE, &summary, pretty).await?;
    bytes_written += write_json(out_dir, TIME_SERIES_FILE, &series, pretty).await?;
    bytes_written += write_json(out_dir, MUNICIPIO_DISTRIBUTION_FILE, &municipios, pretty).await?;
    bytes_written += write_json(out_dir, GIRO_DISTRIBUTION_FILE, &giros, pretty).await?;
    bytes_written += write_json(out_dir, PROYECTOS_FILE, &proyectos, pretty).await?;
    bytes_written += write_json(out_dir, RESOLUTIVOS_FILE, &resolutivos, pretty).await?;

    let stats = ReportStats {
        files_written: 6,
        bytes_written,
        total_proyectos,
        total_resolutivos,
    };

    info!(
        files = stats.files_written,
        bytes = stats.bytes_written,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Derived reports written"
    );

    Ok(stats)
}

/// Serializes one derived view and writes it atomically.
async fn write_json<T: Serialize>(
    out_dir: &Path,
    filename: &str,
    value: &T,
    pretty: bool,
) -> AppResult<u64> {
    let body = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| AppError::ParseError(format!("Failed to serialize {filename}: {e}")))?;

    let final_path = out_dir.join(filename);
    let tmp_path = out_dir.join(format!("{filename}.part"));

    fs::write(&tmp_path, &body)
        .await
        .map_err(|e| AppError::IoError(format!("Failed to write {}: {e}", tmp_path.display())))?;

    fs::rename(&tmp_path, &final_path).await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to rename {} to {}: {e}",
            tmp_path.display(),
            final_path.display()
        ))
    })?;

    debug!(file = %final_path.display(), bytes = body.len(), "Report written");
    Ok(body.len() as u64)
}
