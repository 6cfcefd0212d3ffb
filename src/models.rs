use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Top-level bulletin document as published by the agency.
///
/// Unknown fields in the document are ignored and missing nested arrays
/// default to empty, so a partially malformed document still loads. All
/// defaulting happens here, at the parse boundary; downstream views can
/// assume a fully-typed, total structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct BoletinDataset {
    /// Ordered bulletin collection. Input order is preserved through
    /// every derived view.
    #[serde(default)]
    pub boletines: Vec<Boletin>,
}

/// One periodic bulletin publication.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Boletin {
    pub id: i64,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub fecha_publicacion: String,
    pub proyectos_ingresados: Vec<PermitRecord>,
    pub resolutivos_emitidos: Vec<PermitRecord>,
}

impl Boletin {
    /// Publication date parsed as a calendar date, or `None` when the
    /// field does not hold one.
    pub fn fecha(&self) -> Option<NaiveDate> {
        parse_fecha(&self.fecha_publicacion)
    }
}

/// Parses the leading `YYYY-MM-DD` of an ISO-8601 date string.
/// A trailing time component is tolerated and ignored.
pub fn parse_fecha(value: &str) -> Option<NaiveDate> {
    let head = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// A project filing or an issued resolution. The two nested collections
/// are structurally parallel, so one record type covers both.
///
/// Category fields are free text and matched exactly downstream: casing
/// and accents are significant, variant spellings count separately.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PermitRecord {
    /// Case-file identifier
    pub expediente: String,
    pub municipio: String,
    pub giro: String,
    pub tipo_estudio: String,
    pub coordenadas_x: Option<f64>,
    pub coordenadas_y: Option<f64>,
}

/// Where the bulletin document is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Fetched over HTTP(S)
    Remote(Url),
    /// Read from the local filesystem
    Local(PathBuf),
}

impl DatasetSource {
    /// Returns a human-readable name for the source.
    pub fn display_name(&self) -> String {
        match self {
            Self::Remote(url) => url.to_string(),
            Self::Local(path) => path.display().to_string(),
        }
    }
}

impl From<&str> for DatasetSource {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        // Anything that is not an absolute http(s) URL is a local path.
        match Url::parse(trimmed) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Self::Remote(url),
            _ => Self::Local(PathBuf::from(trimmed)),
        }
    }
}
