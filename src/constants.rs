// Data source URL
pub const DEFAULT_DATA_URL: &str =
    "https://ssmaa.aguascalientes.gob.mx/datos/boletines/boletines.json";

// Date bound help text
pub const DATE_HELP_TEXT: &str = "Date bound (YYYY, YYYY-MM or YYYY-MM-DD, e.g., 2024-01)";

// Derived report file names
pub const SUMMARY_FILE: &str = "resumen.json";
pub const TIME_SERIES_FILE: &str = "serie_tiempo.json";
pub const MUNICIPIO_DISTRIBUTION_FILE: &str = "distribucion_municipios.json";
pub const GIRO_DISTRIBUTION_FILE: &str = "distribucion_giros.json";
pub const PROYECTOS_FILE: &str = "proyectos.json";
pub const RESOLUTIVOS_FILE: &str = "resolutivos.json";
