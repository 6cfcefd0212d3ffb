//! Common test utilities for integration tests

use std::fs;
use std::io::Write;
use std::path::Path;

/// Helper function to create a test JSON file in a directory
#[allow(dead_code)]
pub fn create_test_json_file(path: &Path, content: &str) {
    let parent = path.parent().unwrap();
    fs::create_dir_all(parent).unwrap();
    fs::File::create(path)
        .unwrap()
        .write_all(content.as_bytes())
        .unwrap();
}

/// Sample bulletin document covering several dates, category ties, and a
/// bulletin with no resolutions
#[allow(dead_code)]
pub const SAMPLE_DATASET: &str = r#"{
  "boletines": [
    {
      "id": 101,
      "fecha_publicacion": "2024-01-10",
      "proyectos_ingresados": [
        {
          "expediente": "MIA-2024-001",
          "municipio": "Aguascalientes",
          "giro": "Industrial",
          "tipo_estudio": "MIA",
          "coordenadas_x": -102.29,
          "coordenadas_y": 21.88
        },
        {
          "expediente": "IP-2024-002",
          "municipio": "Jesús María",
          "giro": "Comercial",
          "tipo_estudio": "Informe Preventivo",
          "coordenadas_x": null,
          "coordenadas_y": null
        }
      ],
      "resolutivos_emitidos": [
        {
          "expediente": "MIA-2023-118",
          "municipio": "Aguascalientes",
          "giro": "Habitacional",
          "tipo_estudio": "MIA"
        }
      ]
    },
    {
      "id": 102,
      "fecha_publicacion": "2024-01-10",
      "proyectos_ingresados": [
        {
          "expediente": "MIA-2024-003",
          "municipio": "Aguascalientes",
          "giro": "Industrial",
          "tipo_estudio": "MIA"
        }
      ],
      "resolutivos_emitidos": []
    },
    {
      "id": 103,
      "fecha_publicacion": "2024-01-24",
      "proyectos_ingresados": [
        {
          "expediente": "IP-2024-004",
          "municipio": "Calvillo",
          "giro": "Agropecuario",
          "tipo_estudio": "Informe Preventivo"
        },
        {
          "expediente": "IP-2024-005",
          "municipio": "Jesús María",
          "giro": "Comercial",
          "tipo_estudio": "Informe Preventivo"
        }
      ],
      "resolutivos_emitidos": [
        {
          "expediente": "MIA-2023-120",
          "municipio": "Calvillo",
          "giro": "Agropecuario",
          "tipo_estudio": "MIA"
        },
        {
          "expediente": "MIA-2023-121",
          "municipio": "Aguascalientes",
          "giro": "Industrial",
          "tipo_estudio": "MIA"
        }
      ]
    }
  ]
}"#;

/// The two-bulletin scenario: one shared date, a municipality tie, and a
/// resolution that must not count toward project distributions
#[allow(dead_code)]
pub const SCENARIO_DATASET: &str = r#"{
  "boletines": [
    {
      "id": 1,
      "fecha_publicacion": "2024-01-10",
      "proyectos_ingresados": [
        {"municipio": "Aguascalientes", "giro": "Industrial"}
      ],
      "resolutivos_emitidos": []
    },
    {
      "id": 2,
      "fecha_publicacion": "2024-01-10",
      "proyectos_ingresados": [
        {"municipio": "Jesús María", "giro": "Comercial"}
      ],
      "resolutivos_emitidos": [
        {"municipio": "Aguascalientes"}
      ]
    }
  ]
}"#;

/// Empty bulletin collection
#[allow(dead_code)]
pub const EMPTY_DATASET: &str = r#"{"boletines": []}"#;
