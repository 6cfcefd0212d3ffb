use crate::models::{Boletin, PermitRecord};
use serde::Serialize;
use std::collections::HashMap;

/// A distinct category value with its occurrence count.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
}

/// Headline totals and the distinct category sets observed in the dataset.
///
/// Serialized in camelCase to match the wire contract consumed by the
/// dashboard.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_boletines: usize,
    pub total_proyectos: usize,
    pub total_resolutivos: usize,
    pub municipios: Vec<NameCount>,
    pub giros: Vec<NameCount>,
    pub tipos_estudio: Vec<NameCount>,
}

/// Computes the dataset summary.
///
/// Category tallies run over project records with exact string matching:
/// casing and accents are significant, so variant spellings count as
/// separate entries. Lists keep first-encountered input order, which makes
/// the output deterministic and suits dropdown population.
pub fn compute_summary(boletines: &[Boletin]) -> Summary {
    let total_proyectos = boletines.iter().map(|b| b.proyectos_ingresados.len()).sum();
    let total_resolutivos = boletines.iter().map(|b| b.resolutivos_emitidos.len()).sum();

    Summary {
        total_boletines: boletines.len(),
        total_proyectos,
        total_resolutivos,
        municipios: count_values(boletines, |r| r.municipio.as_str()),
        giros: count_values(boletines, |r| r.giro.as_str()),
        tipos_estudio: count_values(boletines, |r| r.tipo_estudio.as_str()),
    }
}

/// Tallies one category field over all project records, keeping
/// first-encountered order. Records with the field absent were defaulted to
/// the empty string at the parse boundary and are tallied under that key.
fn count_values<F>(boletines: &[Boletin], field: F) -> Vec<NameCount>
where
    F: Fn(&PermitRecord) -> &str,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<NameCount> = Vec::new();

    for record in boletines.iter().flat_map(|b| b.proyectos_ingresados.iter()) {
        let value = field(record);
        match index.get(value) {
            Some(&i) => out[i].count += 1,
            None => {
                index.insert(value.to_string(), out.len());
                out.push(NameCount {
                    name: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    out
}
