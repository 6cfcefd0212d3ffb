use super::flatten::{flatten_proyectos, FlatRecord};
use crate::models::Boletin;
use serde::Serialize;
use std::collections::HashMap;

/// A category with its project count.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Project counts grouped by municipality, sorted descending by count.
/// Equal counts keep first-encountered input order.
pub fn distribution_by_municipio(boletines: &[Boletin]) -> Vec<CategoryCount> {
    distribution_by(boletines, |r| r.record.municipio.as_str())
}

/// Project counts grouped by business sector ("giro"), sorted descending
/// by count with the same tie-breaking as [`distribution_by_municipio`].
pub fn distribution_by_giro(boletines: &[Boletin]) -> Vec<CategoryCount> {
    distribution_by(boletines, |r| r.record.giro.as_str())
}

fn distribution_by<F>(boletines: &[Boletin], field: F) -> Vec<CategoryCount>
where
    F: Fn(&FlatRecord) -> &str,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<CategoryCount> = Vec::new();

    for record in flatten_proyectos(boletines) {
        let value = field(&record);
        match index.get(value) {
            Some(&i) => out[i].count += 1,
            None => {
                index.insert(value.to_string(), out.len());
                out.push(CategoryCount {
                    category: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort: equal counts stay in first-encountered order.
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}
