use crate::models::{parse_fecha, Boletin};
use serde::Serialize;
use std::collections::HashMap;

/// Counts of projects filed and resolutions issued on one publication date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimeSeriesPoint {
    pub fecha: String,
    pub proyectos: usize,
    pub resolutivos: usize,
}

/// One point per distinct publication date, ascending by calendar date.
///
/// Records carry no date of their own; both counts come from the parent
/// bulletin's `fecha_publicacion`. A date that has only one kind of record
/// still reports the other count as 0 rather than omitting it. Dates that do
/// not parse sort ahead of parseable ones, ordered by their raw string, so
/// the output stays total and deterministic.
pub fn compute_time_series(boletines: &[Boletin]) -> Vec<TimeSeriesPoint> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut points: Vec<TimeSeriesPoint> = Vec::new();

    for boletin in boletines {
        let i = match index.get(&boletin.fecha_publicacion) {
            Some(&i) => i,
            None => {
                index.insert(boletin.fecha_publicacion.clone(), points.len());
                points.push(TimeSeriesPoint {
                    fecha: boletin.fecha_publicacion.clone(),
                    proyectos: 0,
                    resolutivos: 0,
                });
                points.len() - 1
            }
        };
        points[i].proyectos += boletin.proyectos_ingresados.len();
        points[i].resolutivos += boletin.resolutivos_emitidos.len();
    }

    // Calendar order, not string order; the raw string breaks ties.
    points.sort_by(|a, b| {
        (parse_fecha(&a.fecha), a.fecha.as_str()).cmp(&(parse_fecha(&b.fecha), b.fecha.as_str()))
    });
    points
}
