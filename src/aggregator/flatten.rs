use crate::models::{Boletin, PermitRecord};
use serde::Serialize;

/// A nested record joined with its parent bulletin's identity.
///
/// Flattening loses the nesting that carried the publication context, so each
/// record is stamped with the bulletin id and date it came from; downstream
/// filtering and display rely on that stamp.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FlatRecord {
    pub boletin_id: i64,
    pub fecha_publicacion: String,
    #[serde(flatten)]
    pub record: PermitRecord,
}

/// All project records across all bulletins, in bulletin order then
/// nested-array order. Never re-sorted.
pub fn flatten_proyectos(boletines: &[Boletin]) -> Vec<FlatRecord> {
    flatten_by(boletines, |b| b.proyectos_ingresados.as_slice())
}

/// All resolution records, symmetric to [`flatten_proyectos`].
pub fn flatten_resolutivos(boletines: &[Boletin]) -> Vec<FlatRecord> {
    flatten_by(boletines, |b| b.resolutivos_emitidos.as_slice())
}

fn flatten_by<F>(boletines: &[Boletin], records: F) -> Vec<FlatRecord>
where
    F: Fn(&Boletin) -> &[PermitRecord],
{
    boletines
        .iter()
        .flat_map(|boletin| {
            records(boletin).iter().map(|record| FlatRecord {
                boletin_id: boletin.id,
                fecha_publicacion: boletin.fecha_publicacion.clone(),
                record: record.clone(),
            })
        })
        .collect()
}
