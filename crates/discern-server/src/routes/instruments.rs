use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use discern_instruments::error::InstrumentError;
use discern_instruments::scoring::Domain;
use discern_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
    item_count: usize,
    max_total: f64,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    max_total: f64,
    domains: Vec<Domain>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
            item_count: i.items().len(),
            max_total: i.max_total(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument =
        get_instrument(&id).ok_or_else(|| InstrumentError::UnknownInstrument(id.clone()))?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        max_total: instrument.max_total(),
        domains: instrument.domains().to_vec(),
    }))
}
