//! WebAssembly bindings.
//!
//! ```js
//! import { generate, isAutoGeneratedFillerName } from 'u-seating';
//!
//! const result = generate(
//!   { guests, couples, exclusions },
//!   { table_count: 6, seats_per_table: 8, honor_table_seats: 10 },
//! );
//! if (!result.success) console.error(result.errors);
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::SeatingConfig;
use crate::model::{self, Guest, SeatingProblem, Table};
use crate::planner::SeatingPlanner;

/// Validation output with errors already rendered as messages.
#[derive(Serialize)]
struct ValidationJs {
    valid: bool,
    errors: Vec<String>,
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&format!("Invalid {what}: {e}")))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

/// Checks whether a seating can exist.
#[wasm_bindgen(js_name = validate)]
pub fn validate_js(problem: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    let problem: SeatingProblem = from_js(problem, "problem")?;
    let config: SeatingConfig = from_js(config, "config")?;
    let validation = SeatingPlanner::validate(&problem, &config);
    to_js(&ValidationJs {
        valid: validation.valid,
        errors: validation.messages(),
    })
}

/// Generates a seating.
#[wasm_bindgen(js_name = generate)]
pub fn generate_js(problem: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    let problem: SeatingProblem = from_js(problem, "problem")?;
    let config: SeatingConfig = from_js(config, "config")?;
    to_js(&SeatingPlanner::run(&problem, &config))
}

/// Whether `name` is an auto-generated filler name.
#[wasm_bindgen(js_name = isAutoGeneratedFillerName)]
pub fn is_auto_generated_filler_name_js(name: &str) -> bool {
    model::is_auto_generated_filler_name(name)
}

/// Pads a guest list with fillers up to `total`.
#[wasm_bindgen(js_name = padRoster)]
pub fn pad_roster_js(guests: JsValue, total: usize) -> Result<JsValue, JsError> {
    let mut guests: Vec<Guest> = from_js(guests, "guests")?;
    model::pad_roster(&mut guests, total);
    to_js(&guests)
}

/// Renders tables as CSV.
#[wasm_bindgen(js_name = exportCsv)]
pub fn export_csv_js(tables: JsValue) -> Result<String, JsError> {
    let tables: Vec<Table> = from_js(tables, "tables")?;
    crate::export::to_csv_string(&tables).map_err(|e| JsError::new(&e.to_string()))
}
