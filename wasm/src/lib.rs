//! Health Planner WASM Module
//!
//! WebAssembly bindings so a browser front end can call the core directly.
//! Every export takes plain values or JSON and returns a JSON string; failures
//! surface as a thrown JS error carrying the message.

use health_planner_shared::{
    build_plan as core_build_plan, compute_metrics as core_compute_metrics,
    project_weight as core_project_weight, recommend_diet as core_recommend_diet, DietCatalog,
    Goal, HealthInput, MetricsError, DEFAULT_PROJECTION_PERIODS,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn parse_input(input_json: &str) -> Result<HealthInput, String> {
    serde_json::from_str(input_json).map_err(|e| format!("Invalid input JSON: {}", e))
}

fn compute_metrics_json(input_json: &str) -> Result<String, String> {
    let input = parse_input(input_json)?;
    let result = core_compute_metrics(&input).map_err(|e| e.to_string())?;
    to_json(&result)
}

fn project_weight_json(weight_kg: f64, goal: &str, periods: Option<u32>) -> Result<String, String> {
    let goal: Goal = goal.parse().map_err(|e: MetricsError| e.to_string())?;
    let projection = core_project_weight(weight_kg, goal, periods.map_or(DEFAULT_PROJECTION_PERIODS, |p| p as usize));
    to_json(&projection)
}

fn recommend_diet_json(preference: &str, goal: &str) -> Result<String, String> {
    let goal: Goal = goal.parse().map_err(|e: MetricsError| e.to_string())?;
    let plan = core_recommend_diet(preference, goal).map_err(|e| e.to_string())?;
    to_json(&plan)
}

fn build_plan_json(input_json: &str) -> Result<String, String> {
    let input = parse_input(input_json)?;
    let plan = core_build_plan(&input, &DietCatalog::default(), DEFAULT_PROJECTION_PERIODS)
        .map_err(|e| e.to_string())?;
    to_json(&plan)
}

/// Compute BMI, category and calorie target from a `HealthInput` JSON object
#[wasm_bindgen(js_name = computeMetrics)]
pub fn compute_metrics(input_json: &str) -> Result<String, JsError> {
    compute_metrics_json(input_json).map_err(|e| JsError::new(&e))
}

/// Linear weight forecast; `periods` defaults to 4
#[wasm_bindgen(js_name = projectWeight)]
pub fn project_weight(weight_kg: f64, goal: &str, periods: Option<u32>) -> Result<String, JsError> {
    project_weight_json(weight_kg, goal, periods).map_err(|e| JsError::new(&e))
}

#[wasm_bindgen(js_name = recommendDiet)]
pub fn recommend_diet(preference: &str, goal: &str) -> Result<String, JsError> {
    recommend_diet_json(preference, goal).map_err(|e| JsError::new(&e))
}

/// Metrics, projection and diet for one input in a single call
#[wasm_bindgen(js_name = buildPlan)]
pub fn build_plan(input_json: &str) -> Result<String, JsError> {
    build_plan_json(input_json).map_err(|e| JsError::new(&e))
}
