use napi::Result as NapiResult;
use napi_derive::napi;

use retirement_planner_core::retirement::{self, RetirementPlanInput};
use retirement_planner_core::scenarios::sensitivity::{self, SensitivityInput};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_plan(input_json: &str) -> NapiResult<RetirementPlanInput> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Retirement planning
// ---------------------------------------------------------------------------

#[napi]
pub fn plan_retirement(input_json: String) -> NapiResult<String> {
    let input = parse_plan(&input_json)?;
    let output = retirement::plan_retirement(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn project_retirement(input_json: String) -> NapiResult<String> {
    let input = parse_plan(&input_json)?;
    let output = retirement::plan_retirement(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output.result.projection).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[napi]
pub fn retirement_sensitivity(input_json: String) -> NapiResult<String> {
    let input: SensitivityInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = sensitivity::evaluate_sensitivity(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
