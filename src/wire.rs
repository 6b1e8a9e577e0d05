use serde::{Deserialize, Serialize};

/// Failure body shape for any status >= 400 other than 401.
#[derive(Debug, Deserialize)]
pub(crate) struct FailureEnvelope {
    pub error: FailureMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FailureMessage {
    pub message: String,
}

/// Body for mutating calls that take no fields; the API expects a JSON
/// object even when empty.
#[derive(Debug, Serialize)]
pub(crate) struct EmptyBody {}

#[derive(Debug, Serialize)]
pub(crate) struct LoanRequest {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ShipPurchase {
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Ship-class filter for the public ship listing. Carried on a GET, so the
/// transport never actually sends it; see `available_ships`.
#[derive(Debug, Serialize)]
pub(crate) struct ShipClassFilter {
    pub class: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GoodsOrder {
    pub ship_id: String,
    pub good: String,
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct CargoDrop {
    pub good: String,
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FlightPlanRequest {
    pub ship_id: String,
    pub destination: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WarpJumpRequest {
    pub ship_id: String,
}
