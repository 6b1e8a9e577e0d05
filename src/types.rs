//! Response shapes for the endpoint catalog.
//!
//! Fields mirror what the game API actually returns; optional or
//! situational fields default instead of failing the whole decode.

use serde::Deserialize;

/// Service status probe response.
#[derive(Clone, Debug, Deserialize)]
pub struct GameStatus {
    pub status: String,
}

/// Token grant returned when a username is first claimed.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenGrant {
    pub token: String,
    pub user: UserSummary,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserSummary {
    pub username: String,
    #[serde(default)]
    pub credits: i64,
}

/// Envelope for user-centric operations (profile, loans taken, purchases).
#[derive(Clone, Debug, Deserialize)]
pub struct UserEnvelope {
    pub user: UserAccount,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserAccount {
    pub username: String,
    pub credits: i64,
    #[serde(default)]
    pub ships: Vec<Ship>,
    #[serde(default)]
    pub loans: Vec<Loan>,
}

/// Loan terms offered by the bank.
#[derive(Clone, Debug, Deserialize)]
pub struct LoanOffers {
    pub loans: Vec<LoanOffer>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanOffer {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: i64,
    pub rate: f64,
    pub term_in_days: u32,
    #[serde(default)]
    pub collateral_required: bool,
}

/// Loans currently held by the user.
#[derive(Clone, Debug, Deserialize)]
pub struct LoanBook {
    pub loans: Vec<Loan>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub due: String,
    pub repayment_amount: i64,
    pub status: String,
}

/// Hulls purchasable across the galaxy.
#[derive(Clone, Debug, Deserialize)]
pub struct ShipCatalog {
    pub ships: Vec<ShipListing>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipListing {
    #[serde(rename = "type")]
    pub kind: String,
    pub class: String,
    pub manufacturer: String,
    pub max_cargo: u32,
    pub speed: u32,
    #[serde(default)]
    pub purchase_locations: Vec<PurchaseLocation>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PurchaseLocation {
    pub location: String,
    pub price: i64,
}

/// Ships in the user's fleet.
#[derive(Clone, Debug, Deserialize)]
pub struct ShipRoster {
    pub ships: Vec<Ship>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ShipEnvelope {
    pub ship: Ship,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub class: String,
    pub manufacturer: String,
    /// Absent while the ship is in transit.
    #[serde(default)]
    pub location: Option<String>,
    pub max_cargo: u32,
    pub space_available: u32,
    #[serde(default)]
    pub cargo: Vec<CargoItem>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoItem {
    pub good: String,
    pub quantity: u32,
    pub total_volume: u32,
}

/// Every charted system.
#[derive(Clone, Debug, Deserialize)]
pub struct SystemChart {
    pub systems: Vec<StarSystem>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StarSystem {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub locations: Vec<Location>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LocationList {
    pub locations: Vec<Location>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LocationEnvelope {
    pub location: Location,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Location {
    pub symbol: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub x: i32,
    pub y: i32,
}

/// Goods traded at one location.
#[derive(Clone, Debug, Deserialize)]
pub struct Marketplace {
    pub marketplace: Vec<MarketGood>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketGood {
    pub symbol: String,
    pub volume_per_unit: u32,
    pub price_per_unit: i64,
    #[serde(default)]
    pub quantity_available: i64,
}

/// Result of a purchase or sell order.
#[derive(Clone, Debug, Deserialize)]
pub struct OrderReceipt {
    pub credits: i64,
    pub order: OrderLine,
    pub ship: Ship,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub good: String,
    pub quantity: u32,
    pub price_per_unit: i64,
    pub total: i64,
}

/// Result of depositing goods into a structure.
#[derive(Clone, Debug, Deserialize)]
pub struct DepositReceipt {
    pub deposit: DepositedGoods,
    pub ship: Ship,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DepositedGoods {
    pub good: String,
    pub quantity: u32,
}

/// Result of jettisoning cargo.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JettisonReceipt {
    pub ship_id: String,
    pub good: String,
    pub quantity_remaining: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FlightPlanEnvelope {
    #[serde(rename = "flightPlan")]
    pub flight_plan: FlightPlan,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightPlan {
    pub id: String,
    pub ship_id: String,
    pub departure: String,
    pub destination: String,
    #[serde(default)]
    pub arrives_at: Option<String>,
    #[serde(default)]
    pub time_remaining_in_seconds: Option<u32>,
    #[serde(default)]
    pub fuel_consumed: Option<u32>,
}
