//! `spacetraders-http` is an async rate-limited client for the SpaceTraders
//! game API.
//!
//! Every outbound call — every endpoint method, every retry — funnels
//! through one pipeline per client:
//! - a FIFO [`RequestScheduler`] keeping dispatch starts at least 500 ms
//!   apart with at most one call in flight,
//! - a bounded retry loop for 429/500 responses that honors `Retry-After`,
//! - a classifier splitting fatal failures (401, other 4xx) from transient
//!   ones.
//!
//! Entry points:
//! - [`SpaceTradersClient::new`] / [`SpaceTradersClient::from_env`]
//! - the endpoint catalog methods (e.g. [`SpaceTradersClient::user_info`],
//!   [`SpaceTradersClient::purchase_order`])
//! - [`SpaceTradersClient::invoke`] for operations the catalog doesn't cover

mod classify;
mod client;
mod endpoints;
mod error;
mod observe;
mod options;
mod scheduler;
mod types;
mod wire;

pub use client::SpaceTradersClient;
pub use error::SpaceTradersError;
pub use observe::{NoopObserver, RequestObserver, RetryEvent};
pub use options::ClientOptions;
pub use reqwest::Method;
pub use scheduler::RequestScheduler;
pub use types::{
    CargoItem, DepositReceipt, DepositedGoods, FlightPlan, FlightPlanEnvelope, GameStatus,
    JettisonReceipt, Loan, LoanBook, LoanOffer, LoanOffers, Location, LocationEnvelope,
    LocationList, MarketGood, Marketplace, OrderLine, OrderReceipt, PurchaseLocation, Ship,
    ShipCatalog, ShipEnvelope, ShipListing, ShipRoster, StarSystem, SystemChart, TokenGrant,
    UserAccount, UserEnvelope, UserSummary,
};

pub type Result<T> = std::result::Result<T, SpaceTradersError>;
