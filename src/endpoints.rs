//! The endpoint catalog: one method per game operation.
//!
//! Each method is a pure mapping from typed arguments to a
//! `(method, url, payload)` triple handed to the client's request pipeline.
//! The two unauthenticated operations skip the bearer header but still ride
//! the scheduler and retry engine like everything else.

use reqwest::Method;

use crate::{
    types::{
        DepositReceipt, FlightPlanEnvelope, GameStatus, JettisonReceipt, LoanBook, LoanOffers,
        LocationEnvelope, LocationList, Marketplace, OrderReceipt, ShipCatalog, ShipEnvelope,
        ShipRoster, SystemChart, TokenGrant, UserEnvelope,
    },
    wire::{
        CargoDrop, EmptyBody, FlightPlanRequest, GoodsOrder, LoanRequest, ShipClassFilter,
        ShipPurchase, WarpJumpRequest,
    },
    Result, SpaceTradersClient,
};

impl SpaceTradersClient {
    /// Checks whether the game API is up. Unauthenticated.
    pub async fn status(&self) -> Result<GameStatus> {
        self.get_anonymous(self.url("/game/status")).await
    }

    /// Claims the client's username and returns its access token.
    /// Unauthenticated; the server rejects usernames that already exist.
    pub async fn claim_token(&self) -> Result<TokenGrant> {
        self.post_anonymous(self.url(&format!("/users/{}/token", self.username())))
            .await
    }

    /// Fetches the user's profile, ships and loans.
    pub async fn user_info(&self) -> Result<UserEnvelope> {
        self.get(self.url(&format!("/users/{}", self.username())))
            .await
    }

    /// Loan terms currently offered by the bank.
    pub async fn loans_available(&self) -> Result<LoanOffers> {
        self.get(self.url("/game/loans")).await
    }

    /// Loans the user currently holds.
    pub async fn loans_owned(&self) -> Result<LoanBook> {
        self.get(self.url(&format!("/users/{}/loans", self.username())))
            .await
    }

    /// Takes out a loan of the given type.
    pub async fn take_loan(&self, kind: impl Into<String>) -> Result<UserEnvelope> {
        self.post(
            self.url(&format!("/users/{}/loans", self.username())),
            &LoanRequest { kind: kind.into() },
        )
        .await
    }

    /// Pays off a loan in full.
    pub async fn repay_loan(&self, loan_id: &str) -> Result<UserEnvelope> {
        self.put(
            self.url(&format!("/users/{}/loans/{loan_id}", self.username())),
            &EmptyBody {},
        )
        .await
    }

    /// Lists hulls for sale across the galaxy.
    ///
    /// `class_name` is accepted for parity with the API's documented filter
    /// but never leaves the client: the filter would ride a GET body, which
    /// this client does not send, and the live service ignores it anyway.
    pub async fn available_ships(&self, class_name: impl Into<String>) -> Result<ShipCatalog> {
        let filter = ShipClassFilter {
            class: class_name.into(),
        };
        self.invoke(Method::GET, self.url("/game/ships"), Some(&filter))
            .await
    }

    /// Ships in the user's fleet.
    pub async fn owned_ships(&self) -> Result<ShipRoster> {
        self.get(self.url(&format!("/users/{}/ships", self.username())))
            .await
    }

    /// Buys a ship of `kind` at `location`.
    pub async fn buy_ship(
        &self,
        location: impl Into<String>,
        kind: impl Into<String>,
    ) -> Result<UserEnvelope> {
        self.post(
            self.url(&format!("/users/{}/ships", self.username())),
            &ShipPurchase {
                location: location.into(),
                kind: kind.into(),
            },
        )
        .await
    }

    /// Details for one owned ship.
    pub async fn ship_info(&self, ship_id: &str) -> Result<ShipEnvelope> {
        self.get(self.url(&format!("/users/{}/ships/{ship_id}", self.username())))
            .await
    }

    /// Every charted system.
    pub async fn systems_info(&self) -> Result<SystemChart> {
        self.get(self.url("/game/systems")).await
    }

    /// Locations inside one system.
    pub async fn locations_in_system(&self, system: &str) -> Result<LocationList> {
        self.get(self.url(&format!("/game/systems/{system}/locations")))
            .await
    }

    /// Details for one location.
    pub async fn location_info(&self, symbol: &str) -> Result<LocationEnvelope> {
        self.get(self.url(&format!("/game/locations/{symbol}")))
            .await
    }

    /// Goods traded at one location.
    pub async fn marketplace(&self, symbol: &str) -> Result<Marketplace> {
        self.get(self.url(&format!("/game/locations/{symbol}/marketplace")))
            .await
    }

    /// Buys goods onto a ship.
    pub async fn purchase_order(
        &self,
        ship_id: impl Into<String>,
        good: impl Into<String>,
        quantity: u32,
    ) -> Result<OrderReceipt> {
        self.post(
            self.url(&format!("/users/{}/purchase-orders", self.username())),
            &GoodsOrder {
                ship_id: ship_id.into(),
                good: good.into(),
                quantity,
            },
        )
        .await
    }

    /// Sells goods off a ship.
    pub async fn sell_order(
        &self,
        ship_id: impl Into<String>,
        good: impl Into<String>,
        quantity: u32,
    ) -> Result<OrderReceipt> {
        self.post(
            self.url(&format!("/users/{}/sell-orders", self.username())),
            &GoodsOrder {
                ship_id: ship_id.into(),
                good: good.into(),
                quantity,
            },
        )
        .await
    }

    /// Deposits goods from a ship into a structure.
    pub async fn deposit_goods(
        &self,
        structure_id: &str,
        ship_id: impl Into<String>,
        good: impl Into<String>,
        quantity: u32,
    ) -> Result<DepositReceipt> {
        self.post(
            self.url(&format!("/game/structures/{structure_id}/deposit")),
            &GoodsOrder {
                ship_id: ship_id.into(),
                good: good.into(),
                quantity,
            },
        )
        .await
    }

    /// Dumps cargo overboard.
    pub async fn jettison_cargo(
        &self,
        ship_id: &str,
        good: impl Into<String>,
        quantity: u32,
    ) -> Result<JettisonReceipt> {
        self.put(
            self.url(&format!(
                "/users/{}/ships/{ship_id}/jettison",
                self.username()
            )),
            &CargoDrop {
                good: good.into(),
                quantity,
            },
        )
        .await
    }

    /// Sends a ship toward a destination.
    pub async fn create_flight_plan(
        &self,
        ship_id: impl Into<String>,
        destination: impl Into<String>,
    ) -> Result<FlightPlanEnvelope> {
        self.post(
            self.url(&format!("/users/{}/flight-plans", self.username())),
            &FlightPlanRequest {
                ship_id: ship_id.into(),
                destination: destination.into(),
            },
        )
        .await
    }

    /// Looks up an existing flight plan.
    pub async fn flight_plan(&self, plan_id: &str) -> Result<FlightPlanEnvelope> {
        self.get(self.url(&format!(
            "/users/{}/flight-plans/{plan_id}",
            self.username()
        )))
        .await
    }

    /// Jumps a ship through a warp gate.
    pub async fn warp_jump(&self, ship_id: impl Into<String>) -> Result<FlightPlanEnvelope> {
        self.post(
            self.url(&format!("/users/{}/warp-jump", self.username())),
            &WarpJumpRequest {
                ship_id: ship_id.into(),
            },
        )
        .await
    }
}
