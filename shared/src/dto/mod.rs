//! # Data Transfer Objects (DTOs)
//!
//! Every request and response body exchanged with the earnings service and
//! with the separately configured actions endpoint.
//!
//! ## Endpoint Map
//!
//! ```text
//! GET  /api/dashboard             -> wallet::DashboardResponse
//! POST /api/acoes                 -> actions::ActionsResponse   (body: ListActionsRequest)
//! POST /api/claims                -> claims::CreateClaimResponse (body: CreateClaimRequest)
//! GET  /api/claims/{id}           -> claims::ClaimDetails
//! POST /api/claims/{id}/opened    -> common::Ack
//! POST /api/claims/{id}/confirm   -> common::Ack                (body: ConfirmClaimRequest)
//! GET  /api/historico-acoes       -> history::HistoryResponse
//! GET  /api/payout-profile        -> withdrawals::PayoutProfile
//! GET  /api/withdraws             -> withdrawals::WithdrawalsResponse
//! POST /api/withdraw              -> common::Ack                (body: WithdrawRequest)
//! POST <actions endpoint>         -> actions::ActionsResponse   (body: ActionLookupRequest)
//! ```
//!
//! ## Error Bodies
//!
//! Failed calls answer with `{"ok": false, "error": "<message>"}`, decoded as
//! [`common::ErrorResponse`].

pub mod actions;
pub mod claims;
pub mod common;
pub mod history;
pub mod wallet;
pub mod withdrawals;

pub use actions::*;
pub use claims::*;
pub use common::*;
pub use history::*;
pub use wallet::*;
pub use withdrawals::*;
