//! # Service API Client Module
//!
//! HTTP gateway to the earnings service.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient: URL resolution, headers, error extraction
//! ├── dashboard.rs    - Wallet and earnings summary
//! ├── actions.rs      - Action inventory and the actions endpoint
//! ├── claims.rs       - Claim create / get / opened / confirm / skip
//! ├── history.rs      - Action history
//! └── withdrawals.rs  - Payout profile and withdrawals
//! ```

pub mod actions;
pub mod claims;
pub mod client;
pub mod dashboard;
pub mod history;
pub mod withdrawals;

pub use client::ApiClient;
