//! Carmate API: library crate for the shopper-facing HTTP server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `cm-e2e-tests`) can access `AppState`, `build_router`, and the
//! session garage.

pub mod config;
pub mod error;
pub mod garage;
pub mod routes;
pub mod state;
