//! Collaborator provider abstractions and implementations.
//!
//! This module contains:
//! - The `BalanceProvider` and `PriceFeedProvider` traits the valuation service calls
//! - `SnapshotProvider`, an offline implementation of both backed by a JSON snapshot
//!
//! RPC-backed providers live outside this crate; anything that can answer
//! "raw balance + decimals" and "raw price + decimals + updated-at" plugs in
//! through the two traits.

mod snapshot;
mod traits;

pub use snapshot::SnapshotProvider;
pub use traits::{BalanceProvider, PriceFeedProvider};
