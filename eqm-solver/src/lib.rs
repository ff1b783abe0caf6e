#![warn(missing_docs)]
//! A market equilibrium solver for piecewise-linear supply and demand curves.
//!
//! Two curves sampled at the same ordered prices are scanned segment by
//! segment for the first point where they cross; that crossing is the market
//! equilibrium. The crate also evaluates surplus/shortage at individual
//! sampled prices, including prices pinned by a floor or ceiling.
//!
//! Every evaluation is synchronous and derives fresh state from the table it
//! is handed; nothing is cached between calls and nothing is shared, so each
//! interaction (or each session of a serving layer) owns its inputs outright.

/**
 * The crossing algorithm and its result types.
 */
mod solve;
pub use solve::*;

/**
 * Surplus/shortage evaluation at individual prices, including price controls.
 */
mod balance;
pub use balance::*;

/**
 * One user interaction: a pair of shifts solved against a base table.
 */
mod scenario;
pub use scenario::*;

pub use eqm_core::models::{Column, Curve, LookupError, MarketTable, Point};
