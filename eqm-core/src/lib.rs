#![warn(missing_docs)]
//! Domain models for an educational supply-and-demand market.
//!
//! The market is described by a small sampled table of prices and the base
//! quantities demanded and supplied at each price. From that table the
//! presentation layer derives piecewise-linear demand and supply curves,
//! optionally translated by a user-chosen shift, and hands them to
//! `eqm-solver` to locate the equilibrium.

/// Core domain models for the equilibrium market.
///
/// This module contains the fundamental data structures that represent the
/// domain entities: sampled market tables, their derived curves, and the
/// points those curves are made of.
///
/// The models in this module are primarily data structures with minimal
/// business logic; the crossing algorithm itself lives in `eqm-solver`.
pub mod models;
