//! Single test binary entry point.
//!
//! Structure:
//! - scenarios: end-to-end gesture sequences against a 300x300 container
//! - invariants: properties every committed selection must satisfy

mod invariants;
mod scenarios;
