//! Range math and part planning.
//!
//! Splits a download into N inclusive byte ranges and renders the HTTP
//! `Range` header for each.

mod range;

pub use range::{plan_parts, PartPlan, PartRange};
