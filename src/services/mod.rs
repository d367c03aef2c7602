//! Service layer for observable aggregation and visibility decisions.
//!
//! This module contains the service layer that sits between the events
//! provider boundary and callers. Services orchestrate provider calls and
//! implement the decision and explanation logic.

pub mod aggregator;

pub mod engine;

pub mod explanation;

pub mod visibility;

pub use aggregator::assemble_observations;
pub use engine::evaluate;
pub use explanation::explain;
pub use visibility::assess_visibility;
