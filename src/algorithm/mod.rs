//! Algorithms for risk scoring and outbreak simulation.

pub mod outbreak;
pub mod risk;
