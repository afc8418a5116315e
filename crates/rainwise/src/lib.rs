//! Rainwater-harvesting decision engine.
//!
//! The [`assessment`] module classifies a sparse site description into one of the catalogued
//! harvesting-system categories and feeds the winner into the sizing, costing and purification
//! calculators. Everything under it is synchronous and free of I/O; [`regions`] and
//! [`config`] are the only modules that touch the outside world.

pub mod assessment;
pub mod config;
pub mod error;
pub mod regions;
pub mod telemetry;
