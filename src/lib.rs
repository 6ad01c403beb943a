//! Night-audit core of a hotel property-management system.
//!
//! Owns the business date, the reservation lifecycle and room occupancy, and runs the daily
//! end-of-day tick that moves reservations through their lifecycle and advances the date.
//! Everything a front desk or dashboard needs goes through the services in [`service`].

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
