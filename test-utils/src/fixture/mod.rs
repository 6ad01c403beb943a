//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory entity models for unit
//! tests of conversion and lifecycle logic. Unlike factories, fixtures do NOT insert data
//! into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let room = fixture::room::entity();
//!
//! // Create with custom fields
//! let occupied = fixture::room::entity_builder()
//!     .occupied_by(7)
//!     .build();
//! ```

pub mod reservation;
pub mod room;

pub use reservation::{entity as reservation_entity, entity_builder as reservation_entity_builder};
pub use room::{entity as room_entity, entity_builder as room_entity_builder};
