//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary so that
//! services never handle SeaORM types directly. Parameter structs carry the input of
//! create/update operations.

pub mod occupancy;
pub mod reservation;
pub mod room;
