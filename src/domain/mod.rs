//! Domain layer
//!
//! Entities, value objects, ports and pure services. Nothing in here knows
//! which geocoding provider or geometry library is plugged in.

pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;
