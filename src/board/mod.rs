pub mod cozy;
pub mod notation;

pub use cozy::{BoardSnapshot, Move, Position};
