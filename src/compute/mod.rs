//! Compute engine — payload-driven task processing stub
//!
//! The engine is the external collaborator the router hands message
//! payloads to. It is stateless per call apart from its processing log
//! and operation counter. The "quantum" optimization is a stochastic
//! local search stub and the "ML" inference is a fixed placeholder;
//! neither touches real hardware or models.

mod annealing;
mod engine;

pub use annealing::anneal;
pub use engine::ComputeEngine;
