//! Pipelines module (orchestration)

pub mod swap;

pub use swap::swap_intros;
