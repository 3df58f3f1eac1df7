//! Convolutional reference models.

mod simple;
mod tiny;

pub use simple::{SimpleCnn, SimpleCnnConfig};
pub use tiny::{TinyCnn, TinyCnnConfig};
