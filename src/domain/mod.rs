//! Domain layer - Business logic and domain models

pub mod strategy;
pub mod tags;

pub use strategy::ResolveStrategy;
