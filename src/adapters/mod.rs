// Adapters layer: concrete implementations of the domain ports.

pub mod analytics;
pub mod consent;
pub mod telegram;
pub mod terminal;
