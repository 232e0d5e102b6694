//! HTTP handlers for the quest service.

pub mod health;
pub mod quest;

pub use health::{health_check, root};
pub use quest::generate_quest;
