//! Request and response types for quest generation.

pub mod quest;
pub mod theme;

pub use quest::{QuestRequest, QuestResponse, Task};
pub use theme::Theme;
