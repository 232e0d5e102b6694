pub mod output;
pub mod prompt;
pub mod providers;
pub mod quest;

pub use output::{parse_quest_response, strip_code_fence};
pub use prompt::render_prompt;
pub use quest::{QuestError, QuestService};
