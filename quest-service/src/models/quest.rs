use super::Theme;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::Validate;

/// Body of `POST /api/v1/generate-quest`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuestRequest {
    /// City or place to explore. Inserted into the prompt as-is.
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
    #[serde(default)]
    pub theme: Theme,
}

/// One generated quest item.
///
/// All four fields are required strings; anything else makes the whole
/// response invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub category: String,
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestResponse {
    pub tasks: Vec<Task>,
}

impl QuestResponse {
    pub fn distinct_categories(&self) -> usize {
        self.tasks
            .iter()
            .map(|t| t.category.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(category: &str) -> Task {
        Task {
            category: category.to_string(),
            icon: "👁️".to_string(),
            title: "看门道".to_string(),
            description: "找一扇最老的门".to_string(),
        }
    }

    #[test]
    fn theme_defaults_to_neutral() {
        let req: QuestRequest = serde_json::from_str(r#"{"location": "上海"}"#).unwrap();
        assert_eq!(req.theme, Theme::Default);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn missing_location_fails_deserialization() {
        assert!(serde_json::from_str::<QuestRequest>(r#"{"theme": "摄影师模式"}"#).is_err());
    }

    #[test]
    fn empty_location_fails_validation() {
        let req: QuestRequest = serde_json::from_str(r#"{"location": ""}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn task_requires_every_field() {
        let json = r#"{"category": "观察", "title": "t", "description": "d"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn task_rejects_non_string_fields() {
        let json = r#"{"category": "观察", "icon": 1, "title": "t", "description": "d"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn counts_distinct_categories() {
        let response = QuestResponse {
            tasks: vec![task("观察"), task("观察"), task("美食"), task("感受")],
        };
        assert_eq!(response.distinct_categories(), 3);
    }
}
