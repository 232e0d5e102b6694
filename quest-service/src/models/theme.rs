use serde::{Deserialize, Serialize};
use std::fmt;

/// Exploration style preset chosen by the user.
///
/// Serialized with the Chinese label shown in the front-end; a short English
/// alias is accepted on input as well. Anything else fails deserialization,
/// which the HTTP layer reports as 422.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "默认模式", alias = "neutral")]
    Default,
    #[serde(rename = "文艺青年模式", alias = "literary")]
    LiteraryYouth,
    #[serde(rename = "美食探索者模式", alias = "foodie")]
    FoodExplorer,
    #[serde(rename = "摄影师模式", alias = "photographer")]
    Photographer,
    #[serde(rename = "社交达人模式", alias = "social")]
    SocialButterfly,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Default,
        Theme::LiteraryYouth,
        Theme::FoodExplorer,
        Theme::Photographer,
        Theme::SocialButterfly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Theme::Default => "默认模式",
            Theme::LiteraryYouth => "文艺青年模式",
            Theme::FoodExplorer => "美食探索者模式",
            Theme::Photographer => "摄影师模式",
            Theme::SocialButterfly => "社交达人模式",
        }
    }

    /// Sentence telling the model to put this theme above everything else.
    /// `None` for the neutral preset.
    pub fn directive(self) -> Option<String> {
        match self {
            Theme::Default => None,
            Theme::LiteraryYouth
            | Theme::FoodExplorer
            | Theme::Photographer
            | Theme::SocialButterfly => Some(format!(
                "CRITICAL: All generated tasks MUST be tailored to the '{}'. \
                 This is the top priority and should heavily influence the nature of the tasks.",
                self.label()
            )),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_theme_has_no_directive() {
        assert_eq!(Theme::Default.directive(), None);
        assert_eq!(Theme::default(), Theme::Default);
    }

    #[test]
    fn styled_themes_name_their_label() {
        for theme in Theme::ALL.into_iter().filter(|t| *t != Theme::Default) {
            let directive = theme.directive().expect("styled theme must have a directive");
            assert!(directive.starts_with("CRITICAL:"));
            assert!(directive.contains(&format!("'{}'", theme.label())));
        }
    }

    #[test]
    fn label_matches_wire_format() {
        for theme in Theme::ALL {
            let json = serde_json::to_string(&theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme.label()));
            let back: Theme = serde_json::from_str(&json).unwrap();
            assert_eq!(back, theme);
        }
    }

    #[test]
    fn english_alias_is_accepted() {
        let theme: Theme = serde_json::from_str("\"foodie\"").unwrap();
        assert_eq!(theme, Theme::FoodExplorer);
        let theme: Theme = serde_json::from_str("\"neutral\"").unwrap();
        assert_eq!(theme, Theme::Default);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(serde_json::from_str::<Theme>("\"赛博朋克模式\"").is_err());
    }
}
