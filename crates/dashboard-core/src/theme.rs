//! Colour theme passed explicitly into page builders.

use crate::markup::Style;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: String,
    pub text: String,
    pub text_align: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            text: "#111111".to_string(),
            text_align: "left".to_string(),
        }
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: "#111111".to_string(),
            text: "#7FDBFF".to_string(),
            text_align: "center".to_string(),
        }
    }

    /// Inline style for themed containers and headings.
    pub fn style(&self) -> Style {
        Style::new()
            .set("background", self.background.as_str())
            .set("color", self.text.as_str())
            .set("textAlign", self.text_align.as_str())
    }
}
