use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DATE_FORMAT: &str = "%B %d, %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Fitness,
    Career,
    Personal,
    Custom(String),
}

impl Category {
    /// Resolves the select value plus the optional free-text field.
    ///
    /// A blank selection, or "custom" with a blank text field, lands on
    /// `Personal`.
    pub fn from_form(selected: &str, custom: Option<&str>) -> Self {
        match selected.trim().to_lowercase().as_str() {
            "" => Category::Personal,
            "custom" => {
                let custom = custom.unwrap_or_default().trim().to_lowercase();
                if custom.is_empty() {
                    Category::Personal
                } else {
                    Category::from_key(&custom)
                }
            }
            other => Category::from_key(other),
        }
    }

    fn from_key(key: &str) -> Self {
        match key {
            "fitness" => Category::Fitness,
            "career" => Category::Career,
            "personal" => Category::Personal,
            other => Category::Custom(other.to_string()),
        }
    }

    /// Lookup key into the content table.
    pub fn key(&self) -> &str {
        match self {
            Category::Fitness => "fitness",
            Category::Career => "career",
            Category::Personal => "personal",
            Category::Custom(name) => name,
        }
    }

    pub fn label(&self) -> String {
        let mut chars = self.key().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalRecord {
    pub id: Uuid,
    pub created_at: DateTime<Local>,
    pub category: String,
    pub goal: String,
}

impl GoalRecord {
    pub fn date_label(&self) -> String {
        self.created_at.format(DATE_FORMAT).to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Submission {
    pub record: GoalRecord,
    pub tip: String,
    pub quote: String,
    pub image: String,
    pub progress: u8,
}

#[derive(Debug, Deserialize)]
pub struct GoalRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub custom_category: Option<String>,
    #[serde(default)]
    pub goal: String,
}

impl GoalRequest {
    pub fn category(&self) -> Category {
        Category::from_form(&self.category, self.custom_category.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct MotivationQuery {
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub date: String,
    pub category: String,
    pub goal: String,
    pub tip: String,
    pub quote: String,
    pub image: String,
    pub progress: u8,
}

impl From<&Submission> for SubmissionResponse {
    fn from(submission: &Submission) -> Self {
        Self {
            id: submission.record.id,
            date: submission.record.date_label(),
            category: submission.record.category.clone(),
            goal: submission.record.goal.clone(),
            tip: submission.tip.clone(),
            quote: submission.quote.clone(),
            image: submission.image.clone(),
            progress: submission.progress,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub date: String,
    pub category: String,
    pub goal: String,
}

impl From<&GoalRecord> for HistoryEntry {
    fn from(record: &GoalRecord) -> Self {
        Self {
            id: record.id,
            date: record.date_label(),
            category: record.category.clone(),
            goal: record.goal.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub progress: u8,
    pub goals: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MotivationResponse {
    pub category: String,
    pub tip: String,
    pub quote: String,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_parse_case_insensitively() {
        assert_eq!(Category::from_form("Fitness", None), Category::Fitness);
        assert_eq!(Category::from_form(" career ", None), Category::Career);
        assert_eq!(Category::from_form("personal", Some("ignored")), Category::Personal);
    }

    #[test]
    fn custom_category_is_trimmed_and_lowercased() {
        let category = Category::from_form("custom", Some("  Atlantis-Quest "));
        assert_eq!(category, Category::Custom("atlantis-quest".to_string()));
        assert_eq!(category.key(), "atlantis-quest");
        assert_eq!(category.label(), "Atlantis-quest");
    }

    #[test]
    fn blank_custom_category_falls_back_to_personal() {
        assert_eq!(Category::from_form("custom", Some("   ")), Category::Personal);
        assert_eq!(Category::from_form("custom", None), Category::Personal);
    }

    #[test]
    fn blank_selection_falls_back_to_personal() {
        assert_eq!(Category::from_form("", None), Category::Personal);
        assert_eq!(Category::from_form("  ", Some("")), Category::Personal);
        assert_eq!(Category::from_form("", None).label(), "Personal");
    }

    #[test]
    fn custom_text_naming_a_known_category_resolves_to_it() {
        assert_eq!(Category::from_form("custom", Some("CAREER")), Category::Career);
    }

    #[test]
    fn labels_capitalize_first_letter() {
        assert_eq!(Category::Fitness.label(), "Fitness");
        assert_eq!(Category::Custom("éte".to_string()).label(), "Éte");
    }
}
