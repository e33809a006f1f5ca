use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualificationResult {
    /// Always within [0, 100].
    pub score: i32,
    pub category: Category,
    pub analysis: String,
    pub recommendations: Vec<String>,
    pub urgency: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hot,
    Warm,
    Cold,
}

impl Category {
    /// Inclusive lower bounds: >= 75 hot, >= 50 warm, below that cold.
    pub fn from_score(score: i32) -> Self {
        if score >= 75 {
            Category::Hot
        } else if score >= 50 {
            Category::Warm
        } else {
            Category::Cold
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hot => "hot",
            Category::Warm => "warm",
            Category::Cold => "cold",
        }
    }
}
