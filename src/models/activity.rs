use serde::{Deserialize, Serialize};

/// One selectable activity from the static catalog. Not user-owned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub impact: Impact,
    pub category: String,
    pub description: String,
    /// 1-10 score used only for presentation tiering, never for mood math.
    pub freshness: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

impl Default for Impact {
    fn default() -> Self {
        Self::Neutral
    }
}

/// Presentation tier derived from the freshness score.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessTier {
    VeryFresh,
    Fresh,
    Neutral,
    Low,
}

impl Activity {
    pub fn freshness_tier(&self) -> FreshnessTier {
        match self.freshness {
            9.. => FreshnessTier::VeryFresh,
            7..=8 => FreshnessTier::Fresh,
            5..=6 => FreshnessTier::Neutral,
            _ => FreshnessTier::Low,
        }
    }
}
