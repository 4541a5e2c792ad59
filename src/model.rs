use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Cost,
    City,
}

impl PageType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cost => "cost",
            Self::City => "city",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cost => "COST PAGE",
            Self::City => "CITY PAGE",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Partial,
    Fail,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Partial => "partial",
            Self::Fail => "fail",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Self::Pass => "✅",
            Self::Partial => "⚠️",
            Self::Fail => "❌",
        }
    }

    pub fn severity(self) -> u8 {
        match self {
            Self::Fail => 0,
            Self::Partial => 1,
            Self::Pass => 2,
        }
    }

    pub fn needs_improvement(self) -> bool {
        !matches!(self, Self::Pass)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemScore {
    pub item_id: String,
    pub item_name: String,
    pub verdict: Verdict,
    pub rationale: String,
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub report_version: u32,
    pub generated_at: String,
    pub page_type: PageType,
    pub total_score_pct: f64,
    pub passing: bool,
    pub scores: Vec<ItemScore>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords = Vec::new();
        let mut seen = Vec::new();

        for keyword in raw {
            let trimmed = keyword.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }

            let folded = trimmed.to_lowercase();
            if seen.contains(&folded) {
                continue;
            }

            seen.push(folded);
            keywords.push(trimmed.to_string());
        }

        Self { keywords }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn top(&self, limit: usize) -> impl Iterator<Item = &str> {
        self.iter().take(limit)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
