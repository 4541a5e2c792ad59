mod fallback;
mod openai;
#[cfg(test)]
mod tests;

pub use openai::{DEFAULT_MODEL, OpenAiBackend};

use tracing::warn;

use crate::checklist::ChecklistItem;
use crate::error::ScoringError;
use crate::model::{ItemScore, KeywordSet, Verdict};

pub const PASS_SCORE: u8 = 8;
pub const PARTIAL_SCORE: u8 = 5;
pub const MAX_ITEM_SCORE: u8 = 10;

pub const FALLBACK_PREFIX: &str = "fallback evaluation:";

#[derive(Debug, Clone)]
pub struct BackendScore {
    pub score: u8,
    pub details: String,
    pub suggestion: Option<String>,
}

pub trait ScoringBackend {
    fn score_item(
        &self,
        item: &ChecklistItem,
        document_text: &str,
        keywords: &KeywordSet,
    ) -> Result<BackendScore, ScoringError>;
}

pub fn verdict_for(score: u8) -> Verdict {
    if score >= PASS_SCORE {
        Verdict::Pass
    } else if score >= PARTIAL_SCORE {
        Verdict::Partial
    } else {
        Verdict::Fail
    }
}

pub fn evaluate(
    backend: Option<&dyn ScoringBackend>,
    document_text: &str,
    keywords: &KeywordSet,
    checklist: &[ChecklistItem],
) -> Vec<ItemScore> {
    checklist
        .iter()
        .map(|item| {
            match backend.map(|backend| backend.score_item(item, document_text, keywords)) {
                Some(Ok(scored)) => primary_item_score(item, scored),
                Some(Err(err)) => {
                    warn!(item = item.id, error = %err, "scoring service failed, using local fallback");
                    fallback_item_score(item, document_text, keywords)
                }
                None => fallback_item_score(item, document_text, keywords),
            }
        })
        .collect()
}

fn primary_item_score(item: &ChecklistItem, scored: BackendScore) -> ItemScore {
    let verdict = verdict_for(scored.score.min(MAX_ITEM_SCORE));
    let suggestion = match scored.suggestion.filter(|text| !text.trim().is_empty()) {
        Some(text) => Some(text),
        None if verdict.needs_improvement() => Some(item.fallback_suggestion.to_string()),
        None => None,
    };

    ItemScore {
        item_id: item.id.to_string(),
        item_name: item.name.to_string(),
        verdict,
        rationale: scored.details,
        suggestion,
    }
}

fn fallback_item_score(
    item: &ChecklistItem,
    document_text: &str,
    keywords: &KeywordSet,
) -> ItemScore {
    let scored = fallback::score_item(item, document_text, keywords);
    let verdict = verdict_for(scored.score);

    ItemScore {
        item_id: item.id.to_string(),
        item_name: item.name.to_string(),
        verdict,
        rationale: format!("{FALLBACK_PREFIX} {}", scored.details),
        suggestion: verdict
            .needs_improvement()
            .then(|| item.fallback_suggestion.to_string()),
    }
}
