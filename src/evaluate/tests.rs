use crate::checklist::checklist_for;
use crate::error::ScoringError;
use crate::model::{KeywordSet, PageType, Verdict};

use super::*;

struct ScriptedBackend {
    fail_ids: Vec<&'static str>,
    score: u8,
}

impl ScoringBackend for ScriptedBackend {
    fn score_item(
        &self,
        item: &crate::checklist::ChecklistItem,
        _document_text: &str,
        _keywords: &KeywordSet,
    ) -> Result<BackendScore, ScoringError> {
        if self.fail_ids.contains(&item.id) {
            return Err(ScoringError::Unparsable("scripted failure".to_string()));
        }

        Ok(BackendScore {
            score: self.score,
            details: format!("service rationale for {}", item.id),
            suggestion: None,
        })
    }
}

#[test]
fn verdict_mapping_uses_documented_thresholds() {
    assert_eq!(verdict_for(10), Verdict::Pass);
    assert_eq!(verdict_for(8), Verdict::Pass);
    assert_eq!(verdict_for(7), Verdict::Partial);
    assert_eq!(verdict_for(5), Verdict::Partial);
    assert_eq!(verdict_for(4), Verdict::Fail);
    assert_eq!(verdict_for(0), Verdict::Fail);
}

#[test]
fn evaluate_without_backend_scores_every_item_via_fallback() {
    let checklist = checklist_for(PageType::Cost);
    let scores = evaluate(None, "Some cost page content.", &KeywordSet::default(), checklist);

    assert_eq!(scores.len(), checklist.len());
    for (score, item) in scores.iter().zip(checklist) {
        assert_eq!(score.item_id, item.id);
        assert!(
            score.rationale.starts_with(FALLBACK_PREFIX),
            "item {} rationale: {}",
            score.item_id,
            score.rationale
        );
    }
}

#[test]
fn evaluate_survives_total_backend_failure() {
    let backend = ScriptedBackend {
        fail_ids: checklist_for(PageType::City).iter().map(|item| item.id).collect(),
        score: 9,
    };
    let checklist = checklist_for(PageType::City);

    let scores = evaluate(
        Some(&backend),
        "Local services in Springfield.",
        &KeywordSet::default(),
        checklist,
    );

    assert_eq!(scores.len(), checklist.len());
    assert!(scores.iter().all(|score| score.rationale.starts_with(FALLBACK_PREFIX)));
}

#[test]
fn single_item_failure_falls_back_for_that_item_only() {
    let backend = ScriptedBackend {
        fail_ids: vec!["readability"],
        score: 9,
    };
    let checklist = checklist_for(PageType::Cost);

    let scores = evaluate(
        Some(&backend),
        "Pricing content.",
        &KeywordSet::default(),
        checklist,
    );

    assert_eq!(scores.len(), checklist.len());
    for score in &scores {
        if score.item_id == "readability" {
            assert!(score.rationale.starts_with(FALLBACK_PREFIX));
        } else {
            assert_eq!(
                score.rationale,
                format!("service rationale for {}", score.item_id)
            );
        }
    }
}

#[test]
fn evaluate_preserves_checklist_order() {
    let backend = ScriptedBackend {
        fail_ids: vec!["grammar", "price-table"],
        score: 6,
    };
    let checklist = checklist_for(PageType::Cost);

    let scores = evaluate(Some(&backend), "content", &KeywordSet::default(), checklist);

    let returned: Vec<&str> = scores.iter().map(|score| score.item_id.as_str()).collect();
    let expected: Vec<&str> = checklist.iter().map(|item| item.id).collect();
    assert_eq!(returned, expected);
}

#[test]
fn failing_primary_scores_still_carry_suggestions() {
    let backend = ScriptedBackend {
        fail_ids: vec![],
        score: 3,
    };
    let checklist = checklist_for(PageType::Cost);

    let scores = evaluate(Some(&backend), "content", &KeywordSet::default(), checklist);

    for score in &scores {
        assert_eq!(score.verdict, Verdict::Fail);
        assert!(score.suggestion.is_some(), "item {}", score.item_id);
    }
}

#[test]
fn passing_primary_scores_omit_suggestions() {
    let backend = ScriptedBackend {
        fail_ids: vec![],
        score: 9,
    };
    let checklist = checklist_for(PageType::City);

    let scores = evaluate(Some(&backend), "content", &KeywordSet::default(), checklist);

    for score in &scores {
        assert_eq!(score.verdict, Verdict::Pass);
        assert!(score.suggestion.is_none(), "item {}", score.item_id);
    }
}
