use crate::error::EmptyChecklist;
use crate::model::{ItemScore, KeywordSet, PageType, Report, Verdict};
use crate::util::{now_utc_string, truncate_chars};

pub const REPORT_VERSION: u32 = 1;

// Total score is the share of items scored pass or partial, as a percentage.
pub const PASSING_THRESHOLD_PCT: f64 = 70.0;

pub const MAX_SUGGESTIONS: usize = 5;

const PREVIEW_CHARS: usize = 300;
const KEYWORD_DISPLAY_LIMIT: usize = 10;

pub fn build_report(
    page_type: PageType,
    scores: Vec<ItemScore>,
) -> Result<Report, EmptyChecklist> {
    if scores.is_empty() {
        return Err(EmptyChecklist(page_type));
    }

    let pass_equivalent = scores
        .iter()
        .filter(|score| !matches!(score.verdict, Verdict::Fail))
        .count();
    let total_score_pct = pass_equivalent as f64 / scores.len() as f64 * 100.0;

    let suggestions = select_suggestions(&scores);

    Ok(Report {
        report_version: REPORT_VERSION,
        generated_at: now_utc_string(),
        page_type,
        total_score_pct,
        passing: total_score_pct >= PASSING_THRESHOLD_PCT,
        scores,
        suggestions,
    })
}

fn select_suggestions(scores: &[ItemScore]) -> Vec<String> {
    let mut flagged: Vec<(usize, &ItemScore)> = scores
        .iter()
        .enumerate()
        .filter(|(_, score)| score.verdict.needs_improvement())
        .collect();

    flagged.sort_by_key(|(index, score)| (score.verdict.severity(), *index));

    flagged
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, score)| {
            score
                .suggestion
                .clone()
                .unwrap_or_else(|| score.rationale.clone())
        })
        .collect()
}

pub fn report_filename(doc_id: &str) -> String {
    let stem = doc_id
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(doc_id);
    format!("report_{stem}.md")
}

pub fn render_markdown(report: &Report, document_text: &str, keywords: &KeywordSet) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# SEO Proofreader Report".to_string());
    lines.push(String::new());
    lines.push(format!("Generated: {}", report.generated_at));
    lines.push(format!("Page type: {}", report.page_type.label()));
    lines.push(format!(
        "Total score: {:.1}% ({})",
        report.total_score_pct,
        if report.passing { "PASS" } else { "FAIL" }
    ));

    lines.push(String::new());
    lines.push("## Content Preview".to_string());
    lines.push(String::new());
    let preview = truncate_chars(document_text, PREVIEW_CHARS);
    let ellipsis = if preview.len() < document_text.len() { "…" } else { "" };
    lines.push(format!("```\n{preview}{ellipsis}\n```"));

    if !keywords.is_empty() {
        lines.push(String::new());
        lines.push("## Target Keywords".to_string());
        lines.push(String::new());
        for keyword in keywords.top(KEYWORD_DISPLAY_LIMIT) {
            lines.push(format!("- {keyword}"));
        }
        if keywords.len() > KEYWORD_DISPLAY_LIMIT {
            lines.push(format!(
                "- … and {} more",
                keywords.len() - KEYWORD_DISPLAY_LIMIT
            ));
        }
    }

    lines.push(String::new());
    lines.push("## Checklist Results".to_string());
    lines.push(String::new());
    lines.push("| Item | Verdict | |".to_string());
    lines.push("|------|---------|---|".to_string());
    for score in &report.scores {
        lines.push(format!(
            "| {} | {} | {} |",
            score.item_name,
            score.verdict.as_str(),
            score.verdict.marker()
        ));
    }

    lines.push(String::new());
    lines.push("## Details".to_string());
    for score in &report.scores {
        lines.push(String::new());
        lines.push(format!(
            "### {} {}: {}",
            score.verdict.marker(),
            score.item_name,
            score.verdict.as_str()
        ));
        lines.push(String::new());
        lines.push(score.rationale.clone());
    }

    if !report.suggestions.is_empty() {
        lines.push(String::new());
        lines.push("## Suggestions".to_string());
        lines.push(String::new());
        for (index, suggestion) in report.suggestions.iter().enumerate() {
            lines.push(format!("{}. {suggestion}", index + 1));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}
