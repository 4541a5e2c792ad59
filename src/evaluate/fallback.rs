use std::sync::LazyLock;

use regex::Regex;

use crate::checklist::ChecklistItem;
use crate::evaluate::BackendScore;
use crate::model::KeywordSet;

static GRAMMAR_ISSUES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[,.?!]|[,.?!][A-Za-z]").expect("valid grammar regex"));

static SENTENCE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid sentence regex"));

static MARKDOWN_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+\S").expect("valid heading regex"));

static PRICE_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)price table|cost table|\|\s*price\s*\||\|\s*cost\s*\|")
        .expect("valid price table regex")
});

static CONTENT_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://|\[[^\]]+\]\([^)]+\)").expect("valid link regex"));

static PRICE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\s?\d[\d,]*(?:\.\d+)?\s*(?:-|–|to)\s*\$?\s?\d").expect("valid range regex")
});

static PRICE_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\s?\d").expect("valid amount regex"));

static LOCAL_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)local|nearby|in the area|around (?:the )?(?:city|town)|community")
        .expect("valid local term regex")
});

static LOCATION_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:in|In|near|Near) [A-Z][a-z]+(?: [A-Z][a-z]+)?")
        .expect("valid location regex")
});

static BUSINESS_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:company|provider|contractor|business|serving|family-owned)\b")
        .expect("valid business term regex")
});

pub fn score_item(item: &ChecklistItem, text: &str, keywords: &KeywordSet) -> BackendScore {
    match item.id {
        "grammar" => grammar(text),
        "readability" => readability(text),
        "keyword-usage" => keyword_usage(text, keywords),
        "title-keywords" => title_keywords(text, keywords),
        "title-location" => title_location(text),
        "heading-structure" => heading_structure(text),
        "price-table" => price_table(text),
        "internal-linking" => internal_linking(text),
        "cost-range-coverage" => cost_range_coverage(text),
        "local-signals" => local_signals(text),
        "local-business" => local_business(text),
        _ => BackendScore {
            score: crate::evaluate::PARTIAL_SCORE,
            details: format!("no local heuristic registered for item {}", item.id),
            suggestion: None,
        },
    }
}

fn scored(score: u8, details: String) -> BackendScore {
    BackendScore {
        score,
        details,
        suggestion: None,
    }
}

fn grammar(text: &str) -> BackendScore {
    let issues = GRAMMAR_ISSUES.find_iter(text).count();
    let score = 10_usize.saturating_sub(issues / 2).min(10) as u8;

    scored(
        score,
        format!("found approximately {issues} potential grammar issues"),
    )
}

fn readability(text: &str) -> BackendScore {
    let sentences: Vec<&str> = SENTENCE_SPLIT
        .split(text)
        .filter(|sentence| !sentence.trim().is_empty())
        .collect();

    let word_total: usize = sentences
        .iter()
        .map(|sentence| sentence.split_whitespace().count())
        .sum();
    let average = word_total as f64 / sentences.len().max(1) as f64;

    let score = if (10.0..=20.0).contains(&average) { 10 } else { 5 };
    scored(score, format!("average words per sentence: {average:.1}"))
}

fn keyword_usage(text: &str, keywords: &KeywordSet) -> BackendScore {
    if keywords.is_empty() {
        return scored(0, "no keywords provided to evaluate density".to_string());
    }

    let lowered = text.to_lowercase();
    let total_words = text.split_whitespace().count().max(1);

    // First keyword wins ties so repeated runs agree.
    let mut primary = "";
    let mut primary_count = 0_usize;
    for keyword in keywords.iter() {
        let count = lowered.matches(&keyword.to_lowercase()).count();
        if count > primary_count {
            primary = keyword;
            primary_count = count;
        }
    }

    if primary_count == 0 {
        return scored(0, "no target keyword appears in the content".to_string());
    }

    let density = primary_count as f64 / total_words as f64 * 100.0;
    let score = if (1.0..=3.0).contains(&density) { 10 } else { 5 };

    scored(
        score,
        format!("primary keyword '{primary}' density: {density:.2}%"),
    )
}

fn first_line(text: &str) -> &str {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

fn title_keywords(text: &str, keywords: &KeywordSet) -> BackendScore {
    let title = first_line(text).to_lowercase();
    let hits = keywords
        .top(3)
        .filter(|keyword| title.contains(&keyword.to_lowercase()))
        .count();

    scored(
        (hits * 3).min(10) as u8,
        format!("{hits} of the first 3 keywords appear in the title"),
    )
}

fn title_location(text: &str) -> BackendScore {
    if LOCATION_PHRASE.is_match(first_line(text)) {
        scored(10, "title contains a location".to_string())
    } else {
        scored(0, "location missing from the title".to_string())
    }
}

fn heading_structure(text: &str) -> BackendScore {
    let headings = MARKDOWN_HEADING.find_iter(text).count();
    scored(
        (headings * 3).min(10) as u8,
        format!("found {headings} markdown headings"),
    )
}

fn price_table(text: &str) -> BackendScore {
    if PRICE_TABLE.is_match(text) {
        scored(10, "price table detected".to_string())
    } else {
        scored(0, "no price table found".to_string())
    }
}

fn internal_linking(text: &str) -> BackendScore {
    let links = CONTENT_LINK.find_iter(text).count();
    let score = match links {
        0 => 0,
        1 => 5,
        _ => 10,
    };

    scored(score, format!("found {links} links in the content"))
}

fn cost_range_coverage(text: &str) -> BackendScore {
    if PRICE_RANGE.is_match(text) {
        scored(10, "price range coverage detected".to_string())
    } else if PRICE_AMOUNT.is_match(text) {
        scored(5, "single prices found but no ranges".to_string())
    } else {
        scored(0, "no pricing amounts found".to_string())
    }
}

fn local_signals(text: &str) -> BackendScore {
    let signals =
        LOCAL_TERM.find_iter(text).count() + LOCATION_PHRASE.find_iter(text).count();

    scored(
        (signals * 2).min(10) as u8,
        format!("found {signals} local terminology references"),
    )
}

fn local_business(text: &str) -> BackendScore {
    let mentions = BUSINESS_TERM.find_iter(text).count();

    scored(
        (mentions * 2).min(10) as u8,
        format!("found {mentions} local business references"),
    )
}

#[cfg(test)]
mod tests {
    use crate::checklist::checklist_for;
    use crate::model::PageType;

    use super::*;

    fn item(page_type: PageType, id: &str) -> ChecklistItem {
        *checklist_for(page_type)
            .iter()
            .find(|item| item.id == id)
            .unwrap()
    }

    #[test]
    fn keyword_usage_in_density_band_scores_full() {
        let keywords = KeywordSet::new(["roof repair"]);
        let words = ["filler"; 96].join(" ");
        let text = format!("roof repair quotes. roof repair pricing. {words}");

        let result = score_item(&item(PageType::Cost, "keyword-usage"), &text, &keywords);
        assert_eq!(result.score, 10);
        assert!(result.details.contains("roof repair"));
    }

    #[test]
    fn keyword_usage_without_keywords_scores_zero() {
        let result = score_item(
            &item(PageType::Cost, "keyword-usage"),
            "some content",
            &KeywordSet::default(),
        );
        assert_eq!(result.score, 0);
    }

    #[test]
    fn keyword_usage_prefers_first_keyword_on_ties() {
        let keywords = KeywordSet::new(["alpha", "beta"]);
        let result = score_item(
            &item(PageType::Cost, "keyword-usage"),
            "alpha beta alpha beta",
            &keywords,
        );
        assert!(result.details.contains("'alpha'"));
    }

    #[test]
    fn price_table_detection_matches_markdown_tables() {
        let with_table = "| Service | Price |\n|---|---|\n| Repair | $100 |";
        let result = score_item(&item(PageType::Cost, "price-table"), with_table, &KeywordSet::default());
        assert_eq!(result.score, 10);

        let without = "We charge fair amounts for everything.";
        let result = score_item(&item(PageType::Cost, "price-table"), without, &KeywordSet::default());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn cost_range_scores_by_specificity() {
        let no_keywords = KeywordSet::default();
        let item = item(PageType::Cost, "cost-range-coverage");

        assert_eq!(score_item(&item, "Expect $200 - $400 in total.", &no_keywords).score, 10);
        assert_eq!(score_item(&item, "A flat $250 fee.", &no_keywords).score, 5);
        assert_eq!(score_item(&item, "Contact us for details.", &no_keywords).score, 0);
    }

    #[test]
    fn title_location_checks_the_first_line_only() {
        let item = item(PageType::City, "title-location");
        let no_keywords = KeywordSet::default();

        let titled = "Plumbing Services in Denver\nWe fix pipes.";
        assert_eq!(score_item(&item, titled, &no_keywords).score, 10);

        let untitled = "Plumbing Services\nBased in Denver.";
        assert_eq!(score_item(&item, untitled, &no_keywords).score, 0);
    }

    #[test]
    fn local_signals_count_terms_and_locations() {
        let item = item(PageType::City, "local-signals");
        let text = "We are a local team serving the community in Austin and nearby suburbs.";

        let result = score_item(&item, text, &KeywordSet::default());
        assert!(result.score >= 6, "score was {}", result.score);
    }

    #[test]
    fn every_checklist_item_has_a_dedicated_heuristic() {
        for page_type in [PageType::Cost, PageType::City] {
            for entry in checklist_for(page_type) {
                let result = score_item(entry, "Sample content.", &KeywordSet::default());
                assert!(
                    !result.details.contains("no local heuristic"),
                    "item {} fell through to the default heuristic",
                    entry.id
                );
            }
        }
    }
}
