use crate::error::InvalidPageType;
use crate::model::{KeywordSet, PageType};

const COST_TERMS: &[&str] = &["cost", "price", "pricing", "fee", "quote", "affordable", "$"];

const CITY_TERMS: &[&str] = &[
    "city",
    "local",
    "area",
    "near me",
    "near",
    "location",
    "neighborhood",
];

// Ties, including documents with no indicators at all, resolve to cost pages.
pub const DEFAULT_PAGE_TYPE: PageType = PageType::Cost;

pub fn validate_override(raw: Option<&str>) -> Result<Option<PageType>, InvalidPageType> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "cost" => Ok(Some(PageType::Cost)),
        "city" => Ok(Some(PageType::City)),
        _ => Err(InvalidPageType(raw.to_string())),
    }
}

pub fn detect_page_type(document_text: &str, keywords: &KeywordSet) -> PageType {
    let mut haystack = document_text.to_lowercase();
    for keyword in keywords.iter() {
        haystack.push(' ');
        haystack.push_str(&keyword.to_lowercase());
    }

    let cost_hits = count_term_hits(&haystack, COST_TERMS);
    let city_hits = count_term_hits(&haystack, CITY_TERMS);

    if city_hits > cost_hits {
        PageType::City
    } else {
        DEFAULT_PAGE_TYPE
    }
}

fn count_term_hits(haystack: &str, terms: &[&str]) -> usize {
    terms
        .iter()
        .map(|term| haystack.matches(term).count())
        .sum()
}
