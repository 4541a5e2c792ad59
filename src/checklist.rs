use crate::model::PageType;

pub const CHECKLIST_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub name: &'static str,
    pub rubric: &'static str,
    pub fallback_suggestion: &'static str,
}

const COST_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        id: "grammar",
        name: "Grammar Quality",
        rubric: "grammatical correctness and sentence structure",
        fallback_suggestion: "Proofread the content and fix grammatical errors.",
    },
    ChecklistItem {
        id: "readability",
        name: "Readability",
        rubric: "reading level, clarity, and flow",
        fallback_suggestion: "Break up long paragraphs into smaller, more digestible chunks.",
    },
    ChecklistItem {
        id: "keyword-usage",
        name: "Keyword Usage",
        rubric: "proper keyword density, with the primary keyword in important places",
        fallback_suggestion: "Increase usage of target keywords, especially the primary keyword.",
    },
    ChecklistItem {
        id: "title-keywords",
        name: "Title Quality",
        rubric: "title contains the primary keyword and a clear value proposition",
        fallback_suggestion: "Revise the title to include the primary keyword and a clear value proposition.",
    },
    ChecklistItem {
        id: "heading-structure",
        name: "Heading Structure",
        rubric: "logical organization with keywords in headings",
        fallback_suggestion: "Improve the heading structure to include keywords and better organization.",
    },
    ChecklistItem {
        id: "price-table",
        name: "Price Table Presence",
        rubric: "clear pricing information presented in table format",
        fallback_suggestion: "Add a clear pricing table with cost ranges.",
    },
    ChecklistItem {
        id: "internal-linking",
        name: "Internal Linking",
        rubric: "contains links to related content",
        fallback_suggestion: "Add internal links to related content.",
    },
    ChecklistItem {
        id: "cost-range-coverage",
        name: "Cost Range Coverage",
        rubric: "mentions price ranges, not just single prices",
        fallback_suggestion: "Mention typical price ranges rather than single prices.",
    },
];

const CITY_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        id: "grammar",
        name: "Grammar Quality",
        rubric: "grammatical correctness and sentence structure",
        fallback_suggestion: "Proofread the content and fix grammatical errors.",
    },
    ChecklistItem {
        id: "readability",
        name: "Readability",
        rubric: "reading level, clarity, and flow",
        fallback_suggestion: "Break up long paragraphs into smaller, more digestible chunks.",
    },
    ChecklistItem {
        id: "keyword-usage",
        name: "Keyword Usage",
        rubric: "proper keyword density, with location keywords in important places",
        fallback_suggestion: "Increase usage of target keywords, especially the primary keyword.",
    },
    ChecklistItem {
        id: "title-location",
        name: "Title Quality",
        rubric: "title contains the location name and a clear service offering",
        fallback_suggestion: "Revise the title to name the target location and the service offered.",
    },
    ChecklistItem {
        id: "local-signals",
        name: "Local Signals",
        rubric: "mentions neighborhood names, landmarks, and local terminology",
        fallback_suggestion: "Add more local references and location-specific information.",
    },
    ChecklistItem {
        id: "heading-structure",
        name: "Heading Structure",
        rubric: "logical organization with the location in headings",
        fallback_suggestion: "Improve the heading structure to include the location and better organization.",
    },
    ChecklistItem {
        id: "local-business",
        name: "Local Business Mentions",
        rubric: "references to local service providers",
        fallback_suggestion: "Reference local service providers operating in the area.",
    },
];

pub fn checklist_for(page_type: PageType) -> &'static [ChecklistItem] {
    match page_type {
        PageType::Cost => COST_CHECKLIST,
        PageType::City => CITY_CHECKLIST,
    }
}
