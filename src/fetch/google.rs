use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::FetchError;
use crate::fetch::{DocumentSource, KeywordSource};

const DOCS_ENDPOINT: &str = "https://docs.googleapis.com/v1/documents";
const SHEETS_ENDPOINT: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const TOKEN_VARIABLE: &str = "GOOGLE_ACCESS_TOKEN";

pub struct GoogleFetcher {
    client: Client,
    token: String,
}

impl GoogleFetcher {
    pub fn from_env(timeout: Duration) -> Result<Self, FetchError> {
        let token = std::env::var(TOKEN_VARIABLE)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(FetchError::MissingCredentials {
                kind: "google",
                variable: TOKEN_VARIABLE,
            })?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, token })
    }

    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        kind: &'static str,
        id: &str,
        url: &str,
    ) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .map_err(|source| FetchError::Request {
                kind,
                id: id.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                kind,
                id: id.to_string(),
                status,
            });
        }

        response.json::<T>().map_err(|err| FetchError::BadBody {
            kind,
            id: id.to_string(),
            detail: err.to_string(),
        })
    }
}

impl DocumentSource for GoogleFetcher {
    fn fetch_document(&self, doc_id: &str) -> Result<String, FetchError> {
        let url = format!("{DOCS_ENDPOINT}/{doc_id}");
        let document: GoogleDocument = self.get_json("document", doc_id, &url)?;

        let text = extract_document_text(&document);
        if text.trim().is_empty() {
            return Err(FetchError::BadBody {
                kind: "document",
                id: doc_id.to_string(),
                detail: "document body contains no text".to_string(),
            });
        }

        debug!(doc_id, chars = text.len(), "fetched document body");
        Ok(text)
    }
}

impl KeywordSource for GoogleFetcher {
    fn fetch_keywords(&self, sheet_id: &str) -> Result<Vec<String>, FetchError> {
        let metadata_url =
            format!("{SHEETS_ENDPOINT}/{sheet_id}?fields=sheets.properties.title");
        let metadata: SpreadsheetMetadata = self.get_json("keywords", sheet_id, &metadata_url)?;

        let first_sheet = metadata
            .sheets
            .first()
            .map(|sheet| sheet.properties.title.as_str())
            .ok_or_else(|| FetchError::BadBody {
                kind: "keywords",
                id: sheet_id.to_string(),
                detail: "spreadsheet has no sheets".to_string(),
            })?;

        let values_url = format!("{SHEETS_ENDPOINT}/{sheet_id}/values/{first_sheet}");
        let range: ValueRange = self.get_json("keywords", sheet_id, &values_url)?;

        debug!(sheet_id, rows = range.values.len(), "fetched keyword rows");
        Ok(extract_keywords(&range.values))
    }
}

#[derive(Debug, Deserialize)]
struct GoogleDocument {
    #[serde(default)]
    body: DocumentBody,
}

#[derive(Debug, Default, Deserialize)]
struct DocumentBody {
    #[serde(default)]
    content: Vec<StructuralElement>,
}

#[derive(Debug, Deserialize)]
struct StructuralElement {
    #[serde(default)]
    paragraph: Option<Paragraph>,
}

#[derive(Debug, Deserialize)]
struct Paragraph {
    #[serde(default)]
    elements: Vec<ParagraphElement>,
}

#[derive(Debug, Deserialize)]
struct ParagraphElement {
    #[serde(rename = "textRun", default)]
    text_run: Option<TextRun>,
}

#[derive(Debug, Deserialize)]
struct TextRun {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Vec<Sheet>,
}

#[derive(Debug, Deserialize)]
struct Sheet {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

fn extract_document_text(document: &GoogleDocument) -> String {
    let mut text = String::new();

    for element in &document.body.content {
        let Some(paragraph) = &element.paragraph else {
            continue;
        };

        for part in &paragraph.elements {
            if let Some(run) = &part.text_run
                && let Some(content) = &run.content
            {
                text.push_str(content);
            }
        }
    }

    text
}

fn keyword_column_index(header: &[String]) -> Option<usize> {
    header
        .iter()
        .position(|cell| cell.to_lowercase().contains("keyword"))
}

fn extract_keywords(values: &[Vec<String>]) -> Vec<String> {
    let Some(header) = values.first() else {
        return Vec::new();
    };

    let column = keyword_column_index(header).unwrap_or(0);

    values[1..]
        .iter()
        .filter_map(|row| row.get(column))
        .filter(|cell| !cell.trim().is_empty())
        .map(|cell| cell.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document_from_json(raw: &str) -> GoogleDocument {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn extract_document_text_concatenates_text_runs() {
        let document = document_from_json(
            r#"{
                "body": {
                    "content": [
                        {"sectionBreak": {}},
                        {"paragraph": {"elements": [
                            {"textRun": {"content": "Roof Repair Costs\n"}},
                            {"textRun": {"content": "Updated 2026."}}
                        ]}},
                        {"paragraph": {"elements": [
                            {"inlineObjectElement": {}},
                            {"textRun": {"content": " Prices vary."}}
                        ]}}
                    ]
                }
            }"#,
        );

        assert_eq!(
            extract_document_text(&document),
            "Roof Repair Costs\nUpdated 2026. Prices vary."
        );
    }

    #[test]
    fn extract_document_text_handles_empty_body() {
        let document = document_from_json("{}");
        assert_eq!(extract_document_text(&document), "");
    }

    #[test]
    fn keyword_column_is_detected_by_header_name() {
        let header = vec![
            "Page".to_string(),
            "Target Keyword".to_string(),
            "Volume".to_string(),
        ];
        assert_eq!(keyword_column_index(&header), Some(1));
    }

    #[test]
    fn extract_keywords_skips_header_and_blank_cells() {
        let values = vec![
            vec!["Page".to_string(), "Keywords".to_string()],
            vec!["a".to_string(), "roof repair cost".to_string()],
            vec!["b".to_string(), "  ".to_string()],
            vec!["c".to_string()],
            vec!["d".to_string(), "roof replacement price".to_string()],
        ];

        assert_eq!(
            extract_keywords(&values),
            vec!["roof repair cost", "roof replacement price"]
        );
    }

    #[test]
    fn extract_keywords_defaults_to_first_column_without_keyword_header() {
        let values = vec![
            vec!["Terms".to_string()],
            vec!["plumber near me".to_string()],
            vec!["emergency plumber".to_string()],
        ];

        assert_eq!(
            extract_keywords(&values),
            vec!["plumber near me", "emergency plumber"]
        );
    }

    #[test]
    fn extract_keywords_returns_empty_for_empty_sheet() {
        assert!(extract_keywords(&[]).is_empty());
    }
}
