use std::fs;
use std::path::Path;

use crate::error::FetchError;
use crate::fetch::{DocumentSource, KeywordSource};

// Treats identifiers as filesystem paths: the document is a plain text file,
// the keyword list is one keyword per line.
pub struct LocalFetcher;

fn read_file(path: &str) -> Result<String, FetchError> {
    fs::read_to_string(Path::new(path)).map_err(|source| FetchError::Io {
        path: path.to_string(),
        source,
    })
}

impl DocumentSource for LocalFetcher {
    fn fetch_document(&self, doc_id: &str) -> Result<String, FetchError> {
        read_file(doc_id)
    }
}

impl KeywordSource for LocalFetcher {
    fn fetch_keywords(&self, sheet_id: &str) -> Result<Vec<String>, FetchError> {
        let contents = read_file(sheet_id)?;

        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToOwned::to_owned)
            .collect())
    }
}
