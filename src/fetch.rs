mod google;
mod local;

pub use google::GoogleFetcher;
pub use local::LocalFetcher;

use crate::error::FetchError;

pub trait DocumentSource {
    fn fetch_document(&self, doc_id: &str) -> Result<String, FetchError>;
}

pub trait KeywordSource {
    fn fetch_keywords(&self, sheet_id: &str) -> Result<Vec<String>, FetchError>;
}

pub trait Fetcher: DocumentSource + KeywordSource {}

impl<T: DocumentSource + KeywordSource> Fetcher for T {}
