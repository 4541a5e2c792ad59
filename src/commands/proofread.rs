use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::{ProofreadArgs, SourceKind};
use crate::classify;
use crate::checklist::checklist_for;
use crate::evaluate::{self, OpenAiBackend, ScoringBackend};
use crate::fetch::{Fetcher, GoogleFetcher, LocalFetcher};
use crate::model::KeywordSet;
use crate::report::{build_report, render_markdown, report_filename};
use crate::util::{ensure_directory, write_json_pretty, write_text};

pub fn run(args: ProofreadArgs) -> Result<()> {
    // Override validation happens before any fetch so a bad value fails fast.
    let override_page = classify::validate_override(args.page_type.as_deref())?;
    let timeout = Duration::from_millis(args.timeout_ms);

    let fetcher: Box<dyn Fetcher> = match args.source {
        SourceKind::Google => Box::new(GoogleFetcher::from_env(timeout)?),
        SourceKind::Local => Box::new(LocalFetcher),
    };

    info!(doc_id = %args.doc_id, source = args.source.as_str(), "reading document content");
    let document_text = fetcher.fetch_document(&args.doc_id)?;

    info!(sheet_id = %args.keywords_sheet, "reading keywords");
    let keywords = KeywordSet::new(fetcher.fetch_keywords(&args.keywords_sheet)?);
    if keywords.is_empty() {
        warn!(sheet_id = %args.keywords_sheet, "keyword source produced no keywords");
    }

    let page_type = match override_page {
        Some(page_type) => {
            info!(page_type = page_type.as_str(), "using requested page type");
            page_type
        }
        None => {
            let detected = classify::detect_page_type(&document_text, &keywords);
            info!(page_type = detected.as_str(), "detected page type");
            detected
        }
    };

    let backend = if args.no_remote_scoring {
        None
    } else {
        let backend = OpenAiBackend::from_env(args.model.clone(), timeout)?;
        if backend.is_none() {
            warn!("OPENAI_API_KEY not set, every item will use the local fallback");
        }
        backend
    };

    let checklist = checklist_for(page_type);
    info!(
        page_type = page_type.as_str(),
        items = checklist.len(),
        remote_scoring = backend.is_some(),
        "evaluating checklist"
    );

    let scores = evaluate::evaluate(
        backend.as_ref().map(|backend| backend as &dyn ScoringBackend),
        &document_text,
        &keywords,
        checklist,
    );

    let report = build_report(page_type, scores)?;

    ensure_directory(&args.output_dir)?;
    let report_path = args.output_dir.join(report_filename(&args.doc_id));

    let markdown = render_markdown(&report, &document_text, &keywords);
    write_text(&report_path, &markdown)
        .with_context(|| format!("failed to write report for {}", args.doc_id))?;

    if args.json_out {
        let json_path = report_path.with_extension("json");
        write_json_pretty(&json_path, &report)?;
        info!(path = %json_path.display(), "wrote report json");
    }

    info!(
        path = %report_path.display(),
        total_score_pct = format!("{:.1}", report.total_score_pct),
        suggestions = report.suggestions.len(),
        "report written"
    );

    Ok(())
}
