use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::evaluate;

#[derive(Parser, Debug)]
#[command(
    name = "seo-proofreader",
    version,
    about = "SEO proofreading and Markdown report generation for cost and city pages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Proofread(ProofreadArgs),
    Checklist(ChecklistArgs),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum SourceKind {
    Google,
    Local,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Local => "local",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ProofreadArgs {
    #[arg(long)]
    pub doc_id: String,

    #[arg(long)]
    pub keywords_sheet: String,

    #[arg(long)]
    pub page_type: Option<String>,

    #[arg(long, value_enum, default_value_t = SourceKind::Google)]
    pub source: SourceKind,

    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json_out: bool,

    #[arg(long, default_value_t = false)]
    pub no_remote_scoring: bool,

    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,

    #[arg(long, default_value = evaluate::DEFAULT_MODEL)]
    pub model: String,
}

#[derive(Args, Debug, Clone)]
pub struct ChecklistArgs {
    #[arg(long)]
    pub page_type: String,
}
