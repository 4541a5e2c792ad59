use std::io::{self, Write};

use anyhow::{Context, Result, bail};

use crate::checklist::{CHECKLIST_VERSION, checklist_for};
use crate::cli::ChecklistArgs;
use crate::classify;

pub fn run(args: ChecklistArgs) -> Result<()> {
    let Some(page_type) = classify::validate_override(Some(&args.page_type))? else {
        bail!("a page type is required (cost or city)");
    };

    let items = checklist_for(page_type);

    let mut output = io::BufWriter::new(io::stdout().lock());
    writeln!(
        output,
        "{} checklist (version {}, {} items)",
        page_type.as_str(),
        CHECKLIST_VERSION,
        items.len()
    )?;

    for (index, item) in items.iter().enumerate() {
        writeln!(output, "{}.\t{}\t[{}]", index + 1, item.name, item.id)?;
        writeln!(output, "\trubric: {}", item.rubric)?;
    }

    output.flush().context("failed to flush checklist output")?;
    Ok(())
}
