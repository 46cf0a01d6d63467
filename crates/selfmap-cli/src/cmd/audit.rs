use crate::output::{print_json, print_table};
use anyhow::Context;
use selfmap_core::audit::{self, CheckStatus};
use selfmap_core::config::Config;
use selfmap_core::io::atomic_write;
use std::path::Path;
use std::str::FromStr;

pub fn run(root: &Path, write: bool, only: Option<&str>, json: bool) -> anyhow::Result<()> {
    let only = only.map(CheckStatus::from_str).transpose()?;
    let config = Config::load(root).context("failed to load config")?;

    tracing::debug!("auditing {}", root.display());
    let mut report = audit::run(root, &config);

    if write {
        let path = config.report_path(root);
        let markdown = audit::render_markdown(&report);
        atomic_write(&path, markdown.as_bytes()).context("failed to write report")?;
        if !json {
            println!("Report written to {}", path.display());
        }
    }

    // The summary keeps whole-run counts even when a filter is applied.
    if let Some(status) = only {
        for category in &mut report.categories {
            category.checks.retain(|c| c.status == status);
        }
        report.categories.retain(|c| !c.checks.is_empty());
    }

    if json {
        return print_json(&report);
    }

    let s = report.summary;
    println!(
        "{} checks: {} pass, {} partial, {} fail, {} skip",
        s.total, s.pass, s.partial, s.fail, s.skip
    );
    for category in &report.categories {
        println!();
        println!("{}", category.name);
        let rows: Vec<Vec<String>> = category
            .checks
            .iter()
            .map(|c| {
                vec![
                    c.id.to_string(),
                    format!("{} {}", c.status.icon(), c.status.as_str()),
                    c.description.to_string(),
                    c.note.clone(),
                ]
            })
            .collect();
        print_table(&["ID", "Status", "Description", "Notes"], rows);
    }
    Ok(())
}
