use crate::output::print_json;
use clap::Subcommand;
use selfmap_core::{actions, needs};

// ---------------------------------------------------------------------------
// Subcommand types
// ---------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum NeedsSubcommand {
    /// Resolve a need to its four suggested actions
    Actions {
        /// Need name or a free-text phrase containing one
        need: String,

        /// Action table: loop (recurring surface needs) or root (core needs)
        #[arg(long, default_value = "loop")]
        table: String,
    },

    /// Show how an unmet need presents (compulsion and aversion)
    Signature {
        /// Need name
        need: String,
    },

    /// List the need categories
    Categories,

    /// List need words, optionally for one category
    List {
        /// Category name (e.g. Connection)
        #[arg(long)]
        category: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(subcmd: NeedsSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        NeedsSubcommand::Actions { need, table } => show_actions(&need, &table, json),
        NeedsSubcommand::Signature { need } => show_signature(&need, json),
        NeedsSubcommand::Categories => show_categories(json),
        NeedsSubcommand::List { category } => list_needs(category.as_deref(), json),
    }
}

// ---------------------------------------------------------------------------
// actions
// ---------------------------------------------------------------------------

fn show_actions(need: &str, table: &str, json: bool) -> anyhow::Result<()> {
    let resolution = match table {
        "loop" => actions::loop_actions(need),
        "root" => actions::root_actions(need),
        other => anyhow::bail!("unknown table '{other}'; valid: loop, root"),
    };

    if json {
        return print_json(&serde_json::json!({
            "input": need,
            "table": table,
            "key": resolution.key,
            "tier": resolution.tier,
            "actions": resolution.value,
        }));
    }

    println!("{} → {} [{} match]", need, resolution.key, resolution.tier);
    for action in resolution.value.iter() {
        println!("  - {action}");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// signature
// ---------------------------------------------------------------------------

fn show_signature(need: &str, json: bool) -> anyhow::Result<()> {
    let Some(resolution) = needs::signature(need) else {
        anyhow::bail!("no signature for '{need}'");
    };

    if json {
        return print_json(&serde_json::json!({
            "input": need,
            "key": resolution.key,
            "tier": resolution.tier,
            "compulsion": resolution.value.compulsion,
            "aversion": resolution.value.aversion,
        }));
    }

    println!("{} [{} match]", resolution.key, resolution.tier);
    println!("  Compulsion: {}", resolution.value.compulsion);
    println!("  Aversion:   {}", resolution.value.aversion);
    Ok(())
}

// ---------------------------------------------------------------------------
// categories
// ---------------------------------------------------------------------------

fn show_categories(json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&needs::CATEGORIES);
    }

    for category in needs::CATEGORIES {
        println!("{:<16} {} needs", category.name, category.needs.len());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

fn list_needs(category: Option<&str>, json: bool) -> anyhow::Result<()> {
    match category {
        Some(name) => {
            let Some(found) = needs::category_named(name) else {
                anyhow::bail!("unknown category '{name}'");
            };
            if json {
                return print_json(found);
            }
            println!("{}", found.name);
            for need in found.needs {
                println!("  {need}");
            }
        }
        None => {
            if json {
                return print_json(&needs::CATEGORIES);
            }
            for category in needs::CATEGORIES {
                println!("{}", category.name);
                for need in category.needs {
                    println!("  {need}");
                }
                println!();
            }
        }
    }
    Ok(())
}
