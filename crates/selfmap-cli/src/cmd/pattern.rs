use crate::output::print_json;
use clap::Subcommand;
use selfmap_core::patterns;

#[derive(Subcommand)]
pub enum PatternSubcommand {
    /// List the relational patterns
    List,

    /// Show the unmet needs a pattern points at
    Show {
        /// Pattern name (fuzzy, e.g. "ghosting")
        name: String,
    },
}

pub fn run(subcmd: PatternSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        PatternSubcommand::List => list(json),
        PatternSubcommand::Show { name } => show(&name, json),
    }
}

fn list(json: bool) -> anyhow::Result<()> {
    if json {
        let names: Vec<&str> = patterns::PATTERNS.iter().map(|(name, _)| *name).collect();
        return print_json(&names);
    }

    for (name, needs) in patterns::PATTERNS {
        println!("{:<28} {} needs", name, needs.len());
    }
    Ok(())
}

fn show(name: &str, json: bool) -> anyhow::Result<()> {
    let Some(resolution) = patterns::lookup(name) else {
        anyhow::bail!("unknown pattern '{name}'");
    };

    if json {
        return print_json(&serde_json::json!({
            "input": name,
            "key": resolution.key,
            "tier": resolution.tier,
            "needs": resolution.value,
        }));
    }

    println!("{} [{} match]", resolution.key, resolution.tier);
    for need in resolution.value.iter() {
        println!("  {need}");
    }
    Ok(())
}
