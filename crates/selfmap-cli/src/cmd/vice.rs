use crate::output::print_json;
use clap::Subcommand;
use selfmap_core::vices;

#[derive(Subcommand)]
pub enum ViceSubcommand {
    /// List every vice in the glossary
    List,

    /// Show a vice's definition and the needs underneath it
    Show {
        /// Vice name (fuzzy, e.g. "judging" finds "Judgment")
        name: String,
    },
}

pub fn run(subcmd: ViceSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ViceSubcommand::List => list(json),
        ViceSubcommand::Show { name } => show(&name, json),
    }
}

fn list(json: bool) -> anyhow::Result<()> {
    if json {
        let entries: Vec<serde_json::Value> = vices::VICES
            .iter()
            .map(|(name, vice)| {
                serde_json::json!({
                    "name": name,
                    "definition": vice.definition,
                })
            })
            .collect();
        return print_json(&entries);
    }

    for (name, vice) in vices::VICES {
        println!("{:<18} {}", name, vice.definition);
    }
    Ok(())
}

fn show(name: &str, json: bool) -> anyhow::Result<()> {
    let Some(resolution) = vices::lookup(name) else {
        anyhow::bail!("unknown vice '{name}'");
    };

    if json {
        return print_json(&serde_json::json!({
            "input": name,
            "key": resolution.key,
            "tier": resolution.tier,
            "definition": resolution.value.definition,
            "chronic": resolution.value.chronic,
            "acute": resolution.value.acute,
        }));
    }

    println!("{} [{} match]", resolution.key, resolution.tier);
    println!("  {}", resolution.value.definition);
    println!("  Chronic needs: {}", resolution.value.chronic.join(", "));
    println!("  Acute needs:   {}", resolution.value.acute.join(", "));
    Ok(())
}
