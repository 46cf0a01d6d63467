use crate::output::print_json;
use selfmap_core::chart::{self, ChartInput};
use selfmap_core::stats::Attribute;
use selfmap_core::zodiac::{self, Sign};

pub fn run(date: &str, moon: Option<&str>, rising: Option<&str>, json: bool) -> anyhow::Result<()> {
    let birth_date = super::parse_date(date)?;
    let mut input = ChartInput::new(birth_date);
    if let Some(name) = moon {
        input.moon = Some(lookup_sign(name)?);
    }
    if let Some(name) = rising {
        input.rising = Some(lookup_sign(name)?);
    }
    let chart = chart::compose(input);

    if json {
        return print_json(&chart);
    }

    println!("Chart for {}", chart.birth_date);
    println!("  Sun:     {}", chart.sun.name);
    if let Some(moon) = chart.moon {
        println!("  Moon:    {}", moon.name);
    }
    if let Some(rising) = chart.rising {
        println!("  Rising:  {}", rising.name);
    }
    println!("  Chinese: {} ({} element)", chart.animal.name, chart.element);
    println!(
        "  Tzolkin: Kin {} — {}, {} tone",
        chart.kin.number, chart.kin.seal.name, chart.kin.tone.name
    );
    print!("  Stats:  ");
    for attr in Attribute::all() {
        print!(" {} {:+}", attr, chart.stats.get(*attr));
    }
    println!();
    Ok(())
}

fn lookup_sign(name: &str) -> anyhow::Result<&'static Sign> {
    zodiac::sign_named(name).ok_or_else(|| anyhow::anyhow!("unknown sign '{name}'"))
}
