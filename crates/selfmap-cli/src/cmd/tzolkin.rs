use crate::output::print_json;
use selfmap_core::tzolkin;

pub fn run(date: &str, json: bool) -> anyhow::Result<()> {
    let date = super::parse_date(date)?;
    let kin = tzolkin::kin_for_date(date);

    if json {
        return print_json(&kin);
    }

    println!("Kin {}: {} ({})", kin.number, kin.seal.name, kin.seal.glyph);
    println!("  Theme:   {}", kin.seal.theme);
    println!("  Ability: {}", kin.seal.ability);
    println!("  Shadow:  {}", kin.seal.shadow);
    println!(
        "  Tone {} — {} ({})",
        kin.tone.number, kin.tone.name, kin.tone.theme
    );
    println!("    {}", kin.tone.approach);
    Ok(())
}
