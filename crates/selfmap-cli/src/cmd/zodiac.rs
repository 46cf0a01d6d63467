use crate::output::print_json;
use selfmap_core::stats::Attribute;
use selfmap_core::zodiac;

pub fn run(date: &str, json: bool) -> anyhow::Result<()> {
    let date = super::parse_date(date)?;
    let sign = zodiac::sign_for_date(date);

    if json {
        return print_json(sign);
    }

    println!("{} ({})", sign.name, sign.date_range);
    println!("  Element:    {} — {}", sign.element, sign.element.traits().join(", "));
    println!(
        "  Modality:   {} — {}",
        sign.modality,
        sign.modality.description()
    );
    println!("  Traits:     {}", sign.key_traits.join(", "));
    println!("  Challenges: {}", sign.challenges.join(", "));
    print!("  Stats:     ");
    for attr in Attribute::all() {
        print!(" {} {:+}", attr, sign.stats.get(*attr));
    }
    println!();
    Ok(())
}
