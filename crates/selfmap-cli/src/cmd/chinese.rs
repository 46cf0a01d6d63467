use crate::output::print_json;
use selfmap_core::chinese;
use selfmap_core::stats::Attribute;

pub fn run(year: i32, json: bool) -> anyhow::Result<()> {
    let animal = chinese::animal_for_year(year);
    let element = chinese::element_for_year(year);

    if json {
        return print_json(&serde_json::json!({
            "year": year,
            "animal": animal,
            "element": element,
            "element_traits": element.traits(),
        }));
    }

    println!("{}: {} / {} element", year, animal.name, element);
    println!("  Traits:         {}", animal.key_traits.join(", "));
    println!("  Challenges:     {}", animal.challenges.join(", "));
    println!("  Element traits: {}", element.traits().join(", "));
    print!("  Stats:         ");
    for attr in Attribute::all() {
        print!(" {} {:+}", attr, animal.stats.get(*attr));
    }
    println!();
    Ok(())
}
