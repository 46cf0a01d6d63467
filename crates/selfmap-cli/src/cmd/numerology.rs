use crate::output::print_json;
use selfmap_core::numerology;

pub fn run(value: u32, json: bool) -> anyhow::Result<()> {
    let Some(profile) = numerology::profile_for(value) else {
        anyhow::bail!("no profile for {value}");
    };

    if json {
        return print_json(&profile);
    }

    println!("{} — {} [{}]", profile.number, profile.title, profile.kind);
    if profile.reduced_to != profile.number {
        println!("  Reduces to: {}", profile.reduced_to);
    }
    println!("  Keywords:   {}", profile.keywords.join(", "));
    println!("  Gifts:      {}", profile.gifts.join(", "));
    println!("  Challenges: {}", profile.challenges.join(", "));
    println!("  Growth:     {}", profile.growth.join(", "));
    Ok(())
}
