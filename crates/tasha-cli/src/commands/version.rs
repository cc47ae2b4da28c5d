use tasha_d20::Ruleset;

pub fn run() -> Result<(), String> {
    println!(
        "tasha {} (rules {})",
        env!("CARGO_PKG_VERSION"),
        Ruleset::default().name
    );
    Ok(())
}
