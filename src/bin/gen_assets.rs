use std::path::Path;

use astro_hopper::asset_gen::generate_placeholder_assets;
use astro_hopper::assets::ASSETS_ROOT;
use astro_hopper::rules::{load_rules, save_rules, RULES_PATH};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let rules = load_rules(RULES_PATH);
    if !Path::new(RULES_PATH).exists() {
        if let Some(dir) = Path::new(RULES_PATH).parent() {
            std::fs::create_dir_all(dir)?;
        }
        save_rules(RULES_PATH, &rules)?;
        println!("Wrote default rules to {RULES_PATH}.");
    }
    let seed = rules.seed.unwrap_or(0);
    let written = generate_placeholder_assets(Path::new(ASSETS_ROOT), &rules, seed, true)?;

    println!("{written} placeholder assets generated into the {ASSETS_ROOT}/ folder.");
    Ok(())
}
