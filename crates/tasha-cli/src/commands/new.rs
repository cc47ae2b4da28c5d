use std::io;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tasha_d20::Ruleset;
use tasha_wizard::{
    CharacterRecord, TerminalMenu, Wizard, WizardConfig, WizardError, file_name_for,
};
use tracing::debug;

pub fn run(name: &str, dir: &Path, force: bool) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("character name must not be empty".into());
    }

    // Fail before the first prompt rather than after the last one.
    let target = dir.join(file_name_for(name));
    if target.exists() && !force {
        return Err(WizardError::AlreadyExists(target).to_string());
    }
    debug!(path = %target.display(), force, "character file target");

    let rules = Ruleset::default();
    let config = WizardConfig::default()
        .with_output_dir(dir)
        .with_overwrite(force);
    let menu = TerminalMenu::new(io::stdin().lock(), io::stdout());
    let mut wizard = Wizard::new(rules.clone(), config, menu);

    println!("{}", format!("Creating {name} ({} rules)", rules.name).bold());
    let record = wizard.run(name).map_err(|e| e.to_string())?;
    let path = wizard.save(&record).map_err(|e| e.to_string())?;

    print_summary(&record, &rules);
    println!();
    println!(
        "  Saved {} to {}",
        record.name.bold(),
        path.display().to_string().green()
    );

    Ok(())
}

fn print_summary(record: &CharacterRecord, rules: &Ruleset) {
    println!();
    println!(
        "{}, {} {} {}, level {}",
        record.name.bold(),
        record.gender.to_lowercase(),
        record.species,
        record.background.to_lowercase(),
        record.level
    );

    let mut abilities = Table::new();
    abilities.set_content_arrangement(ContentArrangement::Dynamic);
    abilities.set_header(vec!["Ability", "Score", "Modifier"]);
    for (ability, score) in record.ability_scores.iter() {
        abilities.add_row(vec![
            ability.name().to_string(),
            score.score.to_string(),
            format!("{:+}", score.modifier),
        ]);
    }
    println!("{abilities}");

    let mut classes = Table::new();
    classes.set_content_arrangement(ContentArrangement::Dynamic);
    classes.set_header(vec!["Class", "Level", "Subclass", "Hit Die"]);
    for (class, entry) in &record.classes {
        let subclass = if entry.subclass.is_empty() {
            "-"
        } else {
            entry.subclass.as_str()
        };
        classes.add_row(vec![
            class.clone(),
            entry.level.to_string(),
            subclass.to_string(),
            entry.hit_die.clone(),
        ]);
    }
    println!("{classes}");

    let mut skills = Table::new();
    skills.set_content_arrangement(ContentArrangement::Dynamic);
    skills.set_header(vec!["Skill", "Ability"]);
    for skill in &record.skills {
        let ability = rules.skill_ability(skill).map_or("-", |a| a.name());
        skills.add_row(vec![skill.as_str(), ability]);
    }
    println!("{skills}");

    print_list("Feats", &record.feats);
    print_list("Tools", &record.tools);
    print_list("Armor", &record.armors);
    print_list("Weapons", &record.weapons);
}

fn print_list<'a>(label: &str, items: impl IntoIterator<Item = &'a String>) {
    let joined: Vec<&str> = items.into_iter().map(String::as_str).collect();
    let shown = if joined.is_empty() {
        "none".dimmed().to_string()
    } else {
        joined.join(", ")
    };
    println!("  {}: {shown}", label.bold());
}
