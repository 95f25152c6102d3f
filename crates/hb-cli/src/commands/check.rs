use std::path::Path;

use colored::Colorize;
use hb_mechanics::validate_input;

pub fn run(file: &Path) -> Result<(), String> {
    let input = super::read_input(file)?;
    let issues = validate_input(&input);

    for issue in &issues {
        if issue.is_error {
            eprintln!("  {}", issue.to_string().red());
        } else {
            eprintln!("  {}", issue.to_string().yellow());
        }
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;

    if errors > 0 {
        return Err(format!(
            "{} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        ));
    }

    if warnings > 0 {
        println!(
            "  All checks passed ({} warning{})",
            warnings,
            if warnings == 1 { "" } else { "s" },
        );
    } else {
        println!("  All checks passed");
    }

    Ok(())
}
