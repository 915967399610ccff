use lumi_assistant::portfolio;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Print the author profile.
pub async fn show_about(format: &Option<OutputFormat>) -> Result<(), CliError> {
    let profile = portfolio::profile();

    match format.unwrap_or(OutputFormat::Text) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(profile)?);
        }
        OutputFormat::Text => {
            println!("THE ALCHEMIST");
            println!("// {} ({})", profile.name, profile.alias);
            println!("{}", profile.role);
            println!();
            for paragraph in profile.bio {
                println!("{paragraph}");
                println!();
            }
            for skill in profile.skills {
                println!("{:<10} {}", skill.label, skill.value);
            }
            println!();
            for stat in profile.stats {
                println!("{:<4} {}", stat.value, stat.label);
            }
        }
    }

    Ok(())
}
