use tracing::debug;

use lumi_assistant::portfolio::{self, Project};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Print the project archive, or a single entry when an id was given.
pub async fn show_work(id: &Option<String>, format: &Option<OutputFormat>) -> Result<(), CliError> {
    let format = format.unwrap_or(OutputFormat::Text);

    match id {
        Some(id) => {
            let project = portfolio::find_project(id)
                .ok_or_else(|| CliError::Input(format!("no project with id '{id}'")))?;
            print_project(project, format)
        }
        None => print_archive(format),
    }
}

fn print_archive(format: OutputFormat) -> Result<(), CliError> {
    let projects = portfolio::projects();
    debug!("printing {} archive entries", projects.len());

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(projects)?);
        }
        OutputFormat::Text => {
            println!("PROJECT ARCHIVES");
            println!("[ Filter: All_Entries ]");
            println!();
            for project in projects {
                println!(
                    "[{}] {}  //  {} ({})",
                    project.id, project.title, project.category, project.year
                );
                println!("    {}", project.description);
            }
            println!();
            println!("Run 'lumi work --id <n>' for a single entry.");
        }
    }

    Ok(())
}

fn print_project(project: &Project, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(project)?);
        }
        OutputFormat::Text => {
            println!("{} // SYSTEM_ENTRY", project.year);
            println!("{}", project.title.to_uppercase());
            println!("Category: {}", project.category);
            println!();
            println!("{}", project.description);
            println!();
            println!("Image: {}", project.image);
            if let Some(link) = project.link {
                println!("Link: {link}");
            }
        }
    }

    Ok(())
}
