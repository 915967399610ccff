use serde_json::json;

use lumi_assistant::portfolio;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Print collaboration tracks and contact channels.
pub async fn show_contact(format: &Option<OutputFormat>) -> Result<(), CliError> {
    let offerings = portfolio::offerings();
    let channels = portfolio::channels();

    match format.unwrap_or(OutputFormat::Text) {
        OutputFormat::Json => {
            let payload = json!({
                "offerings": offerings,
                "channels": channels,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Text => {
            println!("INITIATE_HANDSHAKE");
            println!("System ready for collaboration protocols.");
            println!();
            for offering in offerings {
                println!("{:<14} {}", offering.title, offering.blurb);
            }
            println!();
            for channel in channels {
                println!("{:<9} {}", channel.label, channel.handle);
            }
        }
    }

    Ok(())
}
