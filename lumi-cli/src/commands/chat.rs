use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use lumi_assistant::persona::ASSISTANT_NAME;
use lumi_assistant::{AssistantConfig, ChatMessage, ChatRole, Conversation, GeminiConnector};

use crate::error::CliError;

/// Open the interactive chat shell, or relay a single message when one was
/// passed on the command line.
pub async fn run_chat(message: &Option<String>) -> Result<(), CliError> {
    let config = AssistantConfig::from_env();
    debug!("chat model: {}", config.model);

    let mut conversation = Conversation::new(config);

    match message {
        Some(text) => {
            info!("relaying one-shot message");
            match conversation.submit(text).await {
                Some(reply) => {
                    println!("{reply}");
                    Ok(())
                }
                None => Err(CliError::Input("message is empty".to_string())),
            }
        }
        None => run_shell(&mut conversation).await,
    }
}

async fn run_shell(conversation: &mut Conversation<GeminiConnector>) -> Result<(), CliError> {
    println!("{ASSISTANT_NAME} Assistant // Unit: Gemini_3_Flash");
    println!("Ask the protocol. /quit disconnects.");
    println!();

    for message in conversation.messages() {
        print_message(message);
    }

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("\nYOU >> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF, e.g. ctrl-d or a closed pipe
            println!();
            break;
        }

        let input = line.trim_end_matches(|c| c == '\r' || c == '\n');
        if matches!(input.trim(), "/quit" | "/exit") {
            break;
        }

        if conversation.submit(input).await.is_none() {
            continue;
        }
        if let Some(reply) = conversation.messages().last() {
            print_message(reply);
        }
    }

    info!("chat session closed");
    println!("Link terminated.");
    Ok(())
}

/// Model lines get the LUMI_LOG prefix the site uses; user lines are
/// already on screen from the prompt, so they are skipped.
fn print_message(message: &ChatMessage) {
    if message.role != ChatRole::Model {
        return;
    }

    if message.is_error {
        println!("LUMI_LOG !! {}", message.text);
    } else {
        println!("LUMI_LOG >> {}", message.text);
    }
}
