//! Contract tests for the assistant wrapper, driven by a scripted backend in
//! place of the hosted service.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use lumi_assistant::persona::{CONNECTIVITY_FALLBACK, EMPTY_REPLY_FALLBACK, GREETING};
use lumi_assistant::{Assistant, ChatRole, Conversation, SessionBackend, SessionConnector};
use lumi_gemini::GeminiError;

type Script = Arc<Mutex<VecDeque<Result<String, GeminiError>>>>;

struct ScriptedSession {
    script: Script,
    sends: Arc<AtomicUsize>,
}

#[async_trait]
impl SessionBackend for ScriptedSession {
    async fn send(&mut self, _message: &str) -> Result<String, GeminiError> {
        self.sends.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GeminiError::internal("script exhausted")))
    }
}

struct ScriptedConnector {
    script: Script,
    refuse_connect: bool,
    connects: Arc<AtomicUsize>,
    sends: Arc<AtomicUsize>,
}

impl ScriptedConnector {
    fn with_script(replies: Vec<Result<String, GeminiError>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(replies.into_iter().collect())),
            refuse_connect: false,
            connects: Arc::new(AtomicUsize::new(0)),
            sends: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn refusing_connections() -> Self {
        let mut connector = Self::with_script(Vec::new());
        connector.refuse_connect = true;
        connector
    }
}

impl SessionConnector for ScriptedConnector {
    type Session = ScriptedSession;

    fn connect(&self) -> Result<ScriptedSession, GeminiError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        if self.refuse_connect {
            return Err(GeminiError::authentication("credential rejected"));
        }
        Ok(ScriptedSession {
            script: self.script.clone(),
            sends: self.sends.clone(),
        })
    }
}

#[tokio::test]
async fn reply_text_passes_through_unmodified() {
    let reply = "  Protocol layers aligned. ⚡️  ";
    let connector = ScriptedConnector::with_script(vec![Ok(reply.to_string())]);
    let mut assistant = Assistant::with_connector(connector);

    assert_eq!(assistant.send_message("status report").await, reply);
}

#[tokio::test]
async fn transport_failure_yields_connectivity_fallback() {
    let connector = ScriptedConnector::with_script(vec![Err(GeminiError::api_error(
        503,
        "service overloaded".to_string(),
    ))]);
    let mut assistant = Assistant::with_connector(connector);

    assert_eq!(assistant.send_message("hello?").await, CONNECTIVITY_FALLBACK);
}

#[tokio::test]
async fn empty_reply_yields_interrupted_fallback() {
    let connector =
        ScriptedConnector::with_script(vec![Err(GeminiError::empty_response("no candidates"))]);
    let mut assistant = Assistant::with_connector(connector);

    assert_eq!(assistant.send_message("hello?").await, EMPTY_REPLY_FALLBACK);
}

#[tokio::test]
async fn every_nonempty_input_gets_a_nonempty_reply() {
    let connector = ScriptedConnector::with_script(vec![
        Ok("Affirmative.".to_string()),
        Err(GeminiError::rate_limit("quota exhausted", Some(30))),
        Err(GeminiError::empty_response("blocked: SAFETY")),
        Err(GeminiError::invalid_request("malformed payload")),
    ]);
    let mut assistant = Assistant::with_connector(connector);

    for input in ["one", "two", "three", "four"] {
        let reply = assistant.send_message(input).await;
        assert!(!reply.is_empty(), "reply for {input:?} was empty");
    }
}

#[tokio::test]
async fn session_is_connected_once_and_reused() {
    let connector = ScriptedConnector::with_script(vec![
        Ok("first".to_string()),
        Ok("second".to_string()),
        Ok("third".to_string()),
    ]);
    let connects = connector.connects.clone();
    let sends = connector.sends.clone();
    let mut assistant = Assistant::with_connector(connector);

    assistant.send_message("a").await;
    assistant.send_message("b").await;
    assistant.send_message("c").await;

    assert_eq!(connects.load(Ordering::SeqCst), 1);
    assert_eq!(sends.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn failed_connect_is_retried_on_the_next_send() {
    let connector = ScriptedConnector::refusing_connections();
    let connects = connector.connects.clone();
    let mut assistant = Assistant::with_connector(connector);

    assert_eq!(assistant.send_message("first try").await, CONNECTIVITY_FALLBACK);
    assert_eq!(assistant.send_message("second try").await, CONNECTIVITY_FALLBACK);

    assert_eq!(connects.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn conversation_suppresses_blank_input() {
    let connector = ScriptedConnector::with_script(Vec::new());
    let connects = connector.connects.clone();
    let sends = connector.sends.clone();
    let mut conversation = Conversation::with_assistant(Assistant::with_connector(connector));

    assert_eq!(conversation.submit("").await, None);
    assert_eq!(conversation.submit("   \t  ").await, None);

    assert_eq!(connects.load(Ordering::SeqCst), 0);
    assert_eq!(sends.load(Ordering::SeqCst), 0);
    assert_eq!(conversation.messages().len(), 1);
    assert_eq!(conversation.messages()[0].text, GREETING);
}

#[tokio::test]
async fn conversation_records_turns_in_order() {
    let connector = ScriptedConnector::with_script(vec![
        Ok("Nebula Stream distributes inference.".to_string()),
        Ok("Shipped in 2025.".to_string()),
    ]);
    let mut conversation = Conversation::with_assistant(Assistant::with_connector(connector));

    let first = conversation.submit("What is Nebula Stream?").await;
    assert_eq!(first, Some("Nebula Stream distributes inference."));
    let second = conversation.submit("When did it ship?").await;
    assert_eq!(second, Some("Shipped in 2025."));

    let messages = conversation.messages();
    let turns: Vec<(ChatRole, &str)> = messages
        .iter()
        .map(|message| (message.role, message.text.as_str()))
        .collect();

    assert_eq!(
        turns,
        vec![
            (ChatRole::Model, GREETING),
            (ChatRole::User, "What is Nebula Stream?"),
            (ChatRole::Model, "Nebula Stream distributes inference."),
            (ChatRole::User, "When did it ship?"),
            (ChatRole::Model, "Shipped in 2025."),
        ]
    );
    assert!(messages.iter().all(|message| !message.is_error));
}

#[tokio::test]
async fn conversation_marks_fallback_lines_as_errors() {
    let connector = ScriptedConnector::with_script(vec![Err(GeminiError::rate_limit(
        "quota exhausted",
        None,
    ))]);
    let mut conversation = Conversation::with_assistant(Assistant::with_connector(connector));

    let reply = conversation.submit("anyone home?").await;
    assert_eq!(reply, Some(CONNECTIVITY_FALLBACK));

    let messages = conversation.messages();
    assert_eq!(messages.len(), 3);
    assert!(!messages[1].is_error);
    assert!(messages[2].is_error);
    assert_eq!(messages[2].role, ChatRole::Model);
    assert_eq!(messages[2].text, CONNECTIVITY_FALLBACK);
}
