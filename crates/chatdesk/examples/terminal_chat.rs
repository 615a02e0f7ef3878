//! # Terminal support chat
//!
//! Runs the full widget flow in a terminal against the support backend:
//! asks for your name, then streams every answer as it arrives.
//!
//! ```bash
//! export CHATDESK_ENDPOINT=http://localhost:5000/api/chat   # optional
//! cargo run -p chatdesk --example terminal_chat
//! ```
//!
//! Debug logs (generated thread id, flow transitions) go to stderr.

use std::io::{self, Write};

use chatdesk::http::HttpChatBackendBuilder;
use chatdesk::{ConversationFlow, renderer::Renderer};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Prints only the part of each cumulative update that is not on screen yet.
#[derive(Default)]
struct TerminalRenderer {
    printed: usize,
}

impl Renderer for TerminalRenderer {
    async fn stream_message(&mut self, text: &str) {
        if self.printed == 0 {
            print!("Bot: ");
        }
        print!("{}", &text[self.printed..]);
        io::stdout().flush().ok();
        self.printed = text.len();
    }

    async fn end_stream_message(&mut self) {
        println!();
        self.printed = 0;
    }

    async fn inject_message(&mut self, text: &str) {
        if self.printed > 0 {
            println!();
            self.printed = 0;
        }
        println!("Bot: {text}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(io::stderr)
        .init();

    // 1. Backend from the environment (falls back to the local default).
    let backend = HttpChatBackendBuilder::new_from_env().build()?;
    println!("Connecting to {}", backend.endpoint());

    // 2. One flow per run, one session id per flow.
    let mut flow = ConversationFlow::new(backend);
    let settings = flow.settings().to_json()?;
    println!("{}", serde_json::to_string_pretty(&settings)?);

    // 3. Greet, then feed every typed line into the flow.
    let mut screen = TerminalRenderer::default();
    flow.start(&mut screen).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("You: ");
        io::stdout().flush().ok();

        let Some(line) = lines.next_line().await? else {
            break;
        };
        flow.handle_input(&line, &mut screen).await;
    }

    println!("\nBye 👋");
    Ok(())
}
