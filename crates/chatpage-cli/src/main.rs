//! chatpage CLI - talk to a streaming chat endpoint from the terminal.

use std::io::{self, Stdout};

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use chatpage_client::HttpTransport;
use chatpage_core::{MalformedLinePolicy, Page, PageConfig, PageController};

mod terminal;

use terminal::TerminalPage;

type Controller = PageController<TerminalPage<Stdout>, HttpTransport>;

/// chatpage - streaming chat client
#[derive(Parser)]
#[command(name = "chatpage")]
#[command(about = "Terminal client for a newline-delimited JSON chat endpoint", long_about = None)]
struct Cli {
    /// Server base URL
    #[arg(short, long, env = "CHATPAGE_ADDR", default_value = "http://127.0.0.1:8000")]
    addr: String,

    /// Chat endpoint path
    #[arg(long, default_value = "/chat/")]
    endpoint: String,

    /// Skip lines that are not valid messages instead of failing
    #[arg(long)]
    skip_malformed: bool,

    /// Print rendered HTML instead of markdown
    #[arg(long)]
    html: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the conversation history
    History,

    /// Send one prompt and stream the reply
    Send {
        /// Prompt text
        prompt: String,
    },

    /// Load history, then read prompts from stdin until EOF
    Chat,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();

    let policy = if cli.skip_malformed {
        MalformedLinePolicy::Skip
    } else {
        MalformedLinePolicy::Abort
    };
    let config = PageConfig::default()
        .with_endpoint(cli.endpoint)
        .with_malformed_lines(policy);

    let interactive = matches!(cli.command, Commands::Chat);
    let page = TerminalPage::new(io::stdout(), cli.html, interactive);
    let transport = HttpTransport::new(&cli.addr)?;

    info!(addr = %cli.addr, endpoint = %config.endpoint, "Starting chatpage");

    let controller = PageController::new(page, transport, config);

    match cli.command {
        Commands::History => controller.load_history().await?,
        Commands::Send { prompt } => send(&controller, prompt).await?,
        Commands::Chat => chat(&controller).await?,
    }

    Ok(())
}

async fn send(controller: &Controller, prompt: String) -> Result<(), Box<dyn std::error::Error>> {
    controller.page().set_prompt_value(prompt);
    controller.submit().await?;
    Ok(())
}

async fn chat(controller: &Controller) -> Result<(), Box<dyn std::error::Error>> {
    controller.load_history().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let prompt = line.trim();
        if prompt.is_empty() {
            controller.page().focus_prompt();
            continue;
        }

        // A failed request leaves the prompt disabled; `?` ends the session.
        send(controller, prompt.to_string()).await?;
    }

    Ok(())
}
