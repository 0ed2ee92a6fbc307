//! Command-line chat client for OpenAI-compatible completion APIs.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session
//! gpt-cli
//!
//! # Seed the conversation with instructions
//! gpt-cli --instructions "You are terse."
//!
//! # Send one message, then keep chatting
//! gpt-cli -m "Summarize the Rust ownership rules"
//!
//! # Batch mode: piped input is sent once and echoed unless --silent
//! git diff | gpt-cli -i "Write a commit message for this diff" --silent
//!
//! # Read the prompt from a file
//! gpt-cli prompt.txt
//! ```
//!
//! The credential is read from `OPENAI_API_KEY`.

use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;

use gpt_cli::chat::{ChatArgs, ChatConfig, ChatSession, PlainTextRenderer, Renderer};
use gpt_cli::{Completions, Error, OpenAi, Result};

const PROMPT: &str = ">>> ";

#[tokio::main]
async fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("gpt-cli");
    let args = match ChatArgs::parse(argv.get(1..).unwrap_or_default()) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}\n\n{}", ChatArgs::usage(program));
            return ExitCode::from(2);
        }
    };
    if args.help {
        print!("{}", ChatArgs::usage(program));
        return ExitCode::SUCCESS;
    }

    init_logging(args.debug);
    tracing::debug!("verbose output enabled");
    tracing::debug!(?argv, "argv");

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Interrupted) => {
            tracing::debug!("interrupted");
            ExitCode::from(1)
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let default_directive = if debug { "gpt_cli=debug" } else { "gpt_cli=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

async fn run(args: ChatArgs) -> Result<()> {
    let file = args.file.clone();
    let message = args.message.clone();
    let config = ChatConfig::from(args);
    let echo = config.echo;

    // An interrupt while a request is in flight ends the process.
    ctrlc::set_handler(|| std::process::exit(1)).map_err(|e| {
        Error::io("failed to install interrupt handler", io::Error::other(e))
    })?;

    let client = OpenAi::with_options(None, config.base_url.clone(), config.timeout)?;
    let mut session = ChatSession::new(client, config);
    let mut renderer = PlainTextRenderer::with_color(io::stderr().is_terminal());

    if let Some(message) = message {
        tracing::debug!(%message, "sending --message");
        let reply = session.send(&message, false, &mut renderer).await?;
        renderer.print_reply(&reply);
    }

    let input = match file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading from file");
            Some(std::fs::read_to_string(&path).map_err(|e| {
                Error::io(format!("could not read {}", path.display()), e)
            })?)
        }
        None if !io::stdin().is_terminal() => {
            tracing::debug!("reading from stdin");
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| Error::io("could not read stdin", e))?;
            Some(input)
        }
        None => None,
    };

    match input {
        Some(input) => {
            let reply = session.send(&input, echo, &mut renderer).await?;
            renderer.print_reply(&reply);
            Ok(())
        }
        None => interactive(&mut session, &mut renderer).await,
    }
}

async fn interactive<C: Completions>(
    session: &mut ChatSession<C>,
    renderer: &mut dyn Renderer,
) -> Result<()> {
    tracing::debug!("starting interactive mode");
    let mut rl = DefaultEditor::new()
        .map_err(|e| Error::io("could not open the terminal", io::Error::other(e)))?;
    renderer.print_info(&format!(
        "gpt-cli (model: {}). Ctrl-D to exit.",
        session.model()
    ));

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);
                let reply = session.send(line, false, renderer).await?;
                renderer.print_reply(&reply);
            }
            Err(ReadlineError::Interrupted) => return Err(Error::Interrupted),
            Err(ReadlineError::Eof) => {
                tracing::debug!("EOF");
                return Ok(());
            }
            Err(err) => {
                return Err(Error::io("failed to read input", io::Error::other(err)));
            }
        }
    }
}
