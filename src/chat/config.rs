//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `getopts` and the resolved
//! configuration that a [`ChatSession`](super::ChatSession) runs with.

use std::path::PathBuf;
use std::time::Duration;

use getopts::Options;

use crate::error::{Error, Result};
use crate::types::Model;

/// End-user tag attached to requests unless configured otherwise.
pub const DEFAULT_USER: &str = "gpt-cli";

/// Command-line arguments for the gpt-cli tool.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChatArgs {
    /// File to read input from instead of stdin.
    pub file: Option<PathBuf>,

    /// Instructions to give the model as a system message.
    pub instructions: Option<String>,

    /// Message to send right away.
    pub message: Option<String>,

    /// Do not echo piped input.
    pub silent: bool,

    /// Enable debug logging.
    pub debug: bool,

    /// Model to use.
    pub model: Option<String>,

    /// Base URL of the completion API.
    pub base_url: Option<String>,

    /// HTTP timeout in seconds.
    pub timeout: Option<u64>,

    /// Print usage and exit.
    pub help: bool,
}

impl ChatArgs {
    fn options() -> Options {
        let mut opts = Options::new();
        opts.optopt("i", "instructions", "Instructions to give the model", "TEXT");
        opts.optopt("m", "message", "Send a message before reading input", "TEXT");
        opts.optflag("s", "silent", "Do not print prompt input read from stdin or a file");
        opts.optflag("", "debug", "Enable debug output");
        opts.optopt("", "model", "Model to use (default: gpt-3.5-turbo)", "MODEL");
        opts.optopt("", "base-url", "Base URL of the completion API", "URL");
        opts.optopt("", "timeout", "HTTP timeout in seconds (default: 60)", "SECS");
        opts.optflag("h", "help", "Print this help");
        opts
    }

    /// Parse arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] for unknown options, missing option values,
    /// a non-numeric timeout, or more than one input file.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let matches = Self::options()
            .parse(&args)
            .map_err(|e| Error::usage(e.to_string()))?;

        if matches.free.len() > 1 {
            return Err(Error::usage(format!(
                "expected at most one input file, got {}",
                matches.free.len()
            )));
        }

        let timeout = match matches.opt_str("timeout") {
            Some(secs) => Some(secs.parse::<u64>().map_err(|_| {
                Error::usage(format!("--timeout expects whole seconds, got {secs:?}"))
            })?),
            None => None,
        };

        Ok(Self {
            file: matches.free.first().map(PathBuf::from),
            instructions: matches.opt_str("instructions"),
            message: matches.opt_str("message"),
            silent: matches.opt_present("silent"),
            debug: matches.opt_present("debug"),
            model: matches.opt_str("model"),
            base_url: matches.opt_str("base-url"),
            timeout,
            help: matches.opt_present("help"),
        })
    }

    /// Usage text for `--help` and argument errors.
    pub fn usage(program: &str) -> String {
        let brief = format!("Usage: {program} [OPTIONS] [FILE]\n\nChat with a hosted completion model");
        Self::options().usage(&brief)
    }
}

/// Configuration for a chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// The model to use for generating responses.
    pub model: Model,

    /// Optional system instructions seeded before the first exchange.
    pub instructions: Option<String>,

    /// End-user tag sent with each request.
    pub user: Option<String>,

    /// Whether piped input is echoed before it is sent.
    pub echo: bool,

    /// Whether debug logging is enabled.
    pub debug: bool,

    /// Override for the API base URL.
    pub base_url: Option<String>,

    /// Override for the HTTP timeout.
    pub timeout: Option<Duration>,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Model: gpt-3.5-turbo
    /// - User tag: gpt-cli
    /// - Echo: enabled
    pub fn new() -> Self {
        Self {
            model: Model::default(),
            instructions: None,
            user: Some(DEFAULT_USER.to_string()),
            echo: true,
            debug: false,
            base_url: None,
            timeout: None,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Sets the system instructions.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Sets or clears the end-user tag.
    pub fn with_user(mut self, user: Option<String>) -> Self {
        self.user = user;
        self
    }

    /// Disables echo of piped input.
    pub fn silent(mut self) -> Self {
        self.echo = false;
        self
    }

    /// Sets the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the HTTP timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        let model = args
            .model
            .map(|s| s.parse::<Model>().unwrap_or(Model::Custom(s)))
            .unwrap_or_default();

        ChatConfig {
            model,
            instructions: args.instructions,
            echo: !args.silent,
            debug: args.debug,
            base_url: args.base_url,
            timeout: args.timeout.map(Duration::from_secs),
            ..ChatConfig::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KnownModel;

    #[test]
    fn default_config() {
        let config = ChatConfig::new();
        assert_eq!(config.model, Model::Known(KnownModel::Gpt35Turbo));
        assert_eq!(config.user.as_deref(), Some("gpt-cli"));
        assert!(config.instructions.is_none());
        assert!(config.echo);
        assert!(!config.debug);
        assert!(config.base_url.is_none());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn parse_no_arguments() {
        let args = ChatArgs::parse::<&str>(&[]).unwrap();
        assert_eq!(args, ChatArgs::default());
        assert_eq!(ChatConfig::from(args), ChatConfig::new());
    }

    #[test]
    fn parse_short_flags() {
        let args = ChatArgs::parse(&["-i", "You are terse.", "-m", "Hi", "-s", "notes.txt"]).unwrap();
        assert_eq!(args.instructions.as_deref(), Some("You are terse."));
        assert_eq!(args.message.as_deref(), Some("Hi"));
        assert!(args.silent);
        assert!(!args.debug);
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn parse_long_flags() {
        let args = ChatArgs::parse(&[
            "--instructions",
            "Answer in French.",
            "--message=Bonjour",
            "--silent",
            "--debug",
            "--model",
            "gpt-4o",
            "--base-url",
            "http://localhost:11434/v1",
            "--timeout",
            "5",
        ])
        .unwrap();
        assert_eq!(args.instructions.as_deref(), Some("Answer in French."));
        assert_eq!(args.message.as_deref(), Some("Bonjour"));
        assert!(args.silent);
        assert!(args.debug);
        assert!(args.file.is_none());

        let config = ChatConfig::from(args);
        assert_eq!(config.model, Model::Known(KnownModel::Gpt4o));
        assert_eq!(config.instructions.as_deref(), Some("Answer in French."));
        assert!(!config.echo);
        assert!(config.debug);
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:11434/v1"));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn parse_custom_model() {
        let config = ChatConfig::from(ChatArgs::parse(&["--model", "llama3"]).unwrap());
        assert_eq!(config.model, Model::Custom("llama3".to_string()));
    }

    #[test]
    fn parse_errors() {
        assert!(ChatArgs::parse(&["--bogus"]).unwrap_err().is_usage());
        assert!(ChatArgs::parse(&["-i"]).unwrap_err().is_usage());
        assert!(ChatArgs::parse(&["a.txt", "b.txt"]).unwrap_err().is_usage());
        assert!(ChatArgs::parse(&["--timeout", "soon"]).unwrap_err().is_usage());
    }

    #[test]
    fn usage_mentions_flags() {
        let usage = ChatArgs::usage("gpt-cli");
        for flag in ["--instructions", "--message", "--silent", "--debug", "--model"] {
            assert!(usage.contains(flag), "{flag} missing from usage");
        }
    }

    #[test]
    fn config_builder_pattern() {
        let config = ChatConfig::new()
            .with_model(Model::Known(KnownModel::Gpt4))
            .with_instructions("Be brief.")
            .with_user(None)
            .silent()
            .with_base_url("http://localhost:8080/v1/")
            .with_timeout(Duration::from_secs(10));

        assert_eq!(config.model, Model::Known(KnownModel::Gpt4));
        assert_eq!(config.instructions.as_deref(), Some("Be brief."));
        assert!(config.user.is_none());
        assert!(!config.echo);
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080/v1/"));
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
    }
}
