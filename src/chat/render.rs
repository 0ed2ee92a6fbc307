//! Output rendering for the chat application.
//!
//! The session and the binary never print directly; everything meant for the
//! person at the terminal goes through a [`Renderer`] so that output can be
//! redirected or captured.

use std::io::{self, Stdout, Write};

/// ANSI escape code for red text (used for errors).
const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code for dim text (used for informational messages).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// Trait for rendering chat output.
pub trait Renderer: Send {
    /// Print user input back out verbatim, before it is sent.
    ///
    /// Used when input arrives through a pipe so that the transcript on the
    /// terminal shows both sides of the exchange.
    fn print_echo(&mut self, text: &str);

    /// Print an assistant reply.
    fn print_reply(&mut self, text: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);
}

/// Plain text renderer with optional ANSI styling.
///
/// Echoed input and replies go to stdout unstyled so they can be piped.
/// Errors go to stderr.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a new PlainTextRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
        }
    }

    /// Flushes stdout so partial lines show up immediately.
    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_echo(&mut self, text: &str) {
        if text.ends_with('\n') {
            print!("{text}");
        } else {
            println!("{text}");
        }
        self.flush();
    }

    fn print_reply(&mut self, text: &str) {
        println!("{text}");
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        if self.use_color {
            eprintln!("{ANSI_RED}Error: {error}{ANSI_RESET}");
        } else {
            eprintln!("Error: {error}");
        }
    }

    fn print_info(&mut self, info: &str) {
        if self.use_color {
            println!("{ANSI_DIM}{info}{ANSI_RESET}");
        } else {
            println!("{info}");
        }
    }
}

/// Renderer that keeps everything in memory.
///
/// Handy for tests and for embedding a session where stdout is not the
/// destination.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferRenderer {
    /// Every event, in order, tagged with its kind.
    pub events: Vec<(RenderEvent, String)>,
}

/// Kind of output recorded by a [`BufferRenderer`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// Output of [`Renderer::print_echo`].
    Echo,
    /// Output of [`Renderer::print_reply`].
    Reply,
    /// Output of [`Renderer::print_error`].
    Error,
    /// Output of [`Renderer::print_info`].
    Info,
}

impl BufferRenderer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text recorded for one kind of event.
    pub fn texts(&self, kind: RenderEvent) -> Vec<&str> {
        self.events
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, text)| text.as_str())
            .collect()
    }
}

impl Renderer for BufferRenderer {
    fn print_echo(&mut self, text: &str) {
        self.events.push((RenderEvent::Echo, text.to_string()));
    }

    fn print_reply(&mut self, text: &str) {
        self.events.push((RenderEvent::Reply, text.to_string()));
    }

    fn print_error(&mut self, error: &str) {
        self.events.push((RenderEvent::Error, error.to_string()));
    }

    fn print_info(&mut self, info: &str) {
        self.events.push((RenderEvent::Info, info.to_string()));
    }
}
