//! Output formatting module

pub mod styles;
pub mod writer;

use console::Term;
pub use styles::Styles;
pub use writer::CommandWriter;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, quiet }
    }

    /// A writer rendering to stdout with this context's styles.
    #[must_use]
    pub fn stdout_writer(&self) -> CommandWriter<std::io::Stdout> {
        CommandWriter::new(std::io::stdout(), self.styles.clone(), self.quiet)
    }
}
