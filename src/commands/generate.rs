//! Backend generation command

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use htmx_scaffold::BackendGenerator;

/// Generate backend source and print it to stdout.
pub struct GenerateCommand {
    backend: String,
    input: Option<PathBuf>,
}

impl GenerateCommand {
    /// Create a new command instance.
    pub const fn new(backend: String, input: Option<PathBuf>) -> Self {
        Self { backend, input }
    }

    /// Execute the command.
    ///
    /// The source goes to stdout; the status line goes to stderr so the
    /// output can be redirected into a file directly.
    pub fn execute(&self) -> Result<()> {
        let markup = super::read_markup(self.input.as_deref())?;
        let generator = BackendGenerator::new(&self.backend, markup)?;

        eprintln!(
            "{} {} {}",
            style("Generating").green().bold(),
            style(generator.kind()).cyan().bold(),
            style("backend...").bold()
        );

        let source = generator.generate()?;
        println!("{source}");

        Ok(())
    }
}
