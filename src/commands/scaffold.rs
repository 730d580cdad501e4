//! Site scaffolding command

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use htmx_scaffold::SiteScaffold;
use indicatif::{ProgressBar, ProgressStyle};

/// Write the stylesheet, HTML document, and backend source to disk.
pub struct ScaffoldCommand {
    backend: String,
    input: Option<PathBuf>,
    output: PathBuf,
}

impl ScaffoldCommand {
    /// Create a new command instance.
    pub const fn new(backend: String, input: Option<PathBuf>, output: PathBuf) -> Self {
        Self {
            backend,
            input,
            output,
        }
    }

    /// Execute the command.
    pub fn execute(&self) -> Result<()> {
        let markup = super::read_markup(self.input.as_deref())?;
        let scaffold = SiteScaffold::new(&self.backend, markup)?;

        println!(
            "{} {} {}",
            style("Scaffolding").green().bold(),
            style(scaffold.generator().kind()).cyan().bold(),
            style("site...").bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        spinner.set_message("Rendering files...");
        let files = scaffold
            .generate()
            .context("Failed to generate scaffold files")?;

        spinner.set_message("Writing files...");
        fs::create_dir_all(&self.output)
            .with_context(|| format!("Failed to create directory: {}", self.output.display()))?;

        spinner.finish_and_clear();

        // Existing files are overwritten without prompting.
        for file in &files {
            let full_path = self.output.join(&file.path);
            fs::write(&full_path, &file.content)
                .with_context(|| format!("Failed to write file: {}", full_path.display()))?;

            println!(
                "  {} {} ({})",
                style("✓").green(),
                style(full_path.display()).dim(),
                style(&file.description).dim()
            );
        }

        self.print_success(&scaffold);

        Ok(())
    }

    /// Print success message with next steps.
    fn print_success(&self, scaffold: &SiteScaffold) {
        let kind = scaffold.generator().kind();
        let route_count = scaffold.generator().routes().len();

        println!();
        println!("{}", style("✓ Scaffold created successfully!").green().bold());
        println!(
            "  {} route handler(s) generated for {}",
            style(route_count).cyan().bold(),
            style(kind).cyan().bold()
        );
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Go to the output directory:", style("1.").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style(format!("cd {}", self.output.display())).cyan()
        );
        println!();
        println!("  {} Start the server:", style("2.").cyan());
        println!("     {} {}", style("$").dim(), style(kind.run_hint()).cyan());
        println!();
        println!("  {} Open in browser:", style("3.").cyan());
        println!(
            "     {}",
            style("http://localhost:8000/index.html").cyan().underlined()
        );
        println!();
    }
}
