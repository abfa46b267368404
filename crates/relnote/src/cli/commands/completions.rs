//! Shell completions command

use std::io::{self, Write};

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Print a shell completion script to stdout
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command
    pub fn execute(&self, _cli: &Cli) -> anyhow::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout);
        stdout.flush()?;
        Ok(())
    }

    fn write_to(&self, out: &mut dyn Write) {
        generate(self.shell, &mut Cli::command(), "relnote", out);
    }
}
