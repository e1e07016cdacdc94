//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary
const BIN_NAME: &str = "tablebook";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    ///
    /// The script goes to stdout; install hints go to stderr.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# To enable {} completions:", self.shell);
                eprintln!("#   {hint}");
                eprintln!();
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some(
            "tablebook completions bash > ~/.local/share/bash-completion/completions/tablebook",
        ),
        Shell::Zsh => Some("tablebook completions zsh > ~/.zsh/completions/_tablebook"),
        Shell::Fish => {
            Some("tablebook completions fish > ~/.config/fish/completions/tablebook.fish")
        }
        Shell::PowerShell => {
            Some("tablebook completions powershell | Out-String | Invoke-Expression")
        }
        _ => None,
    }
}
