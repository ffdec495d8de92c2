use crate::config::command::Command;
use crate::config::AssetKind;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;

/// Raw command-line arguments shared by `build-css` and `build-js`.
#[derive(Debug, Clone, Parser)]
pub struct CliArgs {
    /// split | build | watch | list | help (split + build when omitted)
    pub command: Option<String>,

    /// Anything after the command is accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub verbose: bool,
}

impl CliArgs {
    pub fn resolve_command(&self, kind: AssetKind) -> Command {
        Command::parse(self.command.as_deref(), kind)
    }

    /// Never exits the process: clap's help request maps to [`Command::Help`]
    /// and any other parse failure to [`Command::Invalid`]. Only the first
    /// argument selects the command.
    pub fn invocation<I, T>(args: I, kind: AssetKind) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        match CliArgs::try_parse_from(&args) {
            Ok(cli) => Invocation {
                command: cli.resolve_command(kind),
                verbose: cli.verbose,
            },
            Err(e) if e.kind() == ErrorKind::DisplayHelp => Invocation {
                command: Command::Help,
                verbose: false,
            },
            Err(e) => {
                tracing::debug!("Argument parsing failed: {}", e);
                let raw = args
                    .get(1)
                    .map(|arg| arg.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Invocation {
                    command: Command::Invalid(raw),
                    verbose: false,
                }
            }
        }
    }
}
