use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `qrs` binary.
#[derive(Debug, Parser)]
#[command(name = "qrs", version, about = "Save scanned QR contacts to a sheet")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Save one contact as a new row of the configured sheet.
    Save(SaveArgs),
    /// Delete all cached column schemas.
    ClearCache,
}

#[derive(Clone, Debug, Args)]
pub struct SaveArgs {
    /// Contact name.
    #[arg(long)]
    pub name: Option<String>,
    /// Contact email.
    #[arg(long)]
    pub email: Option<String>,
    /// Organization.
    #[arg(long)]
    pub org: Option<String>,
    /// Job title.
    #[arg(long)]
    pub title: Option<String>,
    /// Raw QR code text.
    #[arg(long)]
    pub raw: Option<String>,
    /// Target sheet (overrides `smartsheet.sheet_id`).
    #[arg(long)]
    pub sheet: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn save_parses_contact_fields() {
        let cli = Cli::try_parse_from([
            "qrs", "save", "--name", "Ada", "--email", "ada@example.com", "--sheet", "42", "-v",
        ])
        .expect("cli should parse");

        assert!(cli.verbose);
        let Commands::Save(args) = cli.command else {
            panic!("expected save");
        };
        assert_eq!(args.name.as_deref(), Some("Ada"));
        assert_eq!(args.email.as_deref(), Some("ada@example.com"));
        assert_eq!(args.sheet.as_deref(), Some("42"));
        assert!(args.org.is_none());
    }

    #[test]
    fn clear_cache_takes_no_arguments() {
        let cli = Cli::try_parse_from(["qrs", "clear-cache"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::ClearCache));
        assert!(Cli::try_parse_from(["qrs", "clear-cache", "--all"]).is_err());
    }
}
