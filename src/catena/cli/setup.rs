use catena::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catena", bin_name = "catena", version)]
#[command(
    about = "Read what the Church Fathers wrote about a Bible passage",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Reference to look up, e.g. `John 3:16-18` (shorthand for `catena lookup`)
    #[arg(value_name = "REFERENCE")]
    pub reference: Vec<String>,

    /// Commentary database to read
    #[arg(long, global = true, env = "CATENA_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Output format: terminal, markdown or json
    #[arg(long, global = true, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show commentaries overlapping a reference
    Lookup {
        #[arg(required = true, value_name = "REFERENCE")]
        reference: Vec<String>,
    },

    /// Show how a reference is parsed, without opening the database
    Parse {
        #[arg(required = true, value_name = "REFERENCE")]
        reference: Vec<String>,
    },

    /// List book names and their accepted abbreviations
    Books {
        /// Only books whose name or an abbreviation contains this text
        filter: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (database, format)
        key: Option<String>,
        /// Value to set
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_words_form_a_reference() {
        let cli = Cli::try_parse_from(["catena", "1", "Jn", "1:4-2:1"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.reference.join(" "), "1 Jn 1:4-2:1");
    }

    #[test]
    fn subcommands_take_precedence() {
        let cli = Cli::try_parse_from(["catena", "books", "john"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Books { filter: Some(ref f) }) if f == "john"
        ));
        assert!(cli.reference.is_empty());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "catena", "lookup", "John", "3:16", "--format", "json", "--db", "x.db", "-v",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.db, Some(PathBuf::from("x.db")));
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["catena", "--format", "html", "John", "3:16"]).is_err());
    }

    #[test]
    fn lookup_requires_a_reference() {
        assert!(Cli::try_parse_from(["catena", "lookup"]).is_err());
    }
}
