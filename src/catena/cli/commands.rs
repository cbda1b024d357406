//! # CLI Layer
//!
//! The only place that knows about stdout, stderr, stdin and exit codes.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap, see `setup.rs`
//! 2. **Context Setup**: logging, config directory, database path, output format
//! 3. **API Dispatch**: call `CatenaApi` or the store-free functions in `catena::api`
//! 4. **Output Formatting**: turn the `CmdResult` into terminal text, Markdown or JSON
//!
//! ## Interactive Mode
//!
//! `catena` with no reference and no subcommand reads one reference per stdin line. Reference
//! mistakes are reported inline and the loop goes on; anything else ends the session with the
//! usual `Error:` exit.

use super::render::{
    render_books, render_markdown, render_messages, render_reference,
};
use super::setup::{Cli, Commands};
use catena::api::{self, CatenaApi, CmdMessage, CmdResult, ConfigAction};
use catena::config::{CatenaConfig, OutputFormat};
use catena::error::{CatenaError, Result};
use catena::markdown::commentaries_to_markdown;
use catena::reference::ReferenceError;
use catena::store::sqlite::SqliteStore;
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "Search for a verse: ";

struct AppContext {
    config_dir: PathBuf,
    db_path: PathBuf,
    format: OutputFormat,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Lookup { reference }) => handle_lookup(&ctx, &reference.join(" ")),
        Some(Commands::Parse { reference }) => handle_parse(&ctx, &reference.join(" ")),
        Some(Commands::Books { filter }) => handle_books(&ctx, filter.as_deref()),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None if !cli.reference.is_empty() => handle_lookup(&ctx, &cli.reference.join(" ")),
        None => handle_interactive(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "warn,catena=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = resolve_config_dir()?;
    let config = CatenaConfig::load(&config_dir)?;

    let db_path = config.database_path(cli.db.as_deref());
    let format = cli.format.unwrap_or(config.format);
    let use_color = !cli.no_color && console::Term::stdout().features().colors_supported();

    tracing::debug!(
        config_dir = %config_dir.display(),
        db = %db_path.display(),
        %format,
        "context ready"
    );

    Ok(AppContext {
        config_dir,
        db_path,
        format,
        use_color,
    })
}

fn resolve_config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("CATENA_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("", "", "catena")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            CatenaError::Config("could not determine a config directory, set CATENA_HOME".into())
        })
}

fn open_api(ctx: &AppContext) -> Result<CatenaApi<SqliteStore>> {
    Ok(CatenaApi::new(SqliteStore::open(&ctx.db_path)?))
}

fn handle_lookup(ctx: &AppContext, raw: &str) -> Result<()> {
    let api = open_api(ctx)?;
    let result = api.lookup(raw)?;
    print_lookup(ctx, &result)
}

fn handle_parse(ctx: &AppContext, raw: &str) -> Result<()> {
    let result = api::parse(raw)?;
    let Some(parsed) = result.reference.as_ref() else {
        return Ok(());
    };

    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(parsed)?),
        OutputFormat::Markdown => println!("{}", render_reference(parsed, false)?),
        OutputFormat::Terminal => println!("{}", render_reference(parsed, ctx.use_color)?),
    }
    Ok(())
}

fn handle_books(ctx: &AppContext, filter: Option<&str>) -> Result<()> {
    let result = api::books(filter);

    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result.books)?),
        _ => {
            print!("{}", render_books(&result.books, ctx.use_color)?);
            print_messages(ctx, &result.messages)?;
        }
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let result = api::config(&ctx.config_dir, config_action(key, value))?;

    match (ctx.format, result.config.as_ref()) {
        (OutputFormat::Json, Some(config)) => {
            println!("{}", serde_json::to_string_pretty(config)?)
        }
        _ => print_messages(ctx, &result.messages)?,
    }
    Ok(())
}

fn handle_interactive(ctx: &AppContext) -> Result<()> {
    let api = open_api(ctx)?;
    let stdin = io::stdin();
    let show_prompt = stdin.is_terminal();

    prompt(show_prompt)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let raw = line.trim();

        if !raw.is_empty() {
            match api.lookup(raw) {
                Ok(result) => print_lookup(ctx, &result)?,
                Err(CatenaError::Reference(err)) if err.is_user_error() => {
                    print_reference_error(ctx, raw, &err)?
                }
                Err(e) => return Err(e),
            }
        }
        prompt(show_prompt)?;
    }
    Ok(())
}

fn prompt(show: bool) -> Result<()> {
    if show {
        let mut stderr = io::stderr();
        write!(stderr, "{PROMPT}")?;
        stderr.flush()?;
    }
    Ok(())
}

fn print_lookup(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result.commentaries)?),
        OutputFormat::Markdown => println!("{}", commentaries_to_markdown(&result.commentaries)?),
        OutputFormat::Terminal => {
            let markdown = commentaries_to_markdown(&result.commentaries)?;
            print!("{}", render_markdown(&markdown, ctx.use_color));
            print_messages(ctx, &result.messages)?;
        }
    }
    Ok(())
}

fn print_reference_error(ctx: &AppContext, raw: &str, err: &ReferenceError) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "reference": raw, "error": err.to_string() })
        ),
        OutputFormat::Markdown => println!("{}", reference_error_markdown(raw, err)),
        OutputFormat::Terminal => {
            print!(
                "{}",
                render_markdown(&reference_error_markdown(raw, err), ctx.use_color)
            );
        }
    }
    Ok(())
}

fn print_messages(ctx: &AppContext, messages: &[CmdMessage]) -> Result<()> {
    print!("{}", render_messages(messages, ctx.use_color)?);
    Ok(())
}

fn config_action(key: Option<String>, value: Option<String>) -> ConfigAction {
    match (key, value) {
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
        (Some(key), None) => ConfigAction::ShowKey(key),
        (None, _) => ConfigAction::ShowAll,
    }
}

fn reference_error_markdown(raw: &str, err: &ReferenceError) -> String {
    match err {
        ReferenceError::BookNotFound { .. } => {
            format!("# Error: could not find book in `{raw}`: {err}")
        }
        _ => format!("# Error: reference style `{raw}` not understood: {err}"),
    }
}
