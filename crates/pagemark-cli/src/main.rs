use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pagemark::{ContentFormatter, FormatOptions, ListWrapping};
use pagemark_library::{article, articles, by_category, render_article, render_index, Category};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a log filter directive
const LOG_ENV: &str = "PAGEMARK_LOG";

#[derive(Debug, Parser)]
#[command(
    name = "pagemark",
    version,
    about = "Format markdown-like text into HTML fragments and browse the article library."
)]
struct Cli {
    /// Only log errors.
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Format a document and print the HTML fragment.
    Format {
        /// Input file; reads stdin when absent or `-`.
        file: Option<PathBuf>,
        #[command(flatten)]
        options: FormatArgs,
    },
    /// List the articles in the library.
    List {
        /// Only list articles in this category.
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
        /// Print the rendered HTML index instead of a plain listing.
        #[arg(long)]
        html: bool,
    },
    /// Render a single article.
    Show {
        /// Article id (1-based).
        id: u32,
        /// Print the article's markdown source instead of HTML.
        #[arg(long)]
        raw: bool,
        #[command(flatten)]
        options: FormatArgs,
    },
}

#[derive(Debug, Args, Clone)]
struct FormatArgs {
    /// Language class used for fences without a language tag.
    #[arg(long, default_value = "text")]
    default_language: String,
    /// Prefix of the class attribute on fenced code elements.
    #[arg(long, default_value = "language-")]
    class_prefix: String,
    /// How runs of list items are wrapped.
    #[arg(long, value_enum, default_value_t = ListWrappingArg::FirstRun)]
    list_wrapping: ListWrappingArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ListWrappingArg {
    FirstRun,
    EveryRun,
    Span,
}

impl From<ListWrappingArg> for ListWrapping {
    fn from(arg: ListWrappingArg) -> Self {
        match arg {
            ListWrappingArg::FirstRun => ListWrapping::FirstRun,
            ListWrappingArg::EveryRun => ListWrapping::EveryRun,
            ListWrappingArg::Span => ListWrapping::Span,
        }
    }
}

impl From<&FormatArgs> for FormatOptions {
    fn from(args: &FormatArgs) -> Self {
        FormatOptions {
            default_language: args.default_language.clone(),
            code_class_prefix: args.class_prefix.clone(),
            list_wrapping: args.list_wrapping.into(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    match cli.command {
        Command::Format { file, options } => {
            let content = read_input(file.as_ref())?;
            let formatter = ContentFormatter::with_options(FormatOptions::from(&options));
            println!("{}", formatter.format(&content));
        }
        Command::List { category, html } => handle_list(category, html),
        Command::Show { id, raw, options } => {
            let source = article(id)?;
            if raw {
                println!("{}", source.content);
            } else {
                let formatter = ContentFormatter::with_options(FormatOptions::from(&options));
                println!("{}", render_article(&formatter, id)?);
            }
            info!(id, title = source.title, "rendered article");
        }
    }

    Ok(())
}

fn handle_list(category: Option<Category>, html: bool) {
    let selected: Vec<_> = match category {
        Some(category) => by_category(category).collect(),
        None => articles().iter().collect(),
    };
    debug!(count = selected.len(), "selected articles");

    if html {
        println!("{}", render_index(selected));
        return;
    }

    for article in selected {
        println!("{:>2}  {:<12} {}", article.id, article.category, article.title);
    }
}

fn parse_category(value: &str) -> Result<Category, String> {
    value
        .to_lowercase()
        .parse()
        .map_err(|error: pagemark_library::LibraryError| error.to_string())
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            Ok(content)
        }
    }
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let default_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .without_time()
        .compact()
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow!("failed to initialize logging: {error}"))
}
