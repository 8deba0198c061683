//! expand-object - expand shorthand strings into JSON.

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use expand_object::{expand_with_options, trim_line_ending, ExpandOptions, Value};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod store;

use store::Store;

const EXAMPLES: &str = "\
Examples:
  $ expand-object \"a:b\"
  $ expand-object --raw \"a.b:c,d\"
  $ echo \"a:b|c:d\" | expand-object --pretty
  $ expand-object --set \"user.name:jon\"
  $ expand-object --get user.name";

/// Expand a terse shorthand string into structured data.
#[derive(Parser, Debug)]
#[command(name = "expand-object", version, about, after_help = EXAMPLES)]
struct Cli {
    /// Shorthand to expand (read from stdin when omitted)
    input: Option<String>,

    /// Print the raw value instead of JSON
    #[arg(short, long)]
    raw: bool,

    /// Print indented JSON
    #[arg(short, long, conflicts_with = "raw")]
    pretty: bool,

    /// Keep every value as a string
    #[arg(long)]
    literal: bool,

    /// Expand shorthand and merge it into the store
    #[arg(long, value_name = "SHORTHAND", conflicts_with = "get")]
    set: Option<String>,

    /// Print the stored value at a dotted path
    #[arg(long, value_name = "PATH")]
    get: Option<String>,

    /// Store file location
    #[arg(long, env = "EXPAND_OBJECT_STORE", value_name = "FILE")]
    store: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Pretty,
    Raw,
}

impl Cli {
    fn format(&self) -> Format {
        if self.raw {
            Format::Raw
        } else if self.pretty {
            Format::Pretty
        } else {
            Format::Json
        }
    }

    fn options(&self) -> ExpandOptions {
        if self.literal {
            ExpandOptions::literal()
        } else {
            ExpandOptions::default()
        }
    }

    fn open_store(&self) -> Result<Store> {
        match &self.store {
            Some(path) => Ok(Store::open(path)),
            None => Store::default_path()
                .map(Store::open)
                .context("cannot locate the store: set --store, XDG_CONFIG_HOME or HOME"),
        }
    }
}

fn render(value: &Value, format: Format) -> Result<String> {
    match format {
        Format::Json => serde_json::to_string(value).context("failed to serialize output"),
        Format::Pretty => serde_json::to_string_pretty(value).context("failed to serialize output"),
        Format::Raw => Ok(value.to_string()),
    }
}

fn read_input(arg: Option<&str>) -> Result<Option<String>> {
    if let Some(arg) = arg {
        return Ok(Some(arg.to_string()));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut contents = String::new();
    stdin
        .lock()
        .read_to_string(&mut contents)
        .context("failed to read stdin")?;
    Ok(Some(trim_line_ending(&contents).to_string()))
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(path) = cli.get.as_deref() {
        let store = cli.open_store()?;
        if let Some(value) = store.get(path)? {
            println!("{}", render(&value, cli.format())?);
        }
        return Ok(());
    }

    if let Some(shorthand) = cli.set.as_deref() {
        let value = expand_with_options(shorthand, cli.options())
            .context("failed to expand --set shorthand")?;
        let incoming = match value {
            Value::Object(map) => map,
            other => bail!("--set expects shorthand that expands to a mapping, got {other}"),
        };
        let stored = cli.open_store()?.set(incoming)?;
        println!("{}", render(&Value::Object(stored), cli.format())?);
        return Ok(());
    }

    let Some(input) = read_input(cli.input.as_deref())? else {
        Cli::command().print_help().context("failed to print help")?;
        println!();
        return Ok(());
    };

    let value = expand_with_options(&input, cli.options()).context("failed to expand shorthand")?;
    println!("{}", render(&value, cli.format())?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");
    run(&cli)
}
