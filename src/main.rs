use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fwcodes::registry::printer;
use fwcodes::{Format, Registry, codegen};

#[derive(Parser)]
#[command(name = "fwcodes", version, about = "Generate sources from the printer error code registry")]
struct Cli {
    /// Output representation
    #[arg(long, value_enum, default_value_t = Format::Json)]
    emit: Format,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// List every code in declaration order
    #[arg(long, conflicts_with = "explain")]
    list: bool,

    /// Describe a single code, e.g. `--explain 101`
    #[arg(long, value_name = "IDENTIFIER")]
    explain: Option<u16>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let registry = match printer::registry() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: invalid registry '{}': {}", printer::NAME, e);
            std::process::exit(1);
        }
    };

    if cli.list {
        for entry in registry.entries() {
            println!("{}: {}", entry.name, entry.code);
        }
        return;
    }

    if let Some(identifier) = cli.explain {
        match registry.lookup(identifier) {
            Some(entry) => println!("{}\n{}", entry.name, entry.code.describe()),
            None => {
                eprintln!("error: unknown code {identifier}");
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = emit(&registry, cli.emit, cli.output.as_ref()) {
        eprintln!("error: writing {} output: {}", cli.emit, e);
        std::process::exit(1);
    }
}

/// The sink is flushed here and closed on drop, whether or not the dump succeeded.
fn emit(registry: &Registry, format: Format, output: Option<&PathBuf>) -> io::Result<()> {
    match output {
        Some(path) => {
            tracing::info!(path = %path.display(), %format, "writing registry");
            let mut sink = BufWriter::new(File::create(path)?);
            let dumped = codegen::dump(registry, format, &mut sink);
            let flushed = sink.flush();
            dumped.and(flushed)
        }
        None => {
            let stdout = io::stdout();
            let mut sink = BufWriter::new(stdout.lock());
            let dumped = codegen::dump(registry, format, &mut sink);
            let flushed = sink.flush();
            dumped.and(flushed)
        }
    }
}
