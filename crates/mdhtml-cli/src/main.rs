use clap::Parser;
use log::{debug, info, LevelFilter};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mdhtml")]
#[command(about = "mdhtml: convert a small Markdown subset to HTML")]
#[command(version)]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Where to write the HTML
    #[arg(short, long, default_value = mdhtml_codegen::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Check the input for syntax errors without writing output
    #[arg(long)]
    check: bool,

    /// Wrap the output in a complete HTML page
    #[arg(long)]
    standalone: bool,

    /// Set the logging level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long = "log-level", default_value = "warn")]
    log_level: LevelFilter,
}

/// Everything that can stop a run after the arguments are accepted.
#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: mdhtml_parser::ParseError,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.log_level);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Set up logging based on the `--log-level` argument.
fn setup_logging(filter: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    let source = read_source(&cli.input)?;
    debug!("read {} bytes from {}", source.len(), cli.input.display());

    let doc = mdhtml_parser::Parser::parse(&source).map_err(|source| Error::Parse {
        path: cli.input.clone(),
        source,
    })?;

    if cli.check {
        eprintln!("OK: {}", cli.input.display());
        return Ok(());
    }

    let mut html = mdhtml_codegen::render(&doc);
    if cli.standalone {
        let title = cli
            .input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("document");
        html = mdhtml_codegen::standalone(&html, title);
    }

    std::fs::write(&cli.output, &html).map_err(|source| Error::Write {
        path: cli.output.clone(),
        source,
    })?;

    info!("wrote {} bytes", html.len());
    eprintln!("Built: {}", cli.output.display());
    Ok(())
}

fn read_source(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}
