mod cli;

use std::fs::File;
use std::io::{self, BufReader, Read, Write};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let input: Box<dyn Read> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .wrap_err_with(|| format!("failed to open state file {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let imports = tf_import_gen::generate_imports(input, &cli.addresses)?;
    let rendered = tf_import_gen::render(&imports, cli.format)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    tracing::debug!(count = imports.len(), "imports written");

    Ok(())
}
