use clap::Parser;
use input_config::writer::{ConfigWriter, WriteOutcome, INPUT_CONFIG_FILE};
use input_config::{ConfigError, DEFAULT_DOCUMENT};
use std::error::Error;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Writes the default Gigatron emulator key bindings
#[derive(Parser)]
#[command(version, about)]
struct Options {
    /// Overwrite the configuration file if it already exists
    #[clap(long, short)]
    force: bool,

    /// Print the default bindings to stdout instead of writing a file
    #[clap(long, short, conflicts_with = "list")]
    print: bool,

    /// List every default binding as Section.Key = Value
    #[clap(long, short)]
    list: bool,

    /// Set path of the configuration file to create
    #[clap(default_value = INPUT_CONFIG_FILE)]
    path: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let options: Options = Options::parse();

    if options.print {
        let stdout = io::stdout();
        DEFAULT_DOCUMENT
            .write_to(&mut stdout.lock())
            .map_err(ConfigError::Stdout)?;
        return Ok(());
    }

    if options.list {
        for section in DEFAULT_DOCUMENT.sections()? {
            for b in &section.bindings {
                println!("{}.{} = {}", section.name, b.key, b.value);
            }
        }
        return Ok(());
    }

    let mut writer = ConfigWriter::new(&options.path);
    writer.overwrite(options.force);

    match writer.write(&DEFAULT_DOCUMENT) {
        Ok(WriteOutcome::Kept) => {
            println!(
                "{} already exists, use --force to overwrite it",
                options.path.display()
            );
        }
        Ok(outcome) => println!("{} {}", outcome, options.path.display()),
        Err(e) => {
            tracing::warn!(error = %e, "could not write default input config");
            return Err(e.into());
        }
    }

    Ok(())
}
