//! ts-md — generate markdown docs from TypeScript + JSDoc and splice
//! them into a README's marker section.
//!
//! ```text
//! ts-md 'lib/**/*.ts' --type function,interface --file-path docs/API.md
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process;
use ts_readme::{GenerateOptions, KindFilter, UpdateStatus};

#[derive(Parser)]
#[command(
    name = "ts-md",
    about = "Generate docs from TypeScript + JSDoc and put them in a README"
)]
struct Cli {
    /// Source glob patterns. Defaults to ./src/**/*.ts and ./src/**/*.tsx.
    pattern: Vec<String>,

    /// Comma-separated declaration kinds to document:
    /// variable, function, type, class, interface. Defaults to all.
    #[arg(long = "type", value_name = "KINDS")]
    types: Option<String>,

    /// Target file containing the marker section
    #[arg(long, value_name = "FILE", default_value = ts_readme::DEFAULT_FILE_PATH)]
    file_path: PathBuf,

    /// Marker name; the section between `<!-- NAME START -->` and
    /// `<!-- NAME END -->` is replaced
    #[arg(long, value_name = "NAME")]
    matcher: Option<String>,
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let options = build_options(&cli)?;
    let target = options.target_path();
    match ts_readme::generate(&options)? {
        UpdateStatus::Updated => {}
        UpdateStatus::NoMarker => {
            eprintln!("warning: no marker section found in '{}'", target.display());
        }
    }
    Ok(())
}

/// Map parsed arguments onto the library options, leaving unset flags
/// to their library defaults.
fn build_options(cli: &Cli) -> anyhow::Result<GenerateOptions> {
    let types = match cli.types.as_deref() {
        Some(list) => Some(list.parse::<KindFilter>()?),
        None => None,
    };
    Ok(GenerateOptions {
        matcher: cli.matcher.as_deref().map(ts_readme::create_matcher),
        pattern: (!cli.pattern.is_empty()).then(|| cli.pattern.clone()),
        types,
        file_path: Some(cli.file_path.clone()),
    })
}
