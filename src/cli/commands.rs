use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use ini_cfg::export::{export_document, export_document_to_json, value_to_json};
use ini_cfg::{read_file, write_json_file, IniConfig};

#[derive(Parser)]
#[command(name = "ini-cfg")]
#[command(about = "Read, check and write section-based INI files")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Show a config file as JSON
    ini-cfg dump config.ini

    # Normalize a config file
    ini-cfg dump config.ini --ini

    # Read one value
    ini-cfg get config.ini database.port

    # Validate several files
    ini-cfg check site.ini course.ini

    # Write an INI file from a JSON object of sections
    ini-cfg convert settings.json settings.ini
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a decoded INI file
    Dump {
        /// INI file to read
        file: PathBuf,

        /// Print normalized INI instead of JSON
        #[arg(long)]
        ini: bool,
    },

    /// Print one value, addressed as section.key
    Get {
        /// INI file to read
        file: PathBuf,

        /// Value path, e.g. database.host
        path: String,
    },

    /// Check that files parse
    Check {
        /// INI files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Write an INI file from a JSON object of sections
    Convert {
        /// JSON input file
        input: PathBuf,

        /// INI output file
        output: PathBuf,
    },
}

pub fn dump(file: &Path, ini: bool) -> anyhow::Result<()> {
    let doc = read_file(file)?;
    tracing::debug!(sections = doc.sections.len(), "Decoded {}", file.display());

    let rendered = if ini {
        export_document(&doc)?
    } else {
        export_document_to_json(&doc)?
    };
    print!("{}", rendered);
    if !ini {
        println!();
    }
    Ok(())
}

pub fn get(file: &Path, path: &str) -> anyhow::Result<()> {
    let config = IniConfig::from_file(file)?;
    let value = config.get_value(path)?;

    // JSON rendering keeps strings, lists and maps unambiguous on stdout
    println!("{}", value_to_json(value));
    Ok(())
}

pub fn check(files: &[PathBuf]) -> anyhow::Result<()> {
    let mut failed = 0usize;

    for file in files {
        match read_file(file) {
            Ok(doc) => {
                let keys: usize = doc.sections.values().map(|s| s.len()).sum();
                tracing::info!("{}: ok ({} sections, {} keys)", file.display(), doc.sections.len(), keys);
            }
            Err(e) => {
                tracing::warn!("{}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} files failed to parse", failed, files.len());
    }
    Ok(())
}

pub fn convert(input: &Path, output: &Path) -> anyhow::Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let json: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", input.display()))?;

    write_json_file(output, &json)?;
    tracing::info!("Wrote {}", output.display());
    Ok(())
}
