//! htmltext - convert HTML to readable plain text

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use htmltext::{convert_bytes, CharacterSet, Config};

#[derive(Parser)]
#[command(name = "htmltext")]
#[command(version, about = "Convert HTML to readable plain text", long_about = None)]
#[command(after_help = "EXAMPLES:
    htmltext mail.html                   Convert a file
    curl -s https://example.com | htmltext --drop-links
    htmltext --charset windows-1252 old.htm")]
struct Cli {
    /// Input file, reads stdin when omitted or `-`
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Emit link text only, without targets
    #[arg(long)]
    drop_links: bool,

    /// Input character set label, or `auto` to detect
    #[arg(long, value_name = "LABEL", default_value = "auto")]
    charset: CharacterSet,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    let bytes = read_input(cli.input.as_ref()).map_err(|e| e.to_string())?;

    let config = Config {
        drop_links: cli.drop_links,
        character_set: cli.charset.clone(),
    };

    convert_bytes(&bytes, &config).map_err(|e| e.to_string())
}

fn read_input(path: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read(path),
        _ => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            Ok(bytes)
        }
    }
}
