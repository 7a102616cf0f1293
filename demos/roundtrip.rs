use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Compresses text into a URL-safe string, or restores it.
///
/// Usage: cargo run --example roundtrip -- [--decompress] [--file <path> | <text>]
#[derive(Debug, Parser)]
#[command(name = "roundtrip")]
struct Args {
    /// Text to process; ignored when --file is given
    text: Option<String>,

    /// Read the input from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Treat the input as compressed and restore it
    #[arg(short, long)]
    decompress: bool,

    /// Log directive used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log: String,
}

fn setup_logging(directives: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives)),
        )
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(&args.log);

    let input = match (&args.file, &args.text) {
        (Some(path), _) => match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                eprintln!("Cannot read \"{}\": {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        (None, Some(text)) => text.clone(),
        (None, None) => {
            eprintln!("Nothing to do: pass some text or --file <path>");
            return ExitCode::FAILURE;
        }
    };

    if args.decompress {
        return match lz_url::decompress(input.trim_end()) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        };
    }

    let units: Vec<u16> = input.encode_utf16().collect();
    let (compressed, stats) = lz_url::compress_with_stats(&units);

    // Verify by restoring
    match lz_url::decompress_utf16(&compressed) {
        Ok(restored) if restored == units => {}
        Ok(_) => {
            eprintln!("Roundtrip mismatch");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("Roundtrip failed: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!("{compressed}");
    eprintln!("\n=== Statistics ===");
    eprintln!("Code units in: {}", stats.input_units);
    eprintln!("Symbols out: {}", stats.output_symbols);
    eprintln!("Dictionary entries: {}", stats.dictionary_entries);
    eprintln!("Final code width: {} bits", stats.final_code_width);
    eprintln!("Compression ratio: {:.2}%", stats.compression_ratio());

    ExitCode::SUCCESS
}
