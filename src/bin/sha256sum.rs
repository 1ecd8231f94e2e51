//! Print SHA-256 digests of files or standard input.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use sha256_forge::Sha256;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Read in 1 MiB chunks.
const BUFFER_SIZE: usize = 1 << 20;

#[derive(Debug, Parser)]
#[command(name = "sha256sum", about = "Print SHA-256 digests")]
struct Args {
    /// Files to hash; `-` or no argument reads standard input
    files: Vec<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    if args.files.is_empty() {
        println!("{}  -", digest_reader(io::stdin().lock())?);
        return Ok(());
    }

    for path in &args.files {
        let digest = if path.as_os_str() == "-" {
            digest_reader(io::stdin().lock())?
        } else {
            digest_reader(File::open(path)?)?
        };
        println!("{digest}  {}", path.display());
    }
    Ok(())
}

fn digest_reader<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];
    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.absorb(&buffer[..n]);
    }
    debug!(bytes = hasher.len(), "input exhausted");
    Ok(hasher.hexdigest())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .compact()
        .init();
}
