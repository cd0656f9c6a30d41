//! Strand CLI - tube-and-string sculpture threading calculator.
//!
//! Usage: strand [OPTIONS] <FILE>
//!
//! Reads a triangulated STL mesh and prints the tube lengths to cut plus
//! the order to thread them onto strings.

use std::path::PathBuf;

use clap::Parser;

use strand::io;
use strand::pipeline::thread_soup;

#[derive(Parser)]
#[command(name = "strand")]
#[command(author, version, about = "Calculates how to string tubes together to make objects", long_about = None)]
struct Cli {
    /// STL file to analyze
    file: PathBuf,

    /// Scale factor for the tube lengths
    #[arg(short, long, default_value = "1.0")]
    scale: f64,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let soup = io::load_soup(&cli.file)?;
    let threading = thread_soup(&soup, cli.scale)?;

    if !threading.closure.is_closed() {
        eprintln!("WARNING: Mesh is not closed. Output may be incorrect. Please repair the mesh.");
    }

    print!("{}", threading.plan);

    Ok(())
}
