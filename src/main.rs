use std::fs;

use clap::Parser;
use pebble::token_listing;

/// pebble tokenizes scripts of a small expression language and prints the
/// resulting token stream.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells pebble to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match token_listing(&script) {
        Ok(listing) => print!("{listing}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
