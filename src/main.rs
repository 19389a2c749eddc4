use std::fs;

use clap::Parser;

/// monna is a small, dynamically typed, expression oriented scripting
/// language with first-class functions and closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monna to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the last
    /// printable value of a monna script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Inline source text, or a script path when --file is given. Omit it
    /// to start the interactive REPL.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        println!("Welcome to the Monna programming language!");

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        if let Err(e) = monna::repl::start(&mut stdin.lock(), &mut stdout.lock()) {
            eprintln!("{e}");
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    if let Err(e) = monna::get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
    }
}
