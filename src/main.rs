// minilang: recognizer driver for the line language

use std::fs;

use minilang::parser::parse::Parser;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("minilang");
        eprintln!("Error: No input files provided");
        eprintln!();
        eprintln!("Usage: {} <file>...", program_name);
        eprintln!();
        eprintln!("Each file is parsed independently; accepted programs are");
        eprintln!("printed as an indented parse tree dump.");
        std::process::exit(1);
    }

    let mut status = 0;
    for path in &args[1..] {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("{}: cannot read file: {}", path, err);
                status = 1;
                continue;
            }
        };

        let mut parser = Parser::new(&source);
        match parser.parse() {
            Ok(tree) => {
                println!("{}: Success.", path);
                print!("{}", tree);
            }
            Err(err) => {
                println!("{}: {}", path, err);
                status = 1;
            }
        }
    }

    std::process::exit(status);
}
