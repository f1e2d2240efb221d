use std::{env, fs::read_to_string, io, path::PathBuf, process, time::Instant};

use golex::{
    display_error, lexer::lexer::Lexer, parser::parser::parse, printer::printer::print_tokens,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Incorrect usage: missing input file");
        process::exit(1);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').next_back().unwrap_or(file_path)
    } else {
        file_path
    };

    let file_contents = match read_to_string(file_path) {
        Ok(file_contents) => file_contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            process::exit(1);
        }
    };

    let start = Instant::now();

    let mut lexer = Lexer::new(&file_contents, Some(String::from(file_name)));
    let tokens = match lexer.all() {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            process::exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    if let Err(error) = print_tokens(&mut io::stdout(), &tokens) {
        eprintln!("Failed to write tokens: {}", error);
        process::exit(1);
    }

    let parse_start = Instant::now();

    if let Err(error) = parse(tokens, lexer.file()) {
        display_error(error, PathBuf::from(file_path));
        process::exit(1);
    }

    println!("Parsed in {:?}", parse_start.elapsed());
}
