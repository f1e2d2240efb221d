#![allow(clippy::module_inception)]

use std::{fmt::Display, fs, path::PathBuf, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod printer;

/// A 1-based line/column position in a named source file.
#[derive(Debug, Clone)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub file: Rc<String>,
}

impl Position {
    pub fn null() -> Self {
        Position {
            line: 0,
            column: 0,
            file: Rc::new(String::from("<null>")),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} position {}", self.line, self.column)
    }
}

/// Fetches the 1-based `line`th line of `file`, trailing newline included.
pub fn get_line_at(file: PathBuf, line: usize) -> Option<String> {
    if line == 0 {
        return None;
    }

    let content = fs::read_to_string(&file).ok()?;
    content
        .split_inclusive('\n')
        .nth(line - 1)
        .map(String::from)
}

pub fn display_error(error: Error, file: PathBuf) {
    /*
        Error: message
        -> main.go
           |
        20 | x = @
           | ----^
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());

    let position = error.get_position();
    let line_text = match get_line_at(file, position.line) {
        Some(line_text) => line_text,
        None => return,
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = position.column.saturating_sub(removed_whitespace).max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
