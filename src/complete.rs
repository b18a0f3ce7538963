//! Interactive shell completion over the method catalog.
//!
//! Wired through the bash completion protocol: when the shell invokes
//! the binary with COMP_LINE/COMP_POINT set, [`run`] prints one
//! suggestion per line and the process exits before normal argument
//! parsing.

use std::env;

use crate::catalog;

/// Global flags offered when the in-progress token starts with '-'.
const FLAGS: &[&str] = &["-n", "-v", "-x", "--id", "--pretty", "--timeout"];

/// A partially typed command line: fully typed tokens (program name
/// excluded) plus the in-progress last token.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Words {
    pub completed: Vec<String>,
    pub last: String,
}

impl Words {
    /// Splits a raw completion line. A line ending in whitespace means
    /// the previous token is finished and the in-progress token is
    /// empty.
    pub fn from_line(line: &str) -> Self {
        let mut tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        let last = if line.ends_with(char::is_whitespace) {
            String::new()
        } else {
            tokens.pop().unwrap_or_default()
        };
        if !tokens.is_empty() {
            tokens.remove(0); // program name
        }
        Words {
            completed: tokens,
            last,
        }
    }
}

/// Produces the valid next-token suggestions for a partial command
/// line, walking namespace -> method -> per-argument literal sets.
pub fn suggest(words: &Words) -> Vec<String> {
    if words.last.starts_with('-') {
        return filter_prefix(FLAGS, &words.last);
    }

    // Flag tokens do not occupy namespace/method/argument positions.
    let positional: Vec<&str> = words
        .completed
        .iter()
        .map(String::as_str)
        .filter(|t| !t.starts_with('-'))
        .collect();

    match positional.len() {
        0 => {
            let names: Vec<&str> = catalog::NAMESPACES.iter().map(|ns| ns.name).collect();
            filter_prefix(&names, &words.last)
        }
        1 => match catalog::namespace(positional[0]) {
            Some(ns) => {
                let names: Vec<&str> = ns.methods.iter().map(|m| m.name).collect();
                filter_prefix(&names, &words.last)
            }
            None => Vec::new(),
        },
        n => {
            let Some(spec) = catalog::lookup(positional[0], positional[1]) else {
                return Vec::new();
            };
            // Arguments beyond the declared kinds are still accepted
            // at execution time; completion simply stops guiding.
            match spec.args.get(n - 2) {
                Some(kind) => filter_prefix(kind.literals(), &words.last),
                None => Vec::new(),
            }
        }
    }
}

/// Case-sensitive prefix filter; an empty prefix keeps the full set.
fn filter_prefix(options: &[&str], prefix: &str) -> Vec<String> {
    options
        .iter()
        .filter(|o| o.starts_with(prefix))
        .map(|o| o.to_string())
        .collect()
}

/// Completion entry point. Returns true if a completion request was
/// served (the caller should exit without doing anything else).
pub fn run() -> bool {
    let Ok(line) = env::var("COMP_LINE") else {
        return false;
    };
    let point = env::var("COMP_POINT")
        .ok()
        .and_then(|p| p.parse::<usize>().ok())
        .unwrap_or(line.len());
    let line = line.get(..point).unwrap_or(&line);
    for suggestion in suggest(&Words::from_line(line)) {
        println!("{suggestion}");
    }
    true
}
