use std::io::{self, Write};

/// Builds the greeting line for `name`, without a trailing newline.
pub fn greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Prints the greeting for `name` to standard output.
pub fn greet(name: &str) {
    println!("{}", greeting(name));
}

pub fn greet_to<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    writeln!(out, "{}", greeting(name))
}
