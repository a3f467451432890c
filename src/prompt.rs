//! Interactive yes/no confirmation.
//!
//! The cleanup passes take any `FnMut(&str) -> bool` as their
//! confirmation, so tests can script answers instead of reading a
//! terminal. This module provides the real stdin implementation.

use std::io::{self, BufRead};

/// Print the prompt on its own line and read one answer from stdin.
pub fn confirm_on_stdin(prompt: &str) -> bool {
    println!("{prompt}");
    read_yes_no(&mut io::stdin().lock())
}

/// `true` only when the trimmed answer is exactly `y`, case-insensitive.
/// Empty input, EOF and read errors count as no.
fn read_yes_no(reader: &mut impl BufRead) -> bool {
    let mut answer = String::new();
    if reader.read_line(&mut answer).is_err() {
        return false;
    }
    answer.trim().eq_ignore_ascii_case("y")
}
