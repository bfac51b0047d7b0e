//! Console output and prompts.
//!
//! Small wrapper around stdout/stderr printing to provide consistent, colored
//! user-facing messages. Colors are enabled only when output is a TTY. The
//! prompt helpers back the interactive account/confirmation flow.

use owo_colors::OwoColorize;
use std::io::{self, Write};

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix). Use this for primary outputs
/// such as account listings which users may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Print a prompt and read one trimmed line from stdin.
/// Returns None on EOF (e.g. piped stdin ran out).
pub fn prompt_line(prompt: &str) -> Option<String> {
    print!("{} ", prompt);
    let _ = io::stdout().flush();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim().to_string()),
        Err(_) => None,
    }
}

/// Yes/no confirmation; only an explicit "y"/"yes" counts as consent.
pub fn confirm(prompt: &str) -> bool {
    match prompt_line(&format!("{} (y/n):", prompt)) {
        Some(answer) => matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"),
        None => false,
    }
}
