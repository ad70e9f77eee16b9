//! Line-driven runner: reads commands from stdin, prints the frame outline
//! after every event.

use std::io::{BufRead, Write};

use crate::Host;

const HELP: &str = "commands: tap <label> | type <text> | back | tree | help | quit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Tap(String),
    Type(String),
    Back,
    Tree,
    Help,
    Quit,
}

impl Command {
    /// Only the command word is trimmed; `type` keeps everything after its
    /// separating space, leading and trailing blanks included.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        let (head, rest) = line.split_once(' ').unwrap_or((line, ""));
        match head.trim_end() {
            "tap" if !rest.trim().is_empty() => Some(Command::Tap(rest.trim().to_string())),
            "type" => Some(Command::Type(rest.to_string())),
            "back" => Some(Command::Back),
            "tree" => Some(Command::Tree),
            "help" | "?" => Some(Command::Help),
            "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Drive `host` until stdin ends, `quit`, or back at the root.
pub fn run_console_app(mut host: Host) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut out = std::io::stdout().lock();

    writeln!(out, "{HELP}")?;
    write!(out, "{}", host.outline())?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(cmd) = Command::parse(&line) else {
            writeln!(out, "? {}", line.trim())?;
            writeln!(out, "{HELP}")?;
            continue;
        };
        log::debug!("console: {cmd:?}");
        match cmd {
            Command::Tap(label) => {
                if let Err(e) = host.tap(&label) {
                    writeln!(out, "! {e}")?;
                    continue;
                }
            }
            Command::Type(text) => {
                if let Err(e) = host.input_text(None, &text) {
                    writeln!(out, "! {e}")?;
                    continue;
                }
            }
            Command::Back => {
                if !host.back() {
                    log::info!("back at root; closing");
                    break;
                }
            }
            Command::Tree => {}
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }
        write!(out, "{}", host.outline())?;
        out.flush()?;
    }
    Ok(())
}
