use std::io::{self, Write};

/// Reads one line, without its line ending. `None` once stdin is closed.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let end = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(end);
    Ok(Some(line))
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    NewRound,
    Hint,
    Clue,
    /// Everything after the command word, untouched
    Guess(&'a str),
    Help,
    Quit,
    Nothing,
    Unknown(&'a str),
}

pub fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim_start();
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line, ""));
    match &command.to_lowercase()[..] {
        "" => Command::Nothing,
        "new" | "n" => Command::NewRound,
        "hint" | "h" => Command::Hint,
        "clue" | "c" => Command::Clue,
        "guess" | "g" => Command::Guess(rest),
        "help" | "?" => Command::Help,
        "exit" | "quit" | "q" => Command::Quit,
        _ => Command::Unknown(command),
    }
}
