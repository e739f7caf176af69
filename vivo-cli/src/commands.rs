//! Slash commands shared by the TUI and the line mode

/// Parse a slash command
pub fn parse_command(input: &str) -> CommandResult {
    let cmd = input.trim().trim_start_matches('/');
    let mut parts = cmd.split_whitespace();
    let name = parts.next().unwrap_or("").to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();

    match name.as_str() {
        "" => CommandResult::None,

        "help" | "?" => CommandResult::ShowHelp,

        "quick" | "q" => match args.first() {
            None => CommandResult::ListQuick,
            Some(arg) => match arg.parse::<usize>() {
                Ok(number) => CommandResult::Quick(number),
                Err(_) => CommandResult::InvalidQuick(arg.to_string()),
            },
        },

        "exit" | "quit" | "bye" => CommandResult::Exit,

        _ => CommandResult::Unknown(name),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    None,
    ShowHelp,
    ListQuick,
    Quick(usize),
    InvalidQuick(String),
    Exit,
    Unknown(String),
}
