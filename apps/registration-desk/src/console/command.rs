use registration::Field;

/// One line of console input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace a field with the raw text that follows the keyword.
    Set(Field, String),
    ListShops,
    Submit,
    Clear,
    Back,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command '{0}', type 'help' for the list")]
pub struct UnknownCommand(pub String);

/// Parses a console line. Blank lines yield `Ok(None)`.
///
/// Keywords are case-insensitive. For field keywords everything after the
/// first run of whitespace is the raw value, passed on untrimmed at the end
/// so the sanitizer sees exactly what was typed.
///
/// # Errors
/// Returns [`UnknownCommand`] for an unrecognised keyword.
pub fn parse(line: &str) -> Result<Option<Command>, UnknownCommand> {
    let line = line.trim_start();
    if line.trim_end().is_empty() {
        return Ok(None);
    }
    let (keyword, rest) = match line.find(char::is_whitespace) {
        Some(at) => (&line[..at], line[at..].trim_start()),
        None => (line, ""),
    };
    let rest = rest.trim_end_matches(['\r', '\n']);

    let field = |field: Field| -> Result<Option<Command>, UnknownCommand> {
        Ok(Some(Command::Set(field, rest.to_owned())))
    };
    match keyword.to_ascii_lowercase().as_str() {
        "surname" | "s" => field(Field::Surname),
        "name" | "n" => field(Field::FirstName),
        "phone" | "p" => field(Field::Phone),
        "shop" => field(Field::Shop),
        "shops" => Ok(Some(Command::ListShops)),
        "submit" => Ok(Some(Command::Submit)),
        "clear" => Ok(Some(Command::Clear)),
        "back" => Ok(Some(Command::Back)),
        "help" | "?" => Ok(Some(Command::Help)),
        "quit" | "exit" => Ok(Some(Command::Quit)),
        _ => Err(UnknownCommand(keyword.to_owned())),
    }
}
