//! Interactive command parsing.

use rota_core::{FieldRole, TravelMode};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace a field's text and look up suggestions
    Type { role: FieldRole, text: String },
    /// Choose a suggestion (0-based)
    Pick { role: FieldRole, index: usize },
    Mode(TravelMode),
    Go,
    Steps,
    /// Toggle a step (0-based)
    Done(usize),
    Next,
    Logout,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  origin <text>             set origin and show suggestions
  destination <text>        set destination and show suggestions
  pick origin|destination N choose suggestion N
  mode driving|cycling|walking
  go                        compute the route
  steps                     show every step
  done N                    mark step N done (again to undo)
  next                      mark the current step done
  logout                    sign out
  quit";

/// Parse one input line. Numbers shown to the user are 1-based.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "origin" | "from" => Ok(Command::Type {
            role: FieldRole::Origin,
            text: rest.to_string(),
        }),
        "destination" | "to" => Ok(Command::Type {
            role: FieldRole::Destination,
            text: rest.to_string(),
        }),
        "pick" => {
            let (role, number) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "usage: pick origin|destination N".to_string())?;
            Ok(Command::Pick {
                role: role.parse()?,
                index: parse_position(number)?,
            })
        }
        "mode" => Ok(Command::Mode(rest.parse()?)),
        "go" | "route" => Ok(Command::Go),
        "steps" | "list" => Ok(Command::Steps),
        "done" | "toggle" => Ok(Command::Done(parse_position(rest)?)),
        "next" => Ok(Command::Next),
        "logout" => Ok(Command::Logout),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err("empty command".to_string()),
        other => Err(format!("unknown command '{}' (try 'help')", other)),
    }
}

fn parse_position(text: &str) -> Result<usize, String> {
    match text.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("expected a number from 1, got '{}'", text.trim())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_text() {
        assert_eq!(
            parse_command("origin  Praça da Sé, São Paulo "),
            Ok(Command::Type {
                role: FieldRole::Origin,
                text: "Praça da Sé, São Paulo".to_string()
            })
        );
        assert_eq!(
            parse_command("to"),
            Ok(Command::Type {
                role: FieldRole::Destination,
                text: String::new()
            })
        );
    }

    #[test]
    fn numbers_are_one_based() {
        assert_eq!(parse_command("done 1"), Ok(Command::Done(0)));
        assert_eq!(
            parse_command("pick destination 3"),
            Ok(Command::Pick {
                role: FieldRole::Destination,
                index: 2
            })
        );
        assert!(parse_command("done 0").is_err());
        assert!(parse_command("done x").is_err());
        assert!(parse_command("pick origin").is_err());
    }

    #[test]
    fn parses_simple_verbs() {
        assert_eq!(parse_command("mode walking"), Ok(Command::Mode(TravelMode::Walking)));
        assert_eq!(parse_command("GO"), Ok(Command::Go));
        assert_eq!(parse_command("next"), Ok(Command::Next));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert!(parse_command("mode plane").is_err());
        assert!(parse_command("fly").is_err());
        assert!(parse_command("   ").is_err());
    }
}
