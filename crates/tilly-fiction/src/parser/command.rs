//! Command parsing for player input.

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Go to a neighboring location.
    Go {
        /// The destination as typed (lower-cased, trimmed).
        target: String,
    },
    /// Pick up an item.
    Take {
        /// The item as typed (lower-cased, trimmed).
        item: String,
    },
    /// Look around again.
    Look,
    /// Ask where Tilly might be.
    Hint,
    /// Quit the game.
    Quit,
    /// Unknown command.
    Unknown {
        /// The normalized input.
        input: String,
    },
}

const GO_PREFIX: &str = "go ";
const TAKE_PREFIX: &str = "take ";

/// Parse a player input string into a command.
///
/// Input is lower-cased and trimmed first. Verbs must match exactly; there
/// are no synonyms or abbreviations.
pub fn parse_command(input: &str) -> Command {
    let input = input.to_lowercase();
    let input = input.trim();

    match input {
        "quit" => return Command::Quit,
        "look" => return Command::Look,
        "hint" => return Command::Hint,
        _ => {}
    }

    if let Some(rest) = input.strip_prefix(GO_PREFIX) {
        return Command::Go {
            target: rest.trim().to_string(),
        };
    }
    if let Some(rest) = input.strip_prefix(TAKE_PREFIX) {
        return Command::Take {
            item: rest.trim().to_string(),
        };
    }

    Command::Unknown {
        input: input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_verbs() {
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("look"), Command::Look);
        assert_eq!(parse_command("hint"), Command::Hint);
    }

    #[test]
    fn parse_is_case_insensitive_and_trimmed() {
        assert_eq!(parse_command("  QUIT \n"), Command::Quit);
        assert_eq!(parse_command("Hint"), Command::Hint);
        assert_eq!(
            parse_command("  Go Kitchen  "),
            Command::Go {
                target: "kitchen".to_string()
            }
        );
    }

    #[test]
    fn parse_go() {
        assert_eq!(
            parse_command("go dining_room"),
            Command::Go {
                target: "dining_room".to_string()
            }
        );
        assert_eq!(
            parse_command("go    garden"),
            Command::Go {
                target: "garden".to_string()
            }
        );
    }

    #[test]
    fn parse_take() {
        assert_eq!(
            parse_command("take map"),
            Command::Take {
                item: "map".to_string()
            }
        );
        assert_eq!(
            parse_command("TAKE   Shovel"),
            Command::Take {
                item: "shovel".to_string()
            }
        );
    }

    #[test]
    fn no_abbreviations_or_synonyms() {
        for input in ["q", "l", "exit", "walk garden", "get map", "hints", "looking"] {
            assert!(
                matches!(parse_command(input), Command::Unknown { .. }),
                "{input} should not parse"
            );
        }
    }

    #[test]
    fn verb_without_argument_is_unknown() {
        assert_eq!(
            parse_command("go"),
            Command::Unknown {
                input: "go".to_string()
            }
        );
        assert_eq!(
            parse_command("take   "),
            Command::Unknown {
                input: "take".to_string()
            }
        );
        assert_eq!(
            parse_command("gogarden"),
            Command::Unknown {
                input: "gogarden".to_string()
            }
        );
    }

    #[test]
    fn empty_input_is_unknown() {
        assert_eq!(
            parse_command("   "),
            Command::Unknown {
                input: String::new()
            }
        );
    }
}
