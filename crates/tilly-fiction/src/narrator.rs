//! Screens and prompts shown to the player.

use tilly_core::Location;

use crate::session::SessionSummary;

const RULE_WIDTH: usize = 50;

/// The banner on the title screen.
pub const TITLE: &str = "=== FINDING TILLY ===";
/// The line under the banner.
pub const INTRO: &str = "Oh no! Tilly is hiding somewhere!";
/// The prompt asking for the player's name.
pub const NAME_PROMPT: &str = "What's your name, brave explorer? ";
/// The prompt for each command.
pub const COMMAND_PROMPT: &str = "> ";
/// The prompt after the win screen.
pub const EXIT_PROMPT: &str = "Press Enter to exit...";

/// Greeting once the player has given their name.
pub fn welcome(player_name: &str) -> String {
    format!("Welcome, {player_name}! Let's find Tilly!")
}

/// The menu shown above the command prompt.
pub fn command_menu() -> &'static str {
    "\nWhat would you like to do?\n(go [place], take [item], hint, look, quit)"
}

/// Describe where the player stands: the place, its exits, anything lying
/// around, and what the player carries.
pub fn describe_location(location: &Location, inventory: &[String]) -> String {
    let mut lines = vec![
        format!("\n{}", "=".repeat(RULE_WIDTH)),
        format!("You are in the {}.", location.id),
        location.description.clone(),
        format!(
            "From here, you can go to: {}",
            location.connections.join(", ")
        ),
    ];

    if !location.items.is_empty() {
        lines.push(format!("You see: {}", location.items.join(", ")));
    }

    if inventory.is_empty() {
        lines.push("Your inventory is empty.".to_string());
    } else {
        lines.push(format!("Inventory: {}", inventory.join(", ")));
    }

    lines.join("\n")
}

/// The victory banner.
pub fn win_screen(summary: &SessionSummary) -> String {
    let rule = "*".repeat(RULE_WIDTH);
    [
        rule.clone(),
        format!("CONGRATULATIONS, {}!", summary.player_name),
        format!("You found Tilly in the {}!", summary.target_location),
        format!(
            "It took you {} moves and {} hints.",
            summary.moves, summary.hints
        ),
        rule,
    ]
    .join("\n")
}
