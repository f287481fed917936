//! Main menu.

use std::io::{BufRead, Write};

use tracing::info;

use super::Console;
use crate::error::SessionError;
use crate::session::Hub;

/// Offer the games until the human exits or input ends.
///
/// The hub outlives every visit, so the AI keeps what it learned when the
/// human leaves a game and comes back to it.
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    hub: &mut Hub,
) -> Result<(), SessionError> {
    loop {
        console.say("MAIN MENU:")?;
        console.say("1. Hexapawn")?;
        console.say("2. Tic Tac Toe")?;
        console.say("3. Exit")?;

        let choice = match console.prompt("Choose a game (1-3): ") {
            Ok(choice) => choice,
            Err(SessionError::InputClosed) => return Ok(()),
            Err(e) => return Err(e),
        };

        let outcome = match choice.trim() {
            "1" => hub.hexapawn.play(console).map(|_| ()),
            "2" => hub.tictactoe.play(console).map(|_| ()),
            "3" => {
                console.say("Goodbye!")?;
                return Ok(());
            }
            _ => console.say("Invalid input.\n"),
        };

        match outcome {
            Err(SessionError::InputClosed) => {
                info!("input closed mid-game");
                return Ok(());
            }
            other => other?,
        }
    }
}
