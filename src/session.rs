//! Interactive session
//!
//! Owns everything that lives for one process run: the console, the RNG,
//! the scoreboard and its store. Round rules come from `sim`; this module
//! only turns them into prompts and messages.

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::console::Console;
use crate::error::{Error, Result};
use crate::highscores::{Attempts, Level, ScoreRecord, Scoreboard, validate_name};
use crate::persistence::ScoreStore;
use crate::settings::Settings;
use crate::sim::{Feedback, Preset, RoundPhase, RoundState, submit_guess};

const INVALID_NUMBER: &str = "Invalid input. Please enter a number.";

/// What happened during a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds that reached Won or Lost
    pub rounds_played: usize,
    /// Rounds that made it onto the scoreboard
    pub rounds_recorded: usize,
    /// Whether the scoreboard was written successfully
    pub saved: bool,
    pub scoreboard_shown: bool,
}

pub struct Session<R, W> {
    console: Console<R, W>,
    store: ScoreStore,
    scoreboard: Scoreboard,
    rng: Pcg32,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session, loading prior scores from the configured file
    pub fn new(settings: &Settings, seed: u64, input: R, output: W) -> Self {
        let store = ScoreStore::new(&settings.score_file);
        let scoreboard = store.load(settings.capacity);
        log::info!("Session seeded with {}", seed);
        Self {
            console: Console::new(input, output),
            store,
            scoreboard,
            rng: Pcg32::seed_from_u64(seed),
            clear_screen: settings.clear_screen,
        }
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run the whole session: name, rounds, save, optional scoreboard.
    ///
    /// Closed input ends play early; finished rounds are still saved.
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        let played = self.play(&mut summary);
        summary.saved = self.save()?;

        match played {
            Ok(()) => match self.offer_scoreboard() {
                Ok(shown) => summary.scoreboard_shown = shown,
                Err(Error::InputClosed) => log::info!("Input closed at scoreboard prompt"),
                Err(e) => return Err(e),
            },
            Err(Error::InputClosed) => {
                log::info!(
                    "Input closed, ending session after {} rounds",
                    summary.rounds_played
                );
            }
            Err(e) => return Err(e),
        }

        self.console.println("Thanks for Playing! Goodbye!")?;
        self.console.println("Developed by: Vamsi T")?;
        Ok(summary)
    }

    fn play(&mut self, summary: &mut SessionSummary) -> Result<()> {
        let player = self.ask_name()?;

        loop {
            let (level, result) = self.play_round(&player)?;
            summary.rounds_played += 1;

            let record = ScoreRecord::new(player.as_str(), level, result)?;
            if self.scoreboard.push(record) {
                summary.rounds_recorded += 1;
            } else {
                log::warn!(
                    "Scoreboard at capacity ({}), dropping result",
                    self.scoreboard.capacity()
                );
                self.console
                    .println("Scoreboard is full, cannot record more games.")?;
            }

            if !self
                .console
                .prompt_yes_no("\nDo you want to play again? (y/n): ")?
            {
                return Ok(());
            }
        }
    }

    fn ask_name(&mut self) -> Result<String> {
        self.console.println("To START Game")?;
        loop {
            let name = self.console.prompt("Enter your name: ")?;
            match validate_name(&name) {
                Ok(()) => return Ok(name),
                Err(e) => self.console.println(&format!("{}. Please try again.", e))?,
            }
        }
    }

    fn show_menu(&mut self, player: &str) -> Result<()> {
        if self.clear_screen {
            self.console.clear_screen()?;
        }
        self.console
            .println("===========================================")?;
        self.console.println(" Welcome to the Number Guessing Game!")?;
        self.console
            .println("===========================================")?;
        self.console.println(&format!("Hello, {}!", player))?;
        self.console.println("\nSelect Difficulty Level:")?;
        for (i, preset) in [Preset::EASY, Preset::MEDIUM, Preset::HARD]
            .iter()
            .enumerate()
        {
            self.console.println(&format!(
                "{}. {:<6} ({})",
                i + 1,
                preset.level.as_str(),
                preset.describe()
            ))?;
        }
        Ok(())
    }

    /// Play one round to completion
    fn play_round(&mut self, player: &str) -> Result<(Level, Attempts)> {
        self.show_menu(player)?;

        let choice = self.console.prompt("Enter choice (1-3): ")?;
        let (preset, defaulted) = Preset::from_choice(choice.parse().ok());
        if defaulted {
            log::warn!("Invalid difficulty choice {:?}", choice);
            self.console.println("Invalid level. Defaulting to Medium.")?;
        }

        let mut round = RoundState::new(preset, &mut self.rng);
        log::debug!("Round started at {}", preset.level);

        let message = format!("\nGuess a number (1 to {}): ", preset.max_range);
        loop {
            let guess = self.console.prompt_number(&message, INVALID_NUMBER)?;
            let outcome = submit_guess(&mut round, guess)?;

            match outcome.feedback {
                Feedback::TooLow => self.console.println("Too low! Try again.")?,
                Feedback::TooHigh => self.console.println("Too high! Try again.")?,
                Feedback::Correct => self.console.println(&format!(
                    "\n🎉 Correct! You guessed it in {} attempts!",
                    round.attempts
                ))?,
            }

            if outcome.phase == RoundPhase::Lost {
                self.console.println(&format!(
                    "\n❌ Game Over! You've used all {} attempts.",
                    round.attempts
                ))?;
                self.console
                    .println(&format!("The correct number was: {}", round.target))?;
            }

            if let Some(result) = round.result() {
                log::info!("Round finished at {}: {}", preset.level, result);
                return Ok((preset.level, result));
            }
        }
    }

    /// Persist the scoreboard; a failed write is reported, not fatal
    fn save(&mut self) -> Result<bool> {
        match self.store.save(self.scoreboard.entries()) {
            Ok(()) => Ok(true),
            Err(e) => {
                log::error!(
                    "Failed to save scoreboard to {}: {}",
                    self.store.path().display(),
                    e
                );
                self.console.println("Error: could not save scoreboard.")?;
                Ok(false)
            }
        }
    }

    fn offer_scoreboard(&mut self) -> Result<bool> {
        if !self
            .console
            .prompt_yes_no("\nWould you like to see the scoreboard? (y/n): ")?
        {
            return Ok(false);
        }
        let table = self.scoreboard.render_table();
        self.console.print(&table)?;
        Ok(true)
    }
}
