//! Interactive game session
//!
//! Connects the [`Game`] state machine to a line-oriented terminal and to the
//! dictionary, high-score and log files.

use super::config::GamePaths;
use super::state::{Game, Phase};
use crate::error::GameError;
use crate::output::messages::{self, BANNER, PROMPT, THE_END};
use crate::storage::{Clock, HighScoreStore, SessionLog, SystemClock};
use crate::wordlists::load_countries;
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// How a finished session went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// The secret, in original case
    pub secret: String,
    /// Attempts scored before the session ended
    pub attempts: u32,
    /// Terminal state reached
    pub end: Phase,
    /// Score written to the high-score file, if any
    pub new_best: Option<u32>,
    /// Log file written by this session
    pub log_path: PathBuf,
}

/// Drives one complete game against a terminal
pub struct GameSession<R, C = SystemClock> {
    paths: GamePaths,
    rng: R,
    clock: C,
}

impl<R: Rng> GameSession<R> {
    /// Session using the system clock
    pub fn new(paths: GamePaths, rng: R) -> Self {
        Self::with_clock(paths, rng, SystemClock)
    }
}

impl<R: Rng, C: Clock> GameSession<R, C> {
    pub const fn with_clock(paths: GamePaths, rng: R, clock: C) -> Self {
        Self { paths, rng, clock }
    }

    /// Play one game, reading guesses from `input` and writing the transcript to `output`
    ///
    /// The session log is closed on every exit path. `The end` is printed only
    /// when the game finished normally.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` if the dictionary is missing or empty, and
    /// `GameError::Io` or `GameError::Score` if the terminal, log file, or
    /// high-score file fails.
    ///
    /// # Examples
    /// ```no_run
    /// use lucky_vault::game::{GamePaths, GameSession};
    ///
    /// let mut session = GameSession::new(GamePaths::default(), rand::rng());
    /// let input = "Canada\nQUIT\n".as_bytes();
    /// let summary = session.run(input, std::io::stdout()).unwrap();
    /// println!("Finished after {} attempts", summary.attempts);
    /// ```
    #[instrument(skip_all, fields(countries = %self.paths.countries.display()))]
    pub fn run<I: BufRead, O: Write>(
        &mut self,
        mut input: I,
        mut output: O,
    ) -> Result<SessionSummary, GameError> {
        let dictionary = load_countries(&self.paths.countries)?;
        let secret = dictionary.choose(&mut self.rng)?;
        debug!(%secret, "Picked secret");

        let store = HighScoreStore::new(&self.paths.highscore);
        let best = store.read_best();

        say(&mut output, BANNER)?;
        say(&mut output, &messages::secret_length_line(secret.char_count()))?;
        say(&mut output, &messages::best_score_line(best))?;

        let mut log = SessionLog::create(&self.paths.logs, &secret, &self.clock)?;
        let mut game = Game::new(secret, best);
        let mut written_best = None;
        let mut line = String::new();

        while !game.phase().is_over() {
            write!(output, "{PROMPT}")
                .and_then(|()| output.flush())
                .map_err(|e| GameError::io("writing prompt", e))?;

            line.clear();
            let read = input
                .read_line(&mut line)
                .map_err(|e| GameError::io("reading guess", e))?;

            let turn = if read == 0 {
                debug!("Input closed");
                say(&mut output, "")?;
                game.close_input()
            } else {
                game.submit(strip_line_ending(&line))
            };
            let Some(turn) = turn else { break };

            debug!(logged = %turn.logged, outcome = %turn.outcome, "Guess classified");
            say(&mut output, &turn.feedback)?;
            log.log_guess(&turn.logged, turn.outcome)?;

            if let Some(score) = turn.new_best {
                say(&mut output, &messages::new_best_line())?;
                store.write_best(score)?;
                written_best = Some(score);
            }
        }

        let log_path = log.path().to_path_buf();
        log.close()?;
        say(&mut output, THE_END)?;

        info!(
            attempts = game.attempts(),
            end = ?game.phase(),
            "Session finished"
        );
        Ok(SessionSummary {
            secret: game.secret().text().to_string(),
            attempts: game.attempts(),
            end: game.phase(),
            new_best: written_best,
            log_path,
        })
    }
}

fn say<O: Write>(output: &mut O, line: &str) -> Result<(), GameError> {
    writeln!(output, "{line}").map_err(|e| GameError::io("writing to terminal", e))
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
