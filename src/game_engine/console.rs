//! Terminal collaborators: a presenter that writes styled text and a guess
//! input that reads lines. Both are generic over their streams so tests can
//! use in-memory buffers.

use std::io::{self, BufRead, Write};

use crossterm::style::{Color, Stylize};
use tracing::warn;

use crate::game_engine::{
    events::{GameEvent, GuessInput, Presenter},
    gallows,
    models::Difficulty,
    round::PLACEHOLDER,
    sources::QuestionSource,
};

/// Wrap `text` in ANSI color codes when `enabled`.
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

/// A gallows drawing with the figure's strokes in red.
pub fn paint_gallows(drawing: &str, enabled: bool) -> String {
    if !enabled {
        return drawing.to_string();
    }
    drawing
        .chars()
        .map(|c| match c {
            'O' | '|' | '/' | '\\' => c.with(Color::Red).to_string(),
            _ => c.to_string(),
        })
        .collect()
}

pub struct ConsolePresenter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W, color: bool) -> Self {
        ConsolePresenter { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_cells(&self, cells: &[Option<char>]) -> String {
        let placeholder = paint(&PLACEHOLDER.to_string(), Color::Yellow, self.color);
        cells
            .iter()
            .map(|cell| cell.map_or_else(|| placeholder.clone(), String::from))
            .collect()
    }

    fn format(&self, event: &GameEvent<'_>) -> String {
        match event {
            GameEvent::TierStarted { difficulty, questions } => {
                format!("\nStarting {difficulty} Level ({questions} Questions)")
            }
            GameEvent::QuestionAsked { number, prompt } => format!("\nQuestion {number}: {prompt}"),
            GameEvent::Word { cells } => format!("Current word: {}", self.render_cells(cells)),
            GameEvent::InvalidGuess => paint(
                "Invalid input! Please enter a single letter (A-Z).",
                Color::Red,
                self.color,
            ),
            GameEvent::DuplicateGuess { letter } => paint(
                &format!("You already guessed '{letter}'. Try another letter."),
                Color::Red,
                self.color,
            ),
            GameEvent::CorrectGuess { letter } => paint(
                &format!("Correct! '{letter}' is in the word."),
                Color::Green,
                self.color,
            ),
            GameEvent::WrongGuess { letter, stage, remaining } => format!(
                "{}\n{}\nRemaining attempts: {remaining}",
                paint(&format!("'{letter}' is not in the word."), Color::Red, self.color),
                paint_gallows(gallows::drawing(*stage), self.color),
            ),
            GameEvent::RoundWon => "Well done! You guessed the word!".to_string(),
            GameEvent::RoundLost { answer } => {
                format!("Out of attempts! The correct word was: {answer}")
            }
            GameEvent::TierFinished { result } => format!(
                "\nYou got {} out of {} correct in the {} level!",
                result.correct_count,
                result.total_attempted,
                result.difficulty.label()
            ),
            GameEvent::TierFailed { difficulty } => {
                format!("\nYou did not score enough to complete the {} level.", difficulty.label())
            }
            GameEvent::AllTiersCleared => "\nCongratulations! You completed all levels!".to_string(),
            GameEvent::GameOver { total_score } => {
                format!("\nGame Over! Your total score is: {total_score}")
            }
        }
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn show(&mut self, event: &GameEvent<'_>) {
        let text = self.format(event);
        if let Err(err) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            warn!(%err, "failed to write game output");
        }
    }
}

/// Reads guesses line by line, writing a prompt before each read.
pub struct LineInput<R: BufRead, W: Write> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        LineInput { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> GuessInput for LineInput<R, W> {
    fn read_guess(&mut self) -> Option<String> {
        if let Err(err) = write!(self.prompt_out, "Guess a letter: ").and_then(|()| self.prompt_out.flush()) {
            warn!(%err, "failed to write guess prompt");
        }
        read_line(&mut self.reader)
    }
}

/// One line of input; `None` at end of input or on a read error.
fn read_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(err) => {
            warn!(%err, "failed to read input");
            None
        }
    }
}

/// Show the subject menu until a valid choice is entered. `None` when the
/// input closes first.
pub fn ask_source<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    color: bool,
) -> io::Result<Option<QuestionSource>> {
    loop {
        writeln!(out, "What programming language would you like to play?")?;
        for (i, source) in QuestionSource::ALL.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, paint(&source.to_string(), source.color(), color))?;
        }
        write!(out, "Enter the number corresponding to your choice: ")?;
        out.flush()?;

        let Some(line) = read_line(reader) else {
            return Ok(None);
        };
        if let Some(source) = QuestionSource::from_menu_choice(&line) {
            return Ok(Some(source));
        }
        let count = QuestionSource::ALL.len();
        writeln!(
            out,
            "{}",
            paint(
                &format!("Invalid choice. Please enter a number from 1 to {count} corresponding to the programming language."),
                Color::Red,
                color,
            )
        )?;
    }
}

/// Title line shown before a game starts.
pub fn banner(source: Option<QuestionSource>, color: bool) -> String {
    let difficulty_count = Difficulty::ALL.len();
    match source {
        Some(source) => format!(
            "Playing {} hangman across {difficulty_count} levels.",
            paint(&source.to_string(), source.color(), color)
        ),
        None => format!("Playing hangman across {difficulty_count} levels."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_engine::models::TierResult;
    use std::io::Cursor;

    fn plain(event: GameEvent<'_>) -> String {
        let mut presenter = ConsolePresenter::new(Vec::new(), false);
        presenter.show(&event);
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn word_renders_with_plain_placeholder() {
        let out = plain(GameEvent::Word {
            cells: vec![Some('p'), None, None, Some('h'), None, Some('n')],
        });
        assert_eq!(out, "Current word: p__h_n\n");
    }

    #[test]
    fn wrong_guess_includes_gallows_and_attempts() {
        let out = plain(GameEvent::WrongGuess { letter: 'q', stage: 6, remaining: 0 });
        assert!(out.contains("'q' is not in the word."));
        assert!(out.contains(gallows::STAGES[6]));
        assert!(out.ends_with("Remaining attempts: 0\n"));
    }

    #[test]
    fn tier_summary_uses_lowercase_label() {
        let out = plain(GameEvent::TierFinished {
            result: TierResult { difficulty: Difficulty::Medium, correct_count: 8, total_attempted: 10 },
        });
        assert!(out.contains("You got 8 out of 10 correct in the medium level!"));
    }

    #[test]
    fn color_wraps_text_in_escape_codes() {
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(paint("x", Color::Red, true).contains('\u{1b}'));
        }
        assert_eq!(paint("x", Color::Red, false), "x");
    }

    #[test]
    fn gallows_only_colors_figure_strokes() {
        assert_eq!(paint_gallows("O+=", false), "O+=");
        let colored = paint_gallows("+=", true);
        assert_eq!(colored, "+=");
    }

    #[test]
    fn menu_reprompts_until_valid_choice() {
        let mut reader = Cursor::new("9\nabc\n3\n");
        let mut out = Vec::new();
        let source = ask_source(&mut reader, &mut out, false).unwrap();

        assert_eq!(source, Some(QuestionSource::JavaScript));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Invalid choice.").count(), 2);
        assert!(text.contains("5. C#"));
    }

    #[test]
    fn banner_names_the_source() {
        assert_eq!(
            banner(Some(QuestionSource::Ruby), false),
            "Playing Ruby hangman across 3 levels."
        );
        assert_eq!(banner(None, false), "Playing hangman across 3 levels.");
    }

    #[test]
    fn menu_returns_none_when_input_closes() {
        let mut reader = Cursor::new("");
        let mut out = Vec::new();
        assert_eq!(ask_source(&mut reader, &mut out, false).unwrap(), None);
    }

    #[test]
    fn line_input_prompts_and_reads() {
        let mut input = LineInput::new(Cursor::new("a\nb\n"), Vec::new());
        assert_eq!(input.read_guess().as_deref(), Some("a\n"));
        assert_eq!(input.read_guess().as_deref(), Some("b\n"));
        assert_eq!(input.read_guess(), None);
    }
}
