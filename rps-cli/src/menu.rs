use dialoguer::Input;
use rps_core::{GameError, MoveSet};
use std::io::{self, BufRead, Write};

/// What the human picked at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 1-based move index
    Move(usize),
    Exit,
    Help,
}

pub const EXIT_ENTRY: &str = "0";
pub const HELP_ENTRY: &str = "?";

/// Parse one line of menu input for a set of `moves_len` moves
pub fn parse_selection(input: &str, moves_len: usize) -> rps_core::Result<Selection> {
    let input = input.trim();

    if input == HELP_ENTRY {
        return Ok(Selection::Help);
    }

    // plain digits only, no sign
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GameError::invalid_selection(format!(
            "'{}' is not a number",
            input
        )));
    }

    let index: usize = input
        .parse()
        .map_err(|_| GameError::invalid_selection(format!("'{}' is out of range", input)))?;

    match index {
        0 => Ok(Selection::Exit),
        i if i <= moves_len => Ok(Selection::Move(i)),
        i => Err(GameError::SelectionOutOfRange {
            index: i,
            max: moves_len,
        }),
    }
}

/// Source of prompt answers. `None` means input is closed.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// How the prompt reads its answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    Terminal,
    Lines,
}

impl PromptMode {
    /// dialoguer draws on stderr, so both stdin and stderr must be terminals
    pub fn detect(stdin_tty: bool, stderr_tty: bool) -> Self {
        if stdin_tty && stderr_tty {
            PromptMode::Terminal
        } else {
            PromptMode::Lines
        }
    }
}

/// Interactive prompt on a terminal
pub struct TerminalPrompt;

impl LineSource for TerminalPrompt {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
    }
}

/// Line reader for piped input
pub struct ReaderLines<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ReaderLines<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderLines<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

pub fn print_menu<W: Write>(out: &mut W, moves: &MoveSet) -> io::Result<()> {
    writeln!(out, "Available moves:")?;
    for (index, label) in moves.iter() {
        writeln!(out, "{} - {}", index, label)?;
    }
    writeln!(out, "{} - exit", EXIT_ENTRY)?;
    writeln!(out, "{} - help", HELP_ENTRY)?;
    Ok(())
}

/// Prompt until the human picks a move or exits.
///
/// `?` prints `help` and asks again, bad input prints an error and asks again.
/// Closed input counts as exit.
pub fn select_move<L, W, F>(
    source: &mut L,
    out: &mut W,
    moves: &MoveSet,
    help: F,
) -> io::Result<Selection>
where
    L: LineSource,
    W: Write,
    F: Fn() -> String,
{
    loop {
        print_menu(out, moves)?;
        out.flush()?;

        let Some(line) = source.read_line("Enter your move")? else {
            tracing::debug!("Input closed, treating as exit");
            return Ok(Selection::Exit);
        };

        match parse_selection(&line, moves.len()) {
            Ok(Selection::Help) => {
                writeln!(out, "Help table:")?;
                write!(out, "{}", help())?;
            }
            Ok(selection) => return Ok(selection),
            Err(e) => {
                tracing::debug!("Rejected selection: {}", e);
                writeln!(out, "Invalid move. Please try again.")?;
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Canned answers for menu tests
    pub(crate) struct ScriptedLines(pub VecDeque<String>);

    impl ScriptedLines {
        pub(crate) fn new(lines: &[&str]) -> Self {
            Self(lines.iter().map(|s| s.to_string()).collect())
        }
    }

    impl LineSource for ScriptedLines {
        fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
            Ok(self.0.pop_front())
        }
    }

    fn classic() -> MoveSet {
        MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap()
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("?", 3).unwrap(), Selection::Help);
        assert_eq!(parse_selection(" 2 \n", 3).unwrap(), Selection::Move(2));
        assert_eq!(parse_selection("0", 3).unwrap(), Selection::Exit);
        assert_eq!(parse_selection("3", 3).unwrap(), Selection::Move(3));

        assert!(matches!(
            parse_selection("abc", 3),
            Err(GameError::InvalidSelection(_))
        ));
        assert!(matches!(
            parse_selection("-1", 3),
            Err(GameError::InvalidSelection(_))
        ));
        assert!(matches!(
            parse_selection("4", 3),
            Err(GameError::SelectionOutOfRange { index: 4, max: 3 })
        ));
        assert!(parse_selection("", 3).is_err());
        assert!(matches!(
            parse_selection("+2", 3),
            Err(GameError::InvalidSelection(_))
        ));
        assert!(matches!(
            parse_selection("2abc", 3),
            Err(GameError::InvalidSelection(_))
        ));
        assert!(matches!(
            parse_selection("99999999999999999999999", 3),
            Err(GameError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_prompt_mode() {
        assert_eq!(PromptMode::detect(true, true), PromptMode::Terminal);
        // logs redirected away from the terminal
        assert_eq!(PromptMode::detect(true, false), PromptMode::Lines);
        assert_eq!(PromptMode::detect(false, true), PromptMode::Lines);
        assert_eq!(PromptMode::detect(false, false), PromptMode::Lines);
    }

    #[test]
    fn test_help_does_not_consume_turn() {
        let moves = classic();
        let mut source = ScriptedLines::new(&["?", "2"]);
        let mut out = Vec::new();

        let selection = select_move(&mut source, &mut out, &moves, || "TABLE\n".to_string()).unwrap();
        assert_eq!(selection, Selection::Move(2));

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Help table:\nTABLE\n"));
        assert_eq!(out.matches("Available moves:").count(), 2);
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let moves = classic();
        let mut source = ScriptedLines::new(&["rock", "9", "1"]);
        let mut out = Vec::new();

        let selection = select_move(&mut source, &mut out, &moves, String::new).unwrap();
        assert_eq!(selection, Selection::Move(1));

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Invalid move. Please try again.").count(), 2);
    }

    #[test]
    fn test_exit_and_closed_input() {
        let moves = classic();
        let mut out = Vec::new();

        let mut source = ScriptedLines::new(&["0"]);
        assert_eq!(
            select_move(&mut source, &mut out, &moves, String::new).unwrap(),
            Selection::Exit
        );

        let mut source = ScriptedLines::new(&[]);
        assert_eq!(
            select_move(&mut source, &mut out, &moves, String::new).unwrap(),
            Selection::Exit
        );
    }

    #[test]
    fn test_menu_listing() {
        let mut out = Vec::new();
        print_menu(&mut out, &classic()).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "Available moves:\n1 - Rock\n2 - Paper\n3 - Scissors\n0 - exit\n? - help\n"
        );
    }

    #[test]
    fn test_reader_lines() {
        let input = io::Cursor::new("2\n");
        let mut prompt = Vec::new();
        let mut source = ReaderLines::new(input, &mut prompt);

        assert_eq!(source.read_line("Enter your move").unwrap().as_deref(), Some("2\n"));
        assert_eq!(source.read_line("Enter your move").unwrap(), None);
        drop(source);
        assert_eq!(String::from_utf8(prompt).unwrap(), "Enter your move: Enter your move: ");
    }
}
