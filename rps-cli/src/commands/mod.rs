use crate::config::CliConfig;
use crate::display::{print_result, render_table};
use crate::menu::{select_move, LineSource, PromptMode, ReaderLines, Selection, TerminalPrompt};
use anyhow::Context;
use rps_core::{verify_tag, HmacKey, MoveSet, Round, RoundResult};
use std::io::{self, IsTerminal, Write};

pub fn play(moves: Vec<String>, config: &CliConfig) -> anyhow::Result<()> {
    let moves = MoveSet::new(moves)?;
    let mut round = Round::new(moves)?;

    let stdout = io::stdout();
    let mode = PromptMode::detect(io::stdin().is_terminal(), io::stderr().is_terminal());
    tracing::debug!("Prompt mode {:?}", mode);

    let result = match mode {
        PromptMode::Terminal => {
            run_round(&mut round, &mut TerminalPrompt, &mut stdout.lock(), config)?
        }
        PromptMode::Lines => {
            let mut source = ReaderLines::new(io::stdin().lock(), io::stdout());
            run_round(&mut round, &mut source, &mut stdout.lock(), config)?
        }
    };

    if let (Some(result), true) = (result, config.json) {
        println!("{}", result.to_json()?);
    }

    Ok(())
}

/// Commit, prompt, reveal. Returns `None` when the human exits.
pub fn run_round<L: LineSource, W: Write>(
    round: &mut Round,
    source: &mut L,
    out: &mut W,
    config: &CliConfig,
) -> anyhow::Result<Option<RoundResult>> {
    // must be shown before the human is asked for a move
    writeln!(out, "HMAC: {}", round.commitment_tag())?;

    let table = round.moves().outcome_table();
    let selection = select_move(source, out, round.moves(), || {
        render_table(&table, config.plain)
    })
    .context("Failed to read move selection")?;

    let index = match selection {
        Selection::Move(index) => index,
        Selection::Exit => {
            writeln!(out, "Goodbye!")?;
            tracing::info!("Round {} abandoned", round.id());
            return Ok(None);
        }
        Selection::Help => unreachable!("select_move handles help itself"),
    };

    let result = round.play(index)?;
    print_result(out, &result)?;
    out.flush()?;

    Ok(Some(result))
}

pub fn show_table(moves: Vec<String>, config: &CliConfig) -> anyhow::Result<()> {
    let moves = MoveSet::new(moves)?;
    print!("{}", render_table(&moves.outcome_table(), config.plain));
    Ok(())
}

/// Check a revealed key against a published tag. Returns whether it matched.
pub fn verify(key_hex: &str, label: &str, hmac: &str) -> anyhow::Result<bool> {
    let key = HmacKey::from_hex(key_hex)?;
    let matched = verify_tag(&key, label, hmac);

    if matched {
        println!("Verified: HMAC matches move '{}'", label);
    } else {
        println!("Mismatch: HMAC does not match move '{}' under this key", label);
    }

    Ok(matched)
}
