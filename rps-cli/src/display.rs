use comfy_table::{presets::UTF8_FULL, Table};
use rps_core::{OutcomeTable, RoundResult};
use std::io::{self, Write};

/// Help table, boxed for terminals or tab separated when `plain`
pub fn render_table(table: &OutcomeTable, plain: bool) -> String {
    if plain {
        return table.to_string();
    }

    let mut header = vec!["Move".to_string()];
    header.extend(table.labels().iter().cloned());

    let mut out = Table::new();
    out.load_preset(UTF8_FULL);
    out.set_header(header);

    for (label, row) in table.labels().iter().zip(table.rows()) {
        let mut cells = vec![label.clone()];
        cells.extend(row.iter().map(|outcome| outcome.to_string()));
        out.add_row(cells);
    }

    format!("{}\n", out)
}

pub fn print_result<W: Write>(out: &mut W, result: &RoundResult) -> io::Result<()> {
    writeln!(out, "Your move: {}", result.user_move)?;
    writeln!(out, "Computer move: {}", result.computer_move)?;
    writeln!(out, "{}", result.outcome.verdict())?;
    writeln!(out, "HMAC key: {}", result.key)?;
    Ok(())
}
