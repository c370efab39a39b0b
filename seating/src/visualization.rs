use crate::Participant;

/// Names longer than this are cut for display.
pub const MAX_NAME_LENGTH: usize = 20;

/// How many tables are drawn next to each other by [`render_tables()`].
pub const TABLES_PER_ROW: usize = 5;

const ELLIPSIS: char = '…';

/// Shortens a name to at most [`MAX_NAME_LENGTH`] characters, ending in `…`
/// if it had to be cut.
pub fn shorten_name(name: &str) -> String {
    if name.chars().count() <= MAX_NAME_LENGTH {
        return String::from(name);
    }
    let mut result: String = name.chars().take(MAX_NAME_LENGTH - 1).collect();
    result.push(ELLIPSIS);
    result
}

fn table_lines(round: &[Participant], table_number: usize) -> Vec<String> {
    let seat_width = round.len().to_string().len();
    let name_width = MAX_NAME_LENGTH;
    let mut lines = vec![
        format!("Table {}", table_number),
        format!("╭{}┬{}╮", "─".repeat(seat_width + 2), "─".repeat(name_width + 2)),
        format!("│ {:>seat_width$} │ {:<name_width$} │", "№", "Player"),
        format!("├{}┼{}┤", "─".repeat(seat_width + 2), "─".repeat(name_width + 2)),
    ];
    for (seat, participant) in round.iter().enumerate() {
        lines.push(format!(
            "│ {:>seat_width$} │ {:<name_width$} │",
            seat + 1,
            shorten_name(participant.name())
        ));
    }
    lines.push(format!(
        "╰{}┴{}╯",
        "─".repeat(seat_width + 2),
        "─".repeat(name_width + 2)
    ));
    lines
}

/// Draws one table, with seats numbered from 1.
///
/// Columns are padded by character count. Names with double-width
/// characters such as CJK or emoji push the right border out of line.
pub fn render_table(round: &[Participant], table_number: usize) -> String {
    table_lines(round, table_number).join("\n")
}

/// Draws all tables, [`TABLES_PER_ROW`] of them next to each other.
pub fn render_tables(rounds: &[Vec<Participant>]) -> String {
    let mut rows = Vec::new();
    for (row_idx, chunk) in rounds.chunks(TABLES_PER_ROW).enumerate() {
        let tables: Vec<Vec<String>> = chunk
            .iter()
            .enumerate()
            .map(|(idx, round)| table_lines(round, row_idx * TABLES_PER_ROW + idx + 1))
            .collect();
        let widths: Vec<usize> = tables
            .iter()
            .map(|lines| lines.iter().map(|l| l.chars().count()).max().unwrap_or(0))
            .collect();
        let height = tables.iter().map(Vec::len).max().unwrap_or(0);

        let mut row = Vec::with_capacity(height);
        for line_idx in 0..height {
            let mut line = String::new();
            for (table, &width) in tables.iter().zip(&widths) {
                let part = table.get(line_idx).map(String::as_str).unwrap_or("");
                if !line.is_empty() {
                    line += "  ";
                }
                line += &format!("{:<width$}", part);
            }
            row.push(String::from(line.trim_end()));
        }
        rows.push(row.join("\n"));
    }
    rows.join("\n\n")
}
