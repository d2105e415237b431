use contracts::shared::table::RenderedTable;

const ACTIONS_HEADER: &str = "Ações";
const SEPARATOR: &str = " | ";

/// Plain-text rendering of a table page for the terminal.
///
/// Column widths are measured in characters so accented labels line up.
pub fn render_text_table(table: &RenderedTable) -> String {
    let mut header: Vec<String> = table
        .columns
        .iter()
        .map(|column| format!("{}{}", column.label, column.sort_indicator))
        .collect();
    header.push(ACTIONS_HEADER.to_string());

    let body: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            let mut cells = row.cells.clone();
            cells.push(
                row.actions
                    .iter()
                    .map(|action| action.label())
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format_line(&header, &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &body {
        lines.push(format_line(row, &widths));
    }
    lines.join("\n")
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
        .trim_end()
        .to_string()
}
