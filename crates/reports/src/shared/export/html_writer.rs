//! Printable HTML table, the path to PDF through the browser's print dialog

use std::fmt::Write as _;
use std::io::Write;

use contracts::shared::export::{ExportFormat, ExportTable};

use super::{ExportError, TableWriter};

const STYLE: &str = "\
body { font-family: sans-serif; font-size: 11px; }
h1 { font-size: 16px; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #999; padding: 2px 4px; text-align: left; }
thead { display: table-header-group; }
tfoot td { font-weight: bold; }
.page { page-break-after: always; }
.page:last-child { page-break-after: auto; }
.page-number { text-align: right; color: #666; }";

/// Splits rows into printed pages, each with its own header
#[derive(Debug, Clone, Copy)]
pub struct HtmlWriter {
    rows_per_page: usize,
}

impl HtmlWriter {
    /// `rows_per_page = 0` is treated as 1
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            rows_per_page: rows_per_page.max(1),
        }
    }

    fn render(&self, table: &ExportTable) -> String {
        let title = escape_html(&table.title);
        let mut html = String::new();

        let _ = writeln!(html, "<!DOCTYPE html>");
        let _ = writeln!(html, "<html lang=\"pt-BR\">");
        let _ = writeln!(
            html,
            "<head><meta charset=\"utf-8\"><title>{}</title><style>\n{}\n</style></head>",
            title, STYLE
        );
        let _ = writeln!(html, "<body>");

        let pages: Vec<&[Vec<String>]> = if table.rows.is_empty() {
            vec![table.rows.as_slice()]
        } else {
            table.rows.chunks(self.rows_per_page).collect()
        };
        let page_count = pages.len();

        for (index, rows) in pages.into_iter().enumerate() {
            let _ = writeln!(html, "<section class=\"page\">");
            let _ = writeln!(html, "<h1>{}</h1>", title);
            let _ = writeln!(html, "<table>");
            self.render_colgroup(table, &mut html);
            self.render_head(table, &mut html);

            let _ = writeln!(html, "<tbody>");
            for row in rows {
                render_row(row, &mut html);
            }
            let _ = writeln!(html, "</tbody>");

            if index + 1 == page_count {
                if let Some(totals) = &table.totals {
                    let _ = writeln!(html, "<tfoot>");
                    render_row(totals, &mut html);
                    let _ = writeln!(html, "</tfoot>");
                }
            }

            let _ = writeln!(html, "</table>");
            let _ = writeln!(
                html,
                "<p class=\"page-number\">Página {} de {}</p>",
                index + 1,
                page_count
            );
            let _ = writeln!(html, "</section>");
        }

        let _ = writeln!(html, "</body>");
        let _ = writeln!(html, "</html>");
        html
    }

    fn render_colgroup(&self, table: &ExportTable, html: &mut String) {
        if table.columns.iter().all(|c| c.width.is_none()) {
            return;
        }
        let _ = write!(html, "<colgroup>");
        for column in &table.columns {
            match column.width {
                Some(width) => {
                    let _ = write!(html, "<col style=\"width: {}px\">", width);
                }
                None => html.push_str("<col>"),
            }
        }
        let _ = writeln!(html, "</colgroup>");
    }

    fn render_head(&self, table: &ExportTable, html: &mut String) {
        let _ = write!(html, "<thead><tr>");
        for label in table.headers() {
            let _ = write!(html, "<th>{}</th>", escape_html(label));
        }
        let _ = writeln!(html, "</tr></thead>");
    }
}

fn render_row(cells: &[String], html: &mut String) {
    let _ = write!(html, "<tr>");
    for cell in cells {
        let _ = write!(html, "<td>{}</td>", escape_html(cell));
    }
    let _ = writeln!(html, "</tr>");
}

/// Escapes text for element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

impl TableWriter for HtmlWriter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Html
    }

    fn write_table(&self, table: &ExportTable, out: &mut dyn Write) -> Result<(), ExportError> {
        out.write_all(self.render(table).as_bytes())?;
        Ok(())
    }
}
