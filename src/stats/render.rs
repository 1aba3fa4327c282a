use super::aggregate::{Column, ColumnWidths, Report};

/// Header line followed by one line per author, in report order.
pub fn render(report: &Report) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.authors.len() + 1);
    lines.push(render_line(&report.widths, |column| column.label().to_string()));
    for record in &report.authors {
        lines.push(render_line(&report.widths, |column| column.cell(record)));
    }
    lines
}

fn render_line(widths: &ColumnWidths, cell: impl Fn(Column) -> String) -> String {
    let mut line = String::new();
    for column in Column::ALL {
        let width = widths.get(column) + 1;
        let text = cell(column);
        if column == Column::Name {
            line.push_str(&format!("{text:<width$} "));
        } else {
            line.push_str(&format!("{text:>width$} "));
        }
    }
    line
}
