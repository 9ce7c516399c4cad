use crate::artifacts::table::columns::{
    CHANGES_HEADER, ColumnWidths, DIRECTORY_HEADER, FILE_NAME_HEADER, NUMBER_HEADER, RenderRow,
};
use colored::{Color, Colorize};
use std::io::Write;

const CHANGES_WIDTH: usize = 7;

/// Colour a table's rows are printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    /// Files present in both projects.
    Found,
    /// Files missing from the source project.
    Missing,
}

impl Highlight {
    pub fn color(self) -> Option<Color> {
        match self {
            Highlight::None => None,
            Highlight::Found => Some(Color::Red),
            Highlight::Missing => Some(Color::Yellow),
        }
    }

    fn paint(self, line: &str) -> String {
        match self.color() {
            Some(color) => line.color(color).to_string(),
            None => line.to_string(),
        }
    }
}

/// Writes `rows` as a box-drawn table, each row followed by its annotated diff.
pub fn render_table<W: Write + ?Sized>(
    writer: &mut W,
    rows: &[RenderRow],
    highlight: Highlight,
) -> std::io::Result<()> {
    let widths = ColumnWidths::from_rows(rows);

    writeln!(writer, "{}", border(&widths, '┌', '┬', '┐'))?;
    writeln!(
        writer,
        "│ {:<nw$} │ {:<dw$} │ {:<fw$} │ {:<cw$} │",
        NUMBER_HEADER,
        DIRECTORY_HEADER,
        FILE_NAME_HEADER,
        CHANGES_HEADER,
        nw = widths.number,
        dw = widths.directory,
        fw = widths.file_name,
        cw = CHANGES_WIDTH,
    )?;
    writeln!(writer, "{}", border(&widths, '├', '┼', '┤'))?;

    for row in rows {
        let line = format!(
            "│ {:<nw$} │ {:<dw$} │ {:<fw$} │ {:<cw$} │",
            row.number,
            row.directory,
            row.file_name,
            row.change_size,
            nw = widths.number,
            dw = widths.directory,
            fw = widths.file_name,
            cw = CHANGES_WIDTH,
        );
        writeln!(writer, "{}", highlight.paint(&line))?;
        writeln!(writer, "{}", row.annotated)?;
    }

    writeln!(writer, "{}", border(&widths, '└', '┴', '┘'))?;

    Ok(())
}

fn border(widths: &ColumnWidths, left: char, middle: char, right: char) -> String {
    let segments = [
        widths.number,
        widths.directory,
        widths.file_name,
        CHANGES_WIDTH,
    ]
    .iter()
    .map(|width| "─".repeat(width + 2))
    .collect::<Vec<_>>();

    format!("{left}{}{right}", segments.join(&middle.to_string()))
}
