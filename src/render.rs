use crate::collect::{BranchResult, Mode, Results};
use crate::filter::BranchFilter;
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellStyle {
    Plain,
    Current,
    Error,
}

#[derive(Debug)]
struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<(String, CellStyle)>>,
}

impl Table {
    fn new(headers: &[&str]) -> Self {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    fn push_row(&mut self, row: Vec<(String, CellStyle)>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, (text, _)) in row.iter().enumerate() {
                widths[i] = widths[i].max(text.width());
            }
        }
        widths
    }

    fn write(&self, out: &mut impl WriteColor) -> io::Result<()> {
        let widths = self.widths();
        let border = widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+");
        let border = format!("+{}+", border);

        writeln!(out, "{}", border)?;
        let header: Vec<_> = self
            .headers
            .iter()
            .map(|h| (h.clone(), CellStyle::Plain))
            .collect();
        write_row(out, &header, &widths, true)?;
        writeln!(out, "{}", border)?;
        for row in &self.rows {
            write_row(out, row, &widths, false)?;
        }
        writeln!(out, "{}", border)
    }
}

fn write_row(
    out: &mut impl WriteColor,
    row: &[(String, CellStyle)],
    widths: &[usize],
    header: bool,
) -> io::Result<()> {
    write!(out, "|")?;
    for ((text, style), width) in row.iter().zip(widths) {
        write!(out, " ")?;
        let mut spec = ColorSpec::new();
        match style {
            CellStyle::Current => {
                spec.set_fg(Some(Color::Green));
            }
            CellStyle::Error => {
                spec.set_fg(Some(Color::Red));
            }
            CellStyle::Plain => {}
        }
        spec.set_bold(header);
        out.set_color(&spec)?;
        write!(out, "{}", text)?;
        out.reset()?;
        let padding = width.saturating_sub(text.width());
        write!(out, "{} |", " ".repeat(padding))?;
    }
    writeln!(out)
}

/// Writes the results in name order, or the fallback line when there are none.
pub fn render(
    out: &mut impl WriteColor,
    results: &Results,
    mode: Mode,
    filter: &BranchFilter,
) -> io::Result<()> {
    if results.is_empty() {
        writeln!(out, "No branches found{}", filter.suffix())?;
        return out.flush();
    }

    match mode {
        Mode::Current => render_current(out, results, filter)?,
        Mode::All => render_all(out, results)?,
    }
    out.flush()
}

fn render_current(
    out: &mut impl WriteColor,
    results: &Results,
    filter: &BranchFilter,
) -> io::Result<()> {
    let mut table = Table::new(&["Repo", "Current Branch"]);

    for (repo, result) in results {
        let cell = match result {
            BranchResult::Branches(branches) => match branches.first() {
                Some(branch) => (branch.to_string(), CellStyle::Plain),
                None => (format!("No branches found{}", filter.suffix()), CellStyle::Plain),
            },
            BranchResult::Error(_) => ("Error retrieving branch".to_string(), CellStyle::Error),
            BranchResult::NotFound => continue,
        };
        table.push_row(vec![(repo.clone(), CellStyle::Plain), cell]);
    }

    table.write(out)
}

fn render_all(out: &mut impl WriteColor, results: &Results) -> io::Result<()> {
    for (repo, result) in results {
        let mut table = Table::new(&[repo.as_str()]);
        match result {
            BranchResult::Branches(branches) if !branches.is_empty() => {
                for branch in branches {
                    let style = if branch.current {
                        CellStyle::Current
                    } else {
                        CellStyle::Plain
                    };
                    table.push_row(vec![(branch.to_string(), style)]);
                }
            }
            BranchResult::Error(_) => table.push_row(vec![("Error".to_string(), CellStyle::Error)]),
            _ => continue,
        }
        table.write(out)?;
        writeln!(out)?;
    }
    Ok(())
}
