//! Bordered table rendering.
//!
//! ```text
//! +------+------------+
//! | NAME | PROFESSION |
//! +------+------------+
//! | Anna | Writer     |
//! +------+------------+
//! ```
//!
//! Headers are upper-cased and centered. Numeric cells are right aligned,
//! everything else left aligned. Long cells wrap at word boundaries.

use std::fmt::Write;

use lingo_ir::StringLookup;

use super::Dictionary;

/// Cells wider than this wrap onto several lines.
const WRAP_WIDTH: usize = 30;

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

impl Dictionary {
    /// Render as a bordered table with a line between rows.
    pub fn render_table<L: StringLookup + ?Sized>(&self, lookup: &L) -> String {
        let headers: Vec<String> = self.headers.iter().map(|h| title(h)).collect();

        let rows: Vec<Vec<Vec<String>>> = (0..self.row_count())
            .map(|row| {
                self.headers
                    .iter()
                    .map(|h| {
                        self.column(h)
                            .and_then(|column| column.get(row))
                            .map(|value| wrap(&value.render(lookup)))
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| width(h)).collect();
        for row in &rows {
            for (col, cell) in row.iter().enumerate() {
                let cell_width = cell.iter().map(|line| width(line)).max().unwrap_or(0);
                widths[col] = widths[col].max(cell_width);
            }
        }

        let border = border(&widths);
        let mut out = String::new();
        out.push_str(&border);

        let header_cells: Vec<Vec<String>> = headers.into_iter().map(|h| vec![h]).collect();
        write_row(&mut out, &header_cells, &widths, |_| Align::Center);
        out.push_str(&border);

        for row in &rows {
            write_row(&mut out, row, &widths, |cell| {
                if is_numeric(cell) {
                    Align::Right
                } else {
                    Align::Left
                }
            });
            out.push_str(&border);
        }
        out
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

/// `first_name` becomes `FIRST NAME`.
fn title(header: &str) -> String {
    let spaced = header.replace('_', " ");
    let trimmed = spaced.trim();
    if trimmed.is_empty() && !header.is_empty() {
        return " ".to_string();
    }
    trimmed.to_uppercase()
}

/// `^[-+]?[0-9]*\.?[0-9]+$`
fn is_numeric(cell: &str) -> bool {
    let unsigned = cell.strip_prefix(['-', '+']).unwrap_or(cell);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => ("", unsigned),
    };
    !frac_part.is_empty()
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.bytes().all(|b| b.is_ascii_digit())
}

/// Split a cell into lines no wider than [`WRAP_WIDTH`] where possible.
fn wrap(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        if width(raw_line) <= WRAP_WIDTH {
            lines.push(raw_line.to_string());
            continue;
        }
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            if !current.is_empty() && width(&current) + 1 + width(word) > WRAP_WIDTH {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for &w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn write_row(out: &mut String, cells: &[Vec<String>], widths: &[usize], align: impl Fn(&str) -> Align) {
    let height = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);
    for line in 0..height {
        out.push('|');
        for (cell, &w) in cells.iter().zip(widths) {
            let text = cell.get(line).map_or("", String::as_str);
            let _ = write!(out, " {} |", pad(text, w, align(text)));
        }
        out.push('\n');
    }
}

fn pad(text: &str, width_to: usize, align: Align) -> String {
    let gap = width_to.saturating_sub(width(text));
    let (left, right) = match align {
        Align::Left => (0, gap),
        Align::Right => (gap, 0),
        Align::Center => (gap / 2, gap - gap / 2),
    };
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric() {
        for cell in ["1", "-12", "+3", "0.5", ".5", "12.25"] {
            assert!(is_numeric(cell), "{cell}");
        }
        for cell in ["", "1,2", "1.", "abc", "-", "1e3", "1.2.3"] {
            assert!(!is_numeric(cell), "{cell}");
        }
    }

    #[test]
    fn test_title() {
        assert_eq!(title("first_name"), "FIRST NAME");
        assert_eq!(title(":optiona"), ":OPTIONA");
        assert_eq!(title("_"), " ");
    }

    #[test]
    fn test_wrap_long_cell() {
        let text = "Declare variable a and bind it to the result yielded by expression b";
        let lines = wrap(text);
        assert!(lines.iter().all(|line| width(line) <= WRAP_WIDTH));
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_keeps_long_word() {
        let word = "x".repeat(40);
        assert_eq!(wrap(&word), vec![word]);
    }

    #[test]
    fn test_pad_center_favors_right() {
        assert_eq!(pad("ab", 5, Align::Center), " ab  ");
        assert_eq!(pad("7", 3, Align::Right), "  7");
    }
}
