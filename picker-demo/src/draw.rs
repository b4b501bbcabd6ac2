//! Draws a [`SelectorView`] as plain terminal lines.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use picker::{Dropdown, SelectorView};
use unicode_width::UnicodeWidthStr;

pub const STATUS_ROW: u16 = 1;
pub const INPUT_ROW: u16 = 2;
pub const DROPDOWN_TOP: u16 = 3;

const PROMPT: &str = "> ";

/// Dropdown line under terminal row `row`, if `row` is inside the panel.
pub fn dropdown_line(view: &SelectorView, row: u16) -> Option<usize> {
    let dropdown = view.dropdown.as_ref()?;
    let line = usize::from(row.checked_sub(DROPDOWN_TOP)?);
    (line < dropdown.row_count()).then_some(line)
}

pub fn draw(out: &mut impl Write, view: &SelectorView, focused: bool, status: &str) -> io::Result<()> {
    queue!(
        out,
        Hide,
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print("Tab focuses, type to filter, click a row to pick, Esc quits"),
        SetAttribute(Attribute::Reset),
        MoveTo(0, STATUS_ROW),
        Print(status),
        MoveTo(0, INPUT_ROW),
        Print(PROMPT),
    )?;

    if view.text.is_empty() {
        queue!(
            out,
            SetAttribute(Attribute::Dim),
            Print(&view.placeholder),
            SetAttribute(Attribute::Reset)
        )?;
    } else {
        queue!(out, Print(&view.text))?;
    }

    match &view.dropdown {
        Some(Dropdown::Suggestions(rows)) => {
            for (i, row) in rows.iter().enumerate() {
                let y = DROPDOWN_TOP.saturating_add(i as u16);
                queue!(
                    out,
                    MoveTo(2, y),
                    SetForegroundColor(Color::Blue),
                    Print(&row.label),
                    ResetColor
                )?;
            }
        }
        Some(Dropdown::NoMatches { label }) => {
            queue!(
                out,
                MoveTo(2, DROPDOWN_TOP),
                SetForegroundColor(Color::Red),
                Print(label),
                ResetColor
            )?;
        }
        None => {}
    }

    if focused {
        let column = PROMPT.width() + view.text.width();
        queue!(out, MoveTo(column as u16, INPUT_ROW), Show)?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker::SuggestionRow;

    fn view(dropdown: Option<Dropdown>) -> SelectorView {
        SelectorView {
            id: "__selector_0".to_string(),
            text: "al".to_string(),
            placeholder: "Enter a part of the name".to_string(),
            active: dropdown.is_some(),
            dropdown,
        }
    }

    #[test]
    fn test_dropdown_line_mapping() {
        let rows = vec![
            SuggestionRow {
                key: "a".to_string(),
                label: "Alice".to_string(),
            },
            SuggestionRow {
                key: "c".to_string(),
                label: "Alicia".to_string(),
            },
        ];
        let v = view(Some(Dropdown::Suggestions(rows)));
        assert_eq!(dropdown_line(&v, INPUT_ROW), None);
        assert_eq!(dropdown_line(&v, DROPDOWN_TOP), Some(0));
        assert_eq!(dropdown_line(&v, DROPDOWN_TOP + 1), Some(1));
        assert_eq!(dropdown_line(&v, DROPDOWN_TOP + 2), None);
        assert_eq!(dropdown_line(&view(None), DROPDOWN_TOP), None);
    }

    #[test]
    fn test_draw_writes_rows_and_placeholder() {
        let mut out = Vec::new();
        let v = view(Some(Dropdown::NoMatches {
            label: "No matching suggestions".to_string(),
        }));
        draw(&mut out, &v, true, "Selected: none").unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("No matching suggestions"));
        assert!(text.contains("Selected: none"));
        assert!(text.contains("> al"));
    }
}
