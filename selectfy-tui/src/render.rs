//! Turning controller state into styled screen lines.

use std::collections::HashMap;

use crossterm::style::Color;
use selectfy::{ChangeEvent, ItemSource, MarkedItems, SelectionController};
use unicode_width::UnicodeWidthChar;

use crate::source::Listing;

/// Rows above the first entry.
pub const HEADER_ROWS: u16 = 2;
/// Rows below the last entry.
pub const FOOTER_ROWS: u16 = 1;

/// Text style for one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Layer `other` on top of `self`.
    pub fn patch(self, other: Style) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            bold: self.bold || other.bold,
            dim: self.dim || other.dim,
            underline: self.underline || other.underline,
            reverse: self.reverse || other.reverse,
        }
    }
}

/// Named styles that mark classes resolve against.
#[derive(Debug, Clone)]
pub struct StyleTable {
    styles: HashMap<String, Style>,
}

impl Default for StyleTable {
    fn default() -> Self {
        let styles = [
            ("selected", Style::new().fg(Color::White).bg(Color::DarkBlue)),
            ("highlighted", Style::new().bold().underline()),
            ("reverse", Style::new().reverse()),
            ("bold", Style::new().bold()),
            ("underline", Style::new().underline()),
            ("accent", Style::new().fg(Color::Yellow).bold()),
            ("muted", Style::new().dim()),
        ]
        .into_iter()
        .map(|(name, style)| (name.to_string(), style))
        .collect();
        Self { styles }
    }
}

impl StyleTable {
    pub fn get(&self, name: &str) -> Option<Style> {
        self.styles.get(name).copied()
    }

    /// Known style names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.styles.keys().map(String::as_str).collect();
        names.sort();
        names
    }
}

/// One screen line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: Style,
}

impl Line {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Styles resolved for the two marks.
#[derive(Debug, Clone, Copy)]
pub struct MarkStyles {
    pub selected: Style,
    pub highlighted: Style,
}

/// Build the frame: title, entries, status bar.
pub fn frame(
    title: &str,
    listing: &Listing,
    controller: &SelectionController<MarkedItems<usize>>,
    marks: MarkStyles,
    status: &str,
    (width, height): (u16, u16),
) -> Vec<Line> {
    let width = width as usize;
    let mut lines = Vec::with_capacity(height as usize);

    lines.push(Line::new(truncate_to_width(title, width), Style::new().bold()));
    lines.push(Line::new(
        truncate_to_width(
            "click: select  ctrl: toggle  shift: range  ctrl+shift: highlight  ctrl+a: all  esc: none  q: quit",
            width,
        ),
        Style::new().dim(),
    ));

    let rows = height.saturating_sub(HEADER_ROWS + FOOTER_ROWS) as usize;
    for (i, entry) in listing.entries().iter().enumerate().take(rows) {
        let mut style = Style::new();
        let mut prefix = "  ";
        match listing.item_at(i) {
            Some(item) => {
                if controller.is_selected(item) {
                    style = style.patch(marks.selected);
                    prefix = "* ";
                }
                if controller.source().is_highlighted(item) {
                    style = style.patch(marks.highlighted);
                }
            }
            None => style = style.dim(),
        }
        let text = format!("{prefix}{}", entry.label);
        lines.push(Line::new(pad_to_width(&truncate_to_width(&text, width), width), style));
    }

    while lines.len() < height.saturating_sub(FOOTER_ROWS) as usize {
        lines.push(Line::new("", Style::new()));
    }
    lines.push(Line::new(
        pad_to_width(&truncate_to_width(status, width), width),
        Style::new().reverse(),
    ));
    lines
}

/// Status bar text for a change notification.
pub fn describe_change(event: &ChangeEvent, total: usize) -> String {
    format!("{} of {} selected", event.selected_count, total)
}

/// Entry index under screen row `y`, if the row shows an entry.
pub fn entry_at_row(y: u16, height: u16, entries: usize) -> Option<usize> {
    if y < HEADER_ROWS || y >= height.saturating_sub(FOOTER_ROWS) {
        return None;
    }
    let index = (y - HEADER_ROWS) as usize;
    (index < entries).then_some(index)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        result.push(c);
    }
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let used: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    let mut padded = s.to_string();
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Entry;
    use selectfy::{Modifiers, SelectConfig};

    fn fixture() -> (Listing, SelectionController<MarkedItems<usize>>) {
        let listing = Listing::new(
            vec![
                Entry::new("a").tag("s"),
                Entry::new("skip"),
                Entry::new("b").tag("s"),
            ],
            "s",
        );
        let controller = SelectionController::new(listing.items(), SelectConfig::default());
        (listing, controller)
    }

    fn marks() -> MarkStyles {
        let table = StyleTable::default();
        MarkStyles {
            selected: table.get("selected").unwrap(),
            highlighted: table.get("highlighted").unwrap(),
        }
    }

    #[test]
    fn test_frame_marks_rows() {
        let (listing, mut controller) = fixture();
        controller.handle_gesture(1, Modifiers::new()).unwrap();

        let lines = frame("t", &listing, &controller, marks(), "1 of 2 selected", (20, 8));

        assert_eq!(lines.len(), 8);
        assert!(lines[2].text.starts_with("  a"));
        assert!(lines[3].style.dim);
        assert!(lines[4].text.starts_with("* b"));
        assert_eq!(lines[4].style.bg, Some(Color::DarkBlue));
        assert!(lines[4].style.underline);
        assert!(lines[7].text.starts_with("1 of 2 selected"));
        assert!(lines.iter().skip(2).all(|l| l.text.chars().count() == 20 || l.text.is_empty()));
    }

    #[test]
    fn test_entry_at_row() {
        assert_eq!(entry_at_row(0, 10, 5), None);
        assert_eq!(entry_at_row(2, 10, 5), Some(0));
        assert_eq!(entry_at_row(6, 10, 5), Some(4));
        assert_eq!(entry_at_row(7, 10, 5), None);
        assert_eq!(entry_at_row(9, 10, 50), None);
    }

    #[test]
    fn test_truncate_wide_chars() {
        assert_eq!(truncate_to_width("日本語", 4), "日本");
        assert_eq!(pad_to_width("ab", 4), "ab  ");
    }

    #[test]
    fn test_style_patch() {
        let merged = Style::new().fg(Color::Red).patch(Style::new().bold());
        assert_eq!(merged.fg, Some(Color::Red));
        assert!(merged.bold);
        assert!(StyleTable::default().names().contains(&"muted"));
    }
}
