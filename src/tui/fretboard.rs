//! Fretboard view — computes the visible fret window for a chord and
//! renders the board as styled text lines.
//!
//! The window math is presentation-agnostic and tested on its own; the App
//! draws the returned lines inside a block.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theory::{ChordInstance, GuitarString, PlayedNote};

use super::lang::Lang;

/// Highest fret on the modeled neck.
pub const TOTAL_FRETS: u8 = 15;

/// Minimum window width in frets.
const MIN_WINDOW: u8 = 5;

/// Character cell width of one fret column.
const CELL_WIDTH: usize = 6;

/// Visible fret range for a chord: `start..=end`.
///
/// Starts one fret below the lowest note (never below 0, and pinned to 0
/// for open chords so the nut stays visible), spans at least [`MIN_WINDOW`]
/// frets, leaves one fret of margin past the highest note, and clips at
/// [`TOTAL_FRETS`]. Notes past the clip are not drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FretWindow {
    pub start: u8,
    pub end: u8,
}

impl FretWindow {
    pub fn for_notes(notes: &[PlayedNote]) -> Self {
        let min = notes.iter().map(|n| n.fret).min().unwrap_or(0);
        let max = notes.iter().map(|n| n.fret).max().unwrap_or(0);

        let start = min.saturating_sub(1);
        let end = (start + MIN_WINDOW).max(max + 1).min(TOTAL_FRETS);
        Self { start, end }
    }

    pub fn contains(self, fret: u8) -> bool {
        (self.start..=self.end).contains(&fret)
    }

    pub fn width(self) -> u8 {
        self.end - self.start
    }

    /// Fretted columns of the board. Fret 0 is drawn as the open-string
    /// column left of the nut, not as a fret column.
    fn columns(self) -> impl Iterator<Item = u8> {
        self.start.max(1)..=self.end
    }
}

/// Inlay dot at this fret (single marker).
fn single_dot(fret: u8) -> bool {
    matches!(fret, 3 | 5 | 7 | 9 | 15)
}

/// Double inlay dot (the octave fret).
fn double_dot(fret: u8) -> bool {
    fret == 12
}

fn marker_style(is_root: bool) -> Style {
    let color = if is_root { Color::Yellow } else { Color::Cyan };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn wire_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn label_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Open-position note name of a string, high E written lowercase.
fn string_label(string: GuitarString) -> &'static str {
    match string {
        GuitarString::HighE => "e",
        GuitarString::B => "B",
        GuitarString::G => "G",
        GuitarString::D => "D",
        GuitarString::A => "A",
        GuitarString::LowE => "E",
    }
}

/// Title line for the chord: key, shape, and barre position.
pub fn chord_title(chord: &ChordInstance, lang: Lang) -> String {
    let position = if chord.fret_position == 0 {
        lang.open_label().to_string()
    } else {
        chord.fret_position.to_string()
    };
    format!(
        " {} {} · {}{} · {} {} ",
        chord.root,
        lang.major_label(),
        chord.shape.letter(),
        lang.shape_suffix(),
        lang.position_label(),
        position
    )
}

/// Render the fretboard for one chord as styled lines: six string rows,
/// inlay dots, fret numbers, and the fingering legend.
pub fn board_lines(chord: &ChordInstance, lang: Lang) -> Vec<Line<'static>> {
    let window = FretWindow::for_notes(&chord.notes);
    let mut lines = Vec::new();

    // Open label above the open-string column, when the nut is visible.
    if window.start == 0 && chord.notes.iter().any(|n| n.fret == 0) {
        lines.push(Line::from(Span::styled(
            format!("  {}", lang.open_label()),
            label_style(),
        )));
    } else {
        lines.push(Line::default());
    }

    for string in GuitarString::ALL {
        lines.push(string_row(chord, string, window));
    }

    lines.push(dots_row(window));
    lines.push(numbers_row(window));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        lang.legend().to_string(),
        label_style(),
    )));

    lines
}

fn string_row(chord: &ChordInstance, string: GuitarString, window: FretWindow) -> Line<'static> {
    let note_on_string = chord.notes.iter().find(|n| n.string == string);
    // Low strings drawn heavier, like wound strings.
    let wire = if string.number() >= 4 { '═' } else { '─' };

    let mut spans = vec![Span::styled(
        format!("{} ", string_label(string)),
        label_style(),
    )];

    // Open/muted column.
    let status = match note_on_string {
        Some(n) if n.fret == 0 => Span::styled("○ ".to_string(), marker_style(n.is_root)),
        None => Span::styled("x ".to_string(), label_style()),
        Some(_) => Span::raw("  "),
    };
    spans.push(status);

    // Nut when fret 0 is visible, plain edge otherwise.
    let edge = if window.start == 0 { '║' } else { '┆' };
    spans.push(Span::styled(edge.to_string(), wire_style()));

    for fret in window.columns() {
        match note_on_string {
            Some(n) if n.fret == fret => {
                let pad = CELL_WIDTH - 3;
                let left = pad / 2;
                spans.push(Span::styled(wire.to_string().repeat(left), wire_style()));
                spans.push(Span::styled(format!("({})", n.finger), marker_style(n.is_root)));
                spans.push(Span::styled(
                    wire.to_string().repeat(pad - left),
                    wire_style(),
                ));
            }
            _ => {
                spans.push(Span::styled(
                    wire.to_string().repeat(CELL_WIDTH),
                    wire_style(),
                ));
            }
        }
        spans.push(Span::styled("│".to_string(), wire_style()));
    }

    Line::from(spans)
}

/// Center `text` in a cell of `CELL_WIDTH` plus the separator column.
fn centered_cell(text: &str) -> String {
    let len = text.chars().count().min(CELL_WIDTH);
    let left = (CELL_WIDTH - len) / 2;
    let right = CELL_WIDTH - len - left;
    format!("{}{}{} ", " ".repeat(left), text, " ".repeat(right))
}

fn dots_row(window: FretWindow) -> Line<'static> {
    let mut row = String::from("    "); // name + status columns
    row.push(' '); // edge column
    for fret in window.columns() {
        let dot = if double_dot(fret) {
            "••"
        } else if single_dot(fret) {
            "•"
        } else {
            ""
        };
        row.push_str(&centered_cell(dot));
    }
    Line::from(Span::styled(row, wire_style()))
}

fn numbers_row(window: FretWindow) -> Line<'static> {
    let mut row = String::from("    ");
    row.push(if window.start == 0 { '0' } else { ' ' });
    for fret in window.columns() {
        row.push_str(&centered_cell(&fret.to_string()));
    }
    Line::from(Span::styled(row, label_style()))
}
