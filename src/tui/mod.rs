//! TUI — key selector, transport, fretboard display, and the auto-advance
//! playback loop.
//!
//! The App owns all state: selected key, generated sequence, playing flag,
//! tempo, and the optional audio engine. Everything mutates in response to
//! discrete key or timer events on this one thread.

pub mod fretboard;
pub mod keybindings;
pub mod lang;

pub use fretboard::{board_lines, chord_title, FretWindow};
pub use keybindings::{map_key, Action};
pub use lang::Lang;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::audio::{render_strum, AudioEngine, StrumSpeed};
use crate::theory::{ChordSequence, Note};

/// Auto-advance interval bounds and step, in milliseconds.
pub const TEMPO_MIN_MS: u64 = 500;
pub const TEMPO_MAX_MS: u64 = 4000;
pub const TEMPO_STEP_MS: u64 = 100;
pub const TEMPO_DEFAULT_MS: u64 = 2000;

/// Event poll timeout — keeps the loop live for the playback timer.
const POLL_MS: u64 = 16;

/// The main TUI application state.
pub struct App {
    sequence: ChordSequence,
    is_playing: bool,
    tempo_ms: u64,
    strum_speed: StrumSpeed,
    lang: Lang,
    muted: bool,
    help_visible: bool,
    should_quit: bool,
    audio: Option<AudioEngine>,
    /// Deadline for the next auto-advance; None while stopped.
    next_advance: Option<Instant>,
}

impl App {
    /// Create the app for a starting key. Audio is best-effort: with no
    /// output device the app runs silent.
    pub fn new(key: Note, tempo_ms: u64, strum_speed: StrumSpeed, lang: Lang) -> Self {
        Self {
            sequence: ChordSequence::for_key(key),
            is_playing: false,
            tempo_ms: tempo_ms.clamp(TEMPO_MIN_MS, TEMPO_MAX_MS),
            strum_speed,
            lang,
            muted: false,
            help_visible: false,
            should_quit: false,
            audio: AudioEngine::new().ok(),
            next_advance: None,
        }
    }

    #[cfg(test)]
    fn without_audio(key: Note) -> Self {
        Self {
            sequence: ChordSequence::for_key(key),
            is_playing: false,
            tempo_ms: TEMPO_DEFAULT_MS,
            strum_speed: StrumSpeed::Slow,
            lang: Lang::En,
            muted: false,
            help_visible: false,
            should_quit: false,
            audio: None,
            next_advance: None,
        }
    }

    /// Event loop: draw, poll input, run the playback timer.
    pub fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> io::Result<()> {
        while !self.should_quit {
            terminal
                .draw(|frame| self.draw(frame))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if event::poll(Duration::from_millis(POLL_MS))? {
                if let CrosstermEvent::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(action) = map_key(key) {
                            self.handle_action(action);
                        }
                    }
                }
            }

            self.advance_if_due();
        }

        // Leave nothing ringing after teardown.
        if let Some(engine) = &mut self.audio {
            let _ = engine.stop();
        }
        Ok(())
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::TogglePlayback => self.toggle_playback(),
            Action::NextChord => {
                self.sequence.next();
                self.strum_current();
            }
            Action::PrevChord => {
                self.sequence.prev();
                self.strum_current();
            }
            Action::TempoUp => self.set_tempo(self.tempo_ms.saturating_add(TEMPO_STEP_MS)),
            Action::TempoDown => self.set_tempo(self.tempo_ms.saturating_sub(TEMPO_STEP_MS)),
            Action::SelectKey(key) => self.select_key(key),
            Action::NextKey => self.select_key(self.sequence.key().next()),
            Action::PrevKey => self.select_key(self.sequence.key().prev()),
            Action::ToggleSharp => {
                let key = self.sequence.key();
                if key.has_sharp() {
                    self.select_key(key.next());
                } else if key.is_sharp() {
                    self.select_key(key.prev());
                }
            }
            Action::ToggleStrumSpeed => self.strum_speed = self.strum_speed.toggled(),
            Action::ToggleMute => self.toggle_mute(),
            Action::ToggleLang => self.lang = self.lang.toggled(),
            Action::ToggleHelp => self.help_visible = !self.help_visible,
        }
    }

    /// Selecting a key stops playback. A new key also rebuilds the
    /// sequence at position 0; re-selecting the current key keeps the
    /// position.
    fn select_key(&mut self, key: Note) {
        self.stop_playback();
        if key == self.sequence.key() {
            return;
        }
        self.sequence = ChordSequence::for_key(key);
    }

    fn toggle_playback(&mut self) {
        if self.is_playing {
            self.stop_playback();
        } else {
            self.is_playing = true;
            // Play the current chord immediately, then advance on the timer.
            self.strum_current();
            self.next_advance = Some(Instant::now() + Duration::from_millis(self.tempo_ms));
        }
    }

    fn stop_playback(&mut self) {
        self.is_playing = false;
        self.next_advance = None;
    }

    /// Mute drops master volume to zero on the audio thread; the playback
    /// timer keeps running so unmute rejoins the cycle mid-flight.
    fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        if let Some(engine) = &mut self.audio {
            let volume = if self.muted { 0.0 } else { 1.0 };
            let _ = engine.set_volume(volume);
        }
    }

    /// Clamp and apply a new tempo; a running timer is re-armed from now.
    fn set_tempo(&mut self, tempo_ms: u64) {
        self.tempo_ms = tempo_ms.clamp(TEMPO_MIN_MS, TEMPO_MAX_MS);
        if self.is_playing {
            self.next_advance = Some(Instant::now() + Duration::from_millis(self.tempo_ms));
        }
    }

    /// Playback timer: advance and strum when the deadline passes.
    fn advance_if_due(&mut self) {
        if !self.is_playing {
            return;
        }
        let Some(deadline) = self.next_advance else {
            return;
        };
        if Instant::now() >= deadline {
            self.sequence.next();
            self.strum_current();
            self.next_advance = Some(deadline + Duration::from_millis(self.tempo_ms));
        }
    }

    /// Strum the current chord through the audio engine. No-op when the
    /// sequence is empty or audio is unavailable.
    fn strum_current(&mut self) {
        if self.sequence.is_empty() {
            return;
        }
        let Some(engine) = &mut self.audio else {
            return;
        };
        let samples = render_strum(
            &self.sequence.current().notes,
            self.strum_speed,
            engine.sample_rate(),
            engine.channels(),
        );
        let _ = engine.strum(samples);
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // key selector
                Constraint::Min(12),    // fretboard
                Constraint::Length(1),  // status bar
            ])
            .split(area);

        self.draw_key_selector(frame, chunks[0]);
        self.draw_fretboard(frame, chunks[1]);
        self.draw_status(frame, chunks[2]);

        if self.help_visible {
            self.draw_help(frame, area);
        }
    }

    fn draw_key_selector(&self, frame: &mut Frame, area: Rect) {
        let selected = self.sequence.key();
        let mut spans = Vec::with_capacity(Note::ALL.len() * 2);
        for note in Note::ALL {
            let style = if note == selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {:<2}", note.name()), style));
            spans.push(Span::raw(" "));
        }

        let block = Block::default().borders(Borders::ALL).title(" Key ");
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn draw_fretboard(&self, frame: &mut Frame, area: Rect) {
        let chord = self.sequence.current();
        let title = chord_title(chord, self.lang);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                title,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        let lines = board_lines(chord, self.lang);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let transport = if self.is_playing { "▶" } else { "⏸" };
        let audio = if self.audio.is_none() {
            " · no audio"
        } else if self.muted {
            " · muted"
        } else {
            ""
        };
        let status = format!(
            " {transport}  {}/{}  ·  {:.1}s  ·  strum {}  ·  {}  ·  space play · ←/→ step · ↑/↓ tempo · tab key · h help · q quit{audio}",
            self.sequence.index() + 1,
            self.sequence.len(),
            self.tempo_ms as f64 / 1000.0,
            self.strum_speed,
            self.lang,
        );
        frame.render_widget(
            Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = [
            ("space", "play / pause the chord cycle"),
            ("→ / n", "next chord (strums)"),
            ("← / p", "previous chord (strums)"),
            ("↑ / +", "slower cycle (+100 ms)"),
            ("↓ / -", "faster cycle (-100 ms)"),
            ("tab / shift-tab", "next / previous key"),
            ("c d e f g a b", "select a natural key"),
            ("s", "toggle sharp on the current key"),
            ("w", "toggle strum speed (slow/fast)"),
            ("m", "mute / unmute"),
            ("l", "toggle language (en/zh)"),
            ("h / ?", "toggle this help"),
            ("q / esc", "quit"),
        ]
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!(" {key:<16}"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(desc.to_string()),
            ])
        })
        .collect();

        let height = lines.len() as u16 + 2;
        let width = 52u16.min(area.width);
        let popup = Rect {
            x: area.width.saturating_sub(width) / 2,
            y: area.height.saturating_sub(height) / 2,
            width,
            height: height.min(area.height),
        };

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .alignment(Alignment::Left)
                .block(Block::default().borders(Borders::ALL).title(" Help ")),
            popup,
        );
    }

    pub fn key(&self) -> Note {
        self.sequence.key()
    }

    pub fn tempo_ms(&self) -> u64 {
        self.tempo_ms
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn sequence(&self) -> &ChordSequence {
        &self.sequence
    }
}
