// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Full-screen capability list

use std::{
    io,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use signal_hook::{
    consts::{SIGHUP, SIGINT, SIGQUIT, SIGTERM},
    flag,
};
use terminfo_view::{Action, CapabilityRecord, Class, Config, Row, ViewState, view};
use tracing::debug;

// Title and status lines
const CHROME_LINES: u16 = 2;

// How often the loop looks at the termination flag while idle
const POLL_INTERVAL: Duration = Duration::from_millis(100);

const TERMINATION_SIGNALS: [i32; 4] = [SIGTERM, SIGHUP, SIGQUIT, SIGINT];

const fn list_height(screen_height: u16) -> usize {
    screen_height.saturating_sub(CHROME_LINES) as usize
}

/// How the viewer ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    Quit,
    Signal,
}

/// Termination request from a signal
///
/// The first signal sets the flag so the event loop can restore the terminal.
/// A second one exits at once with status 1.
#[derive(Default)]
pub struct Termination {
    requested: Arc<AtomicBool>,
}

impl Termination {
    pub fn register() -> io::Result<Self> {
        let termination = Self::default();
        for signal in TERMINATION_SIGNALS {
            // Registered first, so it sees the flag before this signal sets it
            flag::register_conditional_shutdown(signal, 1, Arc::clone(&termination.requested))?;
            flag::register(signal, Arc::clone(&termination.requested))?;
        }
        Ok(termination)
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Relaxed)
    }
}

/// Show the record until the user quits or a termination signal arrives
///
/// The terminal is restored on return and, through the panic hook installed
/// by `ratatui`, on panic.
pub fn run(record: &CapabilityRecord, config: &Config) -> io::Result<Exit> {
    let termination = Termination::register()?;
    let rows = view::rows(record, config.present_only);
    let mut state = ViewState::new(rows.len());
    let mut terminal = ratatui::try_init()?;
    let result = event_loop(
        &mut terminal,
        record,
        config,
        &rows,
        &mut state,
        &termination,
        || next_event(POLL_INTERVAL),
    );
    ratatui::restore();
    result
}

fn next_event(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    record: &CapabilityRecord,
    config: &Config,
    rows: &[Row],
    state: &mut ViewState,
    termination: &Termination,
    mut next_event: impl FnMut() -> io::Result<Option<Event>>,
) -> io::Result<Exit> {
    let mut redraw = true;
    loop {
        if termination.is_requested() {
            debug!("termination signal");
            return Ok(Exit::Signal);
        }
        if redraw {
            terminal.draw(|frame| draw(frame, record, config, rows, state))?;
            redraw = false;
        }
        let Some(event) = next_event()? else {
            continue;
        };
        redraw = true;
        let height = list_height(terminal.size()?.height);
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(action) = action_for(key) else {
                    continue;
                };
                debug!(?action, selected = state.selected, "key");
                match action {
                    Action::Quit => return Ok(Exit::Quit),
                    Action::Redraw => {
                        terminal.clear()?;
                        state.fit(height);
                    }
                    action => state.apply(action, height),
                }
            }
            Event::Resize(width, screen_height) => {
                debug!(width, screen_height, "resize");
                state.fit(list_height(screen_height));
            }
            _ => {}
        }
    }
}

fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('l') => Some(Action::Redraw),
            _ => None,
        };
    }
    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::PageUp | KeyCode::Char('b') => Action::PageUp,
        KeyCode::PageDown | KeyCode::Char(' ') => Action::PageDown,
        KeyCode::Home | KeyCode::Char('g') => Action::Home,
        KeyCode::End | KeyCode::Char('G') => Action::End,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}

fn title(record: &CapabilityRecord) -> String {
    let mut title = record.terminal_name().into_owned();
    if let Some(description) = record.description() {
        title.push_str(" - ");
        title.push_str(&description);
    }
    format!(
        "{title}  [{} booleans, {} numbers, {} strings]",
        record.count(Class::Boolean),
        record.count(Class::Number),
        record.count(Class::String),
    )
}

fn row_line(row: &Row, selected: bool) -> Line<'static> {
    let class = match row.class {
        Class::Boolean => "bool",
        Class::Number => "num",
        Class::String => "str",
    };
    let text = format!(
        "{class:<4} {:<8} {:<28} {}",
        row.capname, row.name, row.value
    );
    let style = if selected {
        Style::new().add_modifier(Modifier::REVERSED)
    } else if row.value.is_present() {
        Style::new()
    } else {
        Style::new().add_modifier(Modifier::DIM)
    };
    Line::styled(text, style)
}

fn draw(
    frame: &mut Frame,
    record: &CapabilityRecord,
    config: &Config,
    rows: &[Row],
    state: &mut ViewState,
) {
    let [title_area, list_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let height = usize::from(list_area.height);
    state.fit(height);

    frame.render_widget(
        Paragraph::new(title(record)).style(Style::new().add_modifier(Modifier::BOLD)),
        title_area,
    );

    let lines: Vec<Line> = state
        .visible(height)
        .map(|index| row_line(&rows[index], index == state.selected))
        .collect();
    frame.render_widget(Paragraph::new(lines), list_area);

    let position = if state.is_empty() {
        0
    } else {
        state.selected + 1
    };
    let status = format!(
        "{position}/{}  {}  q: quit",
        state.len(),
        config.path.display()
    );
    frame.render_widget(
        Paragraph::new(status).style(Style::new().add_modifier(Modifier::REVERSED)),
        status_area,
    );
}
