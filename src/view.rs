// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Presentation of a capability record as a scrollable list

use std::fmt;

use crate::{
    catalog::{self, Class},
    load::CapabilityRecord,
};

/// Value of a capability as shown to the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Flag(bool),
    Number(Option<i16>),
    /// Escaped string, see [`escape`]
    String(Option<String>),
}

impl Value {
    #[must_use]
    pub const fn is_present(&self) -> bool {
        match self {
            Self::Flag(value) => *value,
            Self::Number(value) => value.is_some(),
            Self::String(value) => value.is_some(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(true) => f.write_str("yes"),
            Self::Flag(false) => f.write_str("no"),
            Self::Number(Some(value)) => write!(f, "{value}"),
            Self::String(Some(value)) => write!(f, "\"{value}\""),
            Self::Number(None) | Self::String(None) => f.write_str("absent"),
        }
    }
}

/// One line of the capability list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub class: Class,
    pub ordinal: usize,
    pub name: &'static str,
    pub capname: &'static str,
    pub value: Value,
}

/// Build rows for every standard capability
///
/// Capabilities past the counts declared by the file are shown as absent.
/// With `present_only`, absent capabilities are skipped.
#[must_use]
pub fn rows(record: &CapabilityRecord, present_only: bool) -> Vec<Row> {
    let mut rows = Vec::new();
    for class in Class::ALL {
        for ordinal in 0..class.count() {
            let value = match class {
                Class::Boolean => Value::Flag(record.boolean(ordinal)),
                Class::Number => Value::Number(record.number(ordinal)),
                Class::String => Value::String(record.string(ordinal).map(escape)),
            };
            if present_only && !value.is_present() {
                continue;
            }
            rows.push(Row {
                class,
                ordinal,
                name: catalog::name_of(class, ordinal),
                capname: catalog::capname_of(class, ordinal),
                value,
            });
        }
    }
    rows
}

/// Make a control sequence printable using terminfo source notation
#[must_use]
pub fn escape(bytes: &[u8]) -> String {
    let mut escaped = String::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            0x1b => escaped.push_str("\\E"),
            b'\\' => escaped.push_str("\\\\"),
            b'^' => escaped.push_str("\\^"),
            b',' => escaped.push_str("\\,"),
            0x00..=0x1f => {
                escaped.push('^');
                escaped.push(char::from(byte + b'@'));
            }
            0x20..=0x7e => escaped.push(char::from(byte)),
            _ => escaped.push_str(&format!("\\{byte:03o}")),
        }
    }
    escaped
}

/// User commands for the list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Redraw,
    Quit,
}

/// Scrolling window over a list of `len` rows
///
/// `selected` is kept within `[top, top + height)` for the last known height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub top: usize,
    pub selected: usize,
    len: usize,
}

impl ViewState {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            top: 0,
            selected: 0,
            len,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn last(&self) -> usize {
        self.len.saturating_sub(1)
    }

    /// Move the selection, then scroll so it stays visible
    pub fn apply(&mut self, action: Action, height: usize) {
        let page = height.max(1);
        self.selected = match action {
            Action::Up => self.selected.saturating_sub(1),
            Action::Down => (self.selected + 1).min(self.last()),
            Action::PageUp => self.selected.saturating_sub(page),
            Action::PageDown => (self.selected + page).min(self.last()),
            Action::Home => 0,
            Action::End => self.last(),
            Action::Redraw | Action::Quit => self.selected,
        };
        self.fit(height);
    }

    /// Adjust the window after a change of height
    pub fn fit(&mut self, height: usize) {
        let height = height.max(1);
        self.selected = self.selected.min(self.last());
        if self.selected < self.top {
            self.top = self.selected;
        } else if self.selected >= self.top + height {
            self.top = self.selected + 1 - height;
        }
        // Don't leave empty space at the bottom if the list can fill it
        self.top = self.top.min(self.len.saturating_sub(height));
    }

    /// Range of rows to draw
    #[must_use]
    pub fn visible(&self, height: usize) -> std::ops::Range<usize> {
        self.top..(self.top + height).min(self.len)
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use collection_literals::collection;

    use super::*;
    use crate::load::Layout;

    // bw, xenl; cols#80, lines#25; cbt=\E[Z, bel=^G
    const RECORD: &[u8] = b"\x1a\x01\x02\x00\x05\x00\x03\x00\x02\x00\x06\x00\
        t\0\
        \x01\x00\x00\x00\x01\
        \x50\x00\xff\xff\x19\x00\
        \x00\x00\x04\x00\
        \x1b[Z\0\x07\0";

    fn record() -> CapabilityRecord {
        CapabilityRecord::parse(RECORD, Layout::Packed).unwrap()
    }

    #[test]
    fn all_rows() {
        let rows = rows(&record(), false);
        assert_eq!(
            rows.len(),
            catalog::MAX_BOOLEANS + catalog::MAX_NUMBERS + catalog::MAX_STRINGS
        );
        assert_eq!(
            rows[0],
            Row {
                class: Class::Boolean,
                ordinal: 0,
                name: "auto_left_margin",
                capname: "bw",
                value: Value::Flag(true),
            }
        );
        assert_eq!(rows[1].value, Value::Flag(false));
        // Past the five booleans in the file
        assert_eq!(rows[5].value, Value::Flag(false));
        assert_eq!(rows[44].name, "columns");
        assert_eq!(rows[44].value, Value::Number(Some(80)));
        assert_eq!(rows[45].value, Value::Number(None));
        assert_eq!(rows[83].name, "back_tab");
        assert_eq!(rows[83].value, Value::String(Some("\\E[Z".into())));
        assert_eq!(rows[84].value, Value::String(Some("^G".into())));
        assert_eq!(rows[85].value, Value::String(None));
    }

    #[test]
    fn present_rows() {
        let rows = rows(&record(), true);
        let names: BTreeSet<_> = rows.iter().map(|row| row.capname).collect();
        assert_eq!(
            names,
            collection!("bw", "xenl", "cols", "lines", "cbt", "bel")
        );
        assert_eq!(rows[2].class, Class::Number);
        assert_eq!(rows[4].class, Class::String);
    }

    #[test]
    fn display_values() {
        assert_eq!(Value::Flag(true).to_string(), "yes");
        assert_eq!(Value::Flag(false).to_string(), "no");
        assert_eq!(Value::Number(Some(-3)).to_string(), "-3");
        assert_eq!(Value::Number(None).to_string(), "absent");
        assert_eq!(Value::String(Some("\\E[H".into())).to_string(), "\"\\E[H\"");
        assert_eq!(Value::String(None).to_string(), "absent");
    }

    #[test]
    fn escaping() {
        assert_eq!(escape(b"\x1b[%i%p1%d;%p2%dH"), "\\E[%i%p1%d;%p2%dH");
        assert_eq!(escape(b"\r\n\x08"), "^M^J^H");
        assert_eq!(escape(b"a^b\\c,d"), "a\\^b\\\\c\\,d");
        assert_eq!(escape(b"\x7f\x80\xff"), "\\177\\200\\377");
        assert_eq!(escape(b""), "");
    }

    #[test]
    fn move_selection() {
        let mut state = ViewState::new(100);
        state.apply(Action::Up, 10);
        assert_eq!((state.top, state.selected), (0, 0));
        for _ in 0..10 {
            state.apply(Action::Down, 10);
        }
        assert_eq!((state.top, state.selected), (1, 10));
        state.apply(Action::PageDown, 10);
        assert_eq!((state.top, state.selected), (11, 20));
        state.apply(Action::End, 10);
        assert_eq!((state.top, state.selected), (90, 99));
        state.apply(Action::Down, 10);
        assert_eq!((state.top, state.selected), (90, 99));
        state.apply(Action::PageUp, 10);
        assert_eq!((state.top, state.selected), (89, 89));
        state.apply(Action::Home, 10);
        assert_eq!((state.top, state.selected), (0, 0));
    }

    #[test]
    fn resize() {
        let mut state = ViewState::new(100);
        state.apply(Action::End, 10);
        state.fit(30);
        assert_eq!((state.top, state.selected), (70, 99));
        state.fit(5);
        assert_eq!((state.top, state.selected), (95, 99));
        assert_eq!(state.visible(5), 95..100);
        state.apply(Action::Up, 5);
        state.apply(Action::Redraw, 5);
        assert_eq!((state.top, state.selected), (95, 98));
    }

    #[test]
    fn short_list() {
        let mut state = ViewState::new(3);
        state.apply(Action::PageDown, 10);
        assert_eq!((state.top, state.selected), (0, 2));
        assert_eq!(state.visible(10), 0..3);
    }

    #[test]
    fn empty_list() {
        let mut state = ViewState::new(0);
        assert!(state.is_empty());
        for action in [Action::Down, Action::End, Action::PageDown, Action::Up] {
            state.apply(action, 10);
            assert_eq!((state.top, state.selected), (0, 0));
        }
        assert_eq!(state.visible(10), 0..0);
    }

    #[test]
    fn zero_height() {
        let mut state = ViewState::new(10);
        state.apply(Action::Down, 0);
        assert_eq!((state.top, state.selected), (1, 1));
    }
}
