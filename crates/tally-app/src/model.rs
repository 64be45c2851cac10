// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

/// Logical key press, translated from the terminal backend at the loop
/// boundary so the state machines never depend on a terminal crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    CtrlC,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Sidebar,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewId {
    Dashboard,
    TimeList,
    Reports,
}

impl ViewId {
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::TimeList, Self::Reports];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::TimeList => "Time Entries",
            Self::Reports => "Reports",
        }
    }
}

/// Identity of the authenticated user, resolved once per loading context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub workspace_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client_id: String,
    pub client_name: String,
}

impl Project {
    /// Name shown in lists; includes the client when the project has one.
    pub fn display_name(&self) -> String {
        if self.client_name.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.client_name)
        }
    }
}

/// A previously submitted entry as listed by the remote service. Timestamps
/// stay in the service's wire format; the list view only displays them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySummary {
    pub id: String,
    pub description: String,
    pub project_id: String,
    pub start: String,
    pub end: Option<String>,
}

/// Single-line input buffer. Keeps only what the wizard needs: printable
/// characters append, backspace removes one character (char-boundary safe).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextField {
    value: String,
    focused: bool,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Applies a key to the buffer. Returns true when the value changed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Char(ch) if !ch.is_control() => {
                self.value.push(ch);
                true
            }
            Key::Backspace => self.value.pop().is_some(),
            _ => false,
        }
    }
}
