// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use owo_colors::Style;

/// Immutable style set, built once at startup and passed into the renderers.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub title: Style,
    pub border: Style,
    pub border_focused: Style,
    pub selected: Style,
    pub dim: Style,
    pub accent: Style,
    pub error: Style,
    pub success: Style,
}

impl Theme {
    pub fn default_dark() -> Self {
        Self {
            title: Style::new().bold().bright_cyan(),
            border: Style::new().bright_black(),
            border_focused: Style::new().cyan(),
            selected: Style::new().bold().black().on_cyan(),
            dim: Style::new().bright_black(),
            accent: Style::new().magenta(),
            error: Style::new().bold().red(),
            success: Style::new().bold().green(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}
