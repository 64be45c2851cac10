// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Domain state for the `tally` dashboard: the message/command vocabulary,
//! the focus-routing application state machine, the time-entry wizard, and
//! the small parsers they share. No terminal or network code lives here;
//! the loop and the service client plug in from the outer crates.

pub mod list;
pub mod message;
pub mod model;
pub mod state;
pub mod timerange;
pub mod wizard;

pub use list::ListCursor;
pub use message::{Command, LoadedData, Message};
pub use model::{EntrySummary, FocusPane, Identity, Key, Project, TextField, ViewId};
pub use state::{App, Modal, ModalKind, Router, Sidebar, TimeListState};
pub use wizard::{WizardAction, WizardState, WizardStep};
