// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;

use crate::{EntrySummary, Identity, Key, Project, ViewId};

/// Everything that can enter the update loop. Input sources and finished
/// commands both reduce to one of these; the dispatcher consumes each
/// message exactly once with an exhaustive match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Key(Key),
    Resize { width: u16, height: u16 },
    Navigate(ViewId),
    OpenEntryForm,
    DataLoaded { generation: u64, data: LoadedData },
    OperationFailed { error: String },
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedData {
    Identity(Identity),
    Projects(Vec<Project>),
    Descriptions(Vec<String>),
    Entries(Vec<EntrySummary>),
    SubmitAck,
}

/// Deferred unit of work produced by an update step. Async variants run on
/// independent workers and re-enter the loop as exactly one message; `Emit`
/// enqueues its message immediately. Commands issued together execute
/// concurrently with no ordering guarantee among themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Emit(Message),
    FetchIdentity {
        generation: u64,
    },
    FetchProjects {
        generation: u64,
        workspace_id: String,
    },
    FetchDescriptions {
        generation: u64,
        workspace_id: String,
        user_id: String,
    },
    FetchEntries {
        generation: u64,
        workspace_id: String,
        user_id: String,
    },
    SubmitEntry {
        generation: u64,
        workspace_id: String,
        project_id: String,
        description: String,
        time_range: String,
        date: Date,
    },
}
