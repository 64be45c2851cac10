// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use time::Date;

use tally_api::Client;
use tally_app::{EntrySummary, Identity, Project};
use tally_tui::TimeService;

/// Bridges the loop's service seam to the HTTP client. The client is
/// blocking and stateless per call, so sharing it across command workers
/// needs no locking.
pub struct ApiService {
    client: Client,
}

impl ApiService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl TimeService for ApiService {
    fn fetch_identity(&self) -> Result<Identity> {
        self.client.fetch_identity()
    }

    fn fetch_projects(&self, workspace_id: &str) -> Result<Vec<Project>> {
        self.client.fetch_projects(workspace_id)
    }

    fn fetch_descriptions(&self, workspace_id: &str, user_id: &str) -> Result<Vec<String>> {
        self.client.fetch_recent_descriptions(workspace_id, user_id)
    }

    fn fetch_entries(&self, workspace_id: &str, user_id: &str) -> Result<Vec<EntrySummary>> {
        self.client.fetch_entries(workspace_id, user_id)
    }

    fn submit_entry(
        &self,
        workspace_id: &str,
        project_id: &str,
        description: &str,
        time_range: &str,
        date: Date,
    ) -> Result<()> {
        self.client
            .submit_entry(workspace_id, project_id, description, time_range, date)
    }
}
