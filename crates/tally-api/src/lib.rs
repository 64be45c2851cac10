// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Blocking client for the remote time-tracking service. Authentication is
//! an `X-Api-Key` header on every request; all payloads are JSON.

use std::collections::HashSet;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::{Deserialize, Serialize};
use time::Date;
use time::format_description::well_known::Rfc3339;
use url::Url;

use tally_app::{EntrySummary, Identity, Project, timerange};

#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    api_key: String,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let parsed = Url::parse(&base_url)
            .with_context(|| format!("api.base_url {base_url:?} is not a valid URL"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("api.base_url must use http or https, got {:?}", parsed.scheme());
        }
        if api_key.trim().is_empty() {
            bail!("API key must not be empty");
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            api_key: api_key.to_owned(),
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolves the authenticated user and their default workspace.
    pub fn fetch_identity(&self) -> Result<Identity> {
        let parsed: UserRow = self
            .get(&format!("{}/user", self.base_url))?
            .json()
            .context("decode user info")?;
        if parsed.default_workspace.is_empty() {
            bail!("account has no default workspace; pick one in the service settings first");
        }
        Ok(Identity {
            workspace_id: parsed.default_workspace,
            user_id: parsed.id,
        })
    }

    pub fn fetch_projects(&self, workspace_id: &str) -> Result<Vec<Project>> {
        let parsed: Vec<ProjectRow> = self
            .get(&format!("{}/workspaces/{workspace_id}/projects", self.base_url))?
            .json()
            .context("decode project list")?;
        Ok(parsed
            .into_iter()
            .map(|row| Project {
                id: row.id,
                name: row.name,
                client_id: row.client_id,
                client_name: row.client_name,
            })
            .collect())
    }

    /// Descriptions of the user's previous entries for autocomplete:
    /// first-seen order, duplicates and empties dropped.
    pub fn fetch_recent_descriptions(
        &self,
        workspace_id: &str,
        user_id: &str,
    ) -> Result<Vec<String>> {
        let entries = self.fetch_entries(workspace_id, user_id)?;
        Ok(dedup_descriptions(
            entries.into_iter().map(|entry| entry.description),
        ))
    }

    pub fn fetch_entries(&self, workspace_id: &str, user_id: &str) -> Result<Vec<EntrySummary>> {
        let url = format!(
            "{}/workspaces/{workspace_id}/user/{user_id}/time-entries",
            self.base_url
        );
        let parsed: Vec<EntryRow> = self.get(&url)?.json().context("decode time entries")?;
        Ok(parsed
            .into_iter()
            .map(|row| EntrySummary {
                id: row.id,
                description: row.description,
                project_id: row.project_id,
                start: row.time_interval.start,
                end: row.time_interval.end.filter(|end| !end.is_empty()),
            })
            .collect())
    }

    /// Creates one entry on the given date. The range text is parsed locally
    /// so a malformed range never reaches the wire.
    pub fn submit_entry(
        &self,
        workspace_id: &str,
        project_id: &str,
        description: &str,
        time_range: &str,
        date: Date,
    ) -> Result<()> {
        let (start, end) = rfc3339_range(time_range, date)?;
        let request = EntryRequest {
            start,
            end,
            project_id,
            description,
        };

        let response = self
            .http
            .post(format!(
                "{}/workspaces/{workspace_id}/time-entries",
                self.base_url
            ))
            .header("X-Api-Key", &self.api_key)
            .json(&request)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }
        Ok(())
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        let response = self
            .http
            .get(url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }
        Ok(response)
    }
}

fn rfc3339_range(time_range: &str, date: Date) -> Result<(String, String)> {
    let (start, end) =
        timerange::parse_time_range(time_range, date).context("invalid time range")?;
    let start = start
        .assume_utc()
        .format(&Rfc3339)
        .context("format start time")?;
    let end = end.assume_utc().format(&Rfc3339).context("format end time")?;
    Ok((start, end))
}

fn dedup_descriptions(descriptions: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    descriptions
        .filter(|description| !description.is_empty() && seen.insert(description.clone()))
        .collect()
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!("cannot reach {base_url} -- check api.base_url and your network ({error})")
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<ServiceErrorEnvelope>(body)
        && let Some(message) = parsed.message
        && !message.is_empty()
    {
        return anyhow!("service error ({}): {}", status.as_u16(), message);
    }

    if body.len() < 100 && !body.contains('{') && !body.is_empty() {
        return anyhow!("service error ({}): {}", status.as_u16(), body);
    }

    anyhow!("service returned {}", status.as_u16())
}

#[derive(Debug, Deserialize)]
struct UserRow {
    #[serde(default)]
    id: String,
    #[serde(default, rename = "defaultWorkspace")]
    default_workspace: String,
}

#[derive(Debug, Deserialize)]
struct ProjectRow {
    id: String,
    name: String,
    #[serde(default, rename = "clientId")]
    client_id: String,
    #[serde(default, rename = "clientName")]
    client_name: String,
}

#[derive(Debug, Default, Deserialize)]
struct IntervalRow {
    #[serde(default)]
    start: String,
    #[serde(default)]
    end: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EntryRow {
    #[serde(default)]
    id: String,
    #[serde(default)]
    description: String,
    #[serde(default, rename = "projectId")]
    project_id: String,
    #[serde(default, rename = "timeInterval")]
    time_interval: IntervalRow,
}

#[derive(Debug, Serialize)]
struct EntryRequest<'a> {
    start: String,
    end: String,
    #[serde(rename = "projectId")]
    project_id: &'a str,
    description: &'a str,
}

#[derive(Debug, Deserialize)]
struct ServiceErrorEnvelope {
    message: Option<String>,
}
