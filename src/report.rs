use chrono::{DateTime, Utc};
use flyt_core::{main_entries, personal_entries, Network, NetworkError, TimelineEntry};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("{0}")]
    Network(#[from] NetworkError),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the binary shows for one viewer.
#[derive(Debug, Serialize)]
pub struct Report {
    pub viewer: String,
    pub main: Vec<TimelineEntry>,
    /// Personal timelines of followed accounts, in follow order.
    pub personal: Vec<FolloweeTimeline>,
}

#[derive(Debug, Serialize)]
pub struct FolloweeTimeline {
    pub username: String,
    pub entries: Vec<TimelineEntry>,
}

/// Text report: the viewer's main timeline, then a blank line, an
/// `@username` header and the personal timeline for each followed account.
pub fn text(network: &Network, viewer: &str, now: DateTime<Utc>) -> Result<Vec<String>, ReportError> {
    let viewer_id = network.resolve(viewer)?;
    let mut lines = network.render_main_at(viewer_id, now, false)?;

    let Some(account) = network.account(viewer_id) else {
        return Ok(lines);
    };
    for &followee in account.following() {
        let Some(followed) = network.account(followee) else {
            continue;
        };
        lines.push(String::new());
        lines.push(format!("@{}", followed.username()));
        lines.extend(network.render_personal_at(viewer_id, followee, now, false)?);
    }
    Ok(lines)
}

/// Structured form of the same report.
pub fn build(network: &Network, viewer: &str, now: DateTime<Utc>) -> Result<Report, ReportError> {
    let viewer_id = network.resolve(viewer)?;

    let mut personal = Vec::new();
    if let Some(account) = network.account(viewer_id) {
        for &followee in account.following() {
            let Some(followed) = network.account(followee) else {
                continue;
            };
            personal.push(FolloweeTimeline {
                username: followed.username().to_string(),
                entries: personal_entries(network, viewer_id, followee, now)?,
            });
        }
    }

    Ok(Report {
        viewer: viewer.to_string(),
        main: main_entries(network, viewer_id, now)?,
        personal,
    })
}

/// Pretty-printed JSON report.
pub fn json(network: &Network, viewer: &str, now: DateTime<Utc>) -> Result<String, ReportError> {
    let report = build(network, viewer, now)?;
    Ok(serde_json::to_string_pretty(&report)?)
}
