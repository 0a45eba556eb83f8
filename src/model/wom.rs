use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /competitions`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompetitionRequest {
    pub title: String,
    pub metric: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub group_id: i64,
    pub group_verification_code: String,
}

/// Response of `POST /competitions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompetitionResponse {
    pub competition: CompetitionSummary,
    /// Secret required to edit or delete the competition later
    pub verification_code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionSummary {
    pub id: i64,
    pub title: String,
    pub metric: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// Response of `GET /competitions/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionDetails {
    pub id: i64,
    pub title: String,
    pub metric: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub participations: Vec<Participation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Participation {
    pub player: Player,
    pub progress: Progress,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub display_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Progress {
    pub gained: f64,
}

/// One row of a rendered leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub player_name: String,
    pub gained: f64,
}

impl CompetitionDetails {
    /// Participants ordered by gained progress, highest first.
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .participations
            .iter()
            .map(|p| Standing {
                player_name: p.player.display_name.clone(),
                gained: p.progress.gained,
            })
            .collect();

        standings.sort_by(|a, b| b.gained.total_cmp(&a.gained));
        standings
    }
}
