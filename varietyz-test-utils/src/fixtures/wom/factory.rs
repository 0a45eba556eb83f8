//! Wise Old Man response bodies.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

/// Body of a `GET /competitions/{id}` response.
///
/// `participants` are `(display name, gained)` pairs in any order.
pub fn mock_competition_details(
    id: i64,
    title: &str,
    metric: &str,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    participants: &[(&str, f64)],
) -> Value {
    let participations: Vec<Value> = participants
        .iter()
        .enumerate()
        .map(|(i, (name, gained))| {
            json!({
                "playerId": i as i64 + 1,
                "competitionId": id,
                "player": { "id": i as i64 + 1, "displayName": name, "username": name.to_lowercase() },
                "progress": { "start": 0, "end": gained, "gained": gained }
            })
        })
        .collect();

    json!({
        "id": id,
        "title": title,
        "metric": metric,
        "type": "classic",
        "startsAt": starts_at.to_rfc3339(),
        "endsAt": ends_at.to_rfc3339(),
        "groupId": crate::constant::TEST_WOM_GROUP_ID,
        "participations": participations
    })
}

/// Body of a `POST /competitions` response.
pub fn mock_created_competition(
    id: i64,
    title: &str,
    metric: &str,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    verification_code: &str,
) -> Value {
    json!({
        "competition": {
            "id": id,
            "title": title,
            "metric": metric,
            "type": "classic",
            "startsAt": starts_at.to_rfc3339(),
            "endsAt": ends_at.to_rfc3339()
        },
        "verificationCode": verification_code
    })
}
