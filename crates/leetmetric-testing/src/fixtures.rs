//! Sample payloads in the shape the statistics API returns.

use serde_json::json;

/// Successful payload with only the three solved counts
pub fn profile_json(easy: u64, medium: u64, hard: u64) -> String {
    json!({
        "status": "success",
        "message": "retrieved",
        "totalSolved": easy + medium + hard,
        "easySolved": easy,
        "mediumSolved": medium,
        "hardSolved": hard,
    })
    .to_string()
}

/// Fully populated payload for a ranked profile
pub fn full_profile_json() -> String {
    json!({
        "status": "success",
        "message": "retrieved",
        "totalSolved": 21,
        "totalQuestions": 3300,
        "easySolved": 12,
        "totalEasy": 830,
        "mediumSolved": 8,
        "totalMedium": 1730,
        "hardSolved": 1,
        "totalHard": 740,
        "acceptanceRate": 61.25,
        "ranking": 1234567,
        "contributionPoints": 110,
        "reputation": 4,
        "submissionCalendar": {}
    })
    .to_string()
}

/// Body the API sends (with HTTP 200) for an unknown account
pub fn unknown_user_json() -> String {
    json!({
        "status": "error",
        "message": "user does not exist"
    })
    .to_string()
}
