use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored news article. `id` and `create_at` are assigned by the
/// database on insert and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct News {
    pub id: i32,
    pub author: String,
    pub title: String,
    pub text: String,
    #[serde(rename = "firstHand")]
    pub first_hand: bool,
    #[serde(rename = "createAt")]
    pub create_at: DateTime<Utc>,
}
