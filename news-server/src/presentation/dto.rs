use serde::Deserialize;

/// Incoming article body for both create and update.
///
/// `firstHand` is normalized here: omitting it yields `false`, on update
/// as well as on create. Missing `author`/`title`/`text` are rejected at
/// deserialization, which the JSON extractor turns into a 400.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsPayload {
    pub author: String,
    pub title: String,
    pub text: String,
    #[serde(rename = "firstHand", default)]
    pub first_hand: bool,
}
