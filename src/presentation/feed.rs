use crate::model::responses::RawNotification;
use crate::model::utils::exercise_date_from_value;
use crate::presentation::user::User;
use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Timeline notification
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct FeedItem {
    /// Notification id
    pub id: String,
    /// Source app, e.g. `MESSAGERIE`
    pub kind: Option<String>,
    /// Event, e.g. `SEND-MESSAGE`
    pub event: Option<String>,
    /// Sender
    pub sender: User,
    /// Date
    pub date: Option<NaiveDateTime>,
    /// Rendered HTML message
    pub content: Option<String>,
    /// Link to the item
    pub url: Option<String>,
}

impl From<RawNotification> for FeedItem {
    fn from(raw: RawNotification) -> Self {
        // Mongo-backed notifications wrap the date as {"$date": "..."}.
        let date = match raw.date.as_ref() {
            Some(Value::Object(inner)) => exercise_date_from_value(inner.get("$date")),
            other => exercise_date_from_value(other),
        };

        Self {
            id: raw.id,
            kind: raw.kind,
            event: raw.event_type,
            sender: User::named(raw.sender.unwrap_or_default(), raw.params.username),
            date,
            content: raw.message,
            url: raw.params.uri.or(raw.params.resource_uri),
        }
    }
}
