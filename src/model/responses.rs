/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Payloads as the ENT endpoints send them. The services convert these into
//! the records of [`crate::presentation`].

use crate::presentation::serialization::{
    int_from_any, int_from_any_or_zero, null_as_default, string_from_any,
};
use serde::Deserialize;
use serde_json::Value;

/// `zimbra/count/{folder}`
#[derive(Debug, Clone, Deserialize)]
pub struct CountResponse {
    /// Number of matching mails
    #[serde(deserialize_with = "int_from_any")]
    pub count: i64,
}

/// Folder node embedded in the `zimbra/zimbra` page
#[derive(Debug, Clone, Deserialize)]
pub struct RawFolder {
    /// Display name
    #[serde(rename = "folderName")]
    pub folder_name: String,
    /// Numeric identifier
    #[serde(deserialize_with = "int_from_any")]
    pub id: i64,
    /// Slash-separated path, e.g. `/Inbox/School`
    pub path: String,
    /// Unread mails in this folder
    #[serde(default, deserialize_with = "int_from_any_or_zero")]
    pub unread: i64,
    /// Children
    #[serde(default, deserialize_with = "null_as_default")]
    pub folders: Vec<RawFolder>,
}

/// Entry of `zimbra/list`
#[derive(Debug, Clone, Deserialize)]
pub struct RawMail {
    /// Message id
    #[serde(deserialize_with = "int_from_any")]
    pub id: i64,
    /// Unix time in milliseconds
    #[serde(default)]
    pub date: Option<i64>,
    /// Subject line
    #[serde(default)]
    pub subject: Option<String>,
    /// Unread flag
    #[serde(default, deserialize_with = "null_as_default")]
    pub unread: bool,
    /// Whether attachments exist
    #[serde(rename = "hasAttachment", default, deserialize_with = "null_as_default")]
    pub has_attachment: bool,
    /// Sender id
    #[serde(default)]
    pub from: Option<String>,
    /// Recipient ids
    #[serde(default, deserialize_with = "null_as_default")]
    pub to: Vec<String>,
    /// Carbon copy ids
    #[serde(default, deserialize_with = "null_as_default")]
    pub cc: Vec<String>,
    /// Blind carbon copy ids
    #[serde(default, deserialize_with = "null_as_default")]
    pub bcc: Vec<String>,
    /// `[id, display name]` pairs for every user above
    #[serde(rename = "displayNames", default, deserialize_with = "null_as_default")]
    pub display_names: Vec<(String, String)>,
}

/// `zimbra/message/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct RawMessage {
    /// HTML body
    #[serde(default)]
    pub body: Option<String>,
    /// Attachment descriptors
    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<RawAttachment>,
}

/// Attachment descriptor of a message
#[derive(Debug, Clone, Deserialize)]
pub struct RawAttachment {
    /// Attachment id within the message
    #[serde(deserialize_with = "string_from_any")]
    pub id: String,
    /// Original file name
    #[serde(default)]
    pub filename: Option<String>,
    /// MIME type
    #[serde(rename = "contentType", default)]
    pub content_type: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub size: Option<u64>,
}

/// Entry of `rack/list`
#[derive(Debug, Clone, Deserialize)]
pub struct RawRackItem {
    /// Document id
    #[serde(rename = "_id")]
    pub id: String,
    /// File name
    #[serde(default)]
    pub name: Option<String>,
    /// Deposit date, `%Y-%m-%dT%H:%M%z`
    #[serde(default)]
    pub sent: Option<String>,
    /// Sender id
    #[serde(default)]
    pub from: Option<String>,
    /// Sender name
    #[serde(rename = "fromName", default)]
    pub from_name: Option<String>,
    /// Receiver id
    #[serde(default)]
    pub to: Option<String>,
    /// Receiver name
    #[serde(rename = "toName", default)]
    pub to_name: Option<String>,
    /// Stored file id
    #[serde(default)]
    pub file: Option<String>,
    /// File metadata
    #[serde(default)]
    pub metadata: Option<RawRackMetadata>,
}

/// Rack file metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRackMetadata {
    /// MIME type
    #[serde(rename = "content-type", default)]
    pub content_type: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub size: Option<u64>,
    /// Text charset
    #[serde(default)]
    pub charset: Option<String>,
}

/// `workspace/quota/user/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct QuotaResponse {
    /// Bytes used
    #[serde(default)]
    pub quota: Option<u64>,
    /// Bytes allowed
    #[serde(default)]
    pub storage: Option<u64>,
}

/// `communication/visible`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisibleResponse {
    /// Matching users
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<RawVisibleUser>,
    /// Matching groups
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<RawVisibleGroup>,
}

/// User found by a directory search
#[derive(Debug, Clone, Deserialize)]
pub struct RawVisibleUser {
    /// User id
    pub id: String,
    /// Display name
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    /// Profile, e.g. `Student`
    #[serde(default)]
    pub profile: Option<Value>,
}

/// Group found by a directory search
#[derive(Debug, Clone, Deserialize)]
pub struct RawVisibleGroup {
    /// Group id
    pub id: String,
    /// Technical name
    #[serde(default)]
    pub name: Option<String>,
    /// Display name
    #[serde(rename = "groupDisplayName", default)]
    pub group_display_name: Option<String>,
    /// Member count
    #[serde(rename = "nbUsers", default)]
    pub nb_users: Option<u64>,
    /// Profile of the members
    #[serde(default)]
    pub profile: Option<Value>,
    /// Sort key
    #[serde(rename = "sortName", default)]
    pub sort_name: Option<Value>,
}

/// `userbook/api/person`
#[derive(Debug, Clone, Deserialize)]
pub struct PersonResponse {
    /// One row per relation, the first carries the profile
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: Vec<RawPerson>,
}

/// Userbook row
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPerson {
    /// Mood keyword
    #[serde(default)]
    pub mood: Option<String>,
    /// Health notes
    #[serde(default)]
    pub health: Option<String>,
    /// Motto
    #[serde(default)]
    pub motto: Option<String>,
    /// Postal address
    #[serde(default)]
    pub address: Option<String>,
    /// Birth date as sent
    #[serde(default)]
    pub birthdate: Option<String>,
    /// Phone
    #[serde(default)]
    pub tel: Option<String>,
    /// Mail address
    #[serde(default)]
    pub email: Option<String>,
    /// Mobile phone
    #[serde(default)]
    pub mobile: Option<String>,
    /// Picture URL
    #[serde(default)]
    pub photo: Option<String>,
    /// Hobbies
    #[serde(default, deserialize_with = "null_as_default")]
    pub hobbies: Vec<RawHobby>,
    /// Related user id
    #[serde(rename = "relatedId", default)]
    pub related_id: Option<String>,
    /// Related user name
    #[serde(rename = "relatedName", default)]
    pub related_name: Option<String>,
}

/// Userbook hobby
#[derive(Debug, Clone, Deserialize)]
pub struct RawHobby {
    /// `PRIVE` or `PUBLIC`
    #[serde(default)]
    pub visibility: Option<String>,
    /// Category, e.g. `sport`
    #[serde(default)]
    pub category: Option<String>,
    /// Free text
    #[serde(default)]
    pub values: Option<String>,
}

/// Entry of `exercizer/subjects-copy`
#[derive(Debug, Clone, Deserialize)]
pub struct RawExerciseCopy {
    /// Copy id
    #[serde(deserialize_with = "int_from_any")]
    pub id: i64,
    /// Owner user id
    #[serde(default)]
    pub owner: Option<String>,
    /// Creation date
    #[serde(default)]
    pub created: Option<String>,
    /// Last modification date
    #[serde(default)]
    pub modified: Option<String>,
    /// Submission date
    #[serde(default)]
    pub submitted_date: Option<String>,
    /// Teacher score
    #[serde(default)]
    pub final_score: Option<f64>,
    /// Computed score
    #[serde(default)]
    pub calculated_score: Option<f64>,
    /// Teacher comment
    #[serde(default)]
    pub comment: Option<String>,
    /// Started by the student
    #[serde(default)]
    pub has_been_started: Option<bool>,
    /// Deleted
    #[serde(default)]
    pub is_deleted: Option<bool>,
    /// Archived
    #[serde(default)]
    pub is_archived: Option<bool>,
    /// Corrected
    #[serde(default)]
    pub is_corrected: Option<bool>,
    /// Training copy
    #[serde(default)]
    pub is_training_copy: Option<bool>,
    /// Correction in progress
    #[serde(default)]
    pub is_correction_on_going: Option<bool>,
}

/// `timeline/lastNotifications`
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineResponse {
    /// Notifications, most recent first
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<RawNotification>,
}

/// Timeline notification
#[derive(Debug, Clone, Deserialize)]
pub struct RawNotification {
    /// Notification id
    #[serde(rename = "_id")]
    pub id: String,
    /// Source app, e.g. `MESSAGERIE`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Event, e.g. `SEND-MESSAGE`
    #[serde(rename = "event-type", default)]
    pub event_type: Option<String>,
    /// Sender id
    #[serde(default)]
    pub sender: Option<String>,
    /// Template parameters
    #[serde(default, deserialize_with = "null_as_default")]
    pub params: RawNotificationParams,
    /// Rendered HTML message
    #[serde(default)]
    pub message: Option<String>,
    /// Either a date string or `{"$date": ...}`
    #[serde(default)]
    pub date: Option<Value>,
}

/// Template parameters of a notification
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNotificationParams {
    /// Sender display name
    #[serde(default)]
    pub username: Option<String>,
    /// Link to the item
    #[serde(default)]
    pub uri: Option<String>,
    /// Link to the resource
    #[serde(rename = "resourceUri", default)]
    pub resource_uri: Option<String>,
}

/// `auth/oauth2/userinfo`
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    /// User id
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Display name
    #[serde(default)]
    pub username: Option<String>,
    /// Profile type
    #[serde(rename = "type", default)]
    pub kind: Option<Value>,
    /// School level
    #[serde(default)]
    pub level: Option<String>,
    /// Group ids
    #[serde(rename = "groupsIds", default, deserialize_with = "null_as_default")]
    pub groups_ids: Vec<String>,
    /// Class ids
    #[serde(default, deserialize_with = "null_as_default")]
    pub classes: Vec<String>,
    /// School ids
    #[serde(default, deserialize_with = "null_as_default")]
    pub structures: Vec<String>,
}
