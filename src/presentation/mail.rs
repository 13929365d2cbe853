/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::responses::{RawAttachment, RawFolder, RawMail, RawMessage};
use crate::model::utils::from_timestamp_millis;
use crate::presentation::user::User;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashMap;

/// Mail folder, with its subfolders
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct Folder {
    /// Numeric id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Slash-separated path, passed back to `MailService::get_mails`
    pub path: String,
    /// Unread mails
    pub unread: i64,
    /// Children
    pub subfolders: Vec<Folder>,
}

impl From<RawFolder> for Folder {
    fn from(raw: RawFolder) -> Self {
        Self {
            id: raw.id,
            name: raw.folder_name,
            path: raw.path,
            unread: raw.unread,
            subfolders: raw.folders.into_iter().map(Folder::from).collect(),
        }
    }
}

impl Folder {
    /// Depth-first search by path
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&Folder> {
        if self.path == path {
            return Some(self);
        }
        self.subfolders.iter().find_map(|folder| folder.find(path))
    }
}

/// Sender and recipients of a mail
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct MailRecipients {
    /// Sender, absent on prepared mails
    pub sender: Option<User>,
    /// Recipients
    pub to: Vec<User>,
    /// Carbon copies
    pub cc: Vec<User>,
    /// Blind carbon copies
    pub bcc: Vec<User>,
}

impl MailRecipients {
    /// Recipient ids as the send endpoint expects them
    #[must_use]
    pub fn to_payload(&self) -> Value {
        let ids = |users: &[User]| users.iter().map(|u| u.id.clone()).collect::<Vec<_>>();
        json!({
            "to": ids(&self.to),
            "cc": ids(&self.cc),
            "bcc": ids(&self.bcc),
        })
    }
}

/// Mail as listed in a folder. The body is fetched separately.
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct Mail {
    /// Message id
    pub id: i64,
    /// Reception date
    pub date: Option<DateTime<Utc>>,
    /// Subject line
    pub subject: Option<String>,
    /// Unread flag
    pub unread: bool,
    /// Whether attachments exist
    pub has_attachment: bool,
    /// Sender and recipients
    pub recipients: MailRecipients,
}

impl From<RawMail> for Mail {
    fn from(raw: RawMail) -> Self {
        let names: HashMap<String, String> = raw.display_names.into_iter().collect();
        let user = |id: String| {
            let name = names.get(&id).cloned();
            User::named(id, name)
        };

        Self {
            id: raw.id,
            date: raw.date.and_then(from_timestamp_millis),
            subject: raw.subject,
            unread: raw.unread,
            has_attachment: raw.has_attachment,
            recipients: MailRecipients {
                sender: raw.from.map(user),
                to: raw.to.into_iter().map(user).collect(),
                cc: raw.cc.into_iter().map(user).collect(),
                bcc: raw.bcc.into_iter().map(user).collect(),
            },
        }
    }
}

/// Body and attachments of a mail
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct MailContent {
    /// Mail the content belongs to
    pub mail_id: i64,
    /// HTML body
    pub body: String,
    /// Attachments
    pub attachments: Vec<Attachment>,
}

impl MailContent {
    /// Builds the content of mail `mail_id`
    pub fn from_raw(mail_id: i64, raw: RawMessage) -> Self {
        Self {
            mail_id,
            body: raw.body.unwrap_or_default(),
            attachments: raw
                .attachments
                .into_iter()
                .map(|attachment| Attachment::from_raw(mail_id, attachment))
                .collect(),
        }
    }
}

/// Mail attachment
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct Attachment {
    /// Mail holding the attachment
    pub mail_id: i64,
    /// Attachment id within the mail
    pub id: String,
    /// Download path, relative to the portal root
    pub url: String,
    /// File name
    pub name: String,
    /// MIME type
    pub content_type: Option<String>,
    /// Size in bytes
    pub size: Option<u64>,
}

impl Attachment {
    /// Builds an attachment of mail `mail_id`
    pub fn from_raw(mail_id: i64, raw: RawAttachment) -> Self {
        Self {
            mail_id,
            url: format!("zimbra/message/{mail_id}/attachment/{}", raw.id),
            name: raw.filename.unwrap_or_else(|| raw.id.clone()),
            id: raw.id,
            content_type: raw.content_type,
            size: raw.size,
        }
    }
}

/// Mail ready to be sent.
///
/// ```
/// use ent_client::presentation::{PreparedMail, User};
///
/// let mail = PreparedMail::new("Homework", "<p>See attached</p>", vec![User::from_id("u1")])
///     .cc(vec![User::from_id("u2")]);
/// assert_eq!(mail.recipients.to.len(), 1);
/// assert_eq!(mail.recipients.cc.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct PreparedMail {
    /// Subject line
    pub subject: String,
    /// HTML body
    pub content: String,
    /// Ids of attachments already uploaded
    pub attachments: Vec<String>,
    /// Recipients
    pub recipients: MailRecipients,
}

impl PreparedMail {
    /// Mail addressed to `to`
    pub fn new(subject: impl Into<String>, content: impl Into<String>, to: Vec<User>) -> Self {
        Self {
            subject: subject.into(),
            content: content.into(),
            attachments: Vec::new(),
            recipients: MailRecipients {
                sender: None,
                to,
                cc: Vec::new(),
                bcc: Vec::new(),
            },
        }
    }

    /// Sets the carbon copies
    #[must_use]
    pub fn cc(mut self, cc: Vec<User>) -> Self {
        self.recipients.cc = cc;
        self
    }

    /// Sets the blind carbon copies
    #[must_use]
    pub fn bcc(mut self, bcc: Vec<User>) -> Self {
        self.recipients.bcc = bcc;
        self
    }

    /// Sets uploaded attachment ids
    #[must_use]
    pub fn attachments(mut self, attachments: Vec<String>) -> Self {
        self.attachments = attachments;
        self
    }

    /// Payload of `zimbra/send`, recipients taken from `recipients`
    #[must_use]
    pub fn to_payload(&self, recipients: &MailRecipients) -> Value {
        let mut payload = json!({
            "attachments": self.attachments,
            "body": self.content,
            "subject": self.subject,
        });
        if let (Value::Object(payload), Value::Object(ids)) =
            (&mut payload, recipients.to_payload())
        {
            payload.extend(ids);
        }
        payload
    }
}
