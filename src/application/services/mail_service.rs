/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Zimbra webmail.

use crate::application::registry::{App, AppKind};
use crate::constants::{DEFAULT_MAIL_FOLDER, MAIL_PAGE_SIZE};
use crate::error::{AppError, AppResult};
use crate::model::http::HttpClient;
use crate::model::requests::RequestOptions;
use crate::model::responses::{CountResponse, RawFolder, RawMail, RawMessage};
use crate::presentation::mail::{Attachment, Folder, Mail, MailContent, PreparedMail};
use crate::presentation::serialization::is_truthy;
use crate::presentation::user::User;
use crate::utils::parsing::safe_filename;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

// The mail page inlines its folder tree as `"folders": '<json>'`.
static FOLDERS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""folders": '(.*?)'"#).expect("folders regex is valid")
});

/// Extracts the folder tree embedded in the `zimbra/zimbra` page
pub fn parse_folders_page(page: &str) -> AppResult<Vec<Folder>> {
    let raw = FOLDERS_RE
        .captures(page)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| {
            AppError::Deserialization("no folder data found in mail page".to_string())
        })?;

    let folders: Vec<RawFolder> = serde_json::from_str(raw.as_str())?;
    Ok(folders.into_iter().map(Folder::from).collect())
}

/// Webmail service
pub struct MailService {
    http: Arc<HttpClient>,
}

impl App for MailService {
    const KIND: AppKind = AppKind::Mail;

    fn build(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

impl MailService {
    /// Number of unread mails in the inbox
    pub async fn unread_count(&self) -> AppResult<i64> {
        let response: CountResponse = self.http.get_json("zimbra/count/INBOX?unread=true").await?;
        Ok(response.count)
    }

    /// Folder tree of the account
    pub async fn get_folders(&self) -> AppResult<Vec<Folder>> {
        let page = self.http.get("zimbra/zimbra").await?;
        let folders = parse_folders_page(&page.text())?;
        debug!("Mail folders obtained: {} top-level folders", folders.len());
        Ok(folders)
    }

    /// Lists up to `limit` mails of `folder` (the inbox when `None`),
    /// reading pages of ten
    pub async fn get_mails(
        &self,
        folder: Option<&Folder>,
        unread: bool,
        limit: usize,
    ) -> AppResult<Vec<Mail>> {
        let folder_path = folder.map_or(DEFAULT_MAIL_FOLDER, |folder| folder.path.as_str());
        let encoded = urlencoding::encode(folder_path);
        let pages = limit.div_ceil(MAIL_PAGE_SIZE);

        let mut mails = Vec::new();
        for page in 0..pages {
            let path = format!("zimbra/list?folder={encoded}&page={page}&unread={unread}");
            let batch: Vec<RawMail> = self.http.get_json(&path).await?;
            let exhausted = batch.len() < MAIL_PAGE_SIZE;
            mails.extend(batch.into_iter().map(Mail::from));
            if exhausted {
                break;
            }
        }
        mails.truncate(limit);

        debug!("Mails obtained from {}: {}", folder_path, mails.len());
        Ok(mails)
    }

    /// Body and attachments of a mail
    pub async fn fetch_content(&self, mail: &Mail) -> AppResult<MailContent> {
        let raw: RawMessage = self
            .http
            .get_json(&format!("zimbra/message/{}", mail.id))
            .await?;
        Ok(MailContent::from_raw(mail.id, raw))
    }

    /// Attachments of a mail
    pub async fn attachments(&self, mail: &Mail) -> AppResult<Vec<Attachment>> {
        Ok(self.fetch_content(mail).await?.attachments)
    }

    /// Downloads an attachment into `dir`, returning the written path.
    ///
    /// Only the last component of the attachment name is kept, so the file
    /// always lands directly inside `dir`.
    pub async fn download_attachment(
        &self,
        attachment: &Attachment,
        dir: impl AsRef<Path>,
    ) -> AppResult<PathBuf> {
        let response = self.http.get(&attachment.url).await?;
        let target = dir
            .as_ref()
            .join(safe_filename(&attachment.name, &attachment.id));
        tokio::fs::write(&target, response.content()).await?;
        info!("Attachment saved to {}", target.display());
        Ok(target)
    }

    /// Sends a mail, returning the id the server gave its draft
    pub async fn send(&self, mail: &PreparedMail) -> AppResult<String> {
        let draft = self
            .http
            .request(
                "zimbra/draft",
                RequestOptions::post()
                    .json(json!({
                        "body": "New Prepared request",
                        "to": [],
                        "cc": [],
                        "bcc": [],
                        "attachments": [],
                    }))
                    .use_cache(false),
            )
            .await?
            .json::<Value>()?;

        let id = match draft.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => {
                return Err(AppError::Deserialization(format!(
                    "draft response has no id: {draft}"
                )));
            }
        };

        let response = self
            .http
            .request(
                &format!("zimbra/send?id={id}"),
                RequestOptions::post()
                    .json(mail.to_payload(&mail.recipients))
                    .use_cache(false),
            )
            .await?
            .json::<Value>()?;

        if !is_truthy(response.get("sent")) {
            warn!("Mail {} was not sent: {}", id, response);
            return Err(AppError::Rejected(format!("failed to send mail: {response}")));
        }

        info!("Mail {} sent", id);
        Ok(id)
    }

    /// Replies to `mail`.
    ///
    /// The reply goes to the original sender and recipients unless
    /// `force_redirect` is set, in which case the prepared mail's recipients
    /// are used.
    pub async fn reply(
        &self,
        mail: &Mail,
        reply: &PreparedMail,
        force_redirect: bool,
    ) -> AppResult<Value> {
        let recipients = if force_redirect {
            &reply.recipients
        } else {
            &mail.recipients
        };

        let response = self
            .http
            .request(
                &format!("zimbra/send?In-Reply-To={}", mail.id),
                RequestOptions::post()
                    .json(reply.to_payload(recipients))
                    .use_cache(false),
            )
            .await?;
        response.json()
    }

    /// Forwards `mail` with its body and attachments to `to`
    pub async fn transfer(&self, mail: &Mail, to: Vec<User>) -> AppResult<String> {
        let content = self.fetch_content(mail).await?;
        let forward = PreparedMail::new(
            mail.subject.clone().unwrap_or_default(),
            content.body,
            to,
        )
        .attachments(content.attachments.into_iter().map(|a| a.id).collect());

        self.send(&forward).await
    }
}
