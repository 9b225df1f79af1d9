use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::storage::models::{DisplayType, FileRecord};

/// How a resolved file is sent back.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    /// The object's bytes with its upstream content type.
    Raw,
    /// The `embedFile` view.
    Embed(EmbedView),
    /// The `file` view.
    Link(LinkView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedView {
    pub url: String,
    pub uploader: String,
    pub date: String,
    pub embed: EmbedFields,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedFields {
    pub title: String,
    pub description: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkView {
    pub url: String,
    pub uploader: String,
    pub date: String,
}

/// Human readable upload date, used both on the page and in the default
/// embed description.
pub fn display_date(date: &DateTime<Utc>) -> String {
    date.format("%a %b %d %Y %H:%M:%S UTC").to_string()
}

/// Pick the delivery for `file`.
///
/// Only images get preview pages: embed when the display type asks for it,
/// otherwise a link page when `show_link` is set. Videos and every other
/// category are served raw.
pub fn shape(file: &FileRecord, cdn_base_url: &str) -> Delivery {
    if file.category() != "image" {
        return Delivery::Raw;
    }

    let url = format!("{}/{}", cdn_base_url.trim_end_matches('/'), file.object_key());
    let uploader = file.uploader.username.clone();
    let date = display_date(&file.date_uploaded);

    if file.display_type == DisplayType::Embed {
        let title = file
            .embed
            .title
            .clone()
            .unwrap_or_else(|| file.filename.clone());
        let description = file
            .embed
            .description
            .clone()
            .unwrap_or_else(|| format!("Uploaded by {uploader} on {date}."));

        return Delivery::Embed(EmbedView {
            url,
            uploader,
            date,
            embed: EmbedFields {
                title,
                description,
                color: file.embed.color.clone(),
            },
        });
    }

    if file.show_link {
        return Delivery::Link(LinkView {
            url,
            uploader,
            date,
        });
    }

    Delivery::Raw
}
