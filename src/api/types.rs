use chrono::NaiveDate;
use serde::Deserialize;

/// Shown when the provider omits the copyright field.
pub const FALLBACK_ATTRIBUTION: &str = "Public domain";

pub const TITLE_MAX_CHARS: usize = 22;
pub const EXPLANATION_MAX_CHARS: usize = 350;

const ELLIPSIS: &str = "...";

/// One record as returned by the APOD endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApodRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub media_type: MediaKind,
    pub url: Option<String>,
    pub hdurl: Option<String>,
    pub thumbnail_url: Option<String>,
    pub copyright: Option<String>,
}

/// The endpoint answers with an array for ranges and a bare object when the
/// range collapses to a single day.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApodPayload {
    Many(Vec<ApodRecord>),
    One(ApodRecord),
}

impl ApodPayload {
    pub fn into_records(self) -> Vec<ApodRecord> {
        match self {
            ApodPayload::Many(records) => records,
            ApodPayload::One(record) => vec![record],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    #[default]
    #[serde(other)]
    Unknown,
}

impl MediaKind {
    /// Label for the media panel. Unknown kinds have none and are not drawn.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            MediaKind::Image => Some("image"),
            MediaKind::Video => Some("video"),
            MediaKind::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub date: NaiveDate,
    pub title: String,
    pub explanation: String,
    pub media: MediaKind,
    pub url: String,
    pub hd_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub copyright: Option<String>,
}

impl FeedItem {
    pub fn from_record(record: ApodRecord) -> Self {
        FeedItem {
            date: record.date,
            title: html_escape::decode_html_entities(record.title.trim()).to_string(),
            explanation: html_escape::decode_html_entities(record.explanation.trim()).to_string(),
            media: record.media_type,
            url: record.url.unwrap_or_default(),
            hd_url: record.hdurl,
            thumbnail_url: record.thumbnail_url,
            copyright: record
                .copyright
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
        }
    }

    /// Title as shown on grid cards.
    pub fn short_title(&self) -> String {
        truncate_with_ellipsis(&self.title, TITLE_MAX_CHARS)
    }

    /// Explanation as shown in the detail popup. Compact layouts get a
    /// truncated excerpt, wide layouts the full text.
    pub fn explanation_for(&self, compact: bool) -> String {
        if compact {
            truncate_with_ellipsis(&self.explanation, EXPLANATION_MAX_CHARS)
        } else {
            self.explanation.clone()
        }
    }

    pub fn attribution(&self) -> &str {
        self.copyright.as_deref().unwrap_or(FALLBACK_ATTRIBUTION)
    }

    /// URL worth opening for this entry: the high-resolution image when there
    /// is one, otherwise the primary URL.
    pub fn media_url(&self) -> Option<&str> {
        let url = match self.media {
            MediaKind::Image => self.hd_url.as_deref().unwrap_or(&self.url),
            MediaKind::Video => &self.url,
            MediaKind::Unknown => return None,
        };
        (!url.is_empty()).then_some(url)
    }

    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}
