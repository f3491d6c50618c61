use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type PostId = u64;

/// Every response of the remote API wraps its payload in `data`; list
/// endpoints add `meta`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default)]
    pub is_first_page: bool,
    #[serde(default)]
    pub is_last_page: bool,
    #[serde(default)]
    pub current_page: u32,
    pub previous_page: Option<u32>,
    pub next_page: Option<u32>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub total_count: u64,
}

/// Image reference used for post media, avatars and banners.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<Media>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCount {
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub reactions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub symbol: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub reactors: Vec<String>,
}

/// Payload of `PUT /social/posts/{id}/react/{symbol}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionSummary {
    #[serde(default)]
    pub post_id: PostId,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub media: Option<Media>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    #[serde(rename = "_count", default)]
    pub count: PostCount,
}

impl Post {
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.name.as_str())
    }
}

/// What gets submitted on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
}

impl PostDraft {
    /// Trims the text fields and drops media without a URL, the way the
    /// create and edit forms submit them.
    pub fn normalized(self) -> Self {
        let body = self.body.map(|b| b.trim().to_string());
        let media = self
            .media
            .map(|m| Media {
                url: m.url.trim().to_string(),
                alt: m.alt.trim().to_string(),
            })
            .filter(|m| !m.url.is_empty());

        Self {
            title: self.title.trim().to_string(),
            body,
            tags: self.tags,
            media,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<Media>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<Media>,
    #[serde(default)]
    pub banner: Option<Media>,
    #[serde(default)]
    pub following: Vec<ProfileSummary>,
}

/// Aggregate over every symbol. This is the number to display, never a local
/// increment.
pub fn total_reactions(reactions: &[Reaction]) -> u64 {
    reactions.iter().map(|r| r.count).sum()
}
