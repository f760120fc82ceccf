use serde::{Deserialize, Serialize};

/// Full record for one story, including its whole comment tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailItem {
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub user: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub time_ago: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub comments: Vec<Comment>,
}

/// A reply in a comment tree. `level` is assigned by the API: 0 for
/// top-level comments and one more for each level of nesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub user: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub time_ago: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub level: u32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub comments: Vec<Comment>,
}

impl Comment {
    pub fn new(id: u64, level: u32) -> Self {
        Self {
            id,
            user: String::new(),
            time_ago: String::new(),
            content: String::new(),
            level,
            comments: Vec::new(),
        }
    }

    pub fn with_replies(mut self, replies: Vec<Comment>) -> Self {
        self.comments = replies;
        self
    }

    pub fn has_replies(&self) -> bool {
        !self.comments.is_empty()
    }
}
