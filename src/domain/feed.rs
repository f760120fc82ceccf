use serde::{Deserialize, Serialize};

/// One story from the listing resource.
///
/// `read` is session-local and never sent by the API; it starts out false
/// and flips to true once the story's detail view has been opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub user: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub time_ago: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub comments_count: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub points: u64,
    #[serde(skip)]
    pub read: bool,
}

impl FeedItem {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: String::new(),
            user: String::new(),
            time_ago: String::new(),
            content: String::new(),
            comments_count: 0,
            points: 0,
            read: false,
        }
    }

    pub fn detail_route(&self) -> String {
        format!("#/show/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_listing_record() {
        let json = r#"{
            "id": 42,
            "title": "Show HN: A thing",
            "points": 120,
            "user": "alice",
            "time": 1700000000,
            "time_ago": "3 hours ago",
            "comments_count": 17,
            "type": "link",
            "url": "https://example.com/thing",
            "domain": "example.com"
        }"#;
        let item: FeedItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.id, 42);
        assert_eq!(item.title, "Show HN: A thing");
        assert_eq!(item.points, 120);
        assert_eq!(item.comments_count, 17);
        assert_eq!(item.user, "alice");
        assert_eq!(item.time_ago, "3 hours ago");
        assert!(!item.read);
    }

    #[test]
    fn test_missing_user_defaults_to_empty() {
        // job postings come without a user or points
        let json = r#"{"id": 7, "title": "We're hiring", "time_ago": "1 day ago", "comments_count": 0}"#;
        let item: FeedItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.user, "");
        assert_eq!(item.points, 0);
    }

    #[test]
    fn test_job_post_with_null_user_and_points() {
        let json = r#"[
            {"id": 1, "title": "Story", "points": 12, "user": "bob", "time_ago": "1 hour ago", "comments_count": 3, "url": "https://example.com"},
            {"id": 2, "title": "Acme is hiring", "points": null, "user": null, "time_ago": "2 hours ago", "comments_count": 0, "url": null}
        ]"#;
        let items: Vec<FeedItem> = serde_json::from_str(json).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].user, "");
        assert_eq!(items[1].points, 0);
        assert_eq!(items[1].url, "");
        assert_eq!(items[0].user, "bob");
    }

    #[test]
    fn test_read_flag_is_not_taken_from_the_wire() {
        let json = r#"{"id": 1, "title": "t", "read": true}"#;
        let item: FeedItem = serde_json::from_str(json).unwrap();
        assert!(!item.read);
    }

    #[test]
    fn test_detail_route() {
        assert_eq!(FeedItem::new(8863, "t").detail_route(), "#/show/8863");
    }
}
