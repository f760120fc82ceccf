pub mod feed;
pub mod item;
pub mod page;

pub use feed::FeedItem;
pub use item::{Comment, DetailItem};
pub use page::Page;

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing field. The API sends `null` for
/// the user and points of job posts and for deleted comments.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
