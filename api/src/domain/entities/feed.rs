//! Feed view value object

use serde::Serialize;

use super::Post;

/// Homepage feed: the newest post plus a bounded list of the ones before it
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedView {
    pub latest: Option<Post>,
    pub popular: Vec<Post>,
}

impl FeedView {
    pub fn empty() -> Self {
        Self::default()
    }
}
