//! Commit feed aggregation

use standup_git::Commit;

/// One reported commit, tagged with its repository's short name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// Short display name of the owning repository
    pub repo: String,
    /// The commit itself
    pub commit: Commit,
}

impl FeedEntry {
    /// Tag `commit` with `repo`
    #[must_use]
    pub fn new(repo: impl Into<String>, commit: Commit) -> Self {
        Self {
            repo: repo.into(),
            commit,
        }
    }
}

/// All reported commits, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitFeed {
    entries: Vec<FeedEntry>,
}

impl CommitFeed {
    /// Order `entries` by commit instant
    ///
    /// The sort is stable: commits sharing a timestamp keep the order they
    /// were collected in. Nothing is filtered here.
    #[must_use]
    pub fn from_entries(mut entries: Vec<FeedEntry>) -> Self {
        entries.sort_by_key(|e| e.commit.timestamp_utc());
        Self { entries }
    }

    /// The ordered entries
    #[must_use]
    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the feed is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries oldest first
    pub fn iter(&self) -> std::slice::Iter<'_, FeedEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a CommitFeed {
    type Item = &'a FeedEntry;
    type IntoIter = std::slice::Iter<'a, FeedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for CommitFeed {
    type Item = FeedEntry;
    type IntoIter = std::vec::IntoIter<FeedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
