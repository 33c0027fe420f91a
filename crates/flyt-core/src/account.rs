use serde::{Deserialize, Serialize};

use crate::post::Post;

/// Index of an account within its [`Network`](crate::Network).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub usize);

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "account-{}", self.0)
    }
}

/// An account: fixed identity, its own posts, and its place in the follow graph.
///
/// Accounts are owned by a `Network`; follow relations are stored as ids and
/// only the network mutates them, keeping `following` and `followers` in step.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    username: String,
    first_name: String,
    last_name: String,
    posts: Vec<Post>,
    following: Vec<AccountId>,
    followers: Vec<AccountId>,
}

impl Account {
    pub(crate) fn new(
        id: AccountId,
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            posts: Vec::new(),
            following: Vec::new(),
            followers: Vec::new(),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Posts in publish order, oldest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Copy of the posts in publish order.
    pub fn all_posts(&self) -> Vec<Post> {
        self.posts.clone()
    }

    /// Accounts this account follows, in the order they were followed.
    pub fn following(&self) -> &[AccountId] {
        &self.following
    }

    /// Accounts following this one, in the order they started.
    pub fn followers(&self) -> &[AccountId] {
        &self.followers
    }

    pub fn is_following(&self, other: AccountId) -> bool {
        self.following.contains(&other)
    }

    pub(crate) fn push_post(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// Returns false if `other` was already followed.
    pub(crate) fn add_following(&mut self, other: AccountId) -> bool {
        if self.following.contains(&other) {
            return false;
        }
        self.following.push(other);
        true
    }

    pub(crate) fn add_follower(&mut self, other: AccountId) -> bool {
        if self.followers.contains(&other) {
            return false;
        }
        self.followers.push(other);
        true
    }
}
