use std::collections::HashMap;

use crate::account::{Account, AccountId};
use crate::error::NetworkError;
use crate::post::{Post, PostId};

/// Result of a follow request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowOutcome {
    /// The relation was recorded on both sides.
    Followed,
    /// The follower already followed the target; nothing changed.
    AlreadyFollowing,
    /// An account tried to follow itself; nothing changed.
    SelfFollow,
}

/// Arena owning every account of one feed.
///
/// Accounts refer to each other by [`AccountId`], so the follow graph can be
/// cyclic without shared ownership. Ids are handed out in creation order and
/// never reused.
#[derive(Debug, Default)]
pub struct Network {
    accounts: Vec<Account>,
    by_username: HashMap<String, AccountId>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new account. Usernames are unique within a network.
    pub fn create_account(
        &mut self,
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<AccountId, NetworkError> {
        let username = username.into();
        if self.by_username.contains_key(&username) {
            return Err(NetworkError::DuplicateUsername(username));
        }

        let id = AccountId(self.accounts.len());
        self.by_username.insert(username.clone(), id);
        self.accounts
            .push(Account::new(id, username, first_name, last_name));

        tracing::debug!("Created {}", id);
        Ok(id)
    }

    pub fn lookup(&self, username: &str) -> Option<AccountId> {
        self.by_username.get(username).copied()
    }

    /// Like [`lookup`](Self::lookup), but an unknown username is an error.
    pub fn resolve(&self, username: &str) -> Result<AccountId, NetworkError> {
        self.lookup(username)
            .ok_or_else(|| NetworkError::UnknownUsername(username.to_string()))
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(id.0)
    }

    /// All accounts in creation order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub(crate) fn require(&self, id: AccountId) -> Result<&Account, NetworkError> {
        self.account(id).ok_or(NetworkError::UnknownAccount(id))
    }

    fn require_mut(&mut self, id: AccountId) -> Result<&mut Account, NetworkError> {
        self.accounts
            .get_mut(id.0)
            .ok_or(NetworkError::UnknownAccount(id))
    }

    /// Publish `content` as a new post by `account`, timestamped now.
    pub fn publish(
        &mut self,
        account: AccountId,
        content: impl Into<String>,
    ) -> Result<PostId, NetworkError> {
        self.publish_post(account, Post::new(Some(account), content))
    }

    /// Append an already-built post to `account`'s posts.
    ///
    /// The post's author is not checked against `account`; anonymous posts
    /// and posts with an explicit timestamp are accepted as-is.
    pub fn publish_post(&mut self, account: AccountId, post: Post) -> Result<PostId, NetworkError> {
        let id = post.id();
        self.require_mut(account)?.push_post(post);

        tracing::debug!("{} published post {}", account, id);
        Ok(id)
    }

    /// Make `follower` follow `followee`.
    ///
    /// Following yourself or following the same account twice leaves both
    /// relation lists unchanged.
    pub fn follow(
        &mut self,
        follower: AccountId,
        followee: AccountId,
    ) -> Result<FollowOutcome, NetworkError> {
        self.require(follower)?;
        self.require(followee)?;

        if follower == followee {
            tracing::warn!("{} cannot follow itself", follower);
            return Ok(FollowOutcome::SelfFollow);
        }

        if !self.require_mut(follower)?.add_following(followee) {
            tracing::debug!("{} already follows {}", follower, followee);
            return Ok(FollowOutcome::AlreadyFollowing);
        }
        self.require_mut(followee)?.add_follower(follower);

        tracing::debug!("{} now follows {}", follower, followee);
        Ok(FollowOutcome::Followed)
    }
}
