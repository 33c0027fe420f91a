use std::path::Path;

use chrono::{DateTime, TimeDelta, Utc};
use flyt_core::{Network, NetworkError, Post};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid seed: {0}")]
    Network(#[from] NetworkError),
}

/// Accounts, posts and follows to load into a fresh network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    pub accounts: Vec<SeedAccount>,
    #[serde(default)]
    pub posts: Vec<SeedPost>,
    #[serde(default)]
    pub follows: Vec<SeedFollow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAccount {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// A post published by `account`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedPost {
    pub account: String,
    pub content: String,
    /// Backdates the post this many seconds before load time.
    #[serde(default)]
    pub age_secs: Option<u32>,
    /// Publish without an author.
    #[serde(default)]
    pub anonymous: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFollow {
    pub follower: String,
    pub followee: String,
}

impl Seed {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Ben, Bob and Charlie: four posts an hour apart, Charlie following the other two.
    pub fn sample() -> Self {
        let account = |username: &str, first_name: &str, last_name: &str| SeedAccount {
            username: username.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };
        let post = |account: &str, content: &str, hours_ago: u32| SeedPost {
            account: account.to_string(),
            content: content.to_string(),
            age_secs: Some(hours_ago * 3600),
            anonymous: false,
        };
        let follow = |follower: &str, followee: &str| SeedFollow {
            follower: follower.to_string(),
            followee: followee.to_string(),
        };

        Seed {
            accounts: vec![
                account("bendaprile", "Ben", "D'Aprile"),
                account("bobdaprile", "Bob", "D'Aprile"),
                account("charliebrown", "Charlie", "Brown"),
            ],
            posts: vec![
                post("bendaprile", "I love the weather today.", 4),
                post("bobdaprile", "Darn! We lost!", 3),
                post("bobdaprile", "Good game though.", 2),
                post(
                    "charliebrown",
                    "I'm in New York today! Anyone wants to have a coffee?",
                    1,
                ),
            ],
            follows: vec![
                follow("charliebrown", "bendaprile"),
                follow("charliebrown", "bobdaprile"),
            ],
        }
    }

    /// Build a network, with post ages measured back from `now`.
    /// Posts are published in seed order.
    pub fn build(&self, now: DateTime<Utc>) -> Result<Network, SeedError> {
        let mut network = Network::new();

        for account in &self.accounts {
            network.create_account(
                account.username.as_str(),
                account.first_name.as_str(),
                account.last_name.as_str(),
            )?;
        }

        for post in &self.posts {
            let owner = network.resolve(&post.account)?;
            let author = (!post.anonymous).then_some(owner);
            let created_at = match post.age_secs {
                Some(secs) => now - TimeDelta::seconds(i64::from(secs)),
                None => now,
            };
            network.publish_post(
                owner,
                Post::with_timestamp(author, post.content.as_str(), created_at),
            )?;
        }

        for follow in &self.follows {
            let follower = network.resolve(&follow.follower)?;
            let followee = network.resolve(&follow.followee)?;
            network.follow(follower, followee)?;
        }

        tracing::info!(
            "Loaded {} accounts, {} posts, {} follows",
            self.accounts.len(),
            self.posts.len(),
            self.follows.len()
        );
        Ok(network)
    }
}

/// Load the seed at `path`, or the built-in sample when no path is given.
pub fn load_seed(path: Option<&Path>) -> Result<Seed, SeedError> {
    match path {
        Some(path) => {
            tracing::info!("Loading seed from {}", path.display());
            Seed::from_file(path)
        }
        None => {
            tracing::info!("No seed path configured, using the sample network");
            Ok(Seed::sample())
        }
    }
}
