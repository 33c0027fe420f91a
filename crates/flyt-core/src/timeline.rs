//! Timeline construction.
//!
//! Two views are built from the network:
//! - the personal timeline: one account's own posts, newest first;
//! - the main timeline: an account's posts merged with the posts of every
//!   account it follows, newest first, attributed to their authors.
//!
//! Entries are built first and rendered to display lines afterwards, so
//! callers that want structured output can skip the string form.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::account::AccountId;
use crate::age::RelativeAge;
use crate::error::NetworkError;
use crate::network::Network;
use crate::post::{Post, PostId};

/// One line of a timeline before rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub post_id: PostId,
    /// Attribution shown on the line, if any.
    pub author: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Omitted when an account views its own personal timeline.
    pub age: Option<RelativeAge>,
}

impl TimelineEntry {
    /// Display form: `[author - ]content[ (age)]`.
    pub fn render(&self) -> String {
        let mut line = match &self.author {
            Some(author) => format!("{} - {}", author, self.content),
            None => self.content.clone(),
        };
        if let Some(age) = &self.age {
            line.push(' ');
            line.push_str(&age.to_string());
        }
        line
    }
}

/// Personal timeline of `account` as seen by `viewer`.
///
/// Every post of `account` is included regardless of who is viewing; the
/// viewer only decides whether ages are shown.
pub fn personal_entries(
    network: &Network,
    viewer: AccountId,
    account: AccountId,
    now: DateTime<Utc>,
) -> Result<Vec<TimelineEntry>, NetworkError> {
    network.require(viewer)?;
    let owner = network.require(account)?;
    let own_timeline = viewer == account;

    Ok(owner
        .posts()
        .iter()
        .rev()
        .map(|post| TimelineEntry {
            post_id: post.id(),
            author: None,
            content: post.content().to_string(),
            created_at: post.created_at(),
            age: (!own_timeline).then(|| post.relative_age_at(now)),
        })
        .collect())
}

/// Main timeline of `account`: its own posts and those of everyone it
/// follows, newest first.
///
/// Posts with equal timestamps keep their collection order: the account's
/// own posts first, then each followee's in the order they were followed.
pub fn main_entries(
    network: &Network,
    account: AccountId,
    now: DateTime<Utc>,
) -> Result<Vec<TimelineEntry>, NetworkError> {
    let owner = network.require(account)?;

    let mut posts: Vec<&Post> = owner.posts().iter().collect();
    for followee in owner.following() {
        posts.extend(network.require(*followee)?.posts());
    }

    // Newest first
    posts.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

    Ok(posts
        .into_iter()
        .map(|post| TimelineEntry {
            post_id: post.id(),
            author: post
                .author()
                .and_then(|id| network.account(id))
                .map(|author| author.first_name().to_string()),
            content: post.content().to_string(),
            created_at: post.created_at(),
            age: Some(post.relative_age_at(now)),
        })
        .collect())
}

/// Write each line, in order, followed by a newline.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

fn render_lines(entries: &[TimelineEntry], echo: bool) -> Vec<String> {
    let lines: Vec<String> = entries.iter().map(TimelineEntry::render).collect();
    if echo {
        if let Err(e) = write_lines(&mut io::stdout().lock(), &lines) {
            tracing::warn!("Failed to echo timeline: {}", e);
        }
    }
    lines
}

impl Network {
    /// Rendered personal timeline of `account` as seen by `viewer`.
    /// With `echo`, each line is also printed to stdout.
    pub fn render_personal(
        &self,
        viewer: AccountId,
        account: AccountId,
        echo: bool,
    ) -> Result<Vec<String>, NetworkError> {
        self.render_personal_at(viewer, account, Utc::now(), echo)
    }

    pub fn render_personal_at(
        &self,
        viewer: AccountId,
        account: AccountId,
        now: DateTime<Utc>,
        echo: bool,
    ) -> Result<Vec<String>, NetworkError> {
        let entries = personal_entries(self, viewer, account, now)?;
        tracing::debug!(
            "Rendering personal timeline of {} for {}: {} posts",
            account,
            viewer,
            entries.len()
        );
        Ok(render_lines(&entries, echo))
    }

    /// Rendered main timeline of `account`.
    /// With `echo`, each line is also printed to stdout.
    pub fn render_main(&self, account: AccountId, echo: bool) -> Result<Vec<String>, NetworkError> {
        self.render_main_at(account, Utc::now(), echo)
    }

    pub fn render_main_at(
        &self,
        account: AccountId,
        now: DateTime<Utc>,
        echo: bool,
    ) -> Result<Vec<String>, NetworkError> {
        let entries = main_entries(self, account, now)?;
        tracing::debug!(
            "Rendering main timeline of {}: {} posts",
            account,
            entries.len()
        );
        Ok(render_lines(&entries, echo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use chrono::TimeDelta;

    #[test]
    fn test_view_own_personal_timeline() {
        let mut network = Network::new();
        let ben = network
            .create_account("bendaprile", "Ben", "D'Aprile")
            .unwrap();
        network.publish(ben, "First Post").unwrap();
        network.publish(ben, "Second Post").unwrap();

        let timeline = network.render_personal(ben, ben, true).unwrap();

        assert_eq!(timeline, vec!["Second Post", "First Post"]);
    }

    #[test]
    fn test_view_other_personal_timeline() {
        let mut network = Network::new();
        let ben = network
            .create_account("bendaprile", "Ben", "D'Aprile")
            .unwrap();
        let bob = network
            .create_account("bobdaprile", "Bob", "D'Aprile")
            .unwrap();
        let now = Utc::now();
        network
            .publish_post(ben, Post::with_timestamp(Some(ben), "First Post", now))
            .unwrap();
        network
            .publish_post(ben, Post::with_timestamp(Some(ben), "Second Post", now))
            .unwrap();

        let timeline = network.render_personal_at(bob, ben, now, false).unwrap();

        assert_eq!(
            timeline,
            vec!["Second Post (0 seconds ago)", "First Post (0 seconds ago)"]
        );
    }

    #[test]
    fn test_personal_timeline_has_one_line_per_post() {
        let mut network = Network::new();
        let ben = network
            .create_account("bendaprile", "Ben", "D'Aprile")
            .unwrap();
        for i in 0..5 {
            network.publish(ben, format!("post {}", i)).unwrap();
        }

        let timeline = network.render_personal(ben, ben, false).unwrap();

        assert_eq!(
            timeline,
            vec!["post 4", "post 3", "post 2", "post 1", "post 0"]
        );
    }

    #[test]
    fn test_empty_personal_timeline() {
        let mut network = Network::new();
        let ben = network
            .create_account("bendaprile", "Ben", "D'Aprile")
            .unwrap();

        assert!(network.render_personal(ben, ben, false).unwrap().is_empty());
    }

    #[test]
    fn test_personal_timeline_ignores_author_attribution() {
        let mut network = Network::new();
        let ben = network
            .create_account("bendaprile", "Ben", "D'Aprile")
            .unwrap();
        let bob = network
            .create_account("bobdaprile", "Bob", "D'Aprile")
            .unwrap();
        let now = Utc::now();
        network
            .publish_post(
                ben,
                Post::with_timestamp(None, "anonymous", now - TimeDelta::minutes(3)),
            )
            .unwrap();

        let entries = personal_entries(&network, bob, ben, now).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].author, None);
        assert_eq!(entries[0].render(), "anonymous (3 minutes ago)");
    }

    #[test]
    fn test_view_main_timeline() {
        let now = Utc::now();
        let sample = fixtures::sample_network(now);

        let timeline = sample
            .network
            .render_main_at(sample.charlie, now, true)
            .unwrap();

        assert_eq!(
            timeline,
            vec![
                "Charlie - I'm in New York today! Anyone wants to have a coffee? (1 hours ago)",
                "Bob - Good game though. (2 hours ago)",
                "Bob - Darn! We lost! (3 hours ago)",
                "Ben - I love the weather today. (4 hours ago)",
            ]
        );
    }

    #[test]
    fn test_main_timeline_only_includes_followed_accounts() {
        let now = Utc::now();
        let sample = fixtures::sample_network(now);

        // Ben follows nobody
        let timeline = sample.network.render_main_at(sample.ben, now, false).unwrap();

        assert_eq!(timeline, vec!["Ben - I love the weather today. (4 hours ago)"]);
    }

    #[test]
    fn test_main_timeline_anonymous_post() {
        let mut network = Network::new();
        let ben = network
            .create_account("bendaprile", "Ben", "D'Aprile")
            .unwrap();
        let now = Utc::now();
        network
            .publish_post(
                ben,
                Post::with_timestamp(None, "Who wrote this?", now - TimeDelta::days(2)),
            )
            .unwrap();

        let timeline = network.render_main_at(ben, now, false).unwrap();

        assert_eq!(timeline, vec!["Who wrote this? (2 days ago)"]);
    }

    #[test]
    fn test_main_timeline_unknown_author_renders_anonymously() {
        let mut network = Network::new();
        let ben = network
            .create_account("bendaprile", "Ben", "D'Aprile")
            .unwrap();
        let now = Utc::now();
        network
            .publish_post(
                ben,
                Post::with_timestamp(Some(AccountId(99)), "ghost", now),
            )
            .unwrap();

        let timeline = network.render_main_at(ben, now, false).unwrap();

        assert_eq!(timeline, vec!["ghost (0 seconds ago)"]);
    }

    #[test]
    fn test_main_timeline_ties_keep_collection_order() {
        let mut network = Network::new();
        let ben = network
            .create_account("bendaprile", "Ben", "D'Aprile")
            .unwrap();
        let bob = network
            .create_account("bobdaprile", "Bob", "D'Aprile")
            .unwrap();
        let carl = network
            .create_account("carlsagan", "Carl", "Sagan")
            .unwrap();
        let at = Utc::now() - TimeDelta::minutes(5);

        network
            .publish_post(carl, Post::with_timestamp(Some(carl), "carl", at))
            .unwrap();
        network
            .publish_post(bob, Post::with_timestamp(Some(bob), "bob", at))
            .unwrap();
        network
            .publish_post(ben, Post::with_timestamp(Some(ben), "ben 1", at))
            .unwrap();
        network
            .publish_post(ben, Post::with_timestamp(Some(ben), "ben 2", at))
            .unwrap();
        network.follow(ben, carl).unwrap();
        network.follow(ben, bob).unwrap();

        let entries = main_entries(&network, ben, at).unwrap();
        let contents: Vec<&str> = entries.iter().map(|e| e.content.as_str()).collect();

        assert_eq!(contents, vec!["ben 1", "ben 2", "carl", "bob"]);
    }

    #[test]
    fn test_empty_main_timeline() {
        let mut network = Network::new();
        let ben = network
            .create_account("bendaprile", "Ben", "D'Aprile")
            .unwrap();

        assert!(network.render_main(ben, false).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_account_is_an_error() {
        let network = Network::new();

        assert_eq!(
            network.render_main(AccountId(0), false),
            Err(NetworkError::UnknownAccount(AccountId(0)))
        );
        assert_eq!(
            network.render_personal(AccountId(0), AccountId(0), false),
            Err(NetworkError::UnknownAccount(AccountId(0)))
        );
    }

    #[test]
    fn test_write_lines_in_order() {
        let now = Utc::now();
        let sample = fixtures::sample_network(now);
        let lines = sample
            .network
            .render_main_at(sample.charlie, now, false)
            .unwrap();

        let mut out = Vec::new();
        write_lines(&mut out, &lines).unwrap();

        let written = String::from_utf8(out).unwrap();
        let written: Vec<&str> = written.lines().collect();
        assert_eq!(written, lines);
    }

    #[test]
    fn test_echo_returns_same_lines() {
        let now = Utc::now();
        let sample = fixtures::sample_network(now);

        let quiet = sample
            .network
            .render_main_at(sample.charlie, now, false)
            .unwrap();
        let echoed = sample
            .network
            .render_main_at(sample.charlie, now, true)
            .unwrap();
        assert_eq!(quiet, echoed);

        let quiet = sample
            .network
            .render_personal_at(sample.ben, sample.bob, now, false)
            .unwrap();
        let echoed = sample
            .network
            .render_personal_at(sample.ben, sample.bob, now, true)
            .unwrap();
        assert_eq!(quiet, echoed);
    }

    #[test]
    fn test_entry_serializes() {
        let now = Utc::now();
        let sample = fixtures::sample_network(now);

        let entries = main_entries(&sample.network, sample.charlie, now).unwrap();
        let json = serde_json::to_value(&entries[0]).unwrap();

        assert_eq!(json["author"], "Charlie");
        assert_eq!(json["age"]["value"], 1);
        assert_eq!(json["age"]["unit"], "hours");
    }
}
