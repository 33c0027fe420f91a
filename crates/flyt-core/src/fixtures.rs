//! Sample networks for tests.

use chrono::{DateTime, TimeDelta, Utc};

use crate::account::AccountId;
use crate::network::Network;
use crate::post::Post;

/// Three accounts with posts one hour apart; Charlie follows Ben and Bob.
pub struct SampleNetwork {
    pub network: Network,
    pub ben: AccountId,
    pub bob: AccountId,
    pub charlie: AccountId,
}

/// Build the sample network with post times relative to `now`:
/// Ben 4h ago, Bob 3h and 2h ago, Charlie 1h ago.
pub fn sample_network(now: DateTime<Utc>) -> SampleNetwork {
    let mut network = Network::new();
    let ben = network
        .create_account("bendaprile", "Ben", "D'Aprile")
        .unwrap();
    let bob = network
        .create_account("bobdaprile", "Bob", "D'Aprile")
        .unwrap();
    let charlie = network
        .create_account("charliebrown", "Charlie", "Brown")
        .unwrap();

    let posts = [
        (ben, "I love the weather today.", 4),
        (bob, "Darn! We lost!", 3),
        (bob, "Good game though.", 2),
        (
            charlie,
            "I'm in New York today! Anyone wants to have a coffee?",
            1,
        ),
    ];
    for (account, content, hours_ago) in posts {
        let post = Post::with_timestamp(Some(account), content, now - TimeDelta::hours(hours_ago));
        network.publish_post(account, post).unwrap();
    }

    network.follow(charlie, ben).unwrap();
    network.follow(charlie, bob).unwrap();

    SampleNetwork {
        network,
        ben,
        bob,
        charlie,
    }
}
