pub mod config;
pub mod report;
pub mod seed;

pub use config::{Config, ConfigError, OutputFormat};
pub use report::{FolloweeTimeline, Report, ReportError};
pub use seed::{load_seed, Seed, SeedAccount, SeedError, SeedFollow, SeedPost};
