//! Tournament configuration and pre-generation validation.
//!
//! This module provides:
//! - [`TournamentConfiguration`] with the defaults the format is tuned for
//! - [`ConfigLimits`] describing the accepted parameter ranges
//! - Configuration and roster validation that collects every issue in one pass
//!
//! ## Example
//!
//! ```
//! use american_format::config::{TournamentConfiguration, validate_configuration};
//!
//! let result = validate_configuration(&TournamentConfiguration::default());
//! assert!(result.is_valid);
//! assert!(result.warnings.is_empty());
//! ```

pub mod errors;
pub mod models;
pub mod validator;

pub use errors::ConfigIssue;
pub use models::{
    AVERAGE_MINUTES_PER_MATCH, ConfigLimits, DEFAULT_POINTS_PER_MATCH, PLAYERS_PER_MATCH,
    TUNED_PLAYER_COUNT, TournamentConfiguration,
};
pub use validator::{
    ConfigValidation, validate_configuration, validate_configuration_with, validate_players,
};
