//! Types and logic shared by the activity board front end.
//!
//! Nothing in this crate touches the browser, so it builds and tests on any
//! target.

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod message;
pub mod models;
pub mod outcome;
pub mod sequence;
pub mod view;

pub use api::{ErrorDetail, MessageResponse, Mutation};
pub use config::{BoardConfig, ConfigError};
pub use display::participant_display_name;
pub use error::{ClientError, ClientResult};
pub use message::{MessageKind, MessageSlot, TransientMessage};
pub use models::{Activity, ActivityCatalog};
pub use outcome::OutcomePlan;
pub use sequence::LoadSequencer;
pub use view::{ActivityCard, BoardState, ListState, ParticipantPill, SignupForm};
