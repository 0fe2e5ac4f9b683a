//! SmileArch Core - Tooth catalog, tip search and selection state
//!
//! This crate holds everything the landing page knows without a renderer:
//! - The fixed catalog of 32 teeth and their pregnancy care tips
//! - The search filter over that catalog
//! - The selection state machine and the info card derived from it
//! - Arch layout and per-frame easing used by the 3D scene
//! - Landing page configuration

pub mod catalog;
pub mod config;
pub mod layout;
pub mod motion;
pub mod panel;
pub mod search;
pub mod selection;

pub use catalog::{catalog, Catalog, ToothId, ToothIdError, ToothKind, ToothRecord};
pub use config::{load_config, save_default_config, ConfigError, LandingConfig};
pub use panel::{InfoCard, PanelFade};
pub use search::{filter, SEARCH_RESULT_LIMIT};
pub use selection::{Selection, SelectionAction};
