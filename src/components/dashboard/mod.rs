//! Presentation shell around the connector layout.

mod menu;
mod network;
mod panels;

pub use menu::{SettingsEntry, ShieldIcon, SourceMenu};
pub use network::{NetworkBackdrop, SurfaceDefs};
pub use panels::{OutcomePanels, StatBar};
