//! Connector layout engine and the dashboard pieces around it.

pub mod connectors;
pub mod dashboard;
