//! Curved connectors from menu anchors to the convergence hub.

mod component;
mod dom;
mod engine;
pub mod layout;
mod registry;
pub mod triggers;
mod types;

pub use component::{ConnectorConfig, ConnectorPaths, use_connector_layout};
pub use dom::{DomGeometry, anchor_terminus};
pub use engine::{ConnectorLayoutEngine, SurfaceGeometry};
pub use registry::AnchorRegistry;
pub use triggers::{AttachError, Dispatch, Trigger, TriggerSubscription};
pub use types::{AnchorItem, ConnectorCurve, ConvergencePoint, Point, QuadCurve};
