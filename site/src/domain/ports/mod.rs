//! Driving ports consumed by inbound adapters.
//!
//! In hexagonal terms these are the interfaces HTTP handlers call without
//! knowing (or importing) the backing infrastructure, which keeps handler
//! tests deterministic: they substitute a fixture instead of wiring the
//! real collaborator.

pub mod auth_service;
pub mod page_renderer;

pub use self::auth_service::{AuthService, InMemoryAuthService};
pub use self::page_renderer::{FixturePageRenderer, PageRenderer};
