//! Farmgate marketing site: informational pages, a session-backed login,
//! and a role-branching signup echo.
//!
//! The crate is split hexagonally: `domain` holds transport-agnostic types
//! and ports, `inbound::http` maps requests onto them, `outbound` provides
//! the template-engine adapter, and `server` wires everything together.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
