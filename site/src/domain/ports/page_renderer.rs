//! Driving port for page rendering.
//!
//! Handlers hand a view name and a JSON context object to this port and get
//! markup back. The templating engine is an external collaborator hidden
//! behind the trait, so handler tests assert against a deterministic
//! fixture instead of parsing real HTML.

use serde_json::Value;

use crate::domain::Error;

/// Render a named view with a JSON object context into an HTML body.
pub trait PageRenderer: Send + Sync {
    /// Produce markup for `view` with the supplied context.
    fn render(&self, view: &str, context: &Value) -> Result<String, Error>;
}

/// Deterministic renderer for handler tests.
///
/// Emits the view name followed by the serialised context so assertions can
/// check both which view a handler picked and what it passed along.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePageRenderer;

impl PageRenderer for FixturePageRenderer {
    fn render(&self, view: &str, context: &Value) -> Result<String, Error> {
        Ok(format!("view={view} context={context}"))
    }
}
