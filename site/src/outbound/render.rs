//! MiniJinja-backed implementation of the page renderer port.
//!
//! Templates are compiled into the binary so the server has no runtime
//! filesystem dependency. Undefined behaviour is strict: a handler passing
//! an incomplete context fails loudly instead of rendering a hole.

use minijinja::{Environment, UndefinedBehavior};
use serde_json::Value;

use crate::domain::Error;
use crate::domain::ports::PageRenderer;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("features.html", include_str!("../../templates/features.html")),
    ("pricing.html", include_str!("../../templates/pricing.html")),
    ("contact.html", include_str!("../../templates/contact.html")),
    ("login.html", include_str!("../../templates/login.html")),
    ("signup.html", include_str!("../../templates/signup.html")),
    ("dashboard.html", include_str!("../../templates/dashboard.html")),
];

/// Renderer over the compiled-in template set.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Load and parse every template.
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        for (name, source) in TEMPLATES {
            env.add_template(name, source)
                .map_err(|error| Error::internal(format!("failed to load template {name}: {error}")))?;
        }
        Ok(Self { env })
    }
}

impl PageRenderer for MiniJinjaRenderer {
    fn render(&self, view: &str, context: &Value) -> Result<String, Error> {
        let name = format!("{view}.html");
        let template = self
            .env
            .get_template(&name)
            .map_err(|_| Error::not_found(format!("unknown view: {view}")))?;
        template
            .render(context)
            .map_err(|error| Error::internal(format!("failed to render {view}: {error}")))
    }
}
