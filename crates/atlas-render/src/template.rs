//! Template rendering: minijinja layout, then style tags.

use minijinja::{Environment, Value};
use serde::Serialize;

use crate::error::RenderError;
use crate::mode::TextMode;
use crate::tags;
use crate::text;
use crate::theme::Theme;

/// A template registry bound to a theme.
///
/// Templates are rendered by minijinja (with `trim_blocks` and
/// `lstrip_blocks` on, so block tags do not leave blank lines) and the result
/// is passed through the theme's tag processor for the requested mode.
///
/// Besides the minijinja builtins, templates get two filters:
///
/// - `fit(n)`: truncate to `n` display columns with `…`.
/// - `escape_tags`: keep user or upstream text from being read as style tags.
pub struct Renderer {
    env: Environment<'static>,
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env);
        Self { env, theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Registers (or replaces) a named template.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Renders a registered template.
    pub fn render<S: Serialize>(
        &self,
        name: &str,
        data: &S,
        mode: TextMode,
    ) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        let laid_out = tmpl.render(Value::from_serialize(data))?;
        Ok(self.theme.tags(mode).process(&laid_out))
    }
}

fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("fit", |value: Value, width: usize| -> String {
        text::truncate_end(&value.to_string(), width, "…")
    });
    env.add_filter("escape_tags", |value: Value| -> String {
        tags::escape(&value.to_string())
    });
}
