use crate::core::{RecipeError, RecipeResult};
use crate::recipe::params::RecipeParams;
use std::process::Command;

/// Recipe template passed to the scaffolder.
const TEMPLATE: &str = "cci.cmake";

/// Invokes the external recipe scaffolder.
///
/// The scaffolder runs as a subprocess with an explicit argument array, so
/// metadata values containing quotes or shell metacharacters cannot alter
/// the invocation.
pub struct Scaffolder {
    program: String,
}

impl Default for Scaffolder {
    fn default() -> Self {
        Self {
            program: "conan".to_string(),
        }
    }
}

impl Scaffolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the scaffolder binary. Used by tests.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The argument vector for one invocation.
    fn arguments(&self, params: &RecipeParams) -> Vec<String> {
        let mut args = vec![
            "new".to_string(),
            params.reference().to_string(),
            "-m".to_string(),
            TEMPLATE.to_string(),
        ];
        for definition in params.definitions() {
            args.push("-d".to_string());
            args.push(definition);
        }
        args
    }

    /// Render the invocation for display. This string is informational;
    /// execution never goes through a shell.
    pub fn render(&self, params: &RecipeParams) -> String {
        let mut rendered = format!(
            "{} new {} -m {}",
            self.program,
            params.reference(),
            TEMPLATE
        );
        for definition in params.definitions() {
            rendered.push_str(&format!(" -d \"{}\"", definition));
        }
        rendered
    }

    /// Run the scaffolder, propagating a non-zero exit status.
    pub fn run(&self, params: &RecipeParams) -> RecipeResult<()> {
        let status = Command::new(&self.program)
            .args(self.arguments(params))
            .status()?;

        if !status.success() {
            return Err(RecipeError::SubprocessExit(status.code().unwrap_or(1)));
        }

        Ok(())
    }
}
