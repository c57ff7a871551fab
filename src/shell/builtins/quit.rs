use crate::shell::{error::ShellErrorKind, registry::CommandRegistry};

pub fn quit(_: &CommandRegistry, _: &[String]) -> Result<Vec<String>, ShellErrorKind> {
    Err(ShellErrorKind::Exit)
}
