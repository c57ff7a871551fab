use crate::shell::{error::ShellErrorKind, registry::CommandRegistry};

pub fn add(_: &CommandRegistry, args: &[String]) -> Result<Vec<String>, ShellErrorKind> {
    let (lhs, rhs) = super::float_pair("add", args)?;
    Ok(vec![(lhs + rhs).to_string()])
}
