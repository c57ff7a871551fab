use crate::shell::{error::ShellErrorKind, registry::CommandRegistry};

pub fn sub(_: &CommandRegistry, args: &[String]) -> Result<Vec<String>, ShellErrorKind> {
    let (lhs, rhs) = super::float_pair("sub", args)?;
    Ok(vec![(lhs - rhs).to_string()])
}
