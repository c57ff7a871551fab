use crate::shell::{error::ShellErrorKind, registry::CommandRegistry};

pub fn div(_: &CommandRegistry, args: &[String]) -> Result<Vec<String>, ShellErrorKind> {
    let (lhs, rhs) = super::float_pair("div", args)?;
    Ok(vec![(lhs / rhs).to_string()])
}
