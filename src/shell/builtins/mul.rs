use crate::shell::{error::ShellErrorKind, registry::CommandRegistry};

pub fn mul(_: &CommandRegistry, args: &[String]) -> Result<Vec<String>, ShellErrorKind> {
    let (lhs, rhs) = super::float_pair("mul", args)?;
    Ok(vec![(lhs * rhs).to_string()])
}
