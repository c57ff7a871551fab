use crate::shell::{error::ShellErrorKind, registry::CommandRegistry};

pub fn hex(_: &CommandRegistry, args: &[String]) -> Result<Vec<String>, ShellErrorKind> {
    let value = super::integer_arg("hex", args)?;
    Ok(vec![format!("0x{value:x}")])
}
