use crate::shell::{error::ShellErrorKind, registry::CommandRegistry};

/// Print the arguments joined with spaces. Produces no results, so a piped
/// stage after `echo` only sees its own bound arguments.
pub fn echo(_: &CommandRegistry, args: &[String]) -> Result<Vec<String>, ShellErrorKind> {
    println!("{}", args.join(" "));
    Ok(Vec::new())
}
