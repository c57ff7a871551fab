use crate::shell::{error::ShellErrorKind, registry::CommandRegistry};

/// Inclusive integer range as decimal strings; empty when the lower bound
/// exceeds the upper one.
pub fn iota(_: &CommandRegistry, args: &[String]) -> Result<Vec<String>, ShellErrorKind> {
    let (minimum, maximum): (u64, u64) = match args {
        [minimum, maximum, ..] => (minimum.parse()?, maximum.parse()?),
        _ => {
            return Err(ShellErrorKind::TooFewArguments {
                name: "iota",
                expected: 2,
                received: args.len(),
            })
        }
    };

    Ok((minimum..=maximum).map(|index| index.to_string()).collect())
}
