use crate::shell::{error::ShellErrorKind, registry::CommandRegistry};

/// Binary rendition of the argument, zero-padded to the smallest of 8, 16,
/// 32 or 64 bits the value fits in.
pub fn bin(_: &CommandRegistry, args: &[String]) -> Result<Vec<String>, ShellErrorKind> {
    let value = super::integer_arg("bin", args)?;
    let text = if value <= u8::MAX as u64 {
        format!("0b{value:08b}")
    } else if value <= u16::MAX as u64 {
        format!("0b{value:016b}")
    } else if value <= u32::MAX as u64 {
        format!("0b{value:032b}")
    } else {
        format!("0b{value:064b}")
    };
    Ok(vec![text])
}
