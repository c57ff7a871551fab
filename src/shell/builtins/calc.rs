use crate::shell::{
    error::ShellErrorKind,
    expr::{self, ExprError},
    registry::CommandRegistry,
};

/// Evaluate the arguments as one arithmetic expression.
///
/// Arguments are joined with single spaces, so `calc ( 1 + 2 ) * 3` and a
/// piped result list both form one expression string.
pub fn calc(_: &CommandRegistry, args: &[String]) -> Result<Vec<String>, ShellErrorKind> {
    if args.is_empty() {
        return Err(ShellErrorKind::TooFewArguments {
            name: "calc",
            expected: 1,
            received: 0,
        });
    }

    let expression = args.join(" ");
    let value = expr::eval_expression(&expression)
        .map_err(|error| ExprError::new(error, expression.clone(), String::from("calc")))?;

    Ok(vec![value.to_string()])
}
