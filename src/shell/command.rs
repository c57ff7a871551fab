use super::{error::ShellErrorKind, registry::CommandRegistry};

/// Signature shared by every command action.
///
/// The registry is passed in so higher-order commands like `apply` can
/// resolve the commands they operate on.
pub type CommandAction = fn(&CommandRegistry, &[String]) -> Result<Vec<String>, ShellErrorKind>;

/// Declared argument count of a command.
///
/// This is a hint, not an enforced contract. `apply` uses it to split its
/// fixed leading arguments from the mapped tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Variadic,
}

/// A named unit of behavior: an action fn plus the arguments already bound to
/// it and the subcommands chained after it in a pipeline.
///
/// Registry prototypes carry no bound arguments and no subcommands. Resolving
/// a pipeline segment clones the prototype and binds the parsed arguments
/// onto the clone; the bound instance lives only as long as one queued
/// pipeline execution.
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    arity: Arity,
    args: Vec<String>,
    action: CommandAction,
    subcommands: Vec<Command>,
}

impl Command {
    pub fn new(name: impl Into<String>, arity: Arity, action: CommandAction) -> Self {
        Command {
            name: name.into(),
            arity,
            args: Vec::new(),
            action,
            subcommands: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn subcommands(&self) -> &[Command] {
        &self.subcommands
    }

    /// Clone this command with `arguments` appended after any already bound.
    pub fn bind(&self, arguments: impl IntoIterator<Item = String>) -> Command {
        let mut command = self.clone();
        command.args.extend(arguments);
        command
    }

    pub fn push_subcommand(&mut self, subcommand: Command) {
        self.subcommands.push(subcommand);
    }

    /// Run the action with the bound arguments followed by `piped` (the
    /// previous pipeline stage's result list).
    pub fn invoke(
        &self,
        registry: &CommandRegistry,
        piped: &[String],
    ) -> Result<Vec<String>, ShellErrorKind> {
        let mut arguments = self.args.clone();
        arguments.extend_from_slice(piped);
        (self.action)(registry, &arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reverse(_: &CommandRegistry, args: &[String]) -> Result<Vec<String>, ShellErrorKind> {
        Ok(args.iter().rev().cloned().collect())
    }

    #[test]
    fn bind_appends_after_existing_arguments() {
        let prototype = Command::new("reverse", Arity::Variadic, reverse);
        let bound = prototype.bind(["a".to_string(), "b".to_string()]);
        let rebound = bound.bind(["c".to_string()]);

        assert!(prototype.args().is_empty());
        assert_eq!(bound.args(), ["a", "b"]);
        assert_eq!(rebound.args(), ["a", "b", "c"]);
    }

    #[test]
    fn invoke_appends_piped_results_after_bound_arguments() {
        let registry = CommandRegistry::new();
        let command = Command::new("reverse", Arity::Variadic, reverse)
            .bind(["a".to_string(), "b".to_string()]);

        let result = command
            .invoke(&registry, &["c".to_string(), "d".to_string()])
            .unwrap();
        assert_eq!(result, ["d", "c", "b", "a"]);
    }
}
