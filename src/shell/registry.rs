use indexmap::IndexMap;
use tracing::debug;

use super::{command::Command, levenshtein};

/// The set of registered command prototypes, keyed by name.
///
/// Populated once at startup and read-only afterwards. Insertion order is
/// preserved so suggestion listings are stable.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: IndexMap<String, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command prototype.
    ///
    /// # Panics
    ///
    /// Panics if a command with the same name is already registered.
    /// Registration only happens at startup, so a duplicate is a programming
    /// error rather than anything a user can trigger.
    pub fn register(&mut self, command: Command) {
        let name = command.name().to_string();
        let previous = self.commands.insert(name.clone(), command);
        assert!(
            previous.is_none(),
            "command `{name}` is already registered"
        );
    }

    /// Look up a prototype, printing a "did you mean" block on a miss.
    pub fn resolve(&self, name: &str) -> Option<&Command> {
        let command = self.commands.get(name);
        if command.is_none() {
            debug!(name, "lookup miss");
            self.print_suggestions(name);
        }
        command
    }

    /// Look up a prototype without the suggestion side effect.
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    fn print_suggestions(&self, name: &str) {
        print!("the command `{name}` doesn't exist.");

        let similar = levenshtein::similar_names(name, self.names());
        if similar.is_empty() {
            println!();
            return;
        }

        println!(" did you mean:");
        for candidate in similar {
            println!("    - {candidate}");
        }
    }
}
