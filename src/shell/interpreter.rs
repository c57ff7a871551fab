use std::{collections::VecDeque, mem};

use tracing::{debug, trace};

use super::{command::Command, error::ShellErrorKind, registry::CommandRegistry};

/// Parses input lines into pipelines of bound commands and drains them in
/// FIFO order.
///
/// A pipeline is one head command plus a flat list of subcommands; chaining
/// is strictly linear. The head runs with its own bound arguments, then each
/// subcommand runs with the previous stage's result list appended after its
/// own bound arguments. The final result list is discarded.
pub struct Interpreter {
    registry: CommandRegistry,
    queue: VecDeque<Command>,
}

impl Interpreter {
    pub fn new(registry: CommandRegistry) -> Self {
        Interpreter {
            registry,
            queue: VecDeque::new(),
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Number of pipelines waiting to be executed.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Parse `line` into a pipeline and push it onto the queue.
    ///
    /// The line is split on single spaces; a word beginning with `|` opens a
    /// new pipeline segment, with the marker stripped from the word. Any
    /// segment whose command cannot be resolved aborts the whole enqueue,
    /// so a broken pipeline has no effect.
    pub fn enqueue(&mut self, line: &str) {
        let mut segments: Vec<Vec<&str>> = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for word in line.split(' ') {
            let (word, boundary) = match word.strip_prefix('|') {
                Some(stripped) => (stripped, true),
                None => (word, false),
            };
            if boundary && !current.is_empty() {
                segments.push(mem::take(&mut current));
            }
            if !word.is_empty() {
                current.push(word);
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        if segments.is_empty() {
            return;
        }

        let mut bound = Vec::with_capacity(segments.len());
        for segment in &segments {
            // segments are never empty by construction
            let (name, arguments) = segment.split_first().unwrap();
            let Some(prototype) = self.registry.resolve(name) else {
                return;
            };
            bound.push(prototype.bind(arguments.iter().map(|argument| argument.to_string())));
        }

        let mut bound = bound.into_iter();
        let mut head = bound.next().unwrap();
        for subcommand in bound {
            head.push_subcommand(subcommand);
        }

        debug!(
            command = head.name(),
            stages = head.subcommands().len() + 1,
            "queued pipeline"
        );
        self.queue.push_back(head);
    }

    /// Drain the queue front to back.
    ///
    /// An error aborts only the pipeline it came from; the drain moves on to
    /// the next one. `Exit` is the exception and is handed to the caller.
    pub fn execute(&mut self) -> Result<(), ShellErrorKind> {
        while let Some(pipeline) = self.queue.pop_front() {
            match self.run_pipeline(&pipeline) {
                Ok(()) => (),
                Err(error) if error.is_exit() => return Err(error),
                Err(error) => eprintln!("{:?}", miette::Report::new(error)),
            }
        }
        Ok(())
    }

    fn run_pipeline(&self, pipeline: &Command) -> Result<(), ShellErrorKind> {
        let mut result = pipeline.invoke(&self.registry, &[])?;
        for subcommand in pipeline.subcommands() {
            trace!(command = subcommand.name(), piped = result.len(), "next stage");
            result = subcommand.invoke(&self.registry, &result)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::command::Arity;

    fn noop(_: &CommandRegistry, _: &[String]) -> Result<Vec<String>, ShellErrorKind> {
        Ok(Vec::new())
    }

    fn quit(_: &CommandRegistry, _: &[String]) -> Result<Vec<String>, ShellErrorKind> {
        Err(ShellErrorKind::Exit)
    }

    fn interpreter() -> Interpreter {
        let mut registry = CommandRegistry::new();
        registry.register(Command::new("echo", Arity::Exact(1), noop));
        registry.register(Command::new("quit", Arity::Exact(0), quit));
        Interpreter::new(registry)
    }

    #[test]
    fn blank_lines_enqueue_nothing() {
        let mut interpreter = interpreter();
        interpreter.enqueue("");
        interpreter.enqueue("   ");
        assert_eq!(interpreter.queued(), 0);
    }

    #[test]
    fn unknown_command_aborts_the_whole_enqueue() {
        let mut interpreter = interpreter();
        interpreter.enqueue("echo hi | zzz | echo there");
        assert_eq!(interpreter.queued(), 0);
    }

    #[test]
    fn pipe_markers_split_segments() {
        let mut interpreter = interpreter();
        // marker glued to the segment, standalone, and with repeated spaces
        interpreter.enqueue("echo hi |echo there");
        interpreter.enqueue("echo hi | echo there");
        interpreter.enqueue("echo  hi  |  echo  there");
        assert_eq!(interpreter.queued(), 3);
        interpreter.execute().unwrap();
        assert_eq!(interpreter.queued(), 0);
    }

    #[test]
    fn exit_interrupts_the_drain() {
        let mut interpreter = interpreter();
        interpreter.enqueue("quit");
        interpreter.enqueue("echo afterwards");
        assert!(interpreter.execute().is_err());
        // the queued pipeline behind quit is left untouched
        assert_eq!(interpreter.queued(), 1);
    }
}
