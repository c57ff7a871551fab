use std::{io::stdout, path::PathBuf};

use crossterm::{execute, terminal::SetTitle};
use rustyline::{error::ReadlineError, DefaultEditor};

pub mod builtins;
pub mod command;
pub mod error;
pub mod expr;
pub mod interpreter;
pub mod levenshtein;
pub mod registry;

use interpreter::Interpreter;
use registry::CommandRegistry;

pub struct Shell {
    running: bool,
    interpreter: Interpreter,
}

impl Shell {
    pub fn new() -> Self {
        let _ = execute!(stdout(), SetTitle("rill"));

        let mut registry = CommandRegistry::new();
        builtins::register_builtins(&mut registry);

        Shell {
            running: true,
            interpreter: Interpreter::new(registry),
        }
    }

    pub fn run(&mut self) -> i32 {
        let config = rustyline::Config::builder()
            .bell_style(rustyline::config::BellStyle::None)
            .build();
        let mut editor = match DefaultEditor::with_config(config) {
            Ok(editor) => editor,
            Err(error) => {
                eprintln!("Error: {}", error);
                return 1;
            }
        };

        let history = history_path();
        if let Some(ref path) = history {
            let _ = editor.load_history(path);
        }

        println!("rill interpreter v{}", env!("CARGO_PKG_VERSION"));

        while self.running {
            match editor.readline(">> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    self.interpreter.enqueue(&line);
                    if self.interpreter.execute().is_err() {
                        // the only error that escapes the drain is `quit`
                        self.running = false;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    self.running = false;
                }
                Err(error) => {
                    eprintln!("Error: {}", error);
                    return 1;
                }
            }
        }

        if let Some(ref path) = history {
            let _ = editor.save_history(path);
        }
        0
    }
}

fn history_path() -> Option<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "rill")?;
    let data = dirs.data_dir();
    std::fs::create_dir_all(data).ok()?;
    Some(data.join("history.txt"))
}
