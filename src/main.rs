mod shell;

use shell::Shell;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    ctrlc::set_handler(move || println!("^C")).expect("Error setting Ctrl-C handler");

    let status = Shell::new().run();
    std::process::exit(status);
}
