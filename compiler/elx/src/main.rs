//! `elx` - evaluate and inspect EL expressions from the command line.

use elx::commands::{parse_args, run, UsageError, USAGE};

fn main() {
    elx::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(UsageError::MissingCommand) => {
            println!("{USAGE}");
            return;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    match run(&command) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error[{}]: {err}", err.message_key());
            std::process::exit(1);
        }
    }
}
