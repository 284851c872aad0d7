use bexpr_runner::{execute, init_logger, Cli};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logger(cli.verbose) {
        eprintln!("logger setup failed: {error}");
    }

    match execute(&cli) {
        Ok(output) => {
            println!("{output}");
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}
