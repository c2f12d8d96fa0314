use::std::env;
use::std::process;

use simple_bank_ledger::run;
use log::info;

fn main() {
    // Collect command-line arguments - expecting exactly one argument for the command CSV path
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("bank-ledger");
        eprintln!("Usage: {} <commands.csv>", program);
        process::exit(1);
    }
    let filename = &args[1];
    // Initialize logger (respect RUST_LOG env var if set)
    env_logger::init();

    info!("starting bank ledger with file: {}", filename);

    if let Err(e) = run(filename) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
