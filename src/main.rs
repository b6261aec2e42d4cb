use clap::Parser;
use split_ledger::{
    app::{self, Cli},
    common::logging,
};

fn main() {
    logging::init();

    if let Err(e) = app::run(Cli::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
