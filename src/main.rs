use clap::Parser;
use doots::cli::commands::Cli;
use doots::io::logging::{init_file_logger, log_path_for};
use doots::io::store::default_store_path;

fn main() {
    let _cli = Cli::parse();

    let store_path = match default_store_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    init_file_logger(&log_path_for(&store_path));
    log::info!(
        "doot v{} starting, store at {}",
        env!("CARGO_PKG_VERSION"),
        store_path.display()
    );

    if let Err(e) = doots::tui::run(&store_path) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
