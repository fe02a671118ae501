use clap::Parser;

#[derive(Parser)]
#[command(
    name = "doot",
    about = concat!("[■] doot v", env!("CARGO_PKG_VERSION"), " - a todo list that lives next to its binary"),
    long_about = "Keys: ↑/↓ move, space toggle, a add, d d delete, q quit.\n\
                  The list is saved to `doots` in the directory holding the executable.",
    version
)]
pub struct Cli {}
