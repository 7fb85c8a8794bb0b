//! Tessera command-line interface.
//!
//! Computes tile layouts, replays window event scripts and manages the
//! configuration file.

fn main() {
    if let Err(err) = tessera_lib::cli::run() {
        eprintln!("tessera: {err}");
        std::process::exit(1);
    }
}
