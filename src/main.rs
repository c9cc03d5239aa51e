mod audio;
mod catalog;
mod config;
mod error;
mod mpris;
mod player;
mod runtime;
mod ui;

fn main() {
    if let Err(e) = runtime::run() {
        eprintln!("encore: {e}");
        std::process::exit(1);
    }
}
