use clap::Parser;

use reviewlens::apps::{self, ExploreCli};

fn main() {
    apps::init_tracing();
    let cli = ExploreCli::parse();
    if let Err(err) = apps::run_explore_app(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
