use clap::Parser;

use reviewlens::apps::{self, DashboardCli};

fn main() {
    apps::init_tracing();
    let cli = DashboardCli::parse();
    if let Err(err) = apps::run_dashboard_app(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
