fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=grading_finder=trace
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting Grading Finder - Pokemon TCG Dashboard");

    // Manual mode waits for the Refresh button instead of fetching on launch
    let policy = if std::env::args().any(|arg| arg == "--manual-fetch") {
        grading_finder::FetchPolicy::Manual
    } else {
        grading_finder::FetchPolicy::AutoOnLaunch
    };

    if let Err(e) = grading_finder::launch_gui(policy) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
