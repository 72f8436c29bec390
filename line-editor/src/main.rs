use line_editor::config::ServerConfig;
use line_editor::web::create_router;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            ServerConfig::default()
        }
    };

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|e| {
        eprintln!("Warning: invalid log filter {:?}: {e}", config.log_filter);
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = create_router();

    let addr = config.bind_addr;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!("Line editor validation service listening on http://{addr}");
    info!("  GET  /health                        - Health check");
    info!("  POST /validate/line                 - Full line report");
    info!("  POST /validate/passing-times        - Passing-time chain");
    info!("  POST /validate/day-type             - Single day type");
    info!("  POST /validate/day-types            - Day type list");
    info!("  POST /validate/booking-arrangement  - Booking arrangement");
    info!("  POST /compare-instant               - Compare two times");
    info!("  POST /wizard/transition             - Wizard navigation");

    if let Err(e) = axum::serve(listener, app).await {
        warn!(error = %e, "server stopped");
    }
}
