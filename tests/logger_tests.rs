use log::{debug, info, warn};
use stripe_resources::logger::setup_logger;

#[test]
fn logger_installs_and_formats_records() {
    setup_logger();
    // a second call must not panic once a logger is installed
    setup_logger();
    info!("checkout session prepared");
    warn!("retrying is left to the caller");
    debug!("not shown at the default level");
}
