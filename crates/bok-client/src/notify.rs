use tracing::{info, warn};

/// Where the form reports the result of a submission. Fire-and-forget.
pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_failure(&self, message: &str);
}

/// Prints notifications for the command-line front end.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify_success(&self, message: &str) {
        info!("{}", message);
        eprintln!("✅ {}", message);
    }

    fn notify_failure(&self, message: &str) {
        warn!("{}", message);
        eprintln!("❌ {}", message);
    }
}
