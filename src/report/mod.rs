mod correlate;
mod reconcile;
mod render;
mod sanitize;
mod timestamp;

pub use correlate::correlate;
pub use reconcile::{Reconciler, ReportAction};
pub use sanitize::{platform_sanitizer, FilenameSanitizer};
