pub mod clock;
pub mod metrics;

pub use clock::{Clock, FixedClock, SystemClock};
pub use metrics::{get_metrics, init_metrics};
