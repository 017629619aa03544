use std::time::Duration;

pub const DEFAULT_CONCURRENCY: usize = 5;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct Config {
    /// Maximum number of manager requests in flight at once.
    pub concurrency: usize,
    /// Transport-level timeout for a single request.
    ///
    /// There is no deadline for the run as a whole.
    pub timeout: Duration,
    /// 0 prints everything, 1 hides headers, 2 also hides application lines.
    pub quiet: u8,
}
