//! Process statistics shown under the board.

use std::fmt;
use std::time::Duration;

/// Kernel clock ticks per second for `/proc/<pid>/stat` times (`USER_HZ`).
const CLOCK_TICKS: u64 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PerfSample {
    pub threads: usize,
    pub cpu_time: Duration,
    pub memory_mb: u64,
}

impl fmt::Display for PerfSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Perf: Threads: {} | CPU: {:.1}s | Mem: {}MB",
            self.threads,
            self.cpu_time.as_secs_f64(),
            self.memory_mb
        )
    }
}

/// Source of a [`PerfSample`] per frame. `None` when the platform offers
/// nothing to read.
pub trait PerfSampler {
    fn sample(&mut self) -> Option<PerfSample>;
}

/// Reads the current process from `/proc/self`. Yields nothing elsewhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessSampler;

impl PerfSampler for ProcessSampler {
    #[cfg(target_os = "linux")]
    fn sample(&mut self) -> Option<PerfSample> {
        let status = std::fs::read_to_string("/proc/self/status").ok()?;
        let stat = std::fs::read_to_string("/proc/self/stat").ok()?;

        let (threads, rss_kb) = parse_status(&status)?;
        Some(PerfSample {
            threads,
            cpu_time: parse_stat_cpu(&stat)?,
            memory_mb: rss_kb / 1024,
        })
    }

    #[cfg(not(target_os = "linux"))]
    fn sample(&mut self) -> Option<PerfSample> {
        None
    }
}

/// `Threads:` and `VmRSS:` (kB) from `/proc/<pid>/status`.
pub fn parse_status(text: &str) -> Option<(usize, u64)> {
    let mut threads = None;
    let mut rss_kb = None;

    for line in text.lines() {
        if let Some(rest) = line.strip_prefix("Threads:") {
            threads = rest.trim().parse().ok();
        } else if let Some(rest) = line.strip_prefix("VmRSS:") {
            rss_kb = rest.split_whitespace().next().and_then(|kb| kb.parse().ok());
        }
    }

    Some((threads?, rss_kb?))
}

/// User plus system time from `/proc/<pid>/stat`. The command name may hold
/// spaces, so fields are counted from its closing paren.
pub fn parse_stat_cpu(text: &str) -> Option<Duration> {
    let (_, rest) = text.rsplit_once(')')?;
    let mut fields = rest.split_whitespace().skip(11);
    let utime: u64 = fields.next()?.parse().ok()?;
    let stime: u64 = fields.next()?.parse().ok()?;

    let ticks = utime + stime;
    Some(Duration::from_millis(ticks * 1000 / CLOCK_TICKS))
}
