//! Platform service traits and desktop implementation.

use serde::Serialize;

use nexa_types::error::{NexaError, Result};
use nexa_types::time::Timestamp;

// ---------------------------------------------------------------------------
// Host info service
// ---------------------------------------------------------------------------

/// Snapshot of the machine the shell is running on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostInfo {
    /// OS / architecture string, shown as the OS name.
    pub platform: String,
    /// Logical processor count.
    pub cores: u32,
    /// Installed memory in GiB.
    pub memory_gb: f64,
    /// Memory in use, 0-100.
    pub memory_used_percent: f64,
    /// Connection type, shown as the DNS suffix by `ipconfig`.
    pub connection_type: String,
    /// BCP 47 language tag, e.g. `en-US`.
    pub language: String,
    pub user_agent: String,
}

/// Abstraction over host introspection.
pub trait HostInfoService {
    /// Take a fresh snapshot. Called once per command that needs it.
    fn host_info(&self) -> Result<HostInfo>;
}

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// Abstraction over the system clock.
pub trait TimeService {
    /// Current wall-clock time.
    fn now(&self) -> Result<Timestamp>;

    /// Milliseconds since the Unix epoch.
    fn unix_millis(&self) -> Result<u64>;
}

// ---------------------------------------------------------------------------
// Aggregate
// ---------------------------------------------------------------------------

/// Aggregate trait providing access to all platform services.
pub trait Platform: HostInfoService + TimeService {}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Used when the host does not report its memory.
const FALLBACK_MEMORY_GB: f64 = 8.0;
const FALLBACK_LANGUAGE: &str = "en-US";

/// Default platform implementation backed by `std` and `/proc`.
#[derive(Debug, Default)]
pub struct DesktopPlatform;

impl DesktopPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl HostInfoService for DesktopPlatform {
    fn host_info(&self) -> Result<HostInfo> {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get() as u32)
            .unwrap_or(1);
        let (memory_gb, memory_used_percent) = read_memory().unwrap_or_else(|| {
            log::debug!("Memory info unavailable, reporting {FALLBACK_MEMORY_GB} GB");
            (FALLBACK_MEMORY_GB, 0.0)
        });
        let lang = std::env::var("LANG").ok();
        Ok(HostInfo {
            platform: format!("{} {}", std::env::consts::OS, std::env::consts::ARCH),
            cores,
            memory_gb,
            memory_used_percent,
            connection_type: "Unknown".to_string(),
            language: language_tag(lang.as_deref()),
            user_agent: format!("nexa-shell/{}", env!("CARGO_PKG_VERSION")),
        })
    }
}

impl TimeService for DesktopPlatform {
    fn now(&self) -> Result<Timestamp> {
        // UTC breakdown, no TZ handling.
        Ok(Timestamp::from_unix_secs(self.unix_millis()? / 1000))
    }

    fn unix_millis(&self) -> Result<u64> {
        let dur = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|e| NexaError::Platform(format!("clock before epoch: {e}")))?;
        Ok(dur.as_millis() as u64)
    }
}

impl Platform for DesktopPlatform {}

// ---------------------------------------------------------------------------
// Host helpers
// ---------------------------------------------------------------------------

#[cfg(target_os = "linux")]
fn read_memory() -> Option<(f64, f64)> {
    let text = std::fs::read_to_string("/proc/meminfo").ok()?;
    parse_meminfo(&text)
}

#[cfg(not(target_os = "linux"))]
fn read_memory() -> Option<(f64, f64)> {
    None
}

/// Extract (total GiB, used percent) from `/proc/meminfo` text.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_meminfo(text: &str) -> Option<(f64, f64)> {
    let field = |key: &str| -> Option<u64> {
        text.lines()
            .find_map(|line| line.strip_prefix(key))
            .and_then(|rest| rest.trim_start_matches(':').split_whitespace().next())
            .and_then(|kb| kb.parse().ok())
    };
    let total_kb = field("MemTotal")?;
    if total_kb == 0 {
        return None;
    }
    let available_kb = field("MemAvailable")
        .or_else(|| field("MemFree"))
        .unwrap_or(total_kb)
        .min(total_kb);
    let gb = total_kb as f64 / (1024.0 * 1024.0);
    let used = (total_kb - available_kb) as f64 / total_kb as f64 * 100.0;
    Some((gb, used))
}

/// Turn a POSIX locale (`en_US.UTF-8`) into a language tag (`en-US`).
fn language_tag(lang: Option<&str>) -> String {
    let Some(lang) = lang else {
        return FALLBACK_LANGUAGE.to_string();
    };
    let base = lang.split(['.', '@']).next().unwrap_or_default();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return FALLBACK_LANGUAGE.to_string();
    }
    base.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPlatform {
        millis: u64,
    }

    impl HostInfoService for FixedPlatform {
        fn host_info(&self) -> Result<HostInfo> {
            Ok(HostInfo {
                platform: "TestOS".to_string(),
                cores: 4,
                memory_gb: 16.0,
                memory_used_percent: 25.0,
                connection_type: "wifi".to_string(),
                language: "en-GB".to_string(),
                user_agent: "test".to_string(),
            })
        }
    }

    impl TimeService for FixedPlatform {
        fn now(&self) -> Result<Timestamp> {
            Ok(Timestamp::from_unix_secs(self.millis / 1000))
        }

        fn unix_millis(&self) -> Result<u64> {
            Ok(self.millis)
        }
    }

    impl Platform for FixedPlatform {}

    const MEMINFO: &str = "\
MemTotal:       16384000 kB
MemFree:         2048000 kB
MemAvailable:    4096000 kB
Buffers:          123456 kB
";

    #[test]
    fn platform_is_object_safe() {
        let p: Box<dyn Platform> = Box::new(FixedPlatform {
            millis: 1_709_210_096_000,
        });
        assert_eq!(p.host_info().unwrap().cores, 4);
        assert_eq!(p.now().unwrap().to_string(), "2024-02-29 12:34:56");
    }

    #[test]
    fn parse_meminfo_total_and_used() {
        let (gb, used) = parse_meminfo(MEMINFO).unwrap();
        assert!((gb - 15.625).abs() < 1e-9);
        assert!((used - 75.0).abs() < 1e-9);
    }

    #[test]
    fn parse_meminfo_falls_back_to_memfree() {
        let text = "MemTotal: 1000 kB\nMemFree: 250 kB\n";
        let (_, used) = parse_meminfo(text).unwrap();
        assert!((used - 75.0).abs() < 1e-9);
    }

    #[test]
    fn parse_meminfo_missing_total() {
        assert_eq!(parse_meminfo("MemFree: 10 kB\n"), None);
        assert_eq!(parse_meminfo(""), None);
        assert_eq!(parse_meminfo("MemTotal: 0 kB\n"), None);
    }

    #[test]
    fn language_tag_from_locale() {
        assert_eq!(language_tag(Some("en_US.UTF-8")), "en-US");
        assert_eq!(language_tag(Some("de_DE@euro")), "de-DE");
        assert_eq!(language_tag(Some("fr")), "fr");
    }

    #[test]
    fn language_tag_fallbacks() {
        assert_eq!(language_tag(None), "en-US");
        assert_eq!(language_tag(Some("C")), "en-US");
        assert_eq!(language_tag(Some("POSIX")), "en-US");
        assert_eq!(language_tag(Some("")), "en-US");
    }

    #[test]
    fn desktop_host_info_is_sane() {
        let info = DesktopPlatform::new().host_info().unwrap();
        assert!(info.cores >= 1);
        assert!(info.memory_gb > 0.0);
        assert!((0.0..=100.0).contains(&info.memory_used_percent));
        assert_eq!(info.connection_type, "Unknown");
        assert!(info.user_agent.starts_with("nexa-shell/"));
    }

    #[test]
    fn desktop_clock_agrees_with_itself() {
        let p = DesktopPlatform::new();
        let millis = p.unix_millis().unwrap();
        let now = p.now().unwrap();
        assert!(millis > 1_600_000_000_000);
        assert!(now.year >= 2020);
    }

    #[test]
    fn host_info_serializes() {
        let info = FixedPlatform { millis: 0 }.host_info().unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["cores"], 4);
        assert_eq!(json["connection_type"], "wifi");
    }
}
