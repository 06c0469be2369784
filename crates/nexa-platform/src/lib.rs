//! Platform services consumed by the NEXA shell.
//!
//! Commands never touch the host directly. They ask a [`Platform`] for a
//! [`HostInfo`] snapshot or the current time, so tests can substitute fixed
//! values.

mod services;

pub use services::{DesktopPlatform, HostInfo, HostInfoService, Platform, TimeService};
