//! Optional host features components adapt to.
//!
//! Hosts install their capabilities once at startup; components read the
//! process default unless an instance overrides it.

use std::sync::OnceLock;

use parking_lot::RwLock;

static HOST_CAPABILITIES: OnceLock<RwLock<HostCapabilities>> = OnceLock::new();

/// Features the host may or may not provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostCapabilities {
    /// The host can position overlays relative to named anchors (for
    /// example CSS anchor positioning). When `false`, components compute
    /// explicit pixel placements instead.
    pub anchor_positioning: bool,
}

impl HostCapabilities {
    /// Installs the process-wide capabilities.
    pub fn install(self) {
        let lock = HOST_CAPABILITIES.get_or_init(|| RwLock::new(HostCapabilities::default()));
        *lock.write() = self;
    }

    /// The process-wide capabilities, or the defaults when none were
    /// installed.
    pub fn current() -> Self {
        HOST_CAPABILITIES
            .get()
            .map(|lock| *lock.read())
            .unwrap_or_default()
    }

    /// Sets anchor positioning support.
    pub fn with_anchor_positioning(mut self, supported: bool) -> Self {
        self.anchor_positioning = supported;
        self
    }
}
