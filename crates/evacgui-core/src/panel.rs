//! Opaque handles for host UI components.

use kurbo::Size;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default panel size when no image container has been configured.
pub const DEFAULT_PANEL_SIZE: Size = Size::new(1024.0, 768.0);

/// Opaque handle to a host UI component (window, panel, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentHandle(u64);

impl ComponentHandle {
    /// Allocate a fresh handle, unique within the process.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// The render surface the map and shape layers are painted on.
#[derive(Debug, Clone, PartialEq)]
pub struct MainPanel {
    pub handle: ComponentHandle,
    pub size: Size,
}

impl MainPanel {
    pub fn new(size: Size) -> Self {
        Self {
            handle: ComponentHandle::next(),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique() {
        let a = ComponentHandle::next();
        let b = ComponentHandle::next();
        assert_ne!(a, b);
        assert!(b.raw() > a.raw());
    }
}
