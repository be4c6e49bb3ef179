// Viewport sources handed to the engine.

use crate::domain::{Viewport, ViewportSize};
use tokio::sync::watch;

/// Viewport that never changes.
#[derive(Debug, Clone, Copy)]
pub struct FixedViewport(pub ViewportSize);

impl Viewport for FixedViewport {
    fn size(&self) -> Option<ViewportSize> {
        Some(self.0)
    }
}

/// Viewport updated by the presentation layer through a watch channel.
#[derive(Debug, Clone)]
pub struct WatchViewport {
    rx: watch::Receiver<Option<ViewportSize>>,
}

impl Viewport for WatchViewport {
    fn size(&self) -> Option<ViewportSize> {
        *self.rx.borrow()
    }
}

/// Creates a resizable viewport; the sender side belongs to whoever receives resize events.
pub fn viewport_channel(
    initial: Option<ViewportSize>,
) -> (watch::Sender<Option<ViewportSize>>, WatchViewport) {
    let (tx, rx) = watch::channel(initial);
    (tx, WatchViewport { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_viewport_reads_the_latest_size() {
        let (tx, viewport) = viewport_channel(None);
        assert_eq!(viewport.size(), None);

        tx.send_replace(Some(ViewportSize::new(640.0, 480.0)));
        assert_eq!(viewport.size(), Some(ViewportSize::new(640.0, 480.0)));

        tx.send_replace(Some(ViewportSize::new(320.0, 240.0)));
        assert_eq!(viewport.size(), Some(ViewportSize::new(320.0, 240.0)));
    }

    #[test]
    fn watch_viewport_keeps_last_value_after_sender_drops() {
        let (tx, viewport) = viewport_channel(Some(ViewportSize::new(100.0, 50.0)));
        drop(tx);
        assert_eq!(viewport.size(), Some(ViewportSize::new(100.0, 50.0)));
    }
}
