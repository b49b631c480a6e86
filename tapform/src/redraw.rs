//! Redraw request channel.
//!
//! Widgets mutate state outside the view layer's own update cycle (model
//! callbacks, programmatic sets). After each such mutation they send one
//! redraw request; the view layer decides when to render.

use tokio::sync::mpsc;

/// Sender half of the redraw channel.
#[derive(Clone, Debug)]
pub struct RedrawSender {
    tx: mpsc::UnboundedSender<()>,
}

impl RedrawSender {
    /// Request a redraw.
    ///
    /// Non-blocking. Errors are ignored (receiver dropped = view torn down).
    pub fn request(&self) {
        log::trace!("redraw requested");
        let _ = self.tx.send(());
    }

    /// Whether the receiving side has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiver half of the redraw channel.
#[derive(Debug)]
pub struct RedrawReceiver {
    rx: mpsc::UnboundedReceiver<()>,
}

impl RedrawReceiver {
    /// Wait for a redraw request.
    pub async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    /// Take one pending request without waiting.
    pub fn try_recv(&mut self) -> bool {
        self.rx.try_recv().is_ok()
    }

    /// Drain all pending requests, returning how many there were.
    ///
    /// Multiple buffered requests collapse into a single render.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while self.rx.try_recv().is_ok() {
            count += 1;
        }
        count
    }
}

/// Create a new redraw channel pair.
pub fn channel() -> (RedrawSender, RedrawReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (RedrawSender { tx }, RedrawReceiver { rx })
}
