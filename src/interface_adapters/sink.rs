// Outbound frame port: fire-and-forget delivery of finished frames.

use tokio::sync::mpsc;

/// One finished display frame: flat row-major brightness cells in 0..=2047.
pub type Frame = Vec<u16>;

/// Handle to wherever frames end up being displayed. Delivery never blocks
/// and never fails loudly: a full or closed channel just drops the frame.
#[derive(Debug, Clone)]
pub struct FrameSink {
    tx: mpsc::Sender<Frame>,
}

impl FrameSink {
    pub fn new(tx: mpsc::Sender<Frame>) -> Self {
        Self { tx }
    }

    pub fn push(&self, frame: Frame) {
        if let Err(err) = self.tx.try_send(frame) {
            tracing::trace!(%err, "frame dropped");
        }
    }
}
