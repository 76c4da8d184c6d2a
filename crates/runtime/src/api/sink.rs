//! Presentation sinks receiving per-tick hints.
use platformer_core::PresentationEvent;

/// Receives presentation hints in delivery order. Sinks must not block; they
/// run inside the tick loop.
pub trait PresentationSink {
    fn present(&mut self, event: PresentationEvent);
}

/// Logs every hint: animation switches at debug, pose and camera at trace.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl PresentationSink for TracingSink {
    fn present(&mut self, event: PresentationEvent) {
        match event {
            PresentationEvent::Animation { state, duration } => {
                tracing::debug!(state = %state, duration_ms = duration.as_millis() as u64, "animation");
            }
            PresentationEvent::Pose { facing, speed_scale } => {
                tracing::trace!(facing = ?facing, speed_scale, "pose");
            }
            PresentationEvent::Camera { rect } => {
                tracing::trace!(x = rect.x, y = rect.y, w = rect.width, h = rect.height, "camera");
            }
        }
    }
}

/// Collects every hint, mostly for tests and replays.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Vec<PresentationEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[PresentationEvent] {
        &self.events
    }

    /// Only the animation switches, in order.
    pub fn animations(&self) -> impl Iterator<Item = &PresentationEvent> {
        self.events
            .iter()
            .filter(|event| matches!(event, PresentationEvent::Animation { .. }))
    }
}

impl PresentationSink for RecordingSink {
    fn present(&mut self, event: PresentationEvent) {
        self.events.push(event);
    }
}

impl<S> PresentationSink for &mut S
where
    S: PresentationSink + ?Sized,
{
    fn present(&mut self, event: PresentationEvent) {
        (**self).present(event);
    }
}
