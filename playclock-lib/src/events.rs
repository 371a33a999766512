//! Transport notifications and the publish/subscribe seam they travel through.

use serde::Serialize;

/// Notification published by the playback clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ClockEvent {
    Play,
    Pause,
    /// Current clip position in seconds.
    #[serde(rename = "audioprocess")]
    AudioProcess { time: f64 },
    Finish,
}

impl ClockEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::AudioProcess { .. } => "audioprocess",
            Self::Finish => "finish",
        }
    }
}

/// Receiver for clock notifications.
///
/// Delivery is synchronous and in call order. After `detach_all` a sink must
/// not forward anything it was attached to before.
pub trait EventSink {
    fn publish(&mut self, event: &ClockEvent);
    fn detach_all(&mut self);
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&ClockEvent) + Send>;

/// In-process event bus fanning each event out to every subscriber.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a callback that receives every published event.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&ClockEvent) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Detach a single subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl EventSink for EventBus {
    fn publish(&mut self, event: &ClockEvent) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(event);
        }
    }

    fn detach_all(&mut self) {
        self.subscribers.clear();
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
