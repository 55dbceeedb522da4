use tokio::sync::broadcast;

/// Cross-component signals. Payload-less on purpose: a signal means
/// "invalidate and refetch", it never carries authoritative state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
	NotificationsChanged,
}

/// Fire-and-forget broadcast bus. Emitting with no live subscribers is fine;
/// lagging subscribers miss signals rather than blocking the sender.
#[derive(Debug, Clone)]
pub struct EventBus {
	tx: broadcast::Sender<Event>,
}
impl EventBus {
	pub fn new() -> Self {
		let (tx, _) = broadcast::channel(64);

		Self { tx }
	}

	pub fn subscribe(&self) -> broadcast::Receiver<Event> {
		self.tx.subscribe()
	}

	pub fn emit(&self, event: Event) {
		let _ = self.tx.send(event);
	}
}
impl Default for EventBus {
	fn default() -> Self {
		Self::new()
	}
}
