use parking_lot::Mutex;

/// Where user-visible messages go. The embedding UI supplies an
/// implementation that renders into its error area; errors are still
/// propagated to the caller, the sink is display only.
pub trait MessageSink: Send + Sync {
    fn error(&self, message: &str);

    /// Removes any previously displayed messages.
    fn clear(&self);
}

/// Collects messages in memory. Useful for embedders that poll for messages
/// and for tests.
#[derive(Default)]
pub struct BufferSink {
    messages: Mutex<Vec<String>>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl MessageSink for BufferSink {
    fn error(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }

    fn clear(&self) {
        self.messages.lock().clear();
    }
}

/// Discards all messages.
pub struct NullSink;

impl MessageSink for NullSink {
    fn error(&self, _message: &str) {}

    fn clear(&self) {}
}
