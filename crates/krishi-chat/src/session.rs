//! Chat session manager.
//!
//! Owns the append-only conversation log and the "assistant is composing"
//! indicator. Each `submit` appends the user message immediately and queues a
//! deferred reply behind a simulated latency; a single worker drains the
//! queue, so replies always land in submission order. Closing the session
//! cancels every reply still pending.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::Rng;
use tokio::sync::{broadcast, mpsc, Notify};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use krishi_core::events::SessionEvent;
use krishi_core::types::{AttachmentRef, Message};

use crate::error::ChatError;
use crate::resolver::ReplyResolver;
use crate::types::SessionConfig;

// =============================================================================
// Internal state
// =============================================================================

/// A reply waiting for its simulated latency to elapse.
struct PendingReply {
    utterance: String,
    has_attachment: bool,
    delay: Duration,
}

/// State shared between the session handle and the reply worker.
struct SessionState {
    log: Mutex<Vec<Message>>,
    next_id: AtomicU64,
    pending: AtomicUsize,
    idle: Notify,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionState {
    fn emit(&self, event: SessionEvent) {
        // A send error just means nobody is subscribed right now.
        let _ = self.events.send(event);
    }

    fn append(&self, message: Message) -> Result<(), ChatError> {
        let event = SessionEvent::MessageAppended {
            id: message.id,
            author: message.author,
            category: message.category,
        };
        {
            let mut log = self
                .log
                .lock()
                .map_err(|e| ChatError::State(format!("log lock poisoned: {}", e)))?;
            log.push(message);
        }
        self.emit(event);
        Ok(())
    }

    /// Account for one resolved (or cancelled-in-flight) reply.
    fn reply_done(&self) {
        if self.pending.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.emit(SessionEvent::ComposingChanged { composing: false });
            self.idle.notify_waiters();
        }
    }
}

// =============================================================================
// ChatSession
// =============================================================================

/// A single conversation with the assistant.
///
/// The log is append-only for the session's lifetime and is never persisted.
/// Replies are serialized: even though every submission samples its own
/// delay, the worker resolves them strictly in submission order.
///
/// Must be created inside a tokio runtime (the reply worker is spawned on
/// construction).
pub struct ChatSession {
    id: Uuid,
    config: SessionConfig,
    state: Arc<SessionState>,
    queue: mpsc::UnboundedSender<PendingReply>,
    worker: JoinHandle<()>,
    closed: AtomicBool,
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl ChatSession {
    /// Start a new session with the given tunables.
    pub fn new(config: SessionConfig) -> Result<Self, ChatError> {
        if config.reply_delay_min_ms > config.reply_delay_max_ms {
            return Err(ChatError::InvalidDelayRange {
                min: config.reply_delay_min_ms,
                max: config.reply_delay_max_ms,
            });
        }

        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        let state = Arc::new(SessionState {
            log: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            pending: AtomicUsize::new(0),
            idle: Notify::new(),
            events,
        });

        let (queue, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(reply_worker(Arc::clone(&state), rx));

        let id = Uuid::new_v4();
        info!(session_id = %id, "Chat session started");

        Ok(Self {
            id,
            config,
            state,
            queue,
            worker,
            closed: AtomicBool::new(false),
        })
    }

    /// Start a session with default tunables.
    pub fn with_defaults() -> Result<Self, ChatError> {
        Self::new(SessionConfig::default())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Submit a user utterance, optionally with an uploaded image.
    ///
    /// The user message is appended immediately; the assistant reply arrives
    /// after the simulated latency. Returns the id of the user message.
    pub fn submit(
        &self,
        utterance: impl Into<String>,
        attachment: Option<AttachmentRef>,
    ) -> Result<u64, ChatError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(ChatError::SessionClosed);
        }

        let utterance = utterance.into();
        // An unreadable handle is treated the same as no attachment at all.
        let attachment = attachment.filter(AttachmentRef::is_readable);
        let has_attachment = attachment.is_some();

        let id = self.state.next_id.fetch_add(1, Ordering::SeqCst);
        let message = match attachment {
            Some(a) => Message::user_image(id, utterance.clone(), a),
            None => Message::user_text(id, utterance.clone()),
        };
        self.state.append(message)?;

        if self.state.pending.fetch_add(1, Ordering::SeqCst) == 0 {
            self.state.emit(SessionEvent::ComposingChanged { composing: true });
        }

        let delay = self.sample_delay();
        debug!(
            session_id = %self.id,
            message_id = id,
            delay_ms = delay.as_millis() as u64,
            "Reply scheduled"
        );

        let job = PendingReply {
            utterance,
            has_attachment,
            delay,
        };
        if self.queue.send(job).is_err() {
            // Worker is gone; roll the pending count back.
            self.state.reply_done();
            return Err(ChatError::SessionClosed);
        }

        Ok(id)
    }

    /// Snapshot of the conversation log, in insertion order.
    pub fn messages(&self) -> Vec<Message> {
        self.state
            .log
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    /// Number of messages in the log.
    pub fn len(&self) -> usize {
        self.state.log.lock().map(|log| log.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True while at least one reply is pending.
    pub fn is_composing(&self) -> bool {
        self.state.pending.load(Ordering::SeqCst) > 0
    }

    /// Subscribe to session events. Delivery is lossy for slow subscribers;
    /// the log itself is the source of truth.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.state.events.subscribe()
    }

    /// Wait until every pending reply has been appended (or cancelled).
    pub async fn settled(&self) {
        loop {
            if self.state.pending.load(Ordering::SeqCst) == 0 {
                return;
            }
            let notified = self.state.idle.notified();
            if self.state.pending.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Close the session, cancelling every pending reply.
    ///
    /// Idempotent. No reply fires after this returns.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }

        self.worker.abort();
        let dropped = self.state.pending.swap(0, Ordering::SeqCst);
        if dropped > 0 {
            debug!(session_id = %self.id, dropped, "Cancelled pending replies");
            self.state.emit(SessionEvent::ComposingChanged { composing: false });
        }
        self.state.emit(SessionEvent::SessionClosed);
        self.state.idle.notify_waiters();
        info!(session_id = %self.id, "Chat session closed");
    }

    /// Sample the simulated latency uniformly from the configured window.
    fn sample_delay(&self) -> Duration {
        let min = self.config.reply_delay_min_ms;
        let max = self.config.reply_delay_max_ms;
        let ms = if max > min {
            rand::thread_rng().gen_range(min..max)
        } else {
            min
        };
        Duration::from_millis(ms)
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.close();
    }
}

// =============================================================================
// Reply worker
// =============================================================================

/// Drain the reply queue one job at a time.
///
/// Single consumer means FIFO: replies resolve in submission order
/// regardless of the delay each job sampled.
async fn reply_worker(state: Arc<SessionState>, mut queue: mpsc::UnboundedReceiver<PendingReply>) {
    let resolver = ReplyResolver::new();

    while let Some(job) = queue.recv().await {
        tokio::time::sleep(job.delay).await;

        let payload = resolver.resolve(&job.utterance, job.has_attachment);
        let id = state.next_id.fetch_add(1, Ordering::SeqCst);
        debug!(message_id = id, category = ?payload.category, "Assistant reply ready");

        if let Err(e) = state.append(payload.into_message(id)) {
            warn!(error = %e, "Dropping reply, log unavailable");
        }
        state.reply_done();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use krishi_core::types::{MessageAuthor, MessageCategory};

    use crate::resolver::{DEFAULT_REPLY, MANDI_PRICES_REPLY, WEATHER_REPLY};

    fn session() -> ChatSession {
        ChatSession::with_defaults().unwrap()
    }

    /// Let the worker dequeue and park on its sleep timer.
    async fn drain_scheduler() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    // ---- Construction ----

    #[tokio::test]
    async fn test_new_session_is_empty() {
        let s = session();
        assert!(s.is_empty());
        assert!(!s.is_composing());
        assert!(!s.is_closed());
    }

    #[tokio::test]
    async fn test_invalid_delay_range_rejected() {
        let config = SessionConfig {
            reply_delay_min_ms: 2500,
            reply_delay_max_ms: 1500,
            ..SessionConfig::default()
        };
        let err = ChatSession::new(config).unwrap_err();
        assert!(matches!(
            err,
            ChatError::InvalidDelayRange { min: 2500, max: 1500 }
        ));
    }

    #[tokio::test]
    async fn test_equal_delay_bounds_accepted() {
        let config = SessionConfig {
            reply_delay_min_ms: 100,
            reply_delay_max_ms: 100,
            ..SessionConfig::default()
        };
        assert!(ChatSession::new(config).is_ok());
    }

    // ---- Submission ----

    #[tokio::test(start_paused = true)]
    async fn test_user_message_appended_immediately() {
        let s = session();
        s.submit("hello", None).unwrap();

        let log = s.messages();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].author, MessageAuthor::User);
        assert_eq!(log[0].category, MessageCategory::Plain);
        assert_eq!(log[0].text, "hello");
        assert!(s.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_appended_after_delay() {
        let s = session();
        s.submit("What's the weather forecast for this week?", None)
            .unwrap();
        s.settled().await;

        let log = s.messages();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].author, MessageAuthor::Assistant);
        assert_eq!(log[1].category, MessageCategory::Weather);
        assert_eq!(log[1].text, WEATHER_REPLY);
        assert!(!s.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_mandi_prices_scenario() {
        let s = session();
        s.submit("Show me today's mandi prices", None).unwrap();
        s.settled().await;

        let log = s.messages();
        assert_eq!(log[1].category, MessageCategory::Advisory);
        assert_eq!(log[1].text, MANDI_PRICES_REPLY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_attachment_with_empty_text() {
        let s = session();
        s.submit("", Some(AttachmentRef::new("blob:leaf"))).unwrap();
        s.settled().await;

        let log = s.messages();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].category, MessageCategory::Image);
        assert!(log[0].text.is_empty());
        assert_eq!(log[0].attachment.as_ref().unwrap().reference, "blob:leaf");

        assert_eq!(log[1].category, MessageCategory::DiseaseResult);
        assert_eq!(log[1].confidence, Some(87));
        assert_eq!(log[1].disease_label.as_deref(), Some("Early Blight"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unreadable_attachment_falls_back_to_text() {
        let s = session();
        s.submit("what's the weather", Some(AttachmentRef::new("")))
            .unwrap();
        s.settled().await;

        let log = s.messages();
        assert_eq!(log[0].category, MessageCategory::Plain);
        assert!(log[0].attachment.is_none());
        assert_eq!(log[1].category, MessageCategory::Weather);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_submission_gets_default_reply() {
        let s = session();
        s.submit("", None).unwrap();
        s.settled().await;

        assert_eq!(s.messages()[1].text, DEFAULT_REPLY);
    }

    // ---- Log shape under rapid submission ----

    #[tokio::test(start_paused = true)]
    async fn test_log_holds_2n_messages_after_n_submissions() {
        let s = session();
        for i in 0..5 {
            s.submit(format!("message {}", i), None).unwrap();
        }
        s.settled().await;

        let log = s.messages();
        assert_eq!(log.len(), 10);
        let users = log
            .iter()
            .filter(|m| m.author == MessageAuthor::User)
            .count();
        assert_eq!(users, 5);
    }

    // Hardened ordering choice: each submission samples an independent delay,
    // but the single-consumer queue serializes resolution, so replies land in
    // submission order rather than timer-arrival order.
    #[tokio::test(start_paused = true)]
    async fn test_replies_arrive_in_submission_order() {
        let s = session();
        s.submit("weather update please", None).unwrap();
        s.submit("mandi prices please", None).unwrap();
        s.submit("hello there", None).unwrap();
        s.settled().await;

        let replies: Vec<_> = s
            .messages()
            .into_iter()
            .filter(|m| m.author == MessageAuthor::Assistant)
            .collect();
        assert_eq!(replies.len(), 3);
        assert_eq!(replies[0].category, MessageCategory::Weather);
        assert_eq!(replies[1].text, MANDI_PRICES_REPLY);
        assert_eq!(replies[2].text, DEFAULT_REPLY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_message_ids_strictly_increasing() {
        let s = session();
        for _ in 0..4 {
            s.submit("hello", None).unwrap();
        }
        s.settled().await;

        let log = s.messages();
        for pair in log.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }

    // ---- Composing flag ----

    #[tokio::test(start_paused = true)]
    async fn test_composing_clears_only_after_last_reply() {
        let s = session();
        s.submit("first", None).unwrap();
        s.submit("second", None).unwrap();
        assert!(s.is_composing());

        s.settled().await;
        assert!(!s.is_composing());
        assert_eq!(s.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_respects_configured_window() {
        let s = session();
        s.submit("hello", None).unwrap();
        drain_scheduler().await;

        // Just before the minimum delay nothing has fired.
        tokio::time::advance(Duration::from_millis(1499)).await;
        drain_scheduler().await;
        assert_eq!(s.len(), 1);
        assert!(s.is_composing());

        // By the exclusive maximum the reply must have landed.
        tokio::time::advance(Duration::from_millis(1001)).await;
        drain_scheduler().await;
        assert_eq!(s.len(), 2);
        assert!(!s.is_composing());
    }

    // ---- Close / cancellation ----

    #[tokio::test(start_paused = true)]
    async fn test_submit_after_close_errors() {
        let s = session();
        s.close();
        let err = s.submit("hello", None).unwrap_err();
        assert!(matches!(err, ChatError::SessionClosed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_cancels_pending_replies() {
        let s = session();
        s.submit("hello", None).unwrap();
        drain_scheduler().await;
        s.close();

        // Even well past the delay window, no reply fires.
        tokio::time::advance(Duration::from_millis(10_000)).await;
        drain_scheduler().await;
        assert_eq!(s.len(), 1);
        assert!(!s.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_is_idempotent() {
        let s = session();
        s.close();
        s.close();
        assert!(s.is_closed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_returns_after_close() {
        let s = session();
        s.submit("hello", None).unwrap();
        s.close();
        // Must not hang even though the reply was cancelled.
        s.settled().await;
        assert_eq!(s.len(), 1);
    }

    // ---- Events ----

    #[tokio::test(start_paused = true)]
    async fn test_events_for_one_exchange() {
        let s = session();
        let mut rx = s.subscribe();

        s.submit("hello", None).unwrap();
        s.settled().await;

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }

        assert!(matches!(
            events[0],
            SessionEvent::MessageAppended {
                author: MessageAuthor::User,
                ..
            }
        ));
        assert!(matches!(
            events[1],
            SessionEvent::ComposingChanged { composing: true }
        ));
        assert!(matches!(
            events[2],
            SessionEvent::MessageAppended {
                author: MessageAuthor::Assistant,
                ..
            }
        ));
        assert!(matches!(
            events[3],
            SessionEvent::ComposingChanged { composing: false }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_emits_session_closed() {
        let s = session();
        let mut rx = s.subscribe();
        s.close();

        let mut saw_closed = false;
        while let Ok(event) = rx.try_recv() {
            if matches!(event, SessionEvent::SessionClosed) {
                saw_closed = true;
            }
        }
        assert!(saw_closed);
    }

    // ---- Concurrent submitters ----

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_submissions_all_resolve() {
        let s = Arc::new(session());
        let mut handles = Vec::new();
        for i in 0..8 {
            let s = Arc::clone(&s);
            handles.push(tokio::spawn(async move {
                s.submit(format!("message {}", i), None).unwrap();
            }));
        }
        for h in handles {
            h.await.unwrap();
        }
        s.settled().await;
        assert_eq!(s.len(), 16);
    }
}
