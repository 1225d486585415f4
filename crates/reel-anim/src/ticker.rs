//! Frame Ticker
//!
//! Shared per-frame clock. Subscribers are identified by a token rather than a
//! captured closure; the owner dispatches each [`Frame`] itself and decides
//! whether the token is still current when the frame is applied.

/// Subscription handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickerId(u64);

/// One frame delivered to one subscriber
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<T> {
    pub id: TickerId,
    pub token: T,
}

/// Per-frame ticker
#[derive(Debug)]
pub struct Ticker<T> {
    next_id: u64,
    subscribers: Vec<(TickerId, T)>,
    frames: u64,
}

impl<T> Default for Ticker<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            subscribers: Vec::new(),
            frames: 0,
        }
    }
}

impl<T: Clone> Ticker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `token` to every following frame
    pub fn subscribe(&mut self, token: T) -> TickerId {
        let id = TickerId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, token));
        tracing::trace!(?id, "ticker subscribe");
        id
    }

    /// Stop delivering frames to `id`. Frames already handed out are not recalled.
    pub fn unsubscribe(&mut self, id: TickerId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        let removed = self.subscribers.len() != before;
        if removed {
            tracing::trace!(?id, "ticker unsubscribe");
        }
        removed
    }

    pub fn contains(&self, id: TickerId) -> bool {
        self.subscribers.iter().any(|(sid, _)| *sid == id)
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Frames ticked so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Advance the clock and produce one frame per subscriber
    pub fn tick(&mut self) -> Vec<Frame<T>> {
        self.frames += 1;

        self.subscribers
            .iter()
            .map(|(id, token)| Frame {
                id: *id,
                token: token.clone(),
            })
            .collect()
    }
}
