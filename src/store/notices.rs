//! Transient notice slots.
//!
//! The store surfaces two independent single-slot messages: a warning
//! (business-rule rejections) and a confirmation (successful cart
//! mutations). Each message auto-expires after a fixed delay measured from
//! the most recent post to that slot; posting again cancels the pending
//! expiry and restarts it. Cancellation is modeled with a per-slot
//! generation counter so a stale scheduled expiry cannot clear a newer
//! message.

use std::time::{Duration, Instant};

/// Warning messages stay visible for 2.5 seconds.
pub const WARNING_TTL: Duration = Duration::from_millis(2500);

/// Confirmation messages stay visible for 2 seconds.
pub const CONFIRMATION_TTL: Duration = Duration::from_millis(2000);

/// Which of the two message slots a notice targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSlot {
    Warning,
    Confirmation,
}

impl NoticeSlot {
    pub fn ttl(self) -> Duration {
        match self {
            NoticeSlot::Warning => WARNING_TTL,
            NoticeSlot::Confirmation => CONFIRMATION_TTL,
        }
    }
}

/// Cancellation token for a scheduled expiry.
///
/// Returned by [`NoticeBoard::post`]; pass it back to
/// [`NoticeBoard::expire`] after the slot's TTL. A token only clears the
/// slot while its generation is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryToken {
    pub slot: NoticeSlot,
    generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Slot {
    message: Option<String>,
    deadline: Option<Instant>,
    generation: u64,
}

/// Owner of the warning and confirmation slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeBoard {
    warning: Slot,
    confirmation: Slot,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, slot: NoticeSlot) -> &Slot {
        match slot {
            NoticeSlot::Warning => &self.warning,
            NoticeSlot::Confirmation => &self.confirmation,
        }
    }

    fn slot_mut(&mut self, slot: NoticeSlot) -> &mut Slot {
        match slot {
            NoticeSlot::Warning => &mut self.warning,
            NoticeSlot::Confirmation => &mut self.confirmation,
        }
    }

    /// Post a message, replacing the slot's current message and restarting
    /// its expiry window from `now`.
    pub fn post(&mut self, slot: NoticeSlot, message: impl Into<String>, now: Instant) -> ExpiryToken {
        let ttl = slot.ttl();
        let s = self.slot_mut(slot);
        s.message = Some(message.into());
        s.deadline = Some(now + ttl);
        s.generation += 1;
        ExpiryToken {
            slot,
            generation: s.generation,
        }
    }

    /// Clear the slot, but only if `token` is still the latest post.
    /// A superseded token is a no-op.
    pub fn expire(&mut self, token: ExpiryToken) {
        let s = self.slot_mut(token.slot);
        if s.generation == token.generation {
            s.message = None;
            s.deadline = None;
        }
    }

    /// The slot's message, if one is posted and its deadline has not passed.
    pub fn current(&self, slot: NoticeSlot, now: Instant) -> Option<&str> {
        let s = self.slot(slot);
        match (&s.message, s.deadline) {
            (Some(msg), Some(deadline)) if now < deadline => Some(msg.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_visible_before_deadline() {
        let mut board = NoticeBoard::new();
        let now = Instant::now();
        board.post(NoticeSlot::Warning, "conflict", now);
        assert_eq!(board.current(NoticeSlot::Warning, now), Some("conflict"));
        let later = now + Duration::from_millis(2400);
        assert_eq!(board.current(NoticeSlot::Warning, later), Some("conflict"));
    }

    #[test]
    fn message_hidden_after_deadline() {
        let mut board = NoticeBoard::new();
        let now = Instant::now();
        board.post(NoticeSlot::Confirmation, "added", now);
        let later = now + CONFIRMATION_TTL;
        assert_eq!(board.current(NoticeSlot::Confirmation, later), None);
    }

    #[test]
    fn stale_token_does_not_clear_newer_message() {
        let mut board = NoticeBoard::new();
        let now = Instant::now();
        let first = board.post(NoticeSlot::Warning, "first", now);
        board.post(NoticeSlot::Warning, "second", now + Duration::from_millis(100));
        board.expire(first);
        assert_eq!(
            board.current(NoticeSlot::Warning, now + Duration::from_millis(200)),
            Some("second")
        );
    }

    #[test]
    fn current_token_clears_its_message() {
        let mut board = NoticeBoard::new();
        let now = Instant::now();
        let token = board.post(NoticeSlot::Warning, "only", now);
        board.expire(token);
        assert_eq!(board.current(NoticeSlot::Warning, now), None);
    }

    #[test]
    fn slots_are_independent() {
        let mut board = NoticeBoard::new();
        let now = Instant::now();
        let warn = board.post(NoticeSlot::Warning, "warn", now);
        board.post(NoticeSlot::Confirmation, "ok", now);
        board.expire(warn);
        assert_eq!(board.current(NoticeSlot::Warning, now), None);
        assert_eq!(board.current(NoticeSlot::Confirmation, now), Some("ok"));
    }
}
