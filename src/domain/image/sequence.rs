// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/image/sequence.rs
//
// Ordering of render requests so that late completions never overwrite newer results.

/// Identifies one issued render request. Higher tickets were issued later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RenderTicket(u64);

impl RenderTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// What to do with a completed render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Newest result so far; display it.
    Apply,
    /// A later request already landed, or the session was reset.
    Stale,
}

/// Hands out tickets and decides which completions are applied.
///
/// A request issued while another is pending supersedes it: both run to
/// completion, but a result is only applied when no later ticket has
/// already landed.
#[derive(Debug, Default)]
pub struct RenderSequencer {
    issued: u64,
    landed: u64,
    floor: u64,
    pending: usize,
}

impl RenderSequencer {
    pub fn issue(&mut self) -> RenderTicket {
        self.issued += 1;
        self.pending += 1;
        RenderTicket(self.issued)
    }

    /// Record that `ticket` finished, successfully or not.
    pub fn complete(&mut self, ticket: RenderTicket) -> Completion {
        self.pending = self.pending.saturating_sub(1);

        if ticket.0 <= self.floor || ticket.0 <= self.landed {
            return Completion::Stale;
        }
        self.landed = ticket.0;
        Completion::Apply
    }

    /// Whether any issued request has not completed yet.
    pub fn is_pending(&self) -> bool {
        self.pending > 0
    }

    /// Invalidate every ticket issued so far.
    pub fn reset(&mut self) {
        self.floor = self.issued;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_order_completions_apply() {
        let mut seq = RenderSequencer::default();
        let a = seq.issue();
        assert!(seq.is_pending());
        assert_eq!(seq.complete(a), Completion::Apply);
        assert!(!seq.is_pending());

        let b = seq.issue();
        assert_eq!(seq.complete(b), Completion::Apply);
        assert!(b > a);
    }

    #[test]
    fn late_older_completion_is_stale() {
        let mut seq = RenderSequencer::default();
        let a = seq.issue();
        let b = seq.issue();

        assert_eq!(seq.complete(b), Completion::Apply);
        assert!(seq.is_pending());
        assert_eq!(seq.complete(a), Completion::Stale);
        assert!(!seq.is_pending());
    }

    #[test]
    fn early_older_completion_still_applies() {
        let mut seq = RenderSequencer::default();
        let a = seq.issue();
        let b = seq.issue();

        assert_eq!(seq.complete(a), Completion::Apply);
        assert_eq!(seq.complete(b), Completion::Apply);
    }

    #[test]
    fn reset_discards_outstanding_tickets() {
        let mut seq = RenderSequencer::default();
        let a = seq.issue();
        seq.reset();
        assert_eq!(seq.complete(a), Completion::Stale);

        let b = seq.issue();
        assert_eq!(seq.complete(b), Completion::Apply);
    }
}
