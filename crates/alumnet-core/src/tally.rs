//! Tally helper - keeps denormalized counters consistent with child records
//!
//! Parents (posts, comments, proposals) cache integer counters that must track
//! the set of live child records (reactions, votes, comments). The counters are
//! adjusted by the same operation that creates or removes a child, never
//! recomputed by a background job. This module holds the shared decision logic
//! and the clamped arithmetic; repositories apply the resulting deltas together
//! with the child-row write in a single storage transaction.

/// What applying a reaction/vote should do to the stored record and counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyPlan<K> {
    /// No record exists for this actor: insert one and increment `K`'s counter.
    Insert(K),
    /// A record of a different kind exists: rewrite it and move one count
    /// from `from` to `to` (net-zero total).
    Switch { from: K, to: K },
    /// A record of the same kind already exists: leave everything untouched.
    Unchanged,
}

/// Decide how to apply an incoming reaction/vote given the actor's existing
/// record, enforcing the at-most-one-per-actor invariant at the application
/// layer. Repeated application of the same kind is idempotent.
pub fn plan_apply<K: Copy + PartialEq>(existing: Option<K>, incoming: K) -> TallyPlan<K> {
    match existing {
        None => TallyPlan::Insert(incoming),
        Some(current) if current == incoming => TallyPlan::Unchanged,
        Some(current) => TallyPlan::Switch {
            from: current,
            to: incoming,
        },
    }
}

/// Decrement a counter, clamped at a floor of zero to tolerate prior drift.
#[inline]
#[must_use]
pub fn clamped_dec(count: i32) -> i32 {
    clamped_sub(count, 1)
}

/// Subtract `n` from a counter, clamped at a floor of zero.
#[inline]
#[must_use]
pub fn clamped_sub(count: i32, n: i32) -> i32 {
    (count - n).max(0)
}
