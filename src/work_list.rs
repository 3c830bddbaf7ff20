//! `GroupScheduler`: a min-priority queue over group identities.
//!
//! A `BinaryHeap` plus a membership index, with genuine decrease-key
//! semantics implemented via lazy deletion: every priority change pushes a
//! fresh heap entry, and `pop_min` skips any popped entry whose priority no
//! longer matches the authoritative value in `priorities`. `BinaryHeap`
//! doesn't support decreasing a key in place, so this is the standard
//! workaround for getting that behavior out of it.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::model::GroupId;

pub struct GroupScheduler {
    priorities: HashMap<GroupId, i64>,
    heap: BinaryHeap<Reverse<(i64, GroupId)>>,
}

impl GroupScheduler {
    pub fn new() -> Self {
        Self {
            priorities: HashMap::new(),
            heap: BinaryHeap::new(),
        }
    }

    /// Seeds the queue with every group at priority 0.
    pub fn seed_all(&mut self, group_count: usize) {
        for gid in 0..group_count {
            self.priorities.insert(gid, 0);
            self.heap.push(Reverse((0, gid)));
        }
    }

    /// Decrements `group`'s priority by `by`. A group not currently queued
    /// (already popped) is re-inserted at priority 0 before the decrement is
    /// applied.
    pub fn decrement(&mut self, group: GroupId, by: i64) {
        let priority = self.priorities.entry(group).or_insert(0);
        *priority -= by;
        self.heap.push(Reverse((*priority, group)));
    }

    /// Pops the group with the lowest (most negative) priority, or `None` if
    /// the queue is empty. Ties are broken by group identity: arbitrary but
    /// deterministic.
    pub fn pop_min(&mut self) -> Option<GroupId> {
        while let Some(Reverse((priority, gid))) = self.heap.pop() {
            match self.priorities.get(&gid) {
                Some(&current) if current == priority => {
                    self.priorities.remove(&gid);
                    return Some(gid);
                }
                _ => continue, // stale: superseded by a later decrement, or already popped
            }
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }
}

impl Default for GroupScheduler {
    fn default() -> Self {
        Self::new()
    }
}
