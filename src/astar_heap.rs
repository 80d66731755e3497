//! Binary-heap A* over weighted successor functions.
//!
//! The tracing solvers in [crate::solver] re-sort their whole frontier each
//! step so that the settle order matches the animation the caller wants to
//! drive. This module is the O(E log V) alternative for callers that only
//! need a path: a [BinaryHeap] open list with lazy deletion of stale
//! entries, and a parent map the path is unwound from afterwards.

use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::warn;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Open-list entry. Nodes are referenced by their insertion index in the
/// parent map rather than by value.
struct OpenEntry<C> {
    estimate: C,
    cost: C,
    index: usize,
}

impl<C: PartialEq> PartialEq for OpenEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.estimate.eq(&other.estimate) && self.cost.eq(&other.cost)
    }
}

impl<C: PartialEq> Eq for OpenEntry<C> {}

impl<C: Ord> PartialOrd for OpenEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for OpenEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on the estimate; between equal estimates the entry with
        // the larger accumulated cost is expanded first.
        match other.estimate.cmp(&self.estimate) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            ord => ord,
        }
    }
}

fn unwind_path<N, C>(parents: &FxIndexMap<N, (usize, C)>, goal_index: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = itertools::unfold(goal_index, |index| {
        parents.get_index(*index).map(|(node, &(parent_index, _))| {
            *index = parent_index;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Generic A* returning the path from `start` to the first node accepted by
/// `success`, together with its accumulated cost, or [None] when the open
/// list drains first. With a zero heuristic this degenerates to Dijkstra.
pub fn weighted_astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut open = BinaryHeap::new();
    open.push(OpenEntry {
        estimate: Zero::zero(),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    while let Some(OpenEntry { cost, index, .. }) = open.pop() {
        let successor_list = {
            let (node, &(_, best_cost)) = parents.get_index(index).unwrap();
            if success(node) {
                return Some((unwind_path(&parents, index), cost));
            }
            // A node can sit in the heap several times; only the cheapest
            // copy is still current, the rest are discarded here.
            if cost > best_cost {
                continue;
            }
            successors(node)
        };
        for (successor, step_cost) in successor_list {
            let new_cost = cost + step_cost;
            let (h, successor_index) = match parents.entry(successor) {
                Vacant(entry) => {
                    let h = heuristic(entry.key());
                    let ix = entry.index();
                    entry.insert((index, new_cost));
                    (h, ix)
                }
                Occupied(mut entry) => {
                    if entry.get().1 > new_cost {
                        let h = heuristic(entry.key());
                        let ix = entry.index();
                        entry.insert((index, new_cost));
                        (h, ix)
                    } else {
                        continue;
                    }
                }
            };
            open.push(OpenEntry {
                estimate: new_cost + h,
                cost: new_cost,
                index: successor_index,
            });
        }
    }
    warn!("open list drained without reaching a goal node");
    None
}
