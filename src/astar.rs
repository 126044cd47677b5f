//! A variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! with deterministic tie-breaking: the frontier orders entries by estimated
//! total cost first and by node second, so equal-cost pops happen in node
//! order and repeated runs over the same input return identical paths.

use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct SmallestCostHolder<N, K> {
    estimated_cost: K,
    cost: K,
    node: N,
}

impl<N: Eq, K: PartialEq> Eq for SmallestCostHolder<N, K> {}

impl<N: Eq, K: PartialEq> PartialEq for SmallestCostHolder<N, K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.node.eq(&other.node)
    }
}

impl<N: Ord, K: Ord> PartialOrd for SmallestCostHolder<N, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, K: Ord> Ord for SmallestCostHolder<N, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both comparisons are reversed so that the max-heap pops the
        // smallest estimate, and among equal estimates the smallest node.
        // The raw cost is payload, not part of the order.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.node.cmp(&self.node),
            s => s,
        }
    }
}

/// Walks predecessor links back from `goal` until the start's `None`
/// sentinel, then reverses into start-to-goal order.
fn reverse_path<N, C>(parents: &FxIndexMap<N, (Option<N>, C)>, goal: N) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = itertools::unfold(Some(goal), |current| {
        current.take().map(|node| {
            *current = parents.get(&node).and_then(|(prev, _)| prev.clone());
            node
        })
    })
    .collect();
    path.reverse();
    path
}

pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone + Ord,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        node: start.clone(),
    });
    // Each discovered node maps to its predecessor and best known cost. The
    // start holds a `None` predecessor so reconstruction can tell it apart
    // from nodes that were never reached.
    let mut parents: FxIndexMap<N, (Option<N>, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (None, Zero::zero()));
    while let Some(SmallestCostHolder { cost, node, .. }) = to_see.pop() {
        if success(&node) {
            return Some((reverse_path(&parents, node), cost));
        }
        // We may have inserted a node several times into the binary heap if
        // we found a better way to access it. Ensure that we are currently
        // dealing with the best path and discard the others.
        let best = parents.get(&node).unwrap().1;
        if cost > best {
            continue;
        }
        for (successor, move_cost) in successors(&node) {
            let new_cost = cost + move_cost;
            let h;
            match parents.entry(successor.clone()) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    e.insert((Some(node.clone()), new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        e.insert((Some(node.clone()), new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                node: successor,
            });
        }
    }
    None
}
