use fxhash::FxBuildHasher;
/// This module implements the best-first search shared by both solvers: a
/// binary-heap frontier with lazy deletion over an insertion-ordered map of
/// parent links. The heuristic decides the flavour — zero keys the frontier
/// by plain cumulative distance, an estimate of the remaining distance turns
/// the same loop into A*.
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use std::hash::Hash;

struct FrontierEntry<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
    seq: u64,
}

impl<K: PartialEq> Eq for FrontierEntry<K> {}

impl<K: PartialEq> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.seq == other.seq
    }
}

impl<K: Ord> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Orders per estimated cost; equal priorities pop in insertion
        // order, which keeps the exploration order reproducible run to run.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            s => s,
        }
    }
}

/// What a finished run produced. `path` is empty when the goal was never
/// finalized; `visited` holds every finalized node in extraction order
/// either way.
pub(crate) struct SearchRun<N, K> {
    pub path: Vec<N>,
    pub cost: Option<K>,
    pub visited: Vec<N>,
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

pub(crate) fn best_first_search<N, K, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> SearchRun<N, K>
where
    N: Eq + Hash + Clone,
    K: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, K)>,
    FH: FnMut(&N) -> K,
    FS: FnMut(&N) -> bool,
{
    let mut frontier = BinaryHeap::new();
    let mut seq: u64 = 0;
    frontier.push(FrontierEntry {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
        seq,
    });
    let mut parents: FxIndexMap<N, (usize, K)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut visited: Vec<N> = Vec::new();
    while let Some(FrontierEntry { cost, index, .. }) = frontier.pop() {
        let successors = {
            let (node, &(_, best)) = parents.get_index(index).unwrap();
            // We may have inserted a node several times into the binary heap
            // if we found a better way to access it. Entries that no longer
            // carry the best known cost are stale and the node is already
            // finalized; discard them.
            if cost > best {
                continue;
            }
            visited.push(node.clone());
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return SearchRun {
                    path,
                    cost: Some(cost),
                    visited,
                };
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            seq += 1;
            frontier.push(FrontierEntry {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
                seq,
            });
        }
    }
    debug!(
        "frontier drained after finalizing {} nodes; goal is unreachable",
        visited.len()
    );
    SearchRun {
        path: Vec::new(),
        cost: None,
        visited,
    }
}
