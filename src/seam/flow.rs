//! Deterministic integer max-flow / min-cut.
//!
//! Dinic's algorithm over an edge-list network. Determinism comes from
//! integer capacities and fixed visit order: adjacency lists are walked in
//! insertion order by both the BFS level pass and the DFS blocking-flow
//! pass, so identical inputs always produce the identical cut.

use std::collections::VecDeque;

/// Capacity treated as unbounded. Low enough that summing one per locked
/// border pixel cannot overflow the u64 flow accumulator.
pub(crate) const INF_CAPACITY: u64 = 1 << 40;

/// Edge-list flow network with paired forward/reverse edges.
///
/// Edge `e` and `e ^ 1` always form a forward/reverse pair, so the reverse
/// of any edge is found without a lookup table.
#[derive(Debug)]
pub(crate) struct FlowNetwork {
    adj: Vec<Vec<u32>>,
    to: Vec<u32>,
    cap: Vec<u64>,
}

impl FlowNetwork {
    pub(crate) fn new(nodes: usize) -> Self {
        Self {
            adj: vec![Vec::new(); nodes],
            to: Vec::new(),
            cap: Vec::new(),
        }
    }

    pub(crate) fn nodes(&self) -> usize {
        self.adj.len()
    }

    /// Add an edge with independent forward and reverse capacity.
    ///
    /// Neighbor (smoothness) edges pass the same capacity both ways;
    /// terminal edges pass `rev_cap` 0.
    pub(crate) fn add_edge(&mut self, from: u32, to: u32, cap: u64, rev_cap: u64) {
        let e = self.to.len() as u32;
        self.to.push(to);
        self.cap.push(cap);
        self.to.push(from);
        self.cap.push(rev_cap);
        self.adj[from as usize].push(e);
        self.adj[to as usize].push(e + 1);
    }

    /// Run Dinic's algorithm and return the total flow pushed.
    pub(crate) fn max_flow(&mut self, source: u32, sink: u32) -> u64 {
        let n = self.nodes();
        let mut level = vec![u32::MAX; n];
        let mut iter = vec![0usize; n];
        let mut queue = VecDeque::new();
        let mut total = 0u64;
        while self.assign_levels(source, sink, &mut level, &mut queue) {
            iter.fill(0);
            total = total.saturating_add(self.blocking_flow(source, sink, &level, &mut iter));
        }
        total
    }

    fn assign_levels(
        &self,
        source: u32,
        sink: u32,
        level: &mut [u32],
        queue: &mut VecDeque<u32>,
    ) -> bool {
        level.fill(u32::MAX);
        level[source as usize] = 0;
        queue.clear();
        queue.push_back(source);
        while let Some(u) = queue.pop_front() {
            for &e in &self.adj[u as usize] {
                let v = self.to[e as usize];
                if self.cap[e as usize] > 0 && level[v as usize] == u32::MAX {
                    level[v as usize] = level[u as usize] + 1;
                    queue.push_back(v);
                }
            }
        }
        level[sink as usize] != u32::MAX
    }

    /// One blocking-flow phase. Iterative rather than recursive so path
    /// lengths on megapixel grids stay off the call stack.
    fn blocking_flow(&mut self, source: u32, sink: u32, level: &[u32], iter: &mut [usize]) -> u64 {
        let mut total = 0u64;
        let mut path: Vec<u32> = Vec::new();
        loop {
            let u = match path.last() {
                Some(&e) => self.to[e as usize],
                None => source,
            };

            if u == sink {
                let mut pushed = u64::MAX;
                for &e in &path {
                    pushed = pushed.min(self.cap[e as usize]);
                }
                for &e in &path {
                    self.cap[e as usize] -= pushed;
                    self.cap[(e ^ 1) as usize] += pushed;
                }
                total = total.saturating_add(pushed);

                // Retreat to just before the first saturated edge; its
                // tail will skip it on the next advance.
                let first_saturated = path
                    .iter()
                    .position(|&e| self.cap[e as usize] == 0)
                    .unwrap_or(path.len());
                path.truncate(first_saturated);
                continue;
            }

            let ui = u as usize;
            let mut advanced = false;
            while iter[ui] < self.adj[ui].len() {
                let e = self.adj[ui][iter[ui]];
                let v = self.to[e as usize] as usize;
                if self.cap[e as usize] > 0 && level[v] == level[ui] + 1 {
                    path.push(e);
                    advanced = true;
                    break;
                }
                iter[ui] += 1;
            }
            if advanced {
                continue;
            }

            match path.pop() {
                Some(e) => {
                    // Dead end: the tail of `e` moves past it.
                    let tail = self.to[(e ^ 1) as usize] as usize;
                    iter[tail] += 1;
                }
                None => break,
            }
        }
        total
    }

    /// Nodes reachable from `source` in the residual network. Call after
    /// [`FlowNetwork::max_flow`]; the reachable set is the source side of
    /// the minimum cut.
    pub(crate) fn min_cut_source_side(&self, source: u32) -> Vec<bool> {
        let mut reachable = vec![false; self.nodes()];
        let mut queue = VecDeque::new();
        reachable[source as usize] = true;
        queue.push_back(source);
        while let Some(u) = queue.pop_front() {
            for &e in &self.adj[u as usize] {
                let v = self.to[e as usize] as usize;
                if self.cap[e as usize] > 0 && !reachable[v] {
                    reachable[v] = true;
                    queue.push_back(v as u32);
                }
            }
        }
        reachable
    }
}

#[cfg(test)]
#[path = "../../tests/unit/seam/flow.rs"]
mod tests;
