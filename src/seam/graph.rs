//! Seam graph construction over the overlap region.
//!
//! Nodes are the overlap pixels plus two implicit terminals. Neighbor
//! edges price color discontinuity: replacing one source with the other is
//! cheap where the two sources already agree, so the minimum cut tracks
//! low-discontinuity boundaries. Terminal edges pin overlap pixels that
//! border a region only one source covers.

use rayon::prelude::*;

use crate::foundation::buffer::{ImageRgbF32, MaskU8};
use crate::foundation::error::{SeamweldError, SeamweldResult};
use crate::seam::flow::{FlowNetwork, INF_CAPACITY};

/// Fixed-point steps per unit of float edge cost.
const COST_SCALE: f32 = 256.0;
/// Floor added to every neighbor cost so zero-discontinuity regions still
/// carry finite capacity.
const COST_FLOOR: f32 = 1.0;

const NODE_NONE: u32 = u32::MAX;

/// Ephemeral seam graph for one cut. Discarded after the masks update.
#[derive(Debug)]
pub(crate) struct SeamGraph {
    pub(crate) network: FlowNetwork,
    /// Row-major pixel indices of the overlap region; position = node id.
    pub(crate) overlap: Vec<u32>,
    pub(crate) source: u32,
    pub(crate) sink: u32,
}

/// Build the grid graph over pixels where both masks are nonzero.
pub(crate) fn build(
    base: &ImageRgbF32,
    overlay: &ImageRgbF32,
    base_mask: &MaskU8,
    overlay_mask: &MaskU8,
) -> SeamweldResult<SeamGraph> {
    let width = base.width as usize;
    let height = base.height as usize;

    let mut node_of = vec![NODE_NONE; width * height];
    let mut overlap = Vec::new();
    for pix in 0..width * height {
        if base_mask.data[pix] > 0 && overlay_mask.data[pix] > 0 {
            node_of[pix] = overlap.len() as u32;
            overlap.push(pix as u32);
        }
    }
    if overlap.is_empty() {
        return Err(SeamweldError::degenerate_graph(
            "base and overlay validity do not overlap",
        ));
    }

    // Per-node color discontinuity, in parallel; order is preserved.
    let diff: Vec<f32> = overlap
        .par_iter()
        .map(|&pix| color_diff(base, overlay, pix as usize))
        .collect();

    let nodes = overlap.len();
    let source = nodes as u32;
    let sink = nodes as u32 + 1;
    let mut network = FlowNetwork::new(nodes + 2);

    for (node, &pix) in overlap.iter().enumerate() {
        let pix = pix as usize;
        let x = pix % width;
        let y = pix / width;

        // Terminal edges: a pixel bordering a region only one source
        // covers is locked to that source's side of the cut.
        let mut base_exclusive = false;
        let mut overlay_exclusive = false;
        let mut visit = |npix: usize| {
            let b = base_mask.data[npix] > 0;
            let o = overlay_mask.data[npix] > 0;
            base_exclusive |= b && !o;
            overlay_exclusive |= o && !b;
        };
        if x > 0 {
            visit(pix - 1);
        }
        if x + 1 < width {
            visit(pix + 1);
        }
        if y > 0 {
            visit(pix - width);
        }
        if y + 1 < height {
            visit(pix + width);
        }
        if base_exclusive {
            network.add_edge(source, node as u32, INF_CAPACITY, 0);
        }
        if overlay_exclusive {
            network.add_edge(node as u32, sink, INF_CAPACITY, 0);
        }

        // Neighbor edges, right and down only so each pair is added once.
        if x + 1 < width && node_of[pix + 1] != NODE_NONE {
            let other = node_of[pix + 1];
            let cap = edge_capacity(diff[node], diff[other as usize]);
            network.add_edge(node as u32, other, cap, cap);
        }
        if y + 1 < height && node_of[pix + width] != NODE_NONE {
            let other = node_of[pix + width];
            let cap = edge_capacity(diff[node], diff[other as usize]);
            network.add_edge(node as u32, other, cap, cap);
        }
    }

    Ok(SeamGraph {
        network,
        overlap,
        source,
        sink,
    })
}

fn color_diff(base: &ImageRgbF32, overlay: &ImageRgbF32, pix: usize) -> f32 {
    let i = pix * 3;
    let dr = base.data[i] - overlay.data[i];
    let dg = base.data[i + 1] - overlay.data[i + 1];
    let db = base.data[i + 2] - overlay.data[i + 2];
    (dr * dr + dg * dg + db * db).sqrt()
}

fn edge_capacity(diff_p: f32, diff_q: f32) -> u64 {
    ((diff_p + diff_q + COST_FLOOR) * COST_SCALE) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/seam/graph.rs"]
mod tests;
