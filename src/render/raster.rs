//! Scanline coverage rasterizer for polygonal fill regions.
//!
//! All transition geometry is polygonal, so paths are flattened to directed
//! line edges and scan-converted with 4x4 supersampling per pixel. Degenerate
//! geometry yields exactly 0 coverage and geometry spanning the canvas yields
//! exactly 255, which the progress-boundary identity of the renderers relies
//! on.

use crate::render::context::FillRule;
use kurbo::{BezPath, PathEl, Point};

const SAMPLES: usize = 4;
const SAMPLES_TOTAL: u16 = (SAMPLES * SAMPLES) as u16;

#[derive(Clone, Copy, Debug)]
struct Edge {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

/// Scan-convert `path` under `rule` into a width*height coverage mask
/// (0 = outside, 255 = fully covered).
pub(crate) fn rasterize(path: &BezPath, rule: FillRule, width: u32, height: u32) -> Vec<u8> {
    let w = width as usize;
    let h = height as usize;
    let mut coverage = vec![0u8; w * h];
    let edges = collect_edges(path);
    if edges.is_empty() {
        return coverage;
    }

    let mut counts = vec![0u8; w];
    let mut crossings: Vec<(f64, i32)> = Vec::new();

    for py in 0..h {
        counts.fill(0);
        for j in 0..SAMPLES {
            let sy = py as f64 + (j as f64 + 0.5) / SAMPLES as f64;
            crossings.clear();
            for e in &edges {
                // Half-open in y so shared vertices are counted once.
                let dir = if e.y0 <= sy && sy < e.y1 {
                    1
                } else if e.y1 <= sy && sy < e.y0 {
                    -1
                } else {
                    continue;
                };
                let x = e.x0 + (e.x1 - e.x0) * (sy - e.y0) / (e.y1 - e.y0);
                crossings.push((x, dir));
            }
            if crossings.is_empty() {
                continue;
            }
            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut winding = 0i32;
            let mut inside = false;
            let mut span_start = 0.0f64;
            for &(x, dir) in &crossings {
                winding += dir;
                let now = match rule {
                    FillRule::NonZero => winding != 0,
                    FillRule::EvenOdd => winding % 2 != 0,
                };
                if !inside && now {
                    span_start = x;
                } else if inside && !now {
                    accumulate_span(&mut counts, span_start, x, width);
                }
                inside = now;
            }
        }
        let row = &mut coverage[py * w..(py + 1) * w];
        for (px, &c) in counts.iter().enumerate() {
            row[px] = ((u16::from(c) * 255 + SAMPLES_TOTAL / 2) / SAMPLES_TOTAL) as u8;
        }
    }
    coverage
}

/// Add one sample hit to every pixel whose sample column falls in [xa, xb).
fn accumulate_span(counts: &mut [u8], xa: f64, xb: f64, width: u32) {
    // Sample columns sit at (gx + 0.5) / SAMPLES for gx in [0, SAMPLES*width).
    let n = SAMPLES as f64;
    let gx_max = (width as usize) * SAMPLES;
    let start = (n * xa - 0.5).ceil().max(0.0) as usize;
    let end = ((n * xb - 0.5).ceil().max(0.0) as usize).min(gx_max);
    for gx in start..end {
        counts[gx / SAMPLES] += 1;
    }
}

fn collect_edges(path: &BezPath) -> Vec<Edge> {
    let mut edges = Vec::new();
    let push = |edges: &mut Vec<Edge>, a: Point, b: Point| {
        if a.y != b.y {
            edges.push(Edge {
                x0: a.x,
                y0: a.y,
                x1: b.x,
                y1: b.y,
            });
        }
    };

    let mut start = Point::ZERO;
    let mut cur = Point::ZERO;
    let mut open = false;
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                if open {
                    // Implicit close of the previous subpath, as for fill.
                    push(&mut edges, cur, start);
                }
                start = p;
                cur = p;
                open = true;
            }
            PathEl::LineTo(p) => {
                push(&mut edges, cur, p);
                cur = p;
            }
            // Transition geometry never emits curves; chord them if a caller
            // does.
            PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => {
                push(&mut edges, cur, p);
                cur = p;
            }
            PathEl::ClosePath => {
                push(&mut edges, cur, start);
                cur = start;
            }
        }
    }
    if open {
        push(&mut edges, cur, start);
    }
    edges
}
