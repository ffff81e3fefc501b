//! Clipping against the visible axis box.
//!
//! plotters draws elements wherever their coordinates land, so a region that
//! reaches the ceiling would paint over the axis labels. Clipping happens in
//! log10 space, where the straight edges of a log-log plot are straight.

type Pt = (f64, f64);

/// Visible axis box, stored as log10 of its data-space limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogBox {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
}

impl LogBox {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        LogBox {
            x0: xmin.log10(),
            x1: xmax.log10(),
            y0: ymin.log10(),
            y1: ymax.log10(),
        }
    }
}

#[derive(Clone, Copy)]
enum Edge {
    Left(f64),
    Right(f64),
    Bottom(f64),
    Top(f64),
}

impl Edge {
    fn inside(self, (x, y): Pt) -> bool {
        match self {
            Edge::Left(v) => x >= v,
            Edge::Right(v) => x <= v,
            Edge::Bottom(v) => y >= v,
            Edge::Top(v) => y <= v,
        }
    }

    // Only called for segments that cross the edge, so the divisor is non-zero.
    fn intersect(self, a: Pt, b: Pt) -> Pt {
        match self {
            Edge::Left(v) | Edge::Right(v) => {
                let t = (v - a.0) / (b.0 - a.0);
                (v, a.1 + t * (b.1 - a.1))
            }
            Edge::Bottom(v) | Edge::Top(v) => {
                let t = (v - a.1) / (b.1 - a.1);
                (a.0 + t * (b.0 - a.0), v)
            }
        }
    }
}

fn to_log(points: &[Pt]) -> Vec<Pt> {
    points.iter().map(|&(x, y)| (x.log10(), y.log10())).collect()
}

fn from_log(points: Vec<Pt>) -> Vec<Pt> {
    points
        .into_iter()
        .map(|(x, y)| (10f64.powf(x), 10f64.powf(y)))
        .collect()
}

/// Sutherland–Hodgman clip of a closed polygon. Empty when nothing is visible.
pub fn clip_polygon(points: &[Pt], bounds: &LogBox) -> Vec<Pt> {
    let mut poly = to_log(points);
    let edges = [
        Edge::Left(bounds.x0),
        Edge::Right(bounds.x1),
        Edge::Bottom(bounds.y0),
        Edge::Top(bounds.y1),
    ];
    for edge in edges {
        let Some(&last) = poly.last() else {
            break;
        };
        let mut out = Vec::with_capacity(poly.len() + 4);
        let mut prev = last;
        for &cur in &poly {
            match (edge.inside(prev), edge.inside(cur)) {
                (true, true) => out.push(cur),
                (true, false) => out.push(edge.intersect(prev, cur)),
                (false, true) => {
                    out.push(edge.intersect(prev, cur));
                    out.push(cur);
                }
                (false, false) => {}
            }
            prev = cur;
        }
        poly = out;
    }
    from_log(poly)
}

/// Liang–Barsky clip of one segment.
fn clip_segment(a: Pt, b: Pt, bounds: &LogBox) -> Option<(Pt, Pt)> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    let checks = [
        (-dx, a.0 - bounds.x0),
        (dx, bounds.x1 - a.0),
        (-dy, a.1 - bounds.y0),
        (dy, bounds.y1 - a.1),
    ];
    for (p, q) in checks {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    // Keep untouched endpoints bit-exact so consecutive segments chain.
    let start = if t0 == 0.0 { a } else { (a.0 + t0 * dx, a.1 + t0 * dy) };
    let end = if t1 == 1.0 { b } else { (a.0 + t1 * dx, a.1 + t1 * dy) };
    Some((start, end))
}

/// Clip an open polyline; each visible stretch becomes its own run.
pub fn clip_polyline(points: &[Pt], bounds: &LogBox) -> Vec<Vec<Pt>> {
    let log_points = to_log(points);
    let mut runs = Vec::new();
    let mut run: Vec<Pt> = Vec::new();

    for w in log_points.windows(2) {
        match clip_segment(w[0], w[1], bounds) {
            Some((a, b)) => {
                if run.last() != Some(&a) {
                    if run.len() > 1 {
                        runs.push(std::mem::take(&mut run));
                    }
                    run.clear();
                    run.push(a);
                }
                run.push(b);
            }
            None => {
                if run.len() > 1 {
                    runs.push(std::mem::take(&mut run));
                }
                run.clear();
            }
        }
    }
    if run.len() > 1 {
        runs.push(run);
    }
    runs.into_iter().map(from_log).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> LogBox {
        // 1..1000 on both axes.
        LogBox::new(1.0, 1000.0, 1.0, 1000.0)
    }

    #[test]
    fn polygon_inside_is_unchanged() {
        let square = [(10.0, 10.0), (100.0, 10.0), (100.0, 100.0), (10.0, 100.0)];
        let clipped = clip_polygon(&square, &unit_box());
        assert_eq!(clipped.len(), 4);
        for (c, s) in clipped.iter().zip(square) {
            assert_relative_eq!(c.0, s.0, max_relative = 1e-12);
            assert_relative_eq!(c.1, s.1, max_relative = 1e-12);
        }
    }

    #[test]
    fn ceiling_is_cut_at_the_top_edge() {
        // Closed region whose ceiling (1e5) lies above the box.
        let region = [(10.0, 1e5), (10.0, 10.0), (100.0, 20.0), (100.0, 1e5)];
        let clipped = clip_polygon(&region, &unit_box());
        assert_eq!(clipped.len(), 4);
        let top = clipped.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(top, 1000.0, max_relative = 1e-12);
        assert!(clipped.iter().all(|p| p.1 <= 1000.0 * (1.0 + 1e-12)));
    }

    #[test]
    fn polygon_outside_vanishes() {
        let far = [(1e5, 1e5), (1e6, 1e5), (1e6, 1e6)];
        assert!(clip_polygon(&far, &unit_box()).is_empty());
    }

    #[test]
    fn polyline_leaving_and_reentering_splits_into_runs() {
        let line = [(10.0, 10.0), (100.0, 1e5), (500.0, 10.0), (800.0, 20.0)];
        let runs = clip_polyline(&line, &unit_box());
        assert_eq!(runs.len(), 2);
        assert_relative_eq!(runs[0][1].1, 1000.0, max_relative = 1e-12);
        assert_eq!(runs[1].len(), 3);
        assert_relative_eq!(runs[1][2].0, 800.0, max_relative = 1e-12);
    }

    #[test]
    fn polyline_fully_inside_is_one_run() {
        let line = [(2.0, 2.0), (20.0, 3.0), (200.0, 4.0)];
        let runs = clip_polyline(&line, &unit_box());
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len(), 3);
    }
}
