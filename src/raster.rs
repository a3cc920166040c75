//! Integer line rasterization.
//!
//! https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm#Algorithm_for_integer_arithmetic

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::iter::FusedIterator;

/// A cell of the unbounded world lattice.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Largest absolute coordinate, as used by grid sizing.
    pub fn max_abs(self) -> u32 {
        self.x.unsigned_abs().max(self.y.unsigned_abs())
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Driving axis used when both deltas are equal.
pub const TIE_BREAK_AXIS: Axis = Axis::X;

/// The axis that advances by one unit on every step from `start` to `end`.
pub fn driving_axis(start: Point, end: Point) -> Axis {
    let (dx, dy) = deltas(start, end);
    match dx.cmp(&dy) {
        Ordering::Greater => Axis::X,
        Ordering::Less => Axis::Y,
        Ordering::Equal => TIE_BREAK_AXIS,
    }
}

fn deltas(start: Point, end: Point) -> (i64, i64) {
    (
        (i64::from(end.x) - i64::from(start.x)).abs(),
        (i64::from(end.y) - i64::from(start.y)).abs(),
    )
}

fn step(from: i32, to: i32) -> i32 {
    match from.cmp(&to) {
        Ordering::Less => 1,
        Ordering::Equal => 0,
        Ordering::Greater => -1,
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    pub fn driving_axis(&self) -> Axis {
        driving_axis(self.start, self.end)
    }

    /// Number of cells the segment rasterizes to.
    pub fn len(&self) -> u64 {
        let (dx, dy) = deltas(self.start, self.end);
        dx.max(dy) as u64 + 1
    }

    /// Largest absolute coordinate of either endpoint.
    pub fn max_abs(&self) -> u32 {
        self.start.max_abs().max(self.end.max_abs())
    }

    pub fn cells(&self) -> Line {
        Line::new(self.start, self.end)
    }

    pub fn rasterize(&self) -> Vec<Point> {
        rasterize(self.start, self.end)
    }
}

/// Walks the cells between two points, `start` first and `end` last.
///
/// The error term is kept doubled (`major` instead of `major / 2`) so every
/// comparison stays in integers. An exact tie in the error term resolves the
/// same way whichever endpoint the walk starts from, which makes the walk
/// from `end` the exact reverse of the walk from `start`.
#[derive(Clone, Debug)]
pub struct Line {
    x: i32,
    y: i32,
    end: Point,
    step_x: i32,
    step_y: i32,
    axis: Axis,
    major: i64,
    minor: i64,
    error: i64,
    remaining: u64,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        let (dx, dy) = deltas(start, end);
        let axis = driving_axis(start, end);
        let (major, minor) = match axis {
            Axis::X => (dx, dy),
            Axis::Y => (dy, dx),
        };

        Line {
            x: start.x,
            y: start.y,
            end,
            step_x: step(start.x, end.x),
            step_y: step(start.y, end.y),
            axis,
            major,
            minor,
            error: major,
            remaining: major as u64 + 1,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    fn at_end(&self) -> bool {
        match self.axis {
            Axis::X => self.x == self.end.x,
            Axis::Y => self.y == self.end.y,
        }
    }

    fn advance(&mut self) {
        let major_step = match self.axis {
            Axis::X => self.step_x,
            Axis::Y => self.step_y,
        };

        self.error -= 2 * self.minor;
        // Walking against the canonical direction flips which side of an
        // exact tie the minor step lands on.
        let step_minor = if major_step > 0 {
            self.error < 0
        } else {
            self.error <= 0
        };

        match self.axis {
            Axis::X => {
                if step_minor {
                    self.y += self.step_y;
                    self.error += 2 * self.major;
                }
                self.x += self.step_x;
            }
            Axis::Y => {
                if step_minor {
                    self.x += self.step_x;
                    self.error += 2 * self.major;
                }
                self.y += self.step_y;
            }
        }
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }

        let current = Point::new(self.x, self.y);
        if self.at_end() {
            self.remaining = 0;
        } else {
            self.remaining -= 1;
            self.advance();
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for Line {}

impl FusedIterator for Line {}

/// Calls `f` for every cell between `start` and `end`, in walk order.
pub fn plot_line(start: Point, end: Point, mut f: impl FnMut(Point)) {
    for p in Line::new(start, end) {
        f(p);
    }
}

/// The cells approximating the straight line from `start` to `end`.
///
/// Total over all `i32` endpoints. The sequence has `max(|dx|, |dy|) + 1`
/// elements, begins with `start`, ends with `end`, and is the exact reverse of
/// `rasterize(end, start)`.
pub fn rasterize(start: Point, end: Point) -> Vec<Point> {
    Line::new(start, end).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn shallow_line_matches_canonical_sequence() {
        assert_eq!(
            rasterize(p(0, 0), p(5, 2)),
            pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)])
        );
    }

    #[test]
    fn vertical_line() {
        assert_eq!(
            rasterize(p(0, 0), p(0, 5)),
            pts(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)])
        );
    }

    #[test]
    fn diagonal_line() {
        assert_eq!(
            rasterize(p(0, 0), p(5, 5)),
            pts(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (5, 5)])
        );
        assert_eq!(driving_axis(p(0, 0), p(5, 5)), TIE_BREAK_AXIS);
    }

    #[test]
    fn line_through_origin_is_point_symmetric() {
        let cells = rasterize(p(-3, -2), p(3, 2));
        assert_eq!(
            cells,
            pts(&[(-3, -2), (-2, -1), (-1, -1), (0, 0), (1, 1), (2, 1), (3, 2)])
        );
        for c in &cells {
            assert!(cells.contains(&p(-c.x, -c.y)), "{} has no mirror", c);
        }
    }

    #[test]
    fn degenerate_segment_is_single_cell() {
        assert_eq!(rasterize(p(4, -7), p(4, -7)), vec![p(4, -7)]);
        assert_eq!(Line::new(p(4, -7), p(4, -7)).len(), 1);
        assert!(Segment::new(p(1, 1), p(1, 1)).is_degenerate());
    }

    #[test]
    fn even_delta_tie_is_reversible() {
        let forward = rasterize(p(0, 0), p(2, 1));
        assert_eq!(forward, pts(&[(0, 0), (1, 0), (2, 1)]));

        let mut backward = rasterize(p(2, 1), p(0, 0));
        backward.reverse();
        assert_eq!(backward, forward);
    }

    #[test]
    fn all_octants_follow_the_first_by_mirroring() {
        let base = rasterize(p(0, 0), p(7, 3));
        let mirrors: [fn(Point) -> Point; 8] = [
            |q| p(q.x, q.y),
            |q| p(q.y, q.x),
            |q| p(-q.y, q.x),
            |q| p(-q.x, q.y),
            |q| p(-q.x, -q.y),
            |q| p(-q.y, -q.x),
            |q| p(q.y, -q.x),
            |q| p(q.x, -q.y),
        ];

        for mirror in mirrors.iter() {
            let end = mirror(p(7, 3));
            let cells = rasterize(Point::ORIGIN, end);
            let expected: Vec<Point> = base.iter().copied().map(mirror).collect();
            assert_eq!(cells, expected, "octant ending at {}", end);
        }
    }

    #[test]
    fn steep_line_drives_on_y() {
        let segment = Segment::new(p(1, 1), p(3, 8));
        assert_eq!(segment.driving_axis(), Axis::Y);
        let cells = segment.rasterize();
        assert_eq!(cells.len() as u64, segment.len());
        for pair in cells.windows(2) {
            assert_eq!(pair[1].y - pair[0].y, 1);
        }
    }

    #[test]
    fn plot_line_visits_cells_in_order() {
        let mut visited = Vec::new();
        plot_line(p(3, 0), p(-3, 1), |c| visited.push(c));
        assert_eq!(visited, rasterize(p(3, 0), p(-3, 1)));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let line = Line::new(p(i32::MIN, 0), p(i32::MAX, 1));
        assert_eq!(line.axis(), Axis::X);
        assert_eq!(Segment::new(p(i32::MIN, 0), p(i32::MAX, 1)).len(), 1 << 32);

        let short = rasterize(p(i32::MAX - 3, i32::MIN), p(i32::MAX, i32::MIN + 2));
        assert_eq!(short.first(), Some(&p(i32::MAX - 3, i32::MIN)));
        assert_eq!(short.last(), Some(&p(i32::MAX, i32::MIN + 2)));
        assert_eq!(short.len(), 4);
    }

    #[test]
    fn iterator_reports_exact_length() {
        let mut line = Line::new(p(0, 0), p(-4, 9));
        assert_eq!(line.len(), 10);
        line.next();
        line.next();
        assert_eq!(line.len(), 8);
        assert_eq!(line.by_ref().count(), 8);
        assert_eq!(line.next(), None);
    }

    fn coord() -> impl Strategy<Value = i32> {
        -500i32..500
    }

    fn point() -> impl Strategy<Value = Point> {
        (coord(), coord()).prop_map(Point::from)
    }

    proptest! {
        #[test]
        fn endpoints_and_length(start in point(), end in point()) {
            let cells = rasterize(start, end);
            let dx = (end.x - start.x).abs();
            let dy = (end.y - start.y).abs();
            prop_assert_eq!(cells.len(), usize::try_from(dx.max(dy) + 1).unwrap());
            prop_assert_eq!(cells.first(), Some(&start));
            prop_assert_eq!(cells.last(), Some(&end));
        }

        #[test]
        fn reversal_symmetry(start in point(), end in point()) {
            let segment = Segment::new(start, end);
            let forward = segment.rasterize();
            let mut backward = segment.reversed().rasterize();
            backward.reverse();
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn unit_steps_without_duplicates(start in point(), end in point()) {
            let cells = rasterize(start, end);
            let axis = driving_axis(start, end);
            let step_x = step(start.x, end.x);
            let step_y = step(start.y, end.y);

            for pair in cells.windows(2) {
                let sx = pair[1].x - pair[0].x;
                let sy = pair[1].y - pair[0].y;
                match axis {
                    Axis::X => {
                        prop_assert_eq!(sx, step_x);
                        prop_assert!(sy == 0 || sy == step_y);
                    }
                    Axis::Y => {
                        prop_assert_eq!(sy, step_y);
                        prop_assert!(sx == 0 || sx == step_x);
                    }
                }
            }

            let unique: HashSet<Point> = cells.iter().copied().collect();
            prop_assert_eq!(unique.len(), cells.len());
        }
    }
}
