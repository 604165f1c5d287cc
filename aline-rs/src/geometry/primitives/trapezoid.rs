use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{Point, Rect};

/// Outline of a skirt panel: a quadrilateral with a waist edge and a parallel hem edge.
///
/// In its reference position the waist edge lies on `y = 0`, the hem edge on `y = height`, and both
/// edges are centered horizontally within a bounding box of width `max(waist, hem)` starting at `x = 0`.
/// Once transformed, the corners keep their order: waist-left, waist-right, hem-right, hem-left.
#[derive(Clone, Debug, PartialEq)]
pub struct Trapezoid {
    pub corners: [Point; 4],
}

impl Trapezoid {
    pub fn new(waist_width: f64, hem_width: f64, height: f64) -> Self {
        let bbox_width = f64::max(waist_width, hem_width);
        let waist_x = (bbox_width - waist_width) / 2.0;
        let hem_x = (bbox_width - hem_width) / 2.0;
        Trapezoid {
            corners: [
                Point(waist_x, 0.0),
                Point(waist_x + waist_width, 0.0),
                Point(hem_x + hem_width, height),
                Point(hem_x, height),
            ],
        }
    }

    pub fn waist_edge(&self) -> (Point, Point) {
        (self.corners[0], self.corners[1])
    }

    pub fn hem_edge(&self) -> (Point, Point) {
        (self.corners[3], self.corners[2])
    }
}

impl Shape for Trapezoid {
    fn centroid(&self) -> Point {
        //area-weighted centroid of the polygon (shoelace)
        let area = self.signed_area();
        if area == 0.0 {
            let (sx, sy) = self
                .corners
                .iter()
                .fold((0.0, 0.0), |(sx, sy), p| (sx + p.0, sy + p.1));
            return Point(sx / 4.0, sy / 4.0);
        }
        let (mut cx, mut cy) = (0.0, 0.0);
        for i in 0..4 {
            let Point(x0, y0) = self.corners[i];
            let Point(x1, y1) = self.corners[(i + 1) % 4];
            let cross = x0 * y1 - x1 * y0;
            cx += (x0 + x1) * cross;
            cy += (y0 + y1) * cross;
        }
        Point(cx / (6.0 * area), cy / (6.0 * area))
    }

    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    fn bbox(&self) -> Rect {
        Rect::bounding(self.corners).expect("a trapezoid has four corners")
    }
}

impl Trapezoid {
    fn signed_area(&self) -> f64 {
        (0..4)
            .map(|i| {
                let Point(x0, y0) = self.corners[i];
                let Point(x1, y1) = self.corners[(i + 1) % 4];
                x0 * y1 - x1 * y0
            })
            .sum::<f64>()
            / 2.0
    }
}

impl Transformable for Trapezoid {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        self.corners.iter_mut().for_each(|c| {
            c.transform(t);
        });
        self
    }
}
