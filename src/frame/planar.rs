use crate::math::{Point2, Vector2};

use super::{CoordinateAdapter, Projection};

/// Projection for coordinates that are already planar (projected map units).
#[derive(Debug, Clone, Copy, Default)]
pub struct Planar;

/// Working frame translated to a planar reference coordinate.
#[derive(Debug, Clone, Copy)]
pub struct PlanarFrame {
    offset: Vector2,
}

impl Projection for Planar {
    type Adapter = PlanarFrame;

    fn adapt(&self, reference: Point2) -> PlanarFrame {
        PlanarFrame {
            offset: reference.coords,
        }
    }
}

impl CoordinateAdapter for PlanarFrame {
    fn to_working(&self, coordinate: Point2) -> Point2 {
        coordinate - self.offset
    }

    fn to_output(&self, point: Point2) -> Point2 {
        point + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_maps_to_origin() {
        let frame = Planar.adapt(Point2::new(100.0, 200.0));
        assert_eq!(frame.to_working(Point2::new(100.0, 200.0)), Point2::origin());
        assert_eq!(frame.to_working(Point2::new(110.0, 195.0)), Point2::new(10.0, -5.0));
    }

    #[test]
    fn output_inverts_working() {
        let frame = Planar.adapt(Point2::new(-3.5, 7.25));
        let p = Point2::new(12.0, -4.0);
        assert_eq!(frame.to_output(frame.to_working(p)), p);
    }
}
