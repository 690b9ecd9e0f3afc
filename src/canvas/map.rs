//! World map shape: an embedded coastline point cloud.
//!
//! Coordinates are `(longitude, latitude)` degrees, so a canvas showing
//! the whole map wants `x_bounds = [-180, 180]` and
//! `y_bounds = [-90, 90]`. The high-resolution variant interpolates a
//! midpoint between neighboring low-resolution samples of the same
//! landmass segment.

use crate::style::Color;

use super::shape::{PaintContext, Shape, ShapePainter};

/// Density of the embedded coastline data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapResolution {
    #[default]
    Low,
    High,
}

/// The world map shape value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Map {
    pub resolution: MapResolution,
    pub color: Color,
}

/// Coarse coastline samples, grouped into polyline segments separated by
/// `(f64::NAN, f64::NAN)` breaks so the high-resolution interpolation
/// never bridges oceans.
const WORLD_LOW: &[(f64, f64)] = &[
    // North America
    (-168.0, 65.7),
    (-156.0, 71.3),
    (-140.0, 69.6),
    (-125.0, 70.0),
    (-110.0, 68.5),
    (-95.0, 69.0),
    (-82.0, 66.0),
    (-73.0, 62.0),
    (-64.0, 60.5),
    (-55.0, 51.5),
    (-60.0, 46.0),
    (-70.0, 43.5),
    (-75.0, 38.0),
    (-80.0, 32.0),
    (-81.5, 25.5),
    (-90.0, 29.0),
    (-97.5, 26.0),
    (-94.0, 18.5),
    (-105.0, 20.0),
    (-114.0, 28.5),
    (-120.5, 34.0),
    (-124.0, 40.0),
    (-124.5, 48.0),
    (-135.0, 57.5),
    (-151.0, 59.5),
    (-165.0, 60.0),
    (f64::NAN, f64::NAN),
    // South America
    (-77.0, 8.0),
    (-71.5, 11.5),
    (-61.0, 10.0),
    (-52.0, 4.5),
    (-44.0, -2.5),
    (-35.0, -8.0),
    (-39.0, -17.0),
    (-48.0, -27.0),
    (-57.0, -37.0),
    (-62.0, -41.0),
    (-65.5, -49.0),
    (-68.5, -54.5),
    (-73.0, -47.0),
    (-71.5, -33.5),
    (-76.5, -14.0),
    (-81.0, -4.5),
    (-79.0, 2.0),
    (f64::NAN, f64::NAN),
    // Europe
    (-9.5, 38.7),
    (-8.5, 43.5),
    (-1.5, 46.5),
    (-4.5, 48.5),
    (1.5, 51.0),
    (8.5, 54.0),
    (12.0, 56.0),
    (18.0, 60.0),
    (24.5, 65.0),
    (28.0, 70.0),
    (21.0, 70.0),
    (12.0, 65.5),
    (5.5, 62.0),
    (5.0, 58.5),
    (f64::NAN, f64::NAN),
    // Mediterranean
    (-5.5, 36.0),
    (3.0, 43.0),
    (10.0, 44.0),
    (15.5, 40.0),
    (19.0, 42.0),
    (23.0, 38.0),
    (28.0, 41.0),
    (36.0, 36.5),
    (34.5, 31.5),
    (25.0, 31.5),
    (18.0, 30.5),
    (10.0, 34.0),
    (f64::NAN, f64::NAN),
    // Africa
    (-6.0, 34.0),
    (-17.0, 21.0),
    (-17.0, 14.5),
    (-8.0, 4.5),
    (3.0, 6.3),
    (9.5, 4.0),
    (13.5, -12.0),
    (17.0, -29.0),
    (20.0, -34.5),
    (28.0, -32.5),
    (35.5, -24.0),
    (40.5, -15.0),
    (41.0, -1.5),
    (51.0, 10.5),
    (43.5, 11.5),
    (37.0, 18.0),
    (33.0, 27.5),
    (f64::NAN, f64::NAN),
    // Asia
    (27.0, 41.0),
    (40.0, 43.0),
    (50.5, 40.0),
    (54.0, 25.0),
    (59.0, 23.0),
    (66.5, 25.0),
    (72.5, 19.0),
    (77.5, 8.0),
    (80.5, 13.5),
    (88.0, 22.0),
    (94.0, 16.0),
    (98.5, 8.5),
    (103.5, 1.5),
    (105.0, 10.0),
    (109.0, 13.0),
    (108.0, 21.0),
    (117.0, 23.0),
    (121.5, 31.5),
    (122.5, 37.5),
    (124.5, 40.0),
    (127.5, 39.5),
    (129.5, 35.0),
    (135.5, 35.0),
    (140.5, 36.0),
    (141.5, 43.0),
    (143.0, 46.0),
    (135.0, 48.5),
    (141.0, 53.0),
    (153.0, 59.0),
    (160.0, 61.0),
    (170.0, 60.0),
    (179.0, 65.0),
    (170.0, 70.0),
    (150.0, 72.0),
    (130.0, 72.0),
    (110.0, 74.0),
    (90.0, 74.5),
    (75.0, 71.5),
    (60.0, 69.5),
    (45.0, 68.0),
    (33.0, 67.0),
    (f64::NAN, f64::NAN),
    // Australia
    (114.0, -22.0),
    (113.5, -26.0),
    (118.0, -32.0),
    (124.0, -33.0),
    (132.0, -32.0),
    (138.0, -35.5),
    (141.0, -38.0),
    (150.0, -37.5),
    (153.5, -28.5),
    (146.5, -19.0),
    (142.0, -11.0),
    (136.0, -12.0),
    (131.0, -12.5),
    (126.0, -14.0),
    (122.0, -17.0),
    (f64::NAN, f64::NAN),
    // Greenland
    (-45.0, 60.0),
    (-53.0, 66.0),
    (-55.0, 71.0),
    (-61.0, 76.0),
    (-38.0, 83.0),
    (-22.0, 70.5),
    (-43.0, 60.0),
];

impl Map {
    /// Iterate the coastline coordinates for this map's resolution.
    ///
    /// `High` yields every low-resolution sample plus the midpoint of
    /// each in-segment neighbor pair.
    fn coords(&self) -> Vec<(f64, f64)> {
        match self.resolution {
            MapResolution::Low => WORLD_LOW
                .iter()
                .copied()
                .filter(|(x, _)| !x.is_nan())
                .collect(),
            MapResolution::High => {
                let mut out = Vec::with_capacity(WORLD_LOW.len() * 2);
                for pair in WORLD_LOW.windows(2) {
                    let (x1, y1) = pair[0];
                    let (x2, y2) = pair[1];
                    if x1.is_nan() {
                        continue;
                    }
                    out.push((x1, y1));
                    if !x2.is_nan() {
                        out.push(((x1 + x2) / 2.0, (y1 + y2) / 2.0));
                    }
                }
                if let Some(&(x, y)) = WORLD_LOW.last() {
                    if !x.is_nan() {
                        out.push((x, y));
                    }
                }
                out
            }
        }
    }
}

/// Plots the embedded coastline in the shape's color.
pub struct MapPainter;

impl ShapePainter for MapPainter {
    fn paint(&self, shape: &Shape, ctx: &mut PaintContext<'_>) {
        let Shape::Map(map) = shape else { return };
        for (x, y) in map.coords() {
            ctx.paint(x, y, map.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::grid::CanvasGrid;

    #[test]
    fn test_world_low_coordinates_in_range() {
        for &(x, y) in WORLD_LOW {
            if x.is_nan() {
                continue;
            }
            assert!((-180.0..=180.0).contains(&x), "lon out of range: {x}");
            assert!((-90.0..=90.0).contains(&y), "lat out of range: {y}");
        }
    }

    #[test]
    fn test_high_resolution_is_denser() {
        let low = Map {
            resolution: MapResolution::Low,
            color: Color::Reset,
        };
        let high = Map {
            resolution: MapResolution::High,
            color: Color::Reset,
        };
        assert!(high.coords().len() > low.coords().len());
        // Interpolation never produces NaN bridge points.
        assert!(high.coords().iter().all(|(x, y)| !x.is_nan() && !y.is_nan()));
    }

    #[test]
    fn test_map_painter_paints_world() {
        use crate::canvas::grid::CharGrid;
        use crate::canvas::{AxisBounds, Label};
        use crate::canvas::shape::PaintContext;

        let mut grid = CharGrid::new(80, 40, '•');
        let mut labels: Vec<Label> = Vec::new();
        let mut ctx = PaintContext {
            grid: &mut grid,
            x_bounds: AxisBounds::new(-180.0, 180.0),
            y_bounds: AxisBounds::new(-90.0, 90.0),
            labels: &mut labels,
        };

        MapPainter.paint(
            &Shape::Map(Map {
                resolution: MapResolution::Low,
                color: Color::Green,
            }),
            &mut ctx,
        );

        let painted = grid.save().chars.iter().filter(|&&c| c == '•').count();
        assert!(painted > 50, "painted = {painted}");
    }
}
