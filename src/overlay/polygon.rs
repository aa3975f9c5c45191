use serde::{Deserialize, Serialize};

/// Minimum number of corners for a valid panel outline.
pub const MIN_CORNERS: usize = 3;

/// Default outline traced over the driver-side door of the van photo.
const DEFAULT_CORNERS: [Corner; 4] = [
    Corner { x: 318.0, y: 323.0 },
    Corner { x: 333.0, y: 456.0 },
    Corner { x: 489.0, y: 450.0 },
    Corner { x: 484.0, y: 312.0 },
];

/// A single corner of the panel outline, in pixel coordinates of the
/// editor canvas.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corner {
    pub x: f64,
    pub y: f64,
}

impl Corner {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of an outline.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// An ordered polygon outline of a panel.
///
/// The corner sequence is closed implicitly: the edge after the last
/// corner runs back to the first. Transformations never mutate in place;
/// each returns a new polygon so editor history stays simple to reason
/// about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelPolygon {
    corners: Vec<Corner>,
}

impl Default for PanelPolygon {
    fn default() -> Self {
        Self {
            corners: DEFAULT_CORNERS.to_vec(),
        }
    }
}

impl PanelPolygon {
    pub fn new(corners: Vec<Corner>) -> Result<Self, String> {
        if corners.len() < MIN_CORNERS {
            return Err(format!(
                "A panel outline needs at least {} corners, got {}",
                MIN_CORNERS,
                corners.len()
            ));
        }
        Ok(Self { corners })
    }

    pub fn corners(&self) -> &[Corner] {
        &self.corners
    }

    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }

    /// Returns a copy of this outline with one corner moved.
    ///
    /// Coordinates are not clamped; the caller decides what canvas, if
    /// any, bounds them.
    pub fn with_corner_moved(&self, index: usize, to: Corner) -> Result<Self, String> {
        if index >= self.corners.len() {
            return Err(format!(
                "Corner index {} out of bounds for outline with {} corners",
                index,
                self.corners.len()
            ));
        }
        let mut corners = self.corners.clone();
        corners[index] = to;
        Ok(Self { corners })
    }

    /// Returns a copy of this outline with a new corner inserted at the
    /// midpoint of edge `edge` (the edge from corner `edge` to the next
    /// corner, wrapping around). The new corner lands at position
    /// `edge + 1` so the traversal order is preserved.
    pub fn with_corner_inserted(&self, edge: usize) -> Result<Self, String> {
        if edge >= self.corners.len() {
            return Err(format!(
                "Edge index {} out of bounds for outline with {} corners",
                edge,
                self.corners.len()
            ));
        }
        let mid = self.edge_midpoint(edge);
        let mut corners = self.corners.clone();
        corners.insert(edge + 1, mid);
        Ok(Self { corners })
    }

    fn edge_midpoint(&self, edge: usize) -> Corner {
        let a = self.corners[edge];
        let b = self.corners[(edge + 1) % self.corners.len()];
        Corner::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }

    /// Midpoints of every edge, in edge order. These are where the
    /// editor draws its add-corner handles.
    pub fn midpoints(&self) -> Vec<Corner> {
        (0..self.corners.len())
            .map(|edge| self.edge_midpoint(edge))
            .collect()
    }

    /// Corner list in SVG `points` attribute form, e.g. `318,323 333,456`.
    pub fn svg_points(&self) -> String {
        self.corners
            .iter()
            .map(|c| format!("{},{}", c.x, c.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let min_x = self.corners.iter().map(|c| c.x).fold(f64::INFINITY, f64::min);
        let max_x = self
            .corners
            .iter()
            .map(|c| c.x)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_y = self.corners.iter().map(|c| c.y).fold(f64::INFINITY, f64::min);
        let max_y = self
            .corners
            .iter()
            .map(|c| c.y)
            .fold(f64::NEG_INFINITY, f64::max);
        BoundingBox {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> PanelPolygon {
        PanelPolygon::new(vec![
            Corner::new(0.0, 0.0),
            Corner::new(100.0, 0.0),
            Corner::new(100.0, 100.0),
            Corner::new(0.0, 100.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_default_outline_matches_van_door() {
        let polygon = PanelPolygon::default();
        assert_eq!(polygon.corner_count(), 4);
        assert_eq!(polygon.corners()[0], Corner::new(318.0, 323.0));
        assert_eq!(polygon.corners()[3], Corner::new(484.0, 312.0));
    }

    #[test]
    fn test_new_rejects_too_few_corners() {
        assert!(PanelPolygon::new(vec![]).is_err());
        assert!(PanelPolygon::new(vec![Corner::new(0.0, 0.0)]).is_err());
        assert!(
            PanelPolygon::new(vec![Corner::new(0.0, 0.0), Corner::new(1.0, 1.0)]).is_err()
        );
        assert!(PanelPolygon::new(vec![
            Corner::new(0.0, 0.0),
            Corner::new(1.0, 0.0),
            Corner::new(0.0, 1.0),
        ])
        .is_ok());
    }

    #[test]
    fn test_insert_on_first_edge_of_square() {
        let square = unit_square();
        let grown = square.with_corner_inserted(0).unwrap();

        assert_eq!(grown.corner_count(), 5);
        assert_eq!(grown.corners()[1], Corner::new(50.0, 0.0));
        // Remaining corners keep their traversal order
        assert_eq!(grown.corners()[0], Corner::new(0.0, 0.0));
        assert_eq!(grown.corners()[2], Corner::new(100.0, 0.0));
    }

    #[test]
    fn test_insert_on_closing_edge_wraps_to_first_corner() {
        let square = unit_square();
        let grown = square.with_corner_inserted(3).unwrap();

        assert_eq!(grown.corner_count(), 5);
        // Edge 3 runs from (0,100) back to (0,0)
        assert_eq!(grown.corners()[4], Corner::new(0.0, 50.0));
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let square = unit_square();
        assert!(square.with_corner_inserted(4).is_err());
    }

    #[test]
    fn test_move_corner_leaves_original_untouched() {
        let square = unit_square();
        let moved = square.with_corner_moved(2, Corner::new(200.0, 200.0)).unwrap();

        assert_eq!(moved.corners()[2], Corner::new(200.0, 200.0));
        for (i, corner) in square.corners().iter().enumerate() {
            if i != 2 {
                assert_eq!(moved.corners()[i], *corner);
            }
        }
        // Source polygon unchanged
        assert_eq!(square.corners()[2], Corner::new(100.0, 100.0));
    }

    #[test]
    fn test_move_corner_out_of_bounds() {
        let square = unit_square();
        assert!(square.with_corner_moved(4, Corner::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_move_corner_does_not_clamp() {
        let square = unit_square();
        let moved = square
            .with_corner_moved(0, Corner::new(-40.0, 1000.0))
            .unwrap();
        assert_eq!(moved.corners()[0], Corner::new(-40.0, 1000.0));
    }

    #[test]
    fn test_midpoints_wrap_around() {
        let square = unit_square();
        let mids = square.midpoints();

        assert_eq!(mids.len(), 4);
        assert_eq!(mids[0], Corner::new(50.0, 0.0));
        assert_eq!(mids[3], Corner::new(0.0, 50.0));
    }

    #[test]
    fn test_svg_points_format() {
        let polygon = PanelPolygon::default();
        assert_eq!(polygon.svg_points(), "318,323 333,456 489,450 484,312");
    }

    #[test]
    fn test_bounding_box() {
        let polygon = PanelPolygon::default();
        let bbox = polygon.bounding_box();
        assert_eq!(bbox.x, 318.0);
        assert_eq!(bbox.y, 312.0);
        assert_eq!(bbox.width, 171.0);
        assert_eq!(bbox.height, 144.0);
    }
}
