use crate::overlay::artwork::ArtworkImage;
use crate::overlay::polygon::{Corner, PanelPolygon};

// Handle sizes and colors match the public site styling.
const CORNER_HANDLE_RADIUS: f64 = 7.0;
const MIDPOINT_HANDLE_RADIUS: f64 = 8.0;
const CORNER_HANDLE_FILL: &str = "#f472b6";
const MIDPOINT_HANDLE_FILL: &str = "#facc15";

/// Editor drag interaction state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A corner handle is held; `index` is the corner being moved.
    Dragging { index: usize },
}

/// Interactive state of the panel overlay tool.
///
/// Pointer events arrive as begin/move/end. Events that make no sense in
/// the current state (grabbing a corner that does not exist, moves while
/// idle) are ignored rather than failed, so a noisy pointer stream can
/// never wedge the editor.
#[derive(Debug, Clone, Default)]
pub struct OverlayEditor {
    polygon: PanelPolygon,
    artwork: Option<ArtworkImage>,
    drag: DragState,
}

impl OverlayEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polygon(&self) -> &PanelPolygon {
        &self.polygon
    }

    pub fn artwork(&self) -> Option<&ArtworkImage> {
        self.artwork.as_ref()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Grab the corner handle at `index`. Out-of-range grabs are ignored.
    pub fn begin_drag(&mut self, index: usize) {
        if index < self.polygon.corner_count() {
            self.drag = DragState::Dragging { index };
        }
    }

    /// Move the held corner to `to`. No-op while idle. Coordinates are
    /// not clamped to the canvas; the outline may extend past it.
    pub fn drag_to(&mut self, to: Corner) {
        if let DragState::Dragging { index } = self.drag {
            if let Ok(moved) = self.polygon.with_corner_moved(index, to) {
                self.polygon = moved;
            }
        }
    }

    /// Release the held corner. Also fired when the pointer leaves the
    /// canvas, so a drag cannot survive off-canvas.
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Add a corner at the midpoint of edge `edge`. Ends any active drag
    /// first, since insertion shifts corner indices.
    pub fn insert_corner(&mut self, edge: usize) -> Result<(), String> {
        self.drag = DragState::Idle;
        self.polygon = self.polygon.with_corner_inserted(edge)?;
        Ok(())
    }

    /// Accept an uploaded file as preview artwork. Files that are not
    /// images are ignored without error and leave any previous artwork
    /// in place.
    pub fn set_artwork(
        &mut self,
        data: Vec<u8>,
        content_type: Option<&str>,
        filename: Option<&str>,
    ) {
        if let Some(image) = ArtworkImage::from_bytes(data, content_type, filename) {
            self.artwork = Some(image);
        }
    }

    pub fn clear_artwork(&mut self) {
        self.artwork = None;
    }

    /// Return outline, artwork and drag state to their defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Render the editor as a standalone SVG.
    ///
    /// The outline polygon is drawn filled with a translucent tint when
    /// no artwork is loaded, or used as a clip region for the artwork
    /// when one is. Corner handles and midpoint add-handles are drawn on
    /// top; both dim while artwork is shown so the preview stays
    /// readable.
    pub fn render_svg(&self, width: u32, height: u32, background_url: Option<&str>) -> String {
        let points = self.polygon.svg_points();
        let (node_opacity, plus_opacity) = match self.artwork {
            Some(_) => (0.18, 0.15),
            None => (1.0, 1.0),
        };

        let mut svg = format!(
            r#"<svg viewBox="0 0 {width} {height}" width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">"#
        );
        svg.push_str(&format!(
            r#"<defs><clipPath id="polyClip"><polygon points="{points}"/></clipPath></defs>"#
        ));

        if let Some(url) = background_url {
            svg.push_str(&format!(
                r#"<image href="{}" x="0" y="0" width="{width}" height="{height}" preserveAspectRatio="xMidYMid meet"/>"#,
                attr_escape(url)
            ));
        }

        match &self.artwork {
            Some(image) => {
                let bbox = self.polygon.bounding_box();
                svg.push_str(&format!(
                    r#"<image class="panel-artwork" href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid slice" clip-path="url(#polyClip)"/>"#,
                    image.to_data_url(),
                    bbox.x,
                    bbox.y,
                    bbox.width,
                    bbox.height
                ));
            }
            None => {
                svg.push_str(&format!(
                    r#"<polygon class="panel-tint" points="{points}" fill="rgba(125, 200, 255, 0.25)"/>"#
                ));
            }
        }

        for (index, corner) in self.polygon.corners().iter().enumerate() {
            svg.push_str(&format!(
                r#"<circle class="corner-handle" data-corner="{index}" cx="{}" cy="{}" r="{CORNER_HANDLE_RADIUS}" fill="{CORNER_HANDLE_FILL}" stroke="white" opacity="{node_opacity}"/>"#,
                corner.x, corner.y
            ));
        }

        for (edge, mid) in self.polygon.midpoints().iter().enumerate() {
            svg.push_str(&format!(
                r#"<g class="midpoint-handle" data-edge="{edge}" opacity="{plus_opacity}"><circle cx="{x}" cy="{y}" r="{MIDPOINT_HANDLE_RADIUS}" fill="{MIDPOINT_HANDLE_FILL}" stroke="white"/><text x="{x}" y="{y}" text-anchor="middle" dominant-baseline="central" font-size="11" font-weight="bold">+</text></g>"#,
                x = mid.x,
                y = mid.y
            ));
        }

        svg.push_str("</svg>");
        svg
    }
}

fn attr_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_editor_starts_idle_with_default_outline() {
        let editor = OverlayEditor::new();
        assert_eq!(editor.drag_state(), DragState::Idle);
        assert_eq!(editor.polygon().corner_count(), 4);
        assert!(editor.artwork().is_none());
    }

    #[test]
    fn test_drag_moves_only_the_held_corner() {
        let mut editor = OverlayEditor::new();
        let before: Vec<_> = editor.polygon().corners().to_vec();

        editor.begin_drag(2);
        assert_eq!(editor.drag_state(), DragState::Dragging { index: 2 });
        editor.drag_to(Corner::new(200.0, 200.0));
        editor.end_drag();

        let after = editor.polygon().corners();
        assert_eq!(after[2], Corner::new(200.0, 200.0));
        for i in [0usize, 1, 3] {
            assert_eq!(after[i], before[i]);
        }
        assert_eq!(editor.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_drag_to_while_idle_is_ignored() {
        let mut editor = OverlayEditor::new();
        let before: Vec<_> = editor.polygon().corners().to_vec();

        editor.drag_to(Corner::new(0.0, 0.0));

        assert_eq!(editor.polygon().corners(), before.as_slice());
    }

    #[test]
    fn test_begin_drag_out_of_range_is_ignored() {
        let mut editor = OverlayEditor::new();
        editor.begin_drag(17);
        assert_eq!(editor.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_insert_corner_grows_outline_and_ends_drag() {
        let mut editor = OverlayEditor::new();
        editor.begin_drag(0);
        editor.insert_corner(1).unwrap();

        assert_eq!(editor.polygon().corner_count(), 5);
        assert_eq!(editor.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_insert_corner_bad_edge() {
        let mut editor = OverlayEditor::new();
        assert!(editor.insert_corner(9).is_err());
        assert_eq!(editor.polygon().corner_count(), 4);
    }

    #[test]
    fn test_non_image_upload_is_a_no_op() {
        let mut editor = OverlayEditor::new();
        editor.set_artwork(b"%PDF-1.4".to_vec(), Some("application/pdf"), Some("ad.pdf"));
        assert!(editor.artwork().is_none());
    }

    #[test]
    fn test_non_image_upload_keeps_previous_artwork() {
        let mut editor = OverlayEditor::new();
        editor.set_artwork(PNG_HEADER.to_vec(), Some("image/png"), None);
        assert!(editor.artwork().is_some());

        editor.set_artwork(b"not an image".to_vec(), Some("text/plain"), None);
        assert_eq!(editor.artwork().unwrap().content_type(), "image/png");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut editor = OverlayEditor::new();
        editor.set_artwork(PNG_HEADER.to_vec(), Some("image/png"), None);
        editor.insert_corner(0).unwrap();
        editor.begin_drag(1);

        editor.reset();

        assert!(editor.artwork().is_none());
        assert_eq!(editor.polygon().corner_count(), 4);
        assert_eq!(editor.drag_state(), DragState::Idle);
        assert_eq!(editor.polygon(), &PanelPolygon::default());
    }

    #[test]
    fn test_render_svg_without_artwork_uses_tint() {
        let editor = OverlayEditor::new();
        let svg = editor.render_svg(1000, 600, None);

        assert!(svg.contains(r#"clipPath id="polyClip""#));
        assert!(svg.contains("rgba(125, 200, 255, 0.25)"));
        assert!(!svg.contains("data:image/"));
        // One handle per corner, one add-handle per edge
        assert_eq!(svg.matches("corner-handle").count(), 4);
        assert_eq!(svg.matches("midpoint-handle").count(), 4);
    }

    #[test]
    fn test_render_svg_with_artwork_clips_image_and_dims_handles() {
        let mut editor = OverlayEditor::new();
        editor.set_artwork(PNG_HEADER.to_vec(), Some("image/png"), None);
        let svg = editor.render_svg(1000, 600, Some("https://example.test/van.png"));

        assert!(svg.contains("data:image/png;base64,"));
        assert!(svg.contains(r#"clip-path="url(#polyClip)""#));
        assert!(!svg.contains("rgba(125, 200, 255"));
        assert!(svg.contains(r#"opacity="0.18""#));
        assert!(svg.contains(r#"opacity="0.15""#));
    }

    #[test]
    fn test_render_svg_escapes_background_url() {
        let editor = OverlayEditor::new();
        let svg = editor.render_svg(100, 100, Some("https://example.test/a?b=1&c=\"x\""));
        assert!(svg.contains("&amp;"));
        assert!(svg.contains("&quot;"));
    }
}
