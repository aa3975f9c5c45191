//! Panel overlay editor.
//!
//! The public site lets a visitor trace the outline of an ad panel over a
//! photo of the van, then preview uploaded artwork clipped to that outline.
//! This module holds the geometry ([`polygon`]), the uploaded artwork
//! handling ([`artwork`]) and the editor state machine plus SVG rendering
//! ([`editor`]).

pub mod artwork;
pub mod editor;
pub mod polygon;

pub use artwork::ArtworkImage;
pub use editor::{DragState, OverlayEditor};
pub use polygon::{BoundingBox, Corner, PanelPolygon};
