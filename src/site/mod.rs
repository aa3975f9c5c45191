//! Server-rendered marketing site.
//!
//! One module per page section, assembled by [`page`]. Rendering is plain
//! string building over the view datasets; the pages carry their own CSS
//! and the small scripts the interactive sections need, so the binary
//! serves the whole site without an asset pipeline.

mod about;
mod dashboard;
mod faq;
mod footer;
mod gps;
mod helpers;
mod hero;
mod how_it_works;
mod page;
mod reserve;
mod tiers;
mod transparency;
mod upload;
mod van_tool;

pub use page::{render_index, render_reserve_page};
