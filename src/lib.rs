//! # Vanads
//!
//! Backend for the Id Buzz Project: one VW ID Buzz van wrapped in
//! purchasable ad panels, with every route and dollar published.
//!
//! This crate renders the public marketing site server-side and exposes
//! the data operations as a small REST API via Axum. The data store sits
//! behind a repository abstraction with an in-memory demo backend and an
//! optional PostgreSQL backend.
//!
//! ## Features
//!
//! - **Panel catalog**: fifteen ad positions grouped into three pricing tiers
//! - **Overlay editor**: pure polygon editor backing the on-van artwork preview
//! - **Reservations**: validated, rate-limited lead submission
//! - **GPS tracking**: route samples, impression totals, and a live SSE feed
//! - **Transparency**: published funding metrics with an estimate fallback
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: id newtypes and the public DTO surface
//! - [`models`]: domain entities (panels, reservations, routes, metrics)
//! - [`overlay`]: polygon-overlay editor and uploaded-artwork handling
//! - [`views`]: per-view datasets served to the site and the API
//! - [`services`]: pure business logic (aggregation, validation, rate limiting)
//! - [`db`]: repository trait, backends, factory, and orchestration
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`site`]: server-rendered page sections
//!

// Allow large error types - RepositoryError carries structured context
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;
pub mod overlay;

pub mod services;
pub mod site;
pub mod views;

#[cfg(feature = "http-server")]
pub mod http;
