//! # xwave-search
//!
//! Backend and shared logic for the xwave astronomical cross-match search.
//!
//! The browser UI lets a user type sky coordinates or an object name, looks
//! up matches in several catalogs, and charts light curves. This crate holds
//! everything in that flow that is not rendering:
//!
//! - **Coordinates**: parse decimal or sexagesimal input, format RA/Dec
//! - **Name resolution**: proxy to the CDS Sesame service
//! - **Charts**: padded axis bounds for plots
//! - **Search state**: query-string parameters and the cross-match reducer
//! - **API client**: cone search, metadata and light-curve requests
//! - **HTTP API**: axum server exposing the resolver to the browser
//!
//! ## Architecture
//!
//! - [`coordinates`]: coordinate parser and formatter
//! - [`resolver`]: `NameResolver` trait and the Sesame implementation
//! - [`services`]: axis bounds and target lookup
//! - [`state`]: cross-match reducer and search parameters
//! - [`models`]: catalog and photometry band tables
//! - [`links`]: SIMBAD, VizieR and Aladin URLs
//! - [`api`] / [`client`]: cross-match API types and client
//! - [`config`]: server configuration
//! - [`http`]: axum-based HTTP server and request handlers

pub mod api;
pub mod client;
pub mod config;
pub mod coordinates;
pub mod links;
pub mod models;
pub mod resolver;
pub mod services;
pub mod state;

#[cfg(feature = "http-server")]
pub mod http;
