//! Session engine for a personalized product storefront: catalog, display
//! filters, preferences, browsing history, and the recommendation request
//! lifecycle, exposed over a JSON API.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
