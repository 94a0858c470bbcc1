//! Static export of the portfolio: every locale's listing page, every
//! project detail page, the not-found page and the assets they share.
//!
//! The generator loads its inputs once, writes every output file and
//! finishes with a manifest describing what was written.

pub mod assets;
pub mod config;
pub mod error;
pub mod generator;
pub mod html;
pub mod manifest;
pub mod pages;
pub mod progress;
pub mod routes;
pub mod screenshots;

pub use config::SiteConfig;
pub use error::SiteError;
pub use generator::SiteGenerator;
