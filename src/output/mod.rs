//! Output module: sitemap document rendering

mod sitemap;

pub use sitemap::{write_sitemap, SITEMAP_XMLNS};
