//! Page-level views mounted by the router.
//!
//! Both pages are opaque to the router: it only instantiates them and mounts
//! them into the outlet.

mod main_page;
mod panorama_viewer;

pub use main_page::MainPage;
pub use panorama_viewer::PanoramaViewer;
