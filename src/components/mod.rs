pub mod circuit_bg;
pub mod site_nav;
