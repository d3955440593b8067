//! Browser entry point: mounts the site onto `<body>`.

use circuit_site::{App, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging();
	mount_to_body(App)
}
