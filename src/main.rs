//! Browser entry point: mounts the dashboard.

use connector_dashboard::{App, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging();
	mount_to_body(App);
}
