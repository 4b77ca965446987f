mod interface;

pub use interface::{format_interface, render_interface, INTERFACE_SUFFIX};
