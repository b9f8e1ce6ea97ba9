// Domain layer: field/submenu models and the host seams. Nothing here knows about the DOM.

pub mod model;
pub mod ports;
