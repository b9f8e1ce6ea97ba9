// Adapters layer: concrete page hosts.

pub mod memory;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod dom;
