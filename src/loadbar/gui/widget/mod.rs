pub(crate) mod loader_bar;
pub(crate) mod loader_overlay;
