pub(crate) mod pages;
pub mod quiz;
pub(crate) mod resources;
