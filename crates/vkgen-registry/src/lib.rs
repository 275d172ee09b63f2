//! vkgen registry loader: walks the registry XML document in a fixed
//! multi-pass order and populates the Raw Spec Model.

mod loader;
pub mod xml;

pub use loader::load;
