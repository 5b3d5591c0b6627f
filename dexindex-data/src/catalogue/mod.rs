mod catalogue;
mod custom_index;
mod names;
mod search;

pub use catalogue::Catalogue;
pub use custom_index::CustomIndex;
pub use names::CURATED_NAMES;
pub use search::search;
