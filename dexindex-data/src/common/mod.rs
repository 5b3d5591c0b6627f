mod resource;
mod slug;

pub use resource::{
    NamedResource,
    UrlResource,
    title_case,
};
pub use slug::{
    Slug,
    normalize,
};
