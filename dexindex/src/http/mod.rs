mod executor;
mod request;

pub use executor::{
    RetryPolicy,
    RetryingExecutor,
};
pub use request::HttpRequest;
