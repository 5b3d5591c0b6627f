mod detail;
mod error;
pub mod graphql;
pub mod http;
mod loader;
mod options;
pub mod rest;
mod scheduler;
pub mod store;

pub use detail::{
    DetailLoader,
    RecordDetail,
};
pub use error::{
    FetchError,
    LoadError,
    PersistenceError,
};
pub use loader::{
    CatalogueLoader,
    LoadState,
    annotate_custom_ids,
    sort_records,
};
pub use options::{
    CATALOGUE_VERSION,
    DEFAULT_GRAPHQL_URL,
    DEFAULT_REST_BASE_URL,
    LoaderOptions,
    default_snapshot_key,
};
pub use scheduler::WaveScheduler;
