mod batch;
mod query;

pub use batch::{
    BatchFetcher,
    GraphqlBatchFetcher,
};
pub use query::POKEMON_BY_NAMES_QUERY;
