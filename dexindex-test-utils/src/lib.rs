mod error_assert;
mod fake_fetcher;
mod failing_store;
mod records;
mod setup;

pub use error_assert::assert_error_message_contains;
pub use fake_fetcher::FakeBatchFetcher;
pub use failing_store::FailingSnapshotStore;
pub use records::test_record;
pub use setup::setup_test_environment;
