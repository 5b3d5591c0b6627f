use std::fmt::Display;

/// [`assert`]s that the result is an error whose message contains the given text.
#[track_caller]
pub fn assert_error_message_contains<T, E>(result: Result<T, E>, message: &str)
where
    E: Display,
{
    match result {
        Ok(_) => panic!("expected an error containing {message:?}, got Ok"),
        Err(err) => {
            let err = err.to_string();
            assert!(err.contains(message), "{err:?} does not contain {message:?}");
        }
    }
}
