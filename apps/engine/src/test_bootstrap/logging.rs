//! Unit-test logging bootstrap, delegating to the shared test-support crate.

pub fn init() {
    engine_test_support::logging::init();
}
