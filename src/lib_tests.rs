use super::{EXIT_CONFIG_ERROR, EXIT_DEGRADED, EXIT_SUCCESS};

#[test]
fn exit_codes_are_distinct_and_documented() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_DEGRADED, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}
