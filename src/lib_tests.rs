use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_ERRORS_FOUND);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_ERRORS_FOUND, EXIT_CONFIG_ERROR);
}

#[test]
fn exit_codes_match_documented_values() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_ERRORS_FOUND, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}
