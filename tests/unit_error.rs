use declutter::error::{exit_codes, Error};

#[test]
fn exit_codes_follow_the_taxonomy() {
    assert_eq!(
        Error::InvalidArgument("bad".to_string()).exit_code(),
        exit_codes::USER_ERROR
    );
    assert_eq!(
        Error::UnknownGroup("Chores".to_string()).exit_code(),
        exit_codes::USER_ERROR
    );
    assert_eq!(Error::SignInRequired.exit_code(), exit_codes::GATE_BLOCKED);
    assert_eq!(Error::GateRejected.exit_code(), exit_codes::OPERATION_FAILED);
    assert_eq!(
        Error::OperationFailed("boom".to_string()).exit_code(),
        exit_codes::OPERATION_FAILED
    );
}

#[test]
fn gate_rejection_message_is_generic() {
    assert_eq!(
        Error::GateRejected.to_string(),
        "Failed to sign in. Please try again."
    );
}
