use super::*;

#[test]
fn validate_registration_trims_username() {
    assert_eq!(
        validate_registration("  bob  ", "secret", Role::Admin),
        Ok(Registration {
            username: "bob".to_owned(),
            password: "secret".to_owned(),
            role: Role::Admin,
        })
    );
}

#[test]
fn validate_registration_requires_username_and_password() {
    assert_eq!(
        validate_registration("", "secret", Role::User),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_registration("bob", "", Role::User),
        Err("Enter both username and password.")
    );
}
