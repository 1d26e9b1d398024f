use crate::ExternalIdentity;

#[test]
fn test_display_name_with_both_names() {
    let mut identity = ExternalIdentity::new("ext_1", "a@x.com");
    identity.first_name = Some("Ada".to_string());
    identity.last_name = Some("Lovelace".to_string());

    assert_eq!(identity.display_name(), "Ada Lovelace");
}

#[test]
fn test_display_name_with_single_name() {
    let mut identity = ExternalIdentity::new("ext_1", "a@x.com");
    identity.last_name = Some("Lovelace".to_string());

    assert_eq!(identity.display_name(), "Lovelace");
}

#[test]
fn test_display_name_falls_back_to_email() {
    let mut identity = ExternalIdentity::new("ext_1", "a@x.com");
    identity.first_name = Some("   ".to_string());

    assert_eq!(identity.display_name(), "a@x.com");
}

#[test]
fn test_new_identity_is_unverified() {
    let identity = ExternalIdentity::new("ext_1", "a@x.com");

    assert!(!identity.email_verified);
    assert!(identity.profile_picture_url.is_none());
}
