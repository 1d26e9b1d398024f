use crate::{AuthProvider, ExternalIdentity, NewUser, UserPatch, UserRole};

#[test]
fn test_patch_from_identity_sets_every_mirrored_field() {
    let mut identity = ExternalIdentity::new("ext_1", "a@x.com");
    identity.email_verified = true;

    let patch = UserPatch::from_identity(&identity, AuthProvider::Both);

    assert_eq!(patch.email.as_deref(), Some("a@x.com"));
    assert_eq!(patch.external_id.as_deref(), Some("ext_1"));
    assert_eq!(patch.auth_provider, Some(AuthProvider::Both));
    assert_eq!(patch.email_verified, Some(true));
}

#[test]
fn test_new_user_from_identity_uses_default_role() {
    let identity = ExternalIdentity::new("ext_1", "a@x.com");

    let new_user = NewUser::from_identity(&identity);

    assert_eq!(new_user.auth_provider, AuthProvider::External);
    assert_eq!(new_user.role, UserRole::User);
    assert_eq!(new_user.external_id.as_deref(), Some("ext_1"));
}
