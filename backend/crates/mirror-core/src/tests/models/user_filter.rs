use crate::UserFilter;

#[test]
fn test_user_filter_field_and_value() {
    let by_id = UserFilter::ExternalId("ext_1".to_string());
    let by_email = UserFilter::Email("a@x.com".to_string());

    assert_eq!(by_id.field(), "external_id");
    assert_eq!(by_id.value(), "ext_1");
    assert_eq!(by_email.field(), "email");
    assert_eq!(by_email.to_string(), "email = a@x.com");
}
