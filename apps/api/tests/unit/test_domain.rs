use quill_api::{
    application::{
        auth::dto::AuthInput, list_posts::dto::ListPostsQuery,
        manage_posts::dto::CreatePostInput, profiles::dto::UpsertProfileInput,
    },
    domain::{
        post::entity::AuthorScope,
        shared::pagination::{PaginationRequest, SortOrder},
        user::value_objects::Username,
    },
};
use validator::Validate;

#[test]
fn username_accepts_the_allowed_alphabet() {
    for ok in ["ana", "A.b-c_9", "x", "abcdefghij0123456789"] {
        assert!(Username::new(ok.to_string()).is_ok(), "expected {} to be valid", ok);
    }
}

#[test]
fn username_rejects_empty_long_or_odd_characters() {
    for bad in ["", "has space", "emoji🙂", "abcdefghij01234567890", "semi;colon"] {
        assert!(Username::new(bad.to_string()).is_err(), "expected {:?} to be invalid", bad);
    }
}

#[test]
fn auth_input_requires_a_real_password() {
    let short = AuthInput {
        username: "ana".into(),
        password: "1234567".into(),
    };
    assert!(short.validate().is_err());

    let fine = AuthInput {
        username: "ana".into(),
        password: "12345678".into(),
    };
    assert!(fine.validate().is_ok());
}

#[test]
fn auth_input_rejects_unknown_fields() {
    let parsed = serde_json::from_str::<AuthInput>(
        r#"{"username":"ana","password":"password123","role":"admin"}"#,
    );
    assert!(parsed.is_err());
}

#[test]
fn post_title_is_bounded() {
    let input = CreatePostInput {
        title: "t".repeat(200),
        text: "body".into(),
    };
    assert!(input.validate().is_ok());

    let input = CreatePostInput {
        title: "t".repeat(201),
        text: "body".into(),
    };
    assert!(input.validate().is_err());
}

#[test]
fn bio_is_bounded() {
    assert!(UpsertProfileInput { bio: None }.validate().is_ok());
    assert!(UpsertProfileInput { bio: Some("b".repeat(1000)) }.validate().is_ok());
    assert!(UpsertProfileInput { bio: Some("b".repeat(1001)) }.validate().is_err());
}

#[test]
fn pagination_defaults_are_safe_and_stable() {
    let p = PaginationRequest::<AuthorScope>::default();
    assert_eq!(p.limit, 20);
    assert_eq!(p.order, SortOrder::Desc);
    assert!(p.cursor.is_none());
    assert!(p.scope.is_none());
}

#[test]
fn listing_query_fills_in_defaults() {
    let request = ListPostsQuery::default().into_request();
    assert_eq!(request, PaginationRequest::default());

    let request = ListPostsQuery {
        limit: Some(5),
        cursor: Some(String::new()),
        order: Some(SortOrder::Asc),
        author: Some("ana".into()),
    }
    .into_request();
    assert_eq!(request.limit, 5);
    assert!(request.cursor.is_none());
    assert_eq!(request.order, SortOrder::Asc);
    assert_eq!(request.scope, Some(AuthorScope("ana".into())));
}

#[test]
fn sort_order_uses_uppercase_on_the_wire() {
    assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), r#""ASC""#);
    assert_eq!(
        serde_json::from_str::<SortOrder>(r#""DESC""#).unwrap(),
        SortOrder::Desc
    );
    assert!(serde_json::from_str::<SortOrder>(r#""desc""#).is_err());
}
