use super::*;
use crate::KindError;

#[test]
fn from_u8_valid() {
    assert_eq!(PrimitiveKind::from_u8(b'B'), Some(PrimitiveKind::Bool));
    assert_eq!(PrimitiveKind::from_u8(b'N'), Some(PrimitiveKind::Number));
    assert_eq!(PrimitiveKind::from_u8(b'S'), Some(PrimitiveKind::String));
}

#[test]
fn from_u8_invalid() {
    assert_eq!(PrimitiveKind::from_u8(0), None);
    assert_eq!(PrimitiveKind::from_u8(b'b'), None);
    assert_eq!(PrimitiveKind::from_u8(255), None);
}

#[test]
fn tags_are_distinct_and_stable() {
    for kind in PrimitiveKind::ALL {
        assert_eq!(PrimitiveKind::from_u8(kind.as_u8()), Some(kind));
    }
    assert_eq!(PrimitiveKind::Bool.as_u8(), TAG_BOOL);
    assert_eq!(PrimitiveKind::Number.as_u8(), TAG_NUMBER);
    assert_eq!(PrimitiveKind::String.as_u8(), TAG_STRING);
}

#[test]
fn kind_size() {
    assert_eq!(std::mem::size_of::<PrimitiveKind>(), 1);
}

#[test]
fn try_from_u8() {
    assert_eq!(PrimitiveKind::try_from(b'N'), Ok(PrimitiveKind::Number));
    assert_eq!(PrimitiveKind::try_from(b'X'), Err(KindError::UnknownTag(b'X')));
}

#[test]
fn unknown_tag_message() {
    let err = PrimitiveKind::try_from(0x7f).unwrap_err();
    insta::assert_snapshot!(err, @"unknown primitive type tag: 0x7f");
}

#[test]
fn parse_from_name() {
    assert_eq!("bool".parse::<PrimitiveKind>(), Ok(PrimitiveKind::Bool));
    assert_eq!("number".parse::<PrimitiveKind>(), Ok(PrimitiveKind::Number));
    assert_eq!("string".parse::<PrimitiveKind>(), Ok(PrimitiveKind::String));
}

#[test]
fn parse_unknown_name() {
    let err = "Bool".parse::<PrimitiveKind>().unwrap_err();
    assert_eq!(err, KindError::UnknownName("Bool".to_owned()));
    insta::assert_snapshot!(err, @r#"unknown primitive type name: "Bool""#);
}

#[test]
fn primitive_names() {
    assert_eq!(Type::BOOL.friendly_name(), "bool");
    assert_eq!(Type::NUMBER.friendly_name(), "number");
    assert_eq!(Type::STRING.friendly_name(), "string");
}

#[test]
fn primitive_debug() {
    insta::assert_snapshot!(Type::BOOL.debug_representation(), @"Bool");
    insta::assert_snapshot!(Type::NUMBER.debug_representation(), @"Number");
    insta::assert_snapshot!(Type::STRING.debug_representation(), @"String");
}

#[test]
fn primitive_equality() {
    assert!(Type::NUMBER.equals(&Type::NUMBER));
    assert!(!Type::BOOL.equals(&Type::STRING));
    assert!(!Type::NUMBER.equals(&Type::BOOL));
    assert_eq!(Type::from(PrimitiveKind::String), Type::STRING);
}

#[test]
fn primitive_kind_accessor() {
    assert_eq!(Type::BOOL.primitive_kind(), Some(PrimitiveKind::Bool));
    assert_eq!(Type::map(Type::BOOL).primitive_kind(), None);
}

#[test]
fn is_primitive_type() {
    assert!(Type::BOOL.is_primitive_type());
    assert!(Type::NUMBER.is_primitive_type());
    assert!(Type::STRING.is_primitive_type());
    assert!(!Type::map(Type::STRING).is_primitive_type());
    assert!(!Type::list(Type::STRING).is_primitive_type());
}
