use crate::ListOrder;

use std::str::FromStr;

#[test]
fn test_list_order_as_str() {
    assert_eq!(ListOrder::Store.as_str(), "store");
    assert_eq!(ListOrder::NewestFirst.as_str(), "newest");
}

#[test]
fn test_list_order_from_str() {
    assert_eq!(ListOrder::from_str("store").unwrap(), ListOrder::Store);
    assert_eq!(ListOrder::from_str("newest").unwrap(), ListOrder::NewestFirst);

    let err = ListOrder::from_str("oldest").unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert_eq!(err.field(), Some("order"));
}

#[test]
fn test_list_order_default() {
    assert_eq!(ListOrder::default(), ListOrder::Store);
}
