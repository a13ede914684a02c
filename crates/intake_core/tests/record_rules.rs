use intake_core::{Order, Product, User, ValidationError};

#[test]
fn valid_records_pass_structural_rules() {
    User::new(1, "Alice", "alice@example.com").validate().unwrap();
    Product::new(1, "Laptop", 1000.0).validate().unwrap();
    Order::new(1, 1, 1, 2).validate().unwrap();
}

#[test]
fn user_with_empty_name_is_rejected() {
    let err = User::new(10, "", "jane@example.com").validate().unwrap_err();
    assert_eq!(err, ValidationError::EmptyName);
}

#[test]
fn user_with_email_missing_at_sign_is_rejected() {
    let err = User::new(2, "Bob", "bob.example.com").validate().unwrap_err();
    assert_eq!(
        err,
        ValidationError::MalformedEmail("bob.example.com".to_string())
    );
}

#[test]
fn user_with_non_positive_id_is_rejected() {
    let err = User::new(0, "Bob", "bob@example.com").validate().unwrap_err();
    assert_eq!(err, ValidationError::NonPositiveId(0));

    let err = User::new(-3, "Bob", "bob@example.com").validate().unwrap_err();
    assert_eq!(err, ValidationError::NonPositiveId(-3));
}

#[test]
fn product_with_non_positive_price_is_rejected() {
    let err = Product::new(10, "Earbuds", -50.0).validate().unwrap_err();
    assert_eq!(err, ValidationError::NonPositivePrice(-50.0));

    let err = Product::new(10, "Earbuds", 0.0).validate().unwrap_err();
    assert_eq!(err, ValidationError::NonPositivePrice(0.0));
}

#[test]
fn product_with_empty_name_is_rejected() {
    let err = Product::new(3, "", 10.0).validate().unwrap_err();
    assert_eq!(err, ValidationError::EmptyName);
}

#[test]
fn order_with_non_positive_quantity_is_rejected() {
    let err = Order::new(9, 9, 1, -1).validate().unwrap_err();
    assert_eq!(err, ValidationError::NonPositiveQuantity(-1));

    let err = Order::new(8, 8, 8, 0).validate().unwrap_err();
    assert_eq!(err, ValidationError::NonPositiveQuantity(0));
}

#[test]
fn order_with_non_positive_references_is_rejected() {
    let err = Order::new(1, 0, 1, 1).validate().unwrap_err();
    assert_eq!(err, ValidationError::NonPositiveUserId(0));

    let err = Order::new(1, 1, -2, 1).validate().unwrap_err();
    assert_eq!(err, ValidationError::NonPositiveProductId(-2));
}

#[test]
fn rejection_reasons_are_human_readable() {
    assert_eq!(ValidationError::EmptyName.to_string(), "name must not be empty");
    assert_eq!(
        ValidationError::UnknownProduct(10).to_string(),
        "product id 10 does not exist"
    );
    assert_eq!(
        ValidationError::NonPositiveQuantity(-1).to_string(),
        "quantity must be positive, got -1"
    );
}

#[test]
fn records_serialize_with_stable_wire_fields() {
    let user = User::new(1, "Alice", "alice@example.com");
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["email"], "alice@example.com");

    let decoded: User = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, user);

    let order = Order::new(2, 3, 4, 5);
    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["user_id"], 3);
    assert_eq!(json["product_id"], 4);
    assert_eq!(json["quantity"], 5);

    let decoded: Order = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, order);
}
