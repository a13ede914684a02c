use intake_core::{
    open_store_in_memory, run_batch, Order, OrderRepository, OrderValidator, Product,
    ProductRepository, ProductValidator, SqliteOrderRepository, SqliteProductRepository,
    SqliteUserRepository, StoreKind, User, UserRepository, UserValidator,
};

#[test]
fn partition_accounts_for_every_input_record() {
    let conn = open_store_in_memory(StoreKind::Users).unwrap();
    let repo = SqliteUserRepository::new(&conn);
    let mut validator = UserValidator::new(&repo);

    let batch = vec![
        User::new(1, "Alice", "alice@example.com"),
        User::new(2, "", "no-name@example.com"),
        User::new(3, "Charlie", "charlie-example.com"),
        User::new(4, "David", "david@example.com"),
    ];
    let input_len = batch.len();

    let report = run_batch("users", batch, &mut validator, |accepted| {
        repo.insert_users(accepted)
    })
    .unwrap();

    assert_eq!(report.inserted + report.rejected.len(), input_len);
    assert_eq!(report.total(), input_len);
    assert_eq!(report.inserted, 2);
    assert_eq!(repo.count_users().unwrap(), 2);
}

#[test]
fn rejected_record_is_never_present_in_the_store() {
    let conn = open_store_in_memory(StoreKind::Users).unwrap();
    let repo = SqliteUserRepository::new(&conn);
    let mut validator = UserValidator::new(&repo);

    let batch = vec![
        User::new(1, "Alice", "alice@example.com"),
        User::new(10, "", "jane@example.com"),
    ];

    let report = run_batch("users", batch, &mut validator, |accepted| {
        repo.insert_users(accepted)
    })
    .unwrap();

    assert_eq!(report.inserted, 1);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].record.id, 10);
    assert!(repo.get_user(10).unwrap().is_none());
    assert!(repo.get_user(1).unwrap().is_some());
}

#[test]
fn duplicate_user_within_one_batch_is_rejected() {
    let conn = open_store_in_memory(StoreKind::Users).unwrap();
    let repo = SqliteUserRepository::new(&conn);
    let mut validator = UserValidator::new(&repo);

    let batch = vec![
        User::new(1, "Alice", "alice@example.com"),
        User::new(8, "Alice", "alice@example.com"),
    ];

    let report = run_batch("users", batch, &mut validator, |accepted| {
        repo.insert_users(accepted)
    })
    .unwrap();

    assert_eq!(report.inserted, 1);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].record.id, 8);
    assert!(report.rejected[0].reason.contains("already exists"));
}

#[test]
fn duplicate_user_against_stored_rows_is_rejected() {
    let conn = open_store_in_memory(StoreKind::Users).unwrap();
    let repo = SqliteUserRepository::new(&conn);

    repo.insert_users(&[User::new(1, "Alice", "alice@example.com")])
        .unwrap();

    let mut validator = UserValidator::new(&repo);
    let report = run_batch(
        "users",
        vec![User::new(2, "Alice", "alice@example.com")],
        &mut validator,
        |accepted| repo.insert_users(accepted),
    )
    .unwrap();

    assert_eq!(report.inserted, 0);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(repo.count_users().unwrap(), 1);
}

#[test]
fn duplicate_product_pair_is_rejected() {
    let conn = open_store_in_memory(StoreKind::Products).unwrap();
    let repo = SqliteProductRepository::new(&conn);
    let mut validator = ProductValidator::new(&repo);

    let batch = vec![
        Product::new(1, "Laptop", 1000.0),
        Product::new(7, "Laptop", 1000.0),
        Product::new(8, "Laptop", 1250.0),
    ];

    let report = run_batch("products", batch, &mut validator, |accepted| {
        repo.insert_products(accepted)
    })
    .unwrap();

    // same name at a different price is not a duplicate
    assert_eq!(report.inserted, 2);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].record.id, 7);
}

#[test]
fn order_referencing_missing_product_is_rejected() {
    let products_conn = open_store_in_memory(StoreKind::Products).unwrap();
    let orders_conn = open_store_in_memory(StoreKind::Orders).unwrap();
    let products = SqliteProductRepository::new(&products_conn);
    let orders = SqliteOrderRepository::new(&orders_conn);

    products
        .insert_products(&[Product::new(1, "Laptop", 1000.0)])
        .unwrap();

    let mut validator = OrderValidator::new(&products);
    let batch = vec![
        Order::new(1, 1, 1, 2),
        // structurally valid, but product 10 was never stored
        Order::new(10, 10, 10, 2),
    ];

    let report = run_batch("orders", batch, &mut validator, |accepted| {
        orders.insert_orders(accepted)
    })
    .unwrap();

    assert_eq!(report.inserted, 1);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].record.id, 10);
    assert_eq!(
        report.rejected[0].reason,
        "product id 10 does not exist"
    );
    assert!(orders.get_order(10).unwrap().is_none());
}

#[test]
fn failed_bulk_write_commits_nothing() {
    let conn = open_store_in_memory(StoreKind::Users).unwrap();
    let repo = SqliteUserRepository::new(&conn);
    let mut validator = UserValidator::new(&repo);

    // both records pass validation, but they collide on the primary key,
    // so the bulk write itself fails
    let batch = vec![
        User::new(1, "Alice", "alice@example.com"),
        User::new(1, "Bob", "bob@example.com"),
    ];

    let err = run_batch("users", batch, &mut validator, |accepted| {
        repo.insert_users(accepted)
    })
    .unwrap_err();

    assert!(err.to_string().to_lowercase().contains("unique"));
    assert_eq!(repo.count_users().unwrap(), 0);
}

#[test]
fn empty_batch_reports_zero_inserted() {
    let conn = open_store_in_memory(StoreKind::Orders).unwrap();
    let products_conn = open_store_in_memory(StoreKind::Products).unwrap();
    let orders = SqliteOrderRepository::new(&conn);
    let products = SqliteProductRepository::new(&products_conn);
    let mut validator = OrderValidator::new(&products);

    let report = run_batch("orders", Vec::new(), &mut validator, |accepted| {
        orders.insert_orders(accepted)
    })
    .unwrap();

    assert_eq!(report.inserted, 0);
    assert!(report.rejected.is_empty());
    assert_eq!(orders.count_orders().unwrap(), 0);
}
