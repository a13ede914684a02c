//! Embedded demo batches.
//!
//! The canonical datasets the loader ships with: each batch mixes valid
//! records with the known-bad ones (empty name, negative price, zero or
//! negative quantity, duplicate pairs, dangling product reference) so a run
//! exercises every rejection path. The pipeline itself is data-agnostic;
//! only this binary knows these records.

use intake_core::{LoadBatches, Order, Product, User};

pub fn demo_batches() -> LoadBatches {
    LoadBatches {
        users: demo_users(),
        products: demo_products(),
        orders: demo_orders(),
    }
}

fn demo_users() -> Vec<User> {
    vec![
        User::new(1, "Alice", "alice@example.com"),
        User::new(2, "Bob", "bob@example.com"),
        User::new(3, "Charlie", "charlie@example.com"),
        User::new(4, "David", "david@example.com"),
        User::new(5, "Eve", "eve@example.com"),
        User::new(6, "Frank", "frank@example.com"),
        User::new(7, "Grace", "grace@example.com"),
        // duplicate of user 1
        User::new(8, "Alice", "alice@example.com"),
        User::new(9, "Henry", "henry@example.com"),
        // empty name
        User::new(10, "", "jane@example.com"),
    ]
}

fn demo_products() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop", 1000.00),
        Product::new(2, "Smartphone", 700.00),
        Product::new(3, "Headphones", 150.00),
        Product::new(4, "Monitor", 300.00),
        Product::new(5, "Keyboard", 50.00),
        Product::new(6, "Mouse", 30.00),
        // duplicate of product 1
        Product::new(7, "Laptop", 1000.00),
        Product::new(8, "Smartwatch", 250.00),
        Product::new(9, "Gaming Chair", 500.00),
        // negative price
        Product::new(10, "Earbuds", -50.00),
    ]
}

fn demo_orders() -> Vec<Order> {
    vec![
        Order::new(1, 1, 1, 2),
        Order::new(2, 2, 2, 1),
        Order::new(3, 3, 3, 5),
        Order::new(4, 4, 4, 1),
        Order::new(5, 5, 5, 3),
        Order::new(6, 6, 6, 4),
        // product 7 is a rejected duplicate, so this reference dangles
        Order::new(7, 7, 7, 2),
        // zero quantity
        Order::new(8, 8, 8, 0),
        // negative quantity
        Order::new(9, 9, 1, -1),
        // product 10 is rejected for its price, so this reference dangles
        Order::new(10, 10, 10, 2),
    ]
}
