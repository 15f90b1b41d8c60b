//! Remote API fixtures

#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// JSON record as the remote returns it
pub fn employee_json(id: u64, first: &str, last: &str) -> Value {
    json!({
        "id": id,
        "firstName": first,
        "lastName": last,
        "email": format!("{}.{}@x.dummyjson.com", first.to_lowercase(), last.to_lowercase()),
        "phone": "+1 555-0100",
        "age": 30,
        "image": format!("https://dummyjson.com/icon/{id}/128"),
        "university": "State University",
        "address": {"address": "1 Main Street", "city": "Springfield"},
        "company": {"name": "Acme", "department": "Engineering"}
    })
}

/// Alice Smith, Bob Jones, then `extra` numbered employees
pub fn staff(extra: u64) -> Vec<Value> {
    let mut staff = vec![employee_json(1, "Alice", "Smith"), employee_json(2, "Bob", "Jones")];
    staff.extend((3..3 + extra).map(|id| employee_json(id, &format!("Worker{id}"), "Doe")));
    staff
}

/// Serve `users` from `GET /users` with the given total
pub async fn mount_users(server: &MockServer, users: Vec<Value>, total: u64) {
    let limit = users.len();
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": users,
            "total": total,
            "skip": 0,
            "limit": limit
        })))
        .mount(server)
        .await;
}

/// Serve a catalog with the given slugs from `GET /products/categories`
pub async fn mount_departments(server: &MockServer, slugs: &[&str]) {
    let catalog: Vec<Value> = slugs
        .iter()
        .map(|slug| {
            json!({
                "slug": slug,
                "name": slug.to_uppercase(),
                "url": format!("https://dummyjson.com/products/category/{slug}")
            })
        })
        .collect();
    Mock::given(method("GET"))
        .and(path("/products/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog))
        .mount(server)
        .await;
}

/// Serve one employee from `GET /users/{id}`
pub async fn mount_employee(server: &MockServer, record: Value) {
    let id = record["id"].as_u64().unwrap_or_default();
    Mock::given(method("GET"))
        .and(path(format!("/users/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(record))
        .mount(server)
        .await;
}

/// Answer every `GET /users/{id}` with a remote-style 404
pub async fn mount_missing_employees(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path_regex(r"^/users/\d+$"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "User not found"})),
        )
        .mount(server)
        .await;
}

/// Answer `route` with a 500
pub async fn mount_failure(server: &MockServer, route: &str) {
    Mock::given(method("GET"))
        .and(path(route.to_string()))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}

/// Standard remote: Alice, Bob and `extra` more; catalog `a`, `b`
pub async fn mount_directory(server: &MockServer, extra: u64) {
    mount_users(server, staff(extra), 208).await;
    mount_departments(server, &["a", "b"]).await;
}
