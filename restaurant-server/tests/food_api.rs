mod common;

use common::{TestApp, assert_error};
use http::StatusCode;
use restaurant_server::Config;
use serde_json::json;

#[tokio::test]
async fn create_food_with_unknown_menu_inserts_nothing() {
    let app = TestApp::new();
    let (status, body) = app
        .post(
            "/food",
            json!({"name": "Soup", "price": 4.5, "food_image": "soup.png", "menu_id": "missing"}),
        )
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "reference_not_found");
    assert_eq!(body["error"]["message"], json!("menu was not found"));
    assert_eq!(app.store.count("food"), 0);
}

#[tokio::test]
async fn create_food_rounds_price_half_away_from_zero() {
    let app = TestApp::new();
    let menu_id = app.create_menu("Lunch").await;

    for (input, expected) in [(9.995, 10.0), (9.994, 9.99), (-2.005, -2.01)] {
        let (status, body) = app
            .post(
                "/food",
                json!({"name": "Dish", "price": input, "food_image": "d.png", "menu_id": menu_id}),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["data"]["price"].as_f64().unwrap(), expected, "input {input}");

        let food_id = body["data"]["food_id"].as_str().unwrap();
        let (_, stored) = app.get(&format!("/food/{food_id}")).await;
        assert_eq!(stored["data"]["price"].as_f64().unwrap(), expected);
    }
}

#[tokio::test]
async fn create_food_validates_fields() {
    let app = TestApp::new();
    let (status, body) = app.post("/food", json!({"name": "S"})).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "validation_failed");
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("price"));
    assert!(message.contains("menu_id"));
}

#[tokio::test]
async fn patch_price_is_rounded() {
    let app = TestApp::new();
    let menu_id = app.create_menu("Lunch").await;
    let food_id = app.create_food(&menu_id, "Soup", 4.0).await;

    let (status, body) = app.patch(&format!("/food/{food_id}"), json!({"price": 3.335})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"].as_f64().unwrap(), 3.34);
}

#[tokio::test]
async fn patch_touches_only_supplied_field() {
    let app = TestApp::new();
    let menu_id = app.create_menu("Lunch").await;
    let food_id = app.create_food(&menu_id, "Soup", 4.5).await;
    let (_, before) = app.get(&format!("/food/{food_id}")).await;

    let (status, body) = app.patch(&format!("/food/{food_id}"), json!({"name": "Broth"})).await;
    assert_eq!(status, StatusCode::OK);
    let mut applied: Vec<&str> = body["data"].as_object().unwrap().keys().map(String::as_str).collect();
    applied.sort();
    assert_eq!(applied, vec!["name", "updated_at"]);

    let (_, after) = app.get(&format!("/food/{food_id}")).await;
    let before = before["data"].as_object().unwrap();
    let after = after["data"].as_object().unwrap();
    assert_eq!(after["name"], json!("Broth"));
    for (key, value) in before {
        if key != "name" && key != "updated_at" {
            assert_eq!(&after[key], value, "field {key} changed");
        }
    }
}

#[tokio::test]
async fn patch_blank_and_null_fields_are_ignored() {
    let app = TestApp::new();
    let menu_id = app.create_menu("Lunch").await;
    let food_id = app.create_food(&menu_id, "Soup", 4.5).await;

    let (status, body) = app
        .patch(&format!("/food/{food_id}"), json!({"name": "", "price": null}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_object().unwrap().len(), 1);

    let (_, food) = app.get(&format!("/food/{food_id}")).await;
    assert_eq!(food["data"]["name"], json!("Soup"));
    assert_eq!(food["data"]["price"].as_f64().unwrap(), 4.5);
}

#[tokio::test]
async fn patch_with_unknown_menu_is_rejected() {
    let app = TestApp::new();
    let menu_id = app.create_menu("Lunch").await;
    let food_id = app.create_food(&menu_id, "Soup", 4.5).await;

    let (status, body) = app
        .patch(&format!("/food/{food_id}"), json!({"name": "Broth", "menu_id": "gone"}))
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "reference_not_found");

    let (_, food) = app.get(&format!("/food/{food_id}")).await;
    assert_eq!(food["data"]["name"], json!("Soup"));
}

#[tokio::test]
async fn patch_missing_food_is_not_found() {
    let app = TestApp::new();
    let (status, body) = app.patch("/food/nope", json!({"name": "Broth"})).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "not_found");
    assert_eq!(app.store.count("food"), 0);
}

#[tokio::test]
async fn patch_missing_food_upserts_when_configured() {
    let app = TestApp::with_config(Config {
        patch_upsert: true,
        ..Config::default()
    });
    let menu_id = app.create_menu("Lunch").await;
    let (status, body) = app
        .patch(
            "/food/ghost",
            json!({"name": "Broth", "price": 3.5, "food_image": "broth.png", "menu_id": menu_id}),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(app.store.count("food"), 1);

    let (status, food) = app.get("/food/ghost").await;
    assert_eq!(status, StatusCode::OK, "{food}");
    assert_eq!(food["data"]["name"], json!("Broth"));
    assert_eq!(food["data"]["price"].as_f64().unwrap(), 3.5);

    let (status, list) = app.get("/food").await;
    assert_eq!(status, StatusCode::OK, "{list}");
    assert_eq!(list["data"]["total_count"], json!(1));
}

#[tokio::test]
async fn partial_upsert_is_rejected_and_listing_survives() {
    let app = TestApp::with_config(Config {
        patch_upsert: true,
        ..Config::default()
    });
    let menu_id = app.create_menu("Lunch").await;
    app.create_food(&menu_id, "Soup", 4.5).await;

    let (status, body) = app.patch("/food/ghost", json!({"name": "Broth"})).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "validation_failed");
    assert_eq!(app.store.count("food"), 1);

    let (status, list) = app.get("/food").await;
    assert_eq!(status, StatusCode::OK, "{list}");
    assert_eq!(list["data"]["total_count"], json!(1));
    let (status, body) = app.get("/food/ghost").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "not_found");
}

#[tokio::test]
async fn oversized_price_is_rejected() {
    let app = TestApp::new();
    let menu_id = app.create_menu("Lunch").await;
    let (status, body) = app
        .post(
            "/food",
            json!({"name": "Caviar", "price": 1e20, "food_image": "c.png", "menu_id": menu_id}),
        )
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "validation_failed");
    assert_eq!(app.store.count("food"), 0);

    let food_id = app.create_food(&menu_id, "Soup", 4.5).await;
    let (status, body) = app.patch(&format!("/food/{food_id}"), json!({"price": 1e20})).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "validation_failed");
    let (_, food) = app.get(&format!("/food/{food_id}")).await;
    assert_eq!(food["data"]["price"].as_f64().unwrap(), 4.5);
}

#[tokio::test]
async fn list_paginates_with_total_count() {
    let app = TestApp::new();
    let menu_id = app.create_menu("Lunch").await;
    for i in 0..12 {
        app.create_food(&menu_id, &format!("Dish {i:02}"), 1.0).await;
    }

    let (status, body) = app.get("/food?page=2&recordPerPage=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_count"], json!(12));
    let names: Vec<&str> = body["data"]["food_items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Dish 05", "Dish 06", "Dish 07", "Dish 08", "Dish 09"]);

    let (_, last) = app.get("/food?page=3&recordPerPage=5").await;
    assert_eq!(last["data"]["food_items"].as_array().unwrap().len(), 2);

    let (_, beyond) = app.get("/food?page=9&recordPerPage=5").await;
    assert_eq!(beyond["data"]["total_count"], json!(12));
    assert!(beyond["data"]["food_items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_start_index_overrides_page() {
    let app = TestApp::new();
    let menu_id = app.create_menu("Lunch").await;
    for i in 0..4 {
        app.create_food(&menu_id, &format!("Dish {i}"), 1.0).await;
    }

    let (_, body) = app.get("/food?page=2&recordPerPage=2&startIndex=1").await;
    let names: Vec<&str> = body["data"]["food_items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Dish 1", "Dish 2"]);

    let (status, body) = app.get("/food?startIndex=-4").await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "validation_failed");
}

#[tokio::test]
async fn list_malformed_paging_falls_back_to_defaults() {
    let app = TestApp::new();
    let menu_id = app.create_menu("Lunch").await;
    for i in 0..11 {
        app.create_food(&menu_id, &format!("Dish {i}"), 1.0).await;
    }
    let (status, body) = app.get("/food?page=zero&recordPerPage=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["food_items"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn list_empty_collection() {
    let app = TestApp::new();
    let (status, body) = app.get("/food").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({"total_count": 0, "food_items": []}));
}

#[tokio::test]
async fn most_ordered_ranks_by_frequency() {
    let app = TestApp::new();
    app.create_order(None, &["C", "A"]).await;
    app.create_order(None, &["B", "A"]).await;
    app.create_order(None, &["B", "A"]).await;

    let (status, body) = app.get("/food/most-ordered").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!([
            {"food_id": "A", "total_orders": 3},
            {"food_id": "B", "total_orders": 2},
            {"food_id": "C", "total_orders": 1}
        ])
    );
}

#[tokio::test]
async fn most_ordered_caps_at_five() {
    let app = TestApp::new();
    app.create_order(None, &["a", "b", "c", "d", "e", "f", "g"]).await;
    let (_, body) = app.get("/food/most-ordered").await;
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["food_id"].as_str().unwrap())
        .collect();
    // all tied: first seen wins
    assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn most_ordered_without_orders_is_not_found() {
    let app = TestApp::new();
    let (status, body) = app.get("/food/most-ordered").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "not_found");

    // orders without lines do not count either
    app.create_order(None, &[]).await;
    let (status, _) = app.get("/food/most-ordered").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_twice_is_not_found() {
    let app = TestApp::new();
    let menu_id = app.create_menu("Lunch").await;
    let food_id = app.create_food(&menu_id, "Soup", 4.5).await;

    let (status, body) = app.delete(&format!("/food/{food_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["food_id"], json!(food_id));

    let (status, body) = app.delete(&format!("/food/{food_id}")).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "not_found");
}

#[tokio::test]
async fn get_unknown_food_is_not_found() {
    let app = TestApp::new();
    let (status, body) = app.get("/food/unknown").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "not_found");
    assert_eq!(body["error"]["message"], json!("food item not found"));
}
