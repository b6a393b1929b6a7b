//! End-to-end tests for vendor materials and price comparison.

use reqwest::StatusCode;
use serde_json::json;

mod common;

use common::TestServer;

#[tokio::test]
async fn test_zero_price_always_fails() {
    let server = TestServer::start().await;
    let vendor = server.create_vendor("Toko Maju", 4.0).await;

    let (status, body) = server
        .post(
            "/vendor-materials",
            json!({ "vendor_id": vendor, "material_name": "Cement", "price": 0, "stock_available": 10 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "vendor_id, material_name, and price are required");

    let (_, body) = server
        .post(&format!("/vendors/{vendor}/materials"), json!({ "material_name": "Cement" }))
        .await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "material_name and price are required");

    let (_, list) = server.get("/vendor-materials").await;
    assert_eq!(list["count"], 0);
}

#[tokio::test]
async fn test_standalone_create_requires_vendor() {
    let server = TestServer::start().await;

    let (_, body) = server
        .post("/vendor-materials", json!({ "material_name": "Cement", "price": 9.5 }))
        .await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_nested_create_uses_path_vendor() {
    let server = TestServer::start().await;
    let a = server.create_vendor("Alpha", 1.0).await;
    let b = server.create_vendor("Beta", 1.0).await;

    let (status, body) = server
        .post(
            &format!("/vendors/{a}/materials"),
            json!({ "vendor_id": b, "material_name": "Pasir Beton", "price": 290000 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Vendor material added successfully");
    assert_eq!(body["data"]["vendor_id"], a);

    let (_, b_materials) = server.get(&format!("/vendors/{b}/materials")).await;
    assert_eq!(b_materials["count"], 0);
}

#[tokio::test]
async fn test_material_for_unknown_vendor_surfaces_store_error() {
    let server = TestServer::start().await;

    let (status, body) = server
        .post("/vendors/77/materials", json!({ "material_name": "Cement", "price": 1.5 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Vendor 77 does not exist");
}

#[tokio::test]
async fn test_by_vendor_alias_matches_nested_route() {
    let server = TestServer::start().await;
    let a = server.create_vendor("Alpha", 1.0).await;
    let b = server.create_vendor("Beta", 1.0).await;
    server.create_material(a, "Semen Portland", 82000.0).await;
    server.create_material(a, "Batu Bata Merah", 850.0).await;
    server.create_material(b, "Besi Beton 10mm", 63000.0).await;

    let (_, nested) = server.get(&format!("/vendors/{a}/materials")).await;
    let (_, alias) = server.get(&format!("/vendor-materials/by-vendor/{a}")).await;
    assert_eq!(nested, alias);
    assert_eq!(nested["count"], 2);
    assert_eq!(nested["data"][0]["material_name"], "Batu Bata Merah");
    assert!(nested["data"][0].get("vendor_name").is_none());
}

#[tokio::test]
async fn test_list_all_joins_vendor_name() {
    let server = TestServer::start().await;
    let beta = server.create_vendor("Beta", 1.0).await;
    let alpha = server.create_vendor("Alpha", 1.0).await;
    server.create_material(beta, "Cement", 9.0).await;
    server.create_material(alpha, "Cement", 9.5).await;
    server.create_material(alpha, "Brick", 0.5).await;

    let (_, body) = server.get("/vendor-materials").await;
    assert_eq!(body["count"], 3);
    let rows: Vec<(String, String)> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| {
            (
                m["material_name"].as_str().unwrap().to_string(),
                m["vendor_name"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Brick".to_string(), "Alpha".to_string()),
            ("Cement".to_string(), "Alpha".to_string()),
            ("Cement".to_string(), "Beta".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_update_keeps_vendor_and_delete_reports_missing() {
    let server = TestServer::start().await;
    let a = server.create_vendor("Alpha", 1.0).await;
    let b = server.create_vendor("Beta", 1.0).await;
    let m = server.create_material(a, "Cement", 9.0).await;

    // Vendor-scoped path goes straight to the material by id.
    let (_, body) = server
        .put(
            &format!("/vendors/{b}/materials/{m}"),
            json!({ "vendor_id": b, "material_name": "Cement Type II", "price": 9.75 }),
        )
        .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Vendor material updated successfully");

    let (_, a_materials) = server.get(&format!("/vendors/{a}/materials")).await;
    assert_eq!(a_materials["count"], 1);
    assert_eq!(a_materials["data"][0]["material_name"], "Cement Type II");
    assert_eq!(a_materials["data"][0]["price"], 9.75);

    let (_, body) = server.delete(&format!("/vendor-materials/{m}")).await;
    assert_eq!(body, json!({ "success": true, "message": "Vendor material deleted successfully" }));

    let (_, body) = server.delete(&format!("/vendors/{a}/materials/{m}")).await;
    assert_eq!(body, json!({ "success": false, "message": "Vendor material not found" }));
}

#[tokio::test]
async fn test_deleting_vendor_leaves_orphaned_materials() {
    let server = TestServer::start().await;
    let gone = server.create_vendor("Toko Tutup", 2.0).await;
    let kept = server.create_vendor("PT Prima", 4.0).await;
    server.create_material(gone, "Cement", 8.0).await;
    server.create_material(kept, "Cement", 9.0).await;

    let (_, body) = server.delete(&format!("/vendors/{gone}")).await;
    assert_eq!(body, json!({ "success": true, "message": "Vendor deleted successfully" }));

    // The per-vendor listing does not join vendors, so the orphan remains.
    let (_, orphans) = server.get(&format!("/vendors/{gone}/materials")).await;
    assert_eq!(orphans["count"], 1);
    assert_eq!(orphans["data"][0]["material_name"], "Cement");

    let (_, all) = server.get("/vendor-materials").await;
    assert_eq!(all["count"], 1);
    assert_eq!(all["data"][0]["vendor_name"], "PT Prima");

    let (_, quotes) = server.get("/materials/price-comparison/Cement").await;
    assert_eq!(quotes["count"], 1);
    assert_eq!(quotes["data"][0]["vendor_id"], kept);
}

#[tokio::test]
async fn test_nested_material_path_falls_back_for_get_and_post() {
    let server = TestServer::start().await;
    let v = server.create_vendor("Toko Maju", 4.0).await;
    let m = server.create_material(v, "Semen Portland", 82000.0).await;

    let (status, listed) = server.get(&format!("/vendors/{v}/materials/{m}")).await;
    assert_eq!(status, StatusCode::OK);
    let (_, expected) = server.get(&format!("/vendors/{v}/materials")).await;
    assert_eq!(listed, expected);

    let (status, created) = server
        .post(
            &format!("/vendors/{v}/materials/{m}"),
            json!({ "material_name": "Pasir Beton", "price": 290000 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["vendor_id"], v);
    assert_ne!(created["data"]["id"], m);
}

#[tokio::test]
async fn test_null_fields_are_accepted() {
    let server = TestServer::start().await;
    let v = server.create_vendor("Toko Maju", 4.0).await;

    let (status, body) = server
        .post(
            &format!("/vendors/{v}/materials"),
            json!({ "material_name": "Cement", "price": 9.5, "unit": null, "notes": null, "stock_available": null }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["unit"], "");
    assert_eq!(body["data"]["stock_available"], 0);
}

#[tokio::test]
async fn test_price_comparison_ranks_cheapest_first() {
    let server = TestServer::start().await;
    let maju = server.create_vendor("Toko Maju", 4.2).await;
    let prima = server.create_vendor("PT Prima", 3.8).await;
    server.create_material(maju, "Cement", 10.00).await;
    server.create_material(prima, "Cement", 8.50).await;
    server.create_material(prima, "Sand", 1.00).await;

    let (status, body) = server.get("/materials/price-comparison/Cement").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 2);

    let first = &body["data"][0];
    assert_eq!(first["price"], 8.5);
    assert_eq!(first["vendor_name"], "PT Prima");
    assert_eq!(first["vendor_rating"], 3.8);
    assert_eq!(body["data"][1]["price"], 10.0);
    assert_eq!(body["data"][1]["vendor_name"], "Toko Maju");
}

#[tokio::test]
async fn test_price_comparison_substring_and_decoding() {
    let server = TestServer::start().await;
    let v = server.create_vendor("Toko Maju", 4.0).await;
    server.create_material(v, "Semen Portland", 82000.0).await;
    server.create_material(v, "Semen Putih", 95000.0).await;
    server.create_material(v, "Pasir Beton", 290000.0).await;

    let (_, body) = server.get("/materials/price-comparison/Semen%20Portland").await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["material_name"], "Semen Portland");

    let (_, body) = server.get("/materials/price-comparison/Semen").await;
    assert_eq!(body["count"], 2);

    let (_, body) = server.get("/materials/price-comparison/Granite").await;
    assert_eq!(body, json!({ "success": true, "count": 0, "data": [] }));
}

#[tokio::test]
async fn test_update_price_endpoint() {
    let server = TestServer::start().await;
    let v = server.create_vendor("Toko Maju", 4.0).await;
    let m = server.create_material(v, "Semen Portland", 82000.0).await;

    let (_, body) = server
        .post("/vendor-materials/update-price", json!({ "id": m }))
        .await;
    assert_eq!(body["message"], "id and new_price are required");

    let (_, body) = server
        .post("/vendor-materials/update-price", json!({ "id": m, "new_price": -1 }))
        .await;
    assert_eq!(body["message"], "Price must be positive");

    let (_, body) = server
        .post("/vendor-materials/update-price", json!({ "id": 404, "new_price": 1 }))
        .await;
    assert_eq!(body, json!({ "success": false, "message": "Vendor material not found" }));

    let (status, body) = server
        .post("/vendor-materials/update-price", json!({ "id": m, "new_price": 84000 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Price for Semen Portland updated by vendor");
    assert_eq!(body["data"]["price"], 84000.0);
}
