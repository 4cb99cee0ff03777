use std::collections::HashSet;
use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::{http::StatusCode, routing::get, Json, Router};
use storefront::{
    app::{
        build_router,
        catalog::{CatalogService, InMemoryProductRepository, Product, ProductRepository},
        order::{OrderService, ORDER_PLACED_MESSAGE},
        AppState,
    },
    client::CatalogClient,
    infrastructure::HttpConfig,
    storefront::{Shell, Storefront},
};
use tokio::net::TcpListener;

async fn spawn_server(state: AppState) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = build_router(state, &HttpConfig::default());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn client() -> CatalogClient {
    let addr = spawn_server(AppState::default()).await;
    CatalogClient::new(format!("http://{addr}"))
}

#[tokio::test]
async fn test_fresh_server_serves_seeded_products() {
    let products = client().await.list_products().await.unwrap();

    let summary: Vec<(&str, f64)> = products.iter().map(|p| (p.name.as_str(), p.price)).collect();
    assert_eq!(
        summary,
        vec![
            ("iPhone 15 Pro", 999.0),
            ("Sony WH-1000XM5", 348.0),
            ("MacBook Air M2", 1199.0),
            ("Nike Air Jordan", 150.0),
        ]
    );
}

#[tokio::test]
async fn test_list_is_stable_and_ids_unique() {
    let client = client().await;
    let first = client.list_products().await.unwrap();
    let second = client.list_products().await.unwrap();
    assert_eq!(first, second);

    let ids: HashSet<u32> = first.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), first.len());
}

#[tokio::test]
async fn test_submit_order_acknowledges_any_cart() {
    let client = client().await;
    let products = client.list_products().await.unwrap();

    let empty = client.submit_order(&[]).await.unwrap();
    assert_eq!(empty.message, ORDER_PLACED_MESSAGE);

    let duplicates = vec![products[0].clone(), products[0].clone(), products[2].clone()];
    let ack = client.submit_order(&duplicates).await.unwrap();
    assert_eq!(ack.message, ORDER_PLACED_MESSAGE);
}

#[tokio::test]
async fn test_raw_malformed_orders_are_accepted() {
    let addr = spawn_server(AppState::default()).await;
    let http = reqwest::Client::new();

    for body in ["{}", r#"{"cart": 42}"#, "]]] not json", ""] {
        let resp = http
            .post(format!("http://{addr}/api/order"))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let ack: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(ack, serde_json::json!({ "message": ORDER_PLACED_MESSAGE }));
    }
}

#[tokio::test]
async fn test_custom_repository_is_served() {
    let repository = InMemoryProductRepository::new(vec![Product::new(
        42,
        "USB Cable",
        12.99,
        "https://example.com/cable.png",
        3.0,
    )]);
    let state = AppState::new(
        CatalogService::new(Arc::new(repository)),
        OrderService::new(),
    );
    let addr = spawn_server(state).await;

    let products = CatalogClient::new(format!("http://{addr}")).list_products().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].price, 12.99);
}

#[tokio::test]
async fn test_storefront_reload_renders_identically() {
    let mut storefront = Storefront::new(client().await);

    storefront.load_catalog().await;
    let first = storefront.render();
    storefront.load_catalog().await;
    let second = storefront.render();

    assert_eq!(first, second);
    assert!(first.contains("⭐ 4.5"));
    assert!(first.contains("$999"));
    assert!(first.contains("$1199"));
    let iphone = first.find("iPhone 15 Pro").unwrap();
    let jordan = first.find("Nike Air Jordan").unwrap();
    assert!(iphone < jordan);
}

#[tokio::test]
async fn test_storefront_add_to_cart_keeps_order() {
    let mut storefront = Storefront::new(client().await);
    storefront.load_catalog().await;

    let a = storefront.find_product(1).cloned().unwrap();
    let b = storefront.find_product(3).cloned().unwrap();
    storefront.add_to_cart(&a);
    storefront.add_to_cart(&b);

    assert_eq!(storefront.cart().entries(), &[a, b][..]);
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_products() {
    // 第一次返回正常目录，之后一律返回 500
    let calls = Arc::new(AtomicUsize::new(0));
    let seeded = InMemoryProductRepository::seeded().list();
    let app = Router::new().route(
        "/api/products",
        get(move || {
            let calls = calls.clone();
            let seeded = seeded.clone();
            async move {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Ok(Json(seeded))
                } else {
                    Err(StatusCode::INTERNAL_SERVER_ERROR)
                }
            }
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut storefront = Storefront::new(CatalogClient::new(format!("http://{addr}")));
    storefront.load_catalog().await;
    let loaded = storefront.products().to_vec();
    assert_eq!(loaded.len(), 4);

    storefront.load_catalog().await;
    assert_eq!(storefront.products(), &loaded[..]);
}

#[tokio::test]
async fn test_shell_waits_for_acknowledgement() {
    let mut storefront = Storefront::new(client().await);
    storefront.load_catalog().await;

    // 第一个 cart 被提示框吞掉，只有第二个会输出购物车明细
    let input = Cursor::new("add 2\ncart\ncart\nsearch sony\nquit\n");
    let mut shell = Shell::new(input, Vec::new());
    shell.run(&mut storefront).unwrap();

    let output = String::from_utf8(shell.into_output()).unwrap();
    assert!(output.contains("[!] Sony WH-1000XM5 added to cart!"));
    assert_eq!(output.matches("1. Sony WH-1000XM5").count(), 1);
    assert!(output.contains("Cart (1)"));
    assert_eq!(storefront.cart().len(), 1);
}
