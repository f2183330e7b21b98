//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

/// Register a fresh account and return its bearer token
async fn token_for(server: &TestServer) -> String {
    let response = server
        .post("/api/auth/register", &RegisterRequest::unique())
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    auth.token
}

async fn create_game(server: &TestServer, token: &str, fields: &GameFields) -> GameResponse {
    let response = server
        .post_form("/api/games", Some(token), fields.form())
        .await
        .unwrap();
    let created: GameMutationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    created.game
}

async fn search(server: &TestServer, query: &str) -> GameListResponse {
    let response = server.get(&format!("/api/games?{query}")).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_welcome() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["endpoints"]["featured"], "/api/featured");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.username.as_deref(), Some(request.username.as_str()));
    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.role, "user");
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    let first = server.post("/api/auth/register", &request).await.unwrap();
    assert_status(first, StatusCode::CREATED).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/auth/register", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "Usuario o email ya existe");
}

#[tokio::test]
async fn test_register_short_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "12345".to_string();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "La contraseña debe tener al menos 6 caracteres");
}

#[tokio::test]
async fn test_register_long_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.username = "u".repeat(51);

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "VALIDATION_ERROR");
    assert_eq!(body.message, "El nombre de usuario no puede superar 50 caracteres");
}

#[tokio::test]
async fn test_register_admin_and_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterAdminRequest::unique();

    let response = server.post("/api/auth/register-admin", &request).await.unwrap();
    let admin: AdminAuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!admin.token.is_empty());

    let again = server.post("/api/auth/register-admin", &request).await.unwrap();
    let body: ErrorBody = assert_json(again, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "El email ya está registrado");

    let login = LoginRequest {
        email: request.email.clone(),
        password: request.password.clone(),
    };
    let response = server.post("/api/auth/login", &login).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.user.role, "admin");
    assert_eq!(auth.user.name.as_deref(), Some("Administrador"));
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &register_req).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.message, "Login exitoso");
    assert_eq!(auth.user.email, register_req.email);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    server.post("/api/auth/register", &register_req).await.unwrap();

    for login_req in [
        LoginRequest {
            email: "nonexistent@example.com".to_string(),
            password: "wrongpass".to_string(),
        },
        LoginRequest {
            email: register_req.email.clone(),
            password: "wrongpass".to_string(),
        },
    ] {
        let response = server.post("/api/auth/login", &login_req).await.unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
        assert_eq!(body.message, "Credenciales inválidas");
    }
}

// ============================================================================
// Auth Gate Tests
// ============================================================================

#[tokio::test]
async fn test_mutations_without_token_change_nothing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = token_for(&server).await;
    let tag = unique_tag("gate");
    let existing = create_game(&server, &token, &GameFields::new(&tag, "pc", "20")).await;

    // create
    let fields = GameFields::new(&format!("{tag} intruder"), "pc", "5");
    let response = server.post_form("/api/games", None, fields.form()).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // update with a token that does not verify
    let fields = GameFields::default().with("base_price", "1");
    let response = server
        .put_form(&format!("/api/games/{}", existing.id), Some("forged"), fields.form())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // delete
    let response = server
        .delete(&format!("/api/games/{}", existing.id), None)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.code, "MISSING_AUTH");

    // featured
    let request = FeaturedUpdateRequest {
        featured_games: vec![existing.id],
    };
    let response = server.put_json("/api/featured", None, &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let page = search(&server, &format!("search={tag}")).await;
    assert_eq!(page.games.len(), 1);
    assert_eq!(page.games[0].id, existing.id);
    assert!((page.games[0].base_price - 20.0).abs() < f64::EPSILON);
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_platform_filter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = token_for(&server).await;
    let tag = unique_tag("platform");

    for platform in ["ps5", "xbox", "pc", "switch"] {
        create_game(&server, &token, &GameFields::new(&format!("{tag} {platform}"), platform, "30")).await;
    }

    for platform in ["ps5", "xbox", "pc", "switch"] {
        let page = search(&server, &format!("platform={platform}&search={tag}")).await;
        assert_eq!(page.games.len(), 1, "{platform}");
        assert!(page.games.iter().all(|g| g.platform == platform));
    }

    let page = search(&server, "platform=ps5&limit=100").await;
    assert!(page.games.iter().all(|g| g.platform == "ps5"));

    let all = search(&server, &format!("platform=all&search={tag}")).await;
    assert_eq!(all.games.len(), 4);

    let response = server.get("/api/games?platform=dreamcast").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_final_price_and_sorting() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = token_for(&server).await;
    let tag = unique_tag("price");

    let full = create_game(&server, &token, &GameFields::new(&format!("{tag} full"), "pc", "59.99")).await;
    assert!((full.final_price - full.base_price).abs() < f64::EPSILON);
    assert_eq!(full.discount_percentage, 0);
    assert_eq!(full.stock, 0);

    for discount in [25u8, 33, 100] {
        let fields = GameFields::new(&format!("{tag} d{discount}"), "pc", "59.99")
            .with("discount_percentage", &discount.to_string());
        let game = create_game(&server, &token, &fields).await;
        let expected = round2(59.99 * (1.0 - f64::from(discount) / 100.0));
        assert!((game.final_price - expected).abs() < 1e-6, "{discount}: {}", game.final_price);
    }

    let page = search(&server, &format!("search={tag}&sort=price-asc")).await;
    let prices: Vec<f64> = page.games.iter().map(|g| g.final_price).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]), "{prices:?}");

    let page = search(&server, &format!("search={tag}&sort=price-desc")).await;
    let prices: Vec<f64> = page.games.iter().map(|g| g.final_price).collect();
    assert!(prices.windows(2).all(|w| w[0] >= w[1]), "{prices:?}");
}

#[tokio::test]
async fn test_pagination_and_search_total() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = token_for(&server).await;
    let tag = unique_tag("page");

    for n in 0..3 {
        create_game(&server, &token, &GameFields::new(&format!("{tag} {n}"), "switch", "10")).await;
    }

    let page = search(&server, &format!("search={tag}&limit=2&offset=0")).await;
    assert_eq!(page.games.len(), 2);
    assert_eq!(page.pagination.limit, 2);
    assert_eq!(page.pagination.offset, 0);
    // total counts the platform filter only, not the search term
    assert!(page.pagination.total >= 3);

    let rest = search(&server, &format!("search={tag}&limit=2&offset=2")).await;
    assert_eq!(rest.games.len(), 1);

    let response = server.get("/api/games?limit=abc").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_game() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = token_for(&server).await;
    let tag = unique_tag("detail");

    let fields = GameFields::new(&tag, "xbox", "40")
        .with("description", "Open world")
        .with("developer_name", &format!("{tag} Studio"))
        .with("release_date", "2023-06-01")
        .with("stock", "7");
    let created = create_game(&server, &token, &fields).await;
    assert!(created.developer_id.is_some());

    let response = server.get(&format!("/api/games/{}", created.id)).await.unwrap();
    let game: GameResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(game.title, tag);
    assert_eq!(game.description.as_deref(), Some("Open world"));
    assert_eq!(game.developer_name, Some(format!("{tag} Studio")));
    assert_eq!(game.release_date.as_deref(), Some("2023-06-01"));
    assert_eq!(game.stock, 7);

    let developer_id = created.developer_id.unwrap();
    let response = server.get(&format!("/api/developers/{developer_id}")).await.unwrap();
    let developer: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(developer["name"], format!("{tag} Studio"));

    let response = server.get("/api/games/2147483000").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.message, "Juego no encontrado");

    let response = server.get("/api/developers/2147483000").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.message, "Developer not found");
}

// ============================================================================
// Admin Mutation Tests
// ============================================================================

#[tokio::test]
async fn test_discount_out_of_range_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = token_for(&server).await;
    let tag = unique_tag("discount");

    let fields = GameFields::default()
        .with("title", &tag)
        .with("base_price", "10")
        .with("discount_percentage", "150");
    let response = server.post_form("/api/games", Some(&token), fields.form()).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "El descuento debe estar entre 0 y 100");

    let fields = GameFields::new(&tag, "pc", "10").with("discount_percentage", "-1");
    let response = server.post_form("/api/games", Some(&token), fields.form()).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let page = search(&server, &format!("search={tag}")).await;
    assert!(page.games.is_empty());
}

#[tokio::test]
async fn test_negative_price_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = token_for(&server).await;
    let tag = unique_tag("negative");

    let response = server
        .post_form("/api/games", Some(&token), GameFields::new(&tag, "pc", "-5").form())
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "El precio debe ser mayor o igual a 0");

    let page = search(&server, &format!("search={tag}")).await;
    assert!(page.games.is_empty());
}

#[tokio::test]
async fn test_long_developer_name_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = token_for(&server).await;
    let tag = unique_tag("longdev");

    let fields = GameFields::new(&tag, "pc", "10").with("developer_name", &"d".repeat(300));
    let response = server.post_form("/api/games", Some(&token), fields.form()).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(
        body.message,
        "El nombre del desarrollador no puede superar 255 caracteres"
    );

    let page = search(&server, &format!("search={tag}")).await;
    assert!(page.games.is_empty());
}

#[tokio::test]
async fn test_missing_required_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = token_for(&server).await;

    let fields = GameFields::default().with("title", &unique_tag("partial"));
    let response = server.post_form("/api/games", Some(&token), fields.form()).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "Título, plataforma y precio son requeridos");
}

#[tokio::test]
async fn test_create_with_image_and_serve_it() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = token_for(&server).await;
    let fields = GameFields::new(&unique_tag("cover"), "ps5", "70");

    let form = fields.form_with_image("cover.png", "image/png", tiny_png()).unwrap();
    let response = server.post_form("/api/games", Some(&token), form).await.unwrap();
    let created: GameMutationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.message, "Juego creado exitosamente");

    let image_url = created.game.image_url.expect("image url");
    assert!(image_url.starts_with("/uploads/games/game-"), "{image_url}");
    assert!(image_url.ends_with(".png"));

    let response = server.get(&image_url).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.bytes().await.unwrap().to_vec(), tiny_png());

    let form = fields
        .form_with_image("notes.txt", "text/plain", b"hello".to_vec())
        .unwrap();
    let response = server.post_form("/api/games", Some(&token), form).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "Solo se permiten imágenes (jpeg, jpg, png, webp)");
}

#[tokio::test]
async fn test_partial_update() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = token_for(&server).await;
    let tag = unique_tag("update");
    let fields = GameFields::new(&tag, "pc", "50").with("stock", "3");
    let created = create_game(&server, &token, &fields).await;

    let changes = GameFields::default().with("discount_percentage", "50");
    let response = server
        .put_form(&format!("/api/games/{}", created.id), Some(&token), changes.form())
        .await
        .unwrap();
    let updated: GameMutationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.message, "Juego actualizado exitosamente");
    assert_eq!(updated.game.title, tag);
    assert_eq!(updated.game.platform, "pc");
    assert_eq!(updated.game.stock, 3);
    assert_eq!(updated.game.discount_percentage, 50);
    assert!((updated.game.final_price - 25.0).abs() < 1e-6);

    let bad = GameFields::default().with("discount_percentage", "101");
    let response = server
        .put_form(&format!("/api/games/{}", created.id), Some(&token), bad.form())
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .put_form("/api/games/2147483000", Some(&token), changes.form())
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_game() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = token_for(&server).await;
    let tag = unique_tag("delete");
    let keep = create_game(&server, &token, &GameFields::new(&format!("{tag} keep"), "pc", "5")).await;
    let doomed = create_game(&server, &token, &GameFields::new(&format!("{tag} drop"), "pc", "5")).await;

    let response = server.delete("/api/games/2147483000", Some(&token)).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.message, "Juego no encontrado");
    assert_eq!(search(&server, &format!("search={tag}")).await.games.len(), 2);

    let response = server
        .delete(&format!("/api/games/{}", doomed.id), Some(&token))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["message"], "Juego eliminado exitosamente");

    let response = server.get(&format!("/api/games/{}", doomed.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    let response = server.get(&format!("/api/games/{}", keep.id)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Reference + Featured Tests
// ============================================================================

#[tokio::test]
async fn test_reference_lists() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    for path in ["/api/platforms", "/api/categories", "/api/developers"] {
        let response = server.get(path).await.unwrap();
        let list: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(list.iter().all(|item| item["id"].is_i64() && item["name"].is_string()), "{path}");
    }
}

#[tokio::test]
async fn test_featured_replace() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = token_for(&server).await;
    let tag = unique_tag("featured");
    let first = create_game(&server, &token, &GameFields::new(&format!("{tag} a"), "pc", "10")).await;
    let second = create_game(&server, &token, &GameFields::new(&format!("{tag} b"), "ps5", "20")).await;

    let request = FeaturedUpdateRequest {
        featured_games: vec![second.id, first.id],
    };
    let response = server.put_json("/api/featured", Some(&token), &request).await.unwrap();
    let updated: FeaturedUpdateResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.featured_games, vec![second.id, first.id]);

    let response = server.get("/api/featured").await.unwrap();
    let featured: Vec<FeaturedGame> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(featured.len(), 2);
    assert_eq!((featured[0].id, featured[0].position), (second.id, 0));
    assert_eq!((featured[1].id, featured[1].position), (first.id, 1));

    let bad = FeaturedUpdateRequest {
        featured_games: vec![0],
    };
    let response = server.put_json("/api/featured", Some(&token), &bad).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let empty = FeaturedUpdateRequest {
        featured_games: Vec::new(),
    };
    let response = server.put_json("/api/featured", Some(&token), &empty).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/api/featured").await.unwrap();
    let featured: Vec<FeaturedGame> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(featured.is_empty());
}
