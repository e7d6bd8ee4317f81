use actix_web::{HttpResponse, http::StatusCode, web};
use tera::{Context, Tera};

use crate::error::AppError;
use crate::handlers::{
    ApiClient, categories::fetch_categories, contact::post_contact, home::fetch_hero_images,
    products::fetch_products,
};
use crate::models::{CatalogQuery, ContactMessage};
use crate::remote::Remote;
use crate::views::{self, ContactView, Notice};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/about", web::get().to(about))
        .route("/categories", web::get().to(categories))
        .route("/products", web::get().to(products))
        .route("/contact", web::get().to(contact))
        .route("/contact", web::post().to(submit_contact));
}

fn render(
    tmpl: &Tera,
    name: &str,
    page: &str,
    mut context: Context,
    status: StatusCode,
) -> Result<HttpResponse, AppError> {
    context.insert("page", page);
    let html = tmpl.render(name, &context)?;
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(html))
}

async fn index(tmpl: web::Data<Tera>, api: web::Data<ApiClient>) -> Result<HttpResponse, AppError> {
    let (hero, categories) = tokio::join!(fetch_hero_images(&api), fetch_categories(&api));

    let mut context = Context::new();
    context.insert(
        "hero",
        &views::hero_slides(Remote::from_result(hero, "hero images"), api.base_url()),
    );
    context.insert(
        "categories",
        &views::category_cards(Remote::from_result(categories, "categories"), api.base_url()),
    );
    context.insert(
        "contact",
        &ContactView {
            form: ContactMessage::default(),
            notice: None,
        },
    );

    render(&tmpl, "index.html", "home", context, StatusCode::OK)
}

async fn about(tmpl: web::Data<Tera>) -> Result<HttpResponse, AppError> {
    render(&tmpl, "about.html", "about", Context::new(), StatusCode::OK)
}

async fn categories(
    tmpl: web::Data<Tera>,
    api: web::Data<ApiClient>,
) -> Result<HttpResponse, AppError> {
    let categories = Remote::from_result(fetch_categories(&api).await, "categories");

    let mut context = Context::new();
    context.insert("categories", &views::category_cards(categories, api.base_url()));

    render(&tmpl, "categories.html", "categories", context, StatusCode::OK)
}

async fn products(
    tmpl: web::Data<Tera>,
    api: web::Data<ApiClient>,
    query: web::Query<CatalogQuery>,
) -> Result<HttpResponse, AppError> {
    // both sources resolve independently; one failing leaves the other usable
    let (categories, products) = tokio::join!(fetch_categories(&api), fetch_products(&api));

    let catalog = views::catalog_view(
        Remote::from_result(categories, "categories"),
        Remote::from_result(products, "products"),
        &query,
        api.base_url(),
    );

    let mut context = Context::new();
    context.insert("catalog", &catalog);

    render(&tmpl, "products.html", "products", context, StatusCode::OK)
}

async fn contact(tmpl: web::Data<Tera>) -> Result<HttpResponse, AppError> {
    let mut context = Context::new();
    context.insert(
        "contact",
        &ContactView {
            form: ContactMessage::default(),
            notice: None,
        },
    );
    render(&tmpl, "contact.html", "contact", context, StatusCode::OK)
}

async fn submit_contact(
    tmpl: web::Data<Tera>,
    api: web::Data<ApiClient>,
    form: web::Form<ContactMessage>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    let (view, status) = if !form.has_required_fields() {
        (
            ContactView {
                form,
                notice: Some(Notice::missing_fields()),
            },
            StatusCode::BAD_REQUEST,
        )
    } else {
        match post_contact(&api, &form).await {
            Ok(()) => {
                tracing::info!("contact message forwarded");
                (
                    ContactView {
                        form: ContactMessage::default(),
                        notice: Some(Notice::sent()),
                    },
                    StatusCode::OK,
                )
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact message not delivered");
                (
                    ContactView {
                        form,
                        notice: Some(Notice::send_failed()),
                    },
                    StatusCode::BAD_GATEWAY,
                )
            }
        }
    };

    let mut context = Context::new();
    context.insert("contact", &view);
    render(&tmpl, "contact.html", "contact", context, status)
}

pub async fn not_found(tmpl: web::Data<Tera>) -> Result<HttpResponse, AppError> {
    render(&tmpl, "404.html", "", Context::new(), StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_web::{App, test};

    use super::*;
    use crate::handlers::fake_api::{self, FakeApi, Reply};
    use tera::escape_html;

    fn templates() -> Tera {
        Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/public/**/*.html")).unwrap()
    }

    async fn get(api: FakeApi, uri: &str) -> (StatusCode, String) {
        let (base_url, _) = fake_api::serve(api);
        let client = ApiClient::new(base_url, Duration::from_secs(5)).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(templates()))
                .app_data(web::Data::new(client))
                .configure(configure)
                .default_service(web::to(not_found)),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = res.status();
        let body = test::read_body(res).await;
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn products_page_lists_active_products() {
        let (status, body) = get(FakeApi::default(), "/products").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Steel Desk"));
        assert!(body.contains("Cotton Shirt"));
        assert!(body.contains("Mystery Crate"));
        assert!(!body.contains("Retired Chair"));
        assert!(body.contains("Showing 3 of 3 products"));
        assert!(body.contains("$1,250.5"));
    }

    #[actix_web::test]
    async fn products_page_resolves_relative_images_against_api() {
        let (base_url, _) = fake_api::serve(FakeApi::default());
        let client = ApiClient::new(base_url.clone(), Duration::from_secs(5)).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(templates()))
                .app_data(web::Data::new(client))
                .configure(configure),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/products").to_request()).await;
        let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
        assert!(body.contains(&escape_html(&format!("{base_url}/media/products/desk.jpg"))));
        assert!(body.contains(&escape_html("https://cdn.example.com/shirt.jpg")));
    }

    #[actix_web::test]
    async fn products_page_filters_by_url_category_and_search() {
        let (_, body) = get(FakeApi::default(), "/products?category=furniture").await;
        assert!(body.contains("Steel Desk"));
        assert!(!body.contains("Cotton Shirt"));
        assert!(body.contains("Showing 1 of 3 products"));

        let (_, body) = get(FakeApi::default(), "/products?search=SHIRT").await;
        assert!(body.contains("Cotton Shirt"));
        assert!(body.contains("Showing 1 of 3 products"));
    }

    #[actix_web::test]
    async fn products_page_shows_empty_state() {
        let (status, body) = get(FakeApi::default(), "/products?search=zeppelin").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No products found"));
        assert!(body.contains("Clear Filters"));
    }

    #[actix_web::test]
    async fn products_survive_category_failure() {
        let api = FakeApi {
            categories: Reply::Status(500),
            ..FakeApi::default()
        };
        let (status, body) = get(api, "/products?category=furniture").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Error loading categories"));
        assert!(body.contains("Steel Desk"));
        assert!(body.contains("Cotton Shirt"));
        assert!(body.contains("Unknown"));
    }

    #[actix_web::test]
    async fn categories_survive_product_failure() {
        let api = FakeApi {
            products: Reply::Raw("<html>oops</html>"),
            ..FakeApi::default()
        };
        let (status, body) = get(api, "/products").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Failed to fetch products"));
        assert!(body.contains("Furniture"));
        assert!(body.contains("Clothing"));
    }

    #[actix_web::test]
    async fn product_detail_panel_opens_for_id() {
        let (_, body) = get(FakeApi::default(), "/products?id=2").await;
        assert!(body.contains("product-detail"));
        assert!(body.contains("Request Quote"));
        assert!(body.contains("Breathable"));
    }

    #[actix_web::test]
    async fn malformed_product_id_keeps_the_catalog() {
        let (status, body) = get(FakeApi::default(), "/products?category=furniture&id=").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Steel Desk"));
        assert!(!body.contains("Cotton Shirt"));
        assert!(body.contains("Showing 1 of 3 products"));
        assert!(!body.contains("product-detail"));

        let (status, body) = get(FakeApi::default(), "/products?id=abc").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Showing 3 of 3 products"));
        assert!(!body.contains("product-detail"));
    }

    #[actix_web::test]
    async fn categories_page_links_to_filtered_products() {
        let (status, body) = get(FakeApi::default(), "/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(&escape_html("/products?category=furniture")));
        assert!(body.contains(&escape_html("/products?category=clothing")));
        assert!(!body.contains("Archived"));
    }

    #[actix_web::test]
    async fn home_page_renders_hero_and_categories() {
        let (status, body) = get(FakeApi::default(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(&escape_html("/media/hero/one.jpg")));
        assert!(!body.contains(&escape_html("/media/hero/two.jpg")));
        assert!(body.contains("Furniture"));
        assert!(body.contains("Send us a Message"));
    }

    #[actix_web::test]
    async fn home_page_reports_hero_failure_inline() {
        let api = FakeApi {
            home: Reply::Status(502),
            ..FakeApi::default()
        };
        let (status, body) = get(api, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Failed to fetch hero images"));
        assert!(body.contains("Furniture"));
    }

    #[actix_web::test]
    async fn static_pages_render() {
        let (status, body) = get(FakeApi::default(), "/about").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("About"));

        let (status, body) = get(FakeApi::default(), "/contact").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Get in Touch"));
    }

    #[actix_web::test]
    async fn unknown_route_is_404() {
        let (status, body) = get(FakeApi::default(), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }

    async fn post_contact_form(api: FakeApi, form: &[(&str, &str)]) -> (StatusCode, String, fake_api::Received) {
        let (base_url, received) = fake_api::serve(api);
        let client = ApiClient::new(base_url, Duration::from_secs(5)).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(templates()))
                .app_data(web::Data::new(client))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/contact")
            .set_form(form)
            .to_request();
        let res = test::call_service(&app, req).await;
        let status = res.status();
        let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
        (status, body, received)
    }

    #[actix_web::test]
    async fn contact_submit_forwards_to_api() {
        let (status, body, received) = post_contact_form(
            FakeApi::default(),
            &[
                ("full_name", "Jane Roe"),
                ("email", "jane@example.com"),
                ("phone", ""),
                ("message", "Quote for 40 desks"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Message Sent!"));
        assert!(body.contains(&escape_html("We'll get back to you within 24 hours.")));
        assert!(!body.contains("Quote for 40 desks"));

        let bodies = received.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["email"], "jane@example.com");
    }

    #[actix_web::test]
    async fn contact_submit_rejects_missing_fields_without_calling_api() {
        let (status, body, received) = post_contact_form(
            FakeApi::default(),
            &[("full_name", "Jane Roe"), ("email", " "), ("message", "hello")],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Missing fields"));
        assert!(body.contains("Jane Roe"));
        assert!(received.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn contact_submit_failure_keeps_form_values() {
        let (status, body, _) = post_contact_form(
            FakeApi {
                contact_status: 500,
                ..FakeApi::default()
            },
            &[
                ("full_name", "Jane Roe"),
                ("email", "jane@example.com"),
                ("message", "Quote for 40 desks"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("Failed to send message. Please try again."));
        assert!(body.contains("Quote for 40 desks"));
    }
}
