//! Template-ready view models built from fetched API data.

use serde::Serialize;

use crate::catalog::{
    self, ALL_CATEGORIES, catalog_href, category_name, filter_products, format_price,
    resolve_selected_category,
};
use crate::handlers::media_url;
use crate::models::{CatalogQuery, Category, ContactMessage, HeroImage, Product};
use crate::remote::Remote;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HeroSlide {
    pub id: i64,
    pub image_url: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CategoryCard {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub href: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CategoryChip {
    pub name: String,
    pub href: String,
    pub selected: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
    pub category_name: String,
    pub href: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// One-shot message shown above the contact form after a submit.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn sent() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Message Sent!".to_string(),
            description: "We'll get back to you within 24 hours.".to_string(),
        }
    }

    pub fn missing_fields() -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Missing fields".to_string(),
            description: "Please fill in all required fields.".to_string(),
        }
    }

    pub fn send_failed() -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Error".to_string(),
            description: "Failed to send message. Please try again.".to_string(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ContactView {
    pub form: ContactMessage,
    pub notice: Option<Notice>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub search: String,
    pub selected_category: String,
    pub chips: Remote<Vec<CategoryChip>>,
    pub products: Remote<Vec<ProductCard>>,
    pub shown: usize,
    pub total: usize,
    pub selected_product: Option<ProductCard>,
    pub clear_href: String,
    pub close_href: String,
}

pub fn hero_slides(images: Remote<Vec<HeroImage>>, media_base: &str) -> Remote<Vec<HeroSlide>> {
    images.map(|images| {
        catalog::active_hero_images(images)
            .into_iter()
            .map(|image| HeroSlide {
                id: image.id,
                image_url: media_url(media_base, &image.hero_image),
            })
            .collect()
    })
}

/// Cards for the active categories, each linking to the products page
/// filtered by the lowercased category name.
pub fn category_cards(
    categories: Remote<Vec<Category>>,
    media_base: &str,
) -> Remote<Vec<CategoryCard>> {
    categories.map(|categories| {
        catalog::active_categories(categories)
            .into_iter()
            .map(|category| CategoryCard {
                href: catalog_href(&category.name.to_lowercase(), "", None),
                image_url: media_url(media_base, &category.image),
                id: category.id,
                name: category.name,
                description: category.description,
            })
            .collect()
    })
}

fn product_card(
    product: &Product,
    categories: &[Category],
    selected_category: &str,
    search: &str,
    media_base: &str,
) -> ProductCard {
    ProductCard {
        id: product.id,
        name: product.name.clone(),
        description: product.description.clone(),
        price: format_price(&product.price),
        image_url: media_url(media_base, &product.image),
        category_name: category_name(categories, product.category).to_string(),
        href: catalog_href(selected_category, search, Some(product.id)),
    }
}

/// Builds the products page from the two independently fetched sources.
///
/// A failed category fetch leaves the product grid usable: every label
/// falls back to "Unknown" and the selection to "All".
pub fn catalog_view(
    categories: Remote<Vec<Category>>,
    products: Remote<Vec<Product>>,
    query: &CatalogQuery,
    media_base: &str,
) -> CatalogView {
    let categories = categories.map(catalog::active_categories);
    let products = products.map(catalog::active_products);

    let known: &[Category] = categories.ready().map(Vec::as_slice).unwrap_or(&[]);
    let search = query.search.clone().unwrap_or_default();
    let selected = resolve_selected_category(known, query.category.as_deref());

    let total = products.ready().map_or(0, Vec::len);
    let selected_product = match (query.product_id(), products.ready()) {
        (Some(id), Some(list)) => list
            .iter()
            .find(|p| p.id == id)
            .map(|p| product_card(p, known, &selected, &search, media_base)),
        _ => None,
    };

    let cards = match &products {
        Remote::Loading => Remote::Loading,
        Remote::Error { message } => Remote::Error {
            message: message.clone(),
        },
        Remote::Ready { data } => Remote::Ready {
            data: filter_products(data, known, &search, &selected)
                .map(|p| product_card(p, known, &selected, &search, media_base))
                .collect::<Vec<_>>(),
        },
    };
    let shown = cards.ready().map_or(0, Vec::len);

    let chips = match &categories {
        Remote::Loading => Remote::Loading,
        Remote::Error { message } => Remote::Error {
            message: message.clone(),
        },
        Remote::Ready { data } => {
            let names = std::iter::once(ALL_CATEGORIES).chain(data.iter().map(|c| c.name.as_str()));
            Remote::Ready {
                data: names
                    .map(|name| CategoryChip {
                        name: name.to_string(),
                        href: catalog_href(name, &search, None),
                        selected: name == selected,
                    })
                    .collect(),
            }
        }
    };

    CatalogView {
        clear_href: catalog_href(ALL_CATEGORIES, "", None),
        close_href: catalog_href(&selected, &search, None),
        search,
        selected_category: selected,
        chips,
        products: cards,
        shown,
        total,
        selected_product,
    }
}
