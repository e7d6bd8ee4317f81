//! Product catalog filtering.
//!
//! Everything here is a pure function of already-fetched lists, so page
//! handlers can recompute the view on every request without caching.

use crate::models::{Category, HeroImage, Product};

/// Category selection that disables the category predicate.
pub const ALL_CATEGORIES: &str = "All";

/// Label shown for a product whose category id is not among the fetched categories.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

pub fn active_categories(categories: Vec<Category>) -> Vec<Category> {
    categories.into_iter().filter(|c| c.is_active).collect()
}

pub fn active_products(products: Vec<Product>) -> Vec<Product> {
    products.into_iter().filter(|p| p.is_active).collect()
}

pub fn active_hero_images(images: Vec<HeroImage>) -> Vec<HeroImage> {
    images.into_iter().filter(|i| i.is_active).collect()
}

pub fn category_name(categories: &[Category], category_id: i64) -> &str {
    categories
        .iter()
        .find(|c| c.id == category_id)
        .map(|c| c.name.as_str())
        .unwrap_or(UNKNOWN_CATEGORY)
}

/// Maps a category name taken from the URL onto the canonical name of a
/// known category. Matching ignores case; anything unmatched selects
/// [`ALL_CATEGORIES`].
pub fn resolve_selected_category(categories: &[Category], requested: Option<&str>) -> String {
    let Some(requested) = requested.map(str::trim).filter(|r| !r.is_empty()) else {
        return ALL_CATEGORIES.to_string();
    };

    let wanted = requested.to_lowercase();
    categories
        .iter()
        .find(|c| c.name.to_lowercase() == wanted)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| ALL_CATEGORIES.to_string())
}

/// Yields, in their original order, the active products whose name contains
/// `query` (case-insensitively) and whose category is `selected_category`,
/// unless that is [`ALL_CATEGORIES`].
pub fn filter_products<'a>(
    products: &'a [Product],
    categories: &'a [Category],
    query: &str,
    selected_category: &'a str,
) -> impl Iterator<Item = &'a Product> + 'a {
    let needle = query.to_lowercase();

    products.iter().filter(move |product| {
        if !product.is_active {
            return false;
        }
        let matches_search = product.name.to_lowercase().contains(&needle);
        let matches_category = selected_category == ALL_CATEGORIES
            || category_name(categories, product.category) == selected_category;
        matches_search && matches_category
    })
}

/// Formats a decimal price string with thousands separators and at most
/// three fraction digits, trailing zeros dropped ("1250.50" -> "1,250.5").
/// Input that is not a finite number comes back unchanged.
pub fn format_price(raw: &str) -> String {
    let value = match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return raw.to_string(),
    };

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Link to the products page carrying the given filter state. `All` and an
/// empty search are left out of the query string.
pub fn catalog_href(category: &str, search: &str, product_id: Option<i64>) -> String {
    let mut params = Vec::new();

    if !category.is_empty() && category != ALL_CATEGORIES {
        params.push(format!("category={}", urlencoding::encode(category)));
    }
    if !search.is_empty() {
        params.push(format!("search={}", urlencoding::encode(search)));
    }
    if let Some(id) = product_id {
        params.push(format!("id={id}"));
    }

    if params.is_empty() {
        "/products".to_string()
    } else {
        format!("/products?{}", params.join("&"))
    }
}
