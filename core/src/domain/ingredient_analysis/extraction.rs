use std::sync::LazyLock;

use regex::Regex;

pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Longest header block still considered a brand/product line.
const MAX_HEADER_LEN: usize = 70;

static INGREDIENTS_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ingredients:").expect("static regex is valid"));

static INGREDIENTS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ingredients:?").expect("static regex is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductIdentity {
    pub product_name: String,
    pub brand_name: String,
}

impl Default for ProductIdentity {
    fn default() -> Self {
        Self {
            product_name: UNKNOWN_PRODUCT.to_string(),
            brand_name: String::new(),
        }
    }
}

/// Reads brand and product from the lines printed above "Ingredients:".
pub fn extract_identity(text: &str) -> ProductIdentity {
    let mut identity = ProductIdentity::default();

    let Some(heading) = INGREDIENTS_HEADING.find(text) else {
        return identity;
    };

    let header = text[..heading.start()].trim();
    if header.is_empty() || header.chars().count() >= MAX_HEADER_LEN {
        return identity;
    }

    let lines: Vec<&str> = header
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    match lines.as_slice() {
        [product] => identity.product_name = product.to_string(),
        [brand, product, ..] => {
            identity.brand_name = brand.to_string();
            identity.product_name = product.to_string();
        }
        [] => {}
    }

    identity
}

/// Splits label text into candidate ingredients, keeping their printed order.
pub fn extract_ingredients(text: &str) -> Vec<String> {
    INGREDIENTS_TOKEN
        .replace(text, "")
        .split([',', '.', ';'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty() && piece.chars().any(|c| c.is_ascii_alphabetic()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_defaults_without_heading() {
        let identity = extract_identity("Water, Sugar, Salt");
        assert_eq!(identity.product_name, UNKNOWN_PRODUCT);
        assert_eq!(identity.brand_name, "");
    }

    #[test]
    fn test_identity_defaults_with_empty_header() {
        assert_eq!(
            extract_identity("Ingredients: Water, Sugar, Salt"),
            ProductIdentity::default()
        );
    }

    #[test]
    fn test_identity_brand_and_product() {
        let identity = extract_identity("Acme Foods\n\nCrunchy Oat Bar\nINGREDIENTS: oats, honey");
        assert_eq!(identity.brand_name, "Acme Foods");
        assert_eq!(identity.product_name, "Crunchy Oat Bar");
    }

    #[test]
    fn test_identity_product_only() {
        let identity = extract_identity("  Tomato Soup  \ningredients: tomato, water");
        assert_eq!(identity.brand_name, "");
        assert_eq!(identity.product_name, "Tomato Soup");
    }

    #[test]
    fn test_identity_ignores_long_header() {
        let header = "a".repeat(MAX_HEADER_LEN);
        let identity = extract_identity(&format!("{header}\nIngredients: salt, water"));
        assert_eq!(identity, ProductIdentity::default());
    }

    #[test]
    fn test_ingredients_keep_order_and_case() {
        assert_eq!(
            extract_ingredients("Ingredients: Water, Sugar, Salt"),
            vec!["Water", "Sugar", "Salt"]
        );
    }

    #[test]
    fn test_ingredients_split_on_all_separators() {
        assert_eq!(
            extract_ingredients("ingredients flour; water. yeast, salt"),
            vec!["flour", "water", "yeast", "salt"]
        );
    }

    #[test]
    fn test_ingredients_drop_pieces_without_letters() {
        assert_eq!(
            extract_ingredients("INGREDIENTS: sugar, 12%, , 3.5, cocoa"),
            vec!["sugar", "cocoa"]
        );
    }

    #[test]
    fn test_only_first_ingredients_token_is_removed() {
        assert_eq!(
            extract_ingredients("Ingredients: spice, other ingredients"),
            vec!["spice", "other ingredients"]
        );
    }
}
