use axum_helpers::{Pagination, QueryParams};
use chrono::{DateTime, Utc};
use domain_categories::Category;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// A catalog product with its category and variants loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    #[schema(example = "PROD001")]
    pub code: String,
    #[schema(value_type = String, example = "10.99")]
    pub price: Decimal,
    pub category_id: Option<Uuid>,
    pub category: Option<Category>,
    pub variants: Vec<Variant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A purchasable variant of a product. A zero price is allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Variant {
    pub id: Uuid,
    pub product_id: Uuid,
    #[schema(example = "Variant A")]
    pub name: String,
    #[schema(example = "SKU001A")]
    pub sku: String,
    #[schema(value_type = String, example = "11.99")]
    pub price: Decimal,
}

/// Criteria for listing the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductsFilter {
    /// Exact category code
    pub category_code: Option<String>,
    /// Inclusive upper price bound
    pub max_price: Option<Decimal>,
    pub offset: u64,
    pub limit: u64,
}

impl ProductsFilter {
    /// Builds a filter from `category`, `priceLessThan`, `offset` and `limit`.
    ///
    /// Never fails: an empty category means no category criterion, and a
    /// `priceLessThan` that is not a non-negative decimal is ignored.
    pub fn from_query(params: &QueryParams) -> Self {
        let page = Pagination::from_query(params);
        Self {
            category_code: params.get("category").map(str::to_owned),
            max_price: params.get("priceLessThan").and_then(parse_price),
            offset: page.offset,
            limit: page.limit,
        }
    }
}

fn parse_price(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
        .filter(|price| !price.is_sign_negative())
}

/// Body of `GET /catalog`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    /// Matching products before pagination
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> QueryParams {
        QueryParams::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_empty_query_gives_defaults() {
        let filter = ProductsFilter::from_query(&query(&[]));
        assert_eq!(
            filter,
            ProductsFilter {
                category_code: None,
                max_price: None,
                offset: 0,
                limit: 10,
            }
        );
    }

    #[test]
    fn test_category_and_price() {
        let filter = ProductsFilter::from_query(&query(&[
            ("category", "SHOES"),
            ("priceLessThan", "20.50"),
        ]));
        assert_eq!(filter.category_code.as_deref(), Some("SHOES"));
        assert_eq!(filter.max_price, Some(Decimal::new(2050, 2)));
    }

    #[test]
    fn test_empty_category_is_ignored() {
        let filter = ProductsFilter::from_query(&query(&[("category", "")]));
        assert_eq!(filter.category_code, None);
    }

    #[test]
    fn test_malformed_price_is_ignored() {
        for raw in ["abc", "10.5.1", "-3", ""] {
            let filter = ProductsFilter::from_query(&query(&[("priceLessThan", raw)]));
            assert_eq!(filter.max_price, None, "{raw}");
        }
    }

    #[test]
    fn test_price_in_exponent_form() {
        let filter = ProductsFilter::from_query(&query(&[("priceLessThan", "1e1")]));
        assert_eq!(filter.max_price, Some(Decimal::TEN));
    }

    #[test]
    fn test_zero_price_bound_is_kept() {
        let filter = ProductsFilter::from_query(&query(&[("priceLessThan", "0")]));
        assert_eq!(filter.max_price, Some(Decimal::ZERO));
    }

    #[test]
    fn test_limit_is_clamped() {
        let high = ProductsFilter::from_query(&query(&[("limit", "1000")]));
        let low = ProductsFilter::from_query(&query(&[("limit", "-1")]));
        assert_eq!(high.limit, 100);
        assert_eq!(low.limit, 1);
    }

    #[test]
    fn test_price_serializes_as_string() {
        let variant = Variant {
            id: Uuid::nil(),
            product_id: Uuid::nil(),
            name: "Variant A".into(),
            sku: "SKU001A".into(),
            price: Decimal::new(1199, 2),
        };
        let json = serde_json::to_value(&variant).unwrap();
        assert_eq!(json["price"], "11.99");
    }
}
