// ABOUTME: Store product records and the create/update request bodies
// ABOUTME: ProductCategory mirrors the fixed category list offered by the store

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Store product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    /// Protein, vitamins and the like
    Supplements,
    /// Training equipment
    Equipment,
    /// Clothing
    Apparel,
    /// Everything else
    Accessories,
}

impl ProductCategory {
    /// Every category, in display order
    pub const ALL: [Self; 4] = [
        Self::Supplements,
        Self::Equipment,
        Self::Apparel,
        Self::Accessories,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Supplements => "supplements",
            Self::Equipment => "equipment",
            Self::Apparel => "apparel",
            Self::Accessories => "accessories",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::invalid_input(format!("Unknown product category: {s}")))
    }
}

/// Product listed in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Product name
    pub name: String,
    /// Long description
    #[serde(default)]
    pub description: String,
    /// Regular price
    pub price: f64,
    /// Discounted price, if on sale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    /// Image URLs, first one is the cover
    #[serde(default)]
    pub images: Vec<String>,
    /// Store category
    pub category: ProductCategory,
    /// Units in stock
    #[serde(default)]
    pub stock: f64,
    /// Whether the product is visible in the store
    #[serde(default)]
    pub is_active: bool,
    /// Mean review rating
    #[serde(default)]
    pub average_rating: f64,
    /// Number of reviews
    #[serde(default)]
    pub review_count: f64,
    /// Stock keeping unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Free-form key/value specifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<BTreeMap<String, String>>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update
    pub updated_at: DateTime<Utc>,
}

/// `POST /products` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Product name
    pub name: String,
    /// Long description
    pub description: String,
    /// Regular price
    pub price: f64,
    /// Discounted price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    /// Uploaded image URLs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Store category
    pub category: ProductCategory,
    /// Initial stock
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    /// Stock keeping unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Free-form specifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<BTreeMap<String, String>>,
}

/// `PUT /products/{id}` body; absent fields are left unchanged by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// New sale price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    /// Replacement image list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// New category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ProductCategory>,
    /// New stock level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    /// New SKU
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Replacement specifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<BTreeMap<String, String>>,
}

impl UpdateProductRequest {
    /// Whether the patch would change nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.sale_price.is_none()
            && self.images.is_none()
            && self.category.is_none()
            && self.stock.is_none()
            && self.sku.is_none()
            && self.specifications.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!(
            "Equipment".parse::<ProductCategory>().unwrap(),
            ProductCategory::Equipment
        );
        assert!("food".parse::<ProductCategory>().is_err());
    }

    #[test]
    fn product_counts_accept_any_json_number() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "_id": "p1",
            "name": "Resistance band",
            "price": 14.99,
            "category": "equipment",
            "stock": 7.5,
            "reviewCount": 3,
            "createdAt": "2025-03-01T07:00:00Z",
            "updatedAt": "2025-03-01T07:00:00Z"
        }))
        .unwrap();

        assert!((product.stock - 7.5).abs() < f64::EPSILON);
        assert!((product.review_count - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn update_request_omits_absent_fields() {
        let patch = UpdateProductRequest {
            price: Some(19.5),
            ..UpdateProductRequest::default()
        };
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({ "price": 19.5 }));
        assert!(!patch.is_empty());
        assert!(UpdateProductRequest::default().is_empty());
    }
}
