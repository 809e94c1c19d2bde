// ABOUTME: Store management: product catalog listing, creation, partial update and deletion
// ABOUTME: Product forms are validated client-side before anything reaches the server

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::AdminApi;
use crate::controller::{ListFilter, MutationAction, ResourceListController, ResourceService};
use crate::errors::{AppError, AppResult};
use crate::models::{CreateProductRequest, Product, ProductCategory, UpdateProductRequest};
use crate::notifications::Notifier;

use super::{require_non_negative, require_text};

/// Catalog mutations
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Add a product
    Create(CreateProductRequest),
    /// Change some fields of a product
    Update {
        /// Product id
        id: String,
        /// Fields to change
        patch: UpdateProductRequest,
    },
    /// Remove a product
    Delete(String),
}

impl MutationAction for ProductAction {
    fn requires_confirmation(&self) -> bool {
        matches!(self, Self::Delete(_))
    }

    fn success_message(&self) -> String {
        match self {
            Self::Create(_) => "Product created successfully",
            Self::Update { .. } => "Product updated successfully",
            Self::Delete(_) => "Product deleted",
        }
        .to_owned()
    }

    fn failure_message(&self) -> String {
        match self {
            Self::Create(_) => "Failed to create product",
            Self::Update { .. } => "Failed to update product",
            Self::Delete(_) => "Failed to delete product",
        }
        .to_owned()
    }

    fn validate(&self) -> AppResult<()> {
        match self {
            Self::Create(request) => validate_new_product(request),
            Self::Update { id, patch } => {
                require_text("Product id", id)?;
                validate_patch(patch)
            }
            Self::Delete(id) => require_text("Product id", id),
        }
    }
}

fn validate_new_product(request: &CreateProductRequest) -> AppResult<()> {
    require_text("Name", &request.name)?;
    require_text("Description", &request.description)?;
    require_non_negative("Price", request.price)?;
    if let Some(sale_price) = request.sale_price {
        require_non_negative("Sale price", sale_price)?;
    }
    Ok(())
}

fn validate_patch(patch: &UpdateProductRequest) -> AppResult<()> {
    if patch.is_empty() {
        return Err(AppError::invalid_input("Nothing to update"));
    }
    if let Some(name) = &patch.name {
        require_text("Name", name)?;
    }
    if let Some(description) = &patch.description {
        require_text("Description", description)?;
    }
    if let Some(price) = patch.price {
        require_non_negative("Price", price)?;
    }
    if let Some(sale_price) = patch.sale_price {
        require_non_negative("Sale price", sale_price)?;
    }
    Ok(())
}

/// Category filter for the product grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductFilter {
    /// Every product
    #[default]
    All,
    /// Products in one category
    Category(ProductCategory),
}

impl ListFilter<Product> for ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => product.category == *category,
        }
    }
}

impl From<Option<ProductCategory>> for ProductFilter {
    fn from(category: Option<ProductCategory>) -> Self {
        category.map_or(Self::All, Self::Category)
    }
}

/// Product endpoints
pub struct ProductService {
    api: Arc<dyn AdminApi>,
}

impl ProductService {
    /// Service over `api`
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self { api }
    }

    /// Fetch one product for the detail view
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the id is unknown, or the transport error.
    pub async fn get(&self, id: &str) -> AppResult<Product> {
        require_text("Product id", id)?;
        self.api.get_product(id).await
    }
}

#[async_trait]
impl ResourceService for ProductService {
    type Item = Product;
    type Action = ProductAction;

    fn resource_name(&self) -> &'static str {
        "products"
    }

    async fn fetch_all(&self) -> AppResult<Vec<Product>> {
        self.api.list_products().await
    }

    async fn execute(&self, action: &ProductAction) -> AppResult<()> {
        match action {
            ProductAction::Create(request) => self.api.create_product(request).await,
            ProductAction::Update { id, patch } => self.api.update_product(id, patch).await,
            ProductAction::Delete(id) => self.api.delete_product(id).await,
        }
    }
}

/// Controller for the store management screen
pub type StoreController = ResourceListController<ProductService>;

/// Mount the store management screen
pub fn mount(api: Arc<dyn AdminApi>, notifier: Notifier) -> StoreController {
    ResourceListController::mount(Arc::new(ProductService::new(api)), notifier)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn new_product() -> CreateProductRequest {
        CreateProductRequest {
            name: "Whey Protein".to_owned(),
            description: "Vanilla, 2kg".to_owned(),
            price: 49.99,
            sale_price: None,
            images: Vec::new(),
            category: ProductCategory::Supplements,
            stock: Some(20),
            sku: None,
            specifications: None,
        }
    }

    #[test]
    fn only_delete_needs_confirmation() {
        assert!(!ProductAction::Create(new_product()).requires_confirmation());
        assert!(!ProductAction::Update {
            id: "p1".to_owned(),
            patch: UpdateProductRequest {
                stock: Some(3),
                ..UpdateProductRequest::default()
            },
        }
        .requires_confirmation());
        assert!(ProductAction::Delete("p1".to_owned()).requires_confirmation());
    }

    #[test]
    fn create_validation() {
        assert!(ProductAction::Create(new_product()).validate().is_ok());

        let mut bad = new_product();
        bad.price = -1.0;
        assert!(ProductAction::Create(bad).validate().is_err());

        let mut unnamed = new_product();
        unnamed.name = " ".to_owned();
        assert!(ProductAction::Create(unnamed).validate().is_err());
    }

    #[test]
    fn empty_patch_is_rejected() {
        let action = ProductAction::Update {
            id: "p1".to_owned(),
            patch: UpdateProductRequest::default(),
        };
        assert!(action.validate().is_err());
    }
}
