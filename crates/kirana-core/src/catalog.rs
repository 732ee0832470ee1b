//! # Catalog
//!
//! Product records, the stock ledger, and the category index, kept
//! consistent with each other after every mutation.
//!
//! ## Category Index Policy
//! ```text
//! add_product     ──► bucket[category].push(id)      (bucket created if new)
//! update_product  ──► category changed?  move id old bucket → new bucket
//! delete_product  ──► bucket[category].remove(id)    (bucket dropped if empty)
//! ```
//! A category exists exactly when at least one product carries it.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::types::{Product, ProductId, ProductUpdate, StockedProduct};
use crate::validation::{validate_category, validate_price, validate_product_name};

/// The product catalog with stock and category index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
    stock: BTreeMap<ProductId, u32>,
    /// Sorted by category name; ids kept in insertion order.
    categories: BTreeMap<String, Vec<ProductId>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new product with `initial_stock` units.
    ///
    /// ## Errors
    /// - `DuplicateProduct` if the id is taken
    /// - `Validation` for an empty name/category or negative price
    pub fn add_product(&mut self, product: Product, initial_stock: u32) -> CoreResult<()> {
        if self.products.contains_key(&product.id) {
            return Err(CoreError::DuplicateProduct(product.id));
        }

        let product = Product {
            id: product.id,
            name: validate_product_name(&product.name)?,
            category: validate_category(&product.category)?,
            price: validate_price(product.price)?,
        };

        self.categories
            .entry(product.category.clone())
            .or_default()
            .push(product.id);
        self.stock.insert(product.id, initial_stock);

        info!(id = %product.id, name = %product.name, category = %product.category, "Product added");
        self.products.insert(product.id, product);
        Ok(())
    }

    /// Applies a partial update. A category change moves the product
    /// between buckets.
    pub fn update_product(&mut self, id: ProductId, update: ProductUpdate) -> CoreResult<&Product> {
        let name = update.name.as_deref().map(validate_product_name).transpose()?;
        let category = update.category.as_deref().map(validate_category).transpose()?;
        let price = update.price.map(validate_price).transpose()?;

        let product = self
            .products
            .get_mut(&id)
            .ok_or(CoreError::ProductNotFound(id))?;

        if let Some(name) = name {
            product.name = name;
        }
        if let Some(price) = price {
            product.price = price;
        }
        if let Some(category) = category {
            if category != product.category {
                let old = std::mem::replace(&mut product.category, category.clone());
                Self::detach(&mut self.categories, &old, id);
                self.categories.entry(category).or_default().push(id);
            }
        }

        info!(id = %id, "Product updated");
        Ok(product)
    }

    /// Removes a product, its stock entry and its category membership.
    pub fn delete_product(&mut self, id: ProductId) -> CoreResult<Product> {
        let product = self
            .products
            .remove(&id)
            .ok_or(CoreError::ProductNotFound(id))?;

        self.stock.remove(&id);
        Self::detach(&mut self.categories, &product.category, id);

        info!(id = %id, name = %product.name, "Product deleted");
        Ok(product)
    }

    fn detach(categories: &mut BTreeMap<String, Vec<ProductId>>, category: &str, id: ProductId) {
        if let Some(bucket) = categories.get_mut(category) {
            bucket.retain(|member| *member != id);
            if bucket.is_empty() {
                categories.remove(category);
                debug!(category = %category, "Category emptied and removed");
            }
        }
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.contains_key(&id)
    }

    /// Current stock for a product, `None` if it is not in the catalog.
    pub fn stock_of(&self, id: ProductId) -> Option<u32> {
        self.stock.get(&id).copied()
    }

    /// Looks up a product together with its stock.
    pub fn find(&self, id: ProductId) -> CoreResult<StockedProduct> {
        self.stocked(id).ok_or(CoreError::ProductNotFound(id))
    }

    fn stocked(&self, id: ProductId) -> Option<StockedProduct> {
        let product = self.products.get(&id)?;
        Some(StockedProduct {
            product: product.clone(),
            stock: self.stock.get(&id).copied().unwrap_or(0),
        })
    }

    /// Case-insensitive substring search on product names, ordered by id.
    ///
    /// `needle` must already be lowercase.
    pub fn search_by_name(&self, needle: &str) -> Vec<StockedProduct> {
        self.products
            .values()
            .filter(|p| p.name_contains(needle))
            .filter_map(|p| self.stocked(p.id))
            .collect()
    }

    /// Known categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// Products in a category in insertion order, with stock.
    pub fn products_in(&self, category: &str) -> Vec<StockedProduct> {
        self.categories
            .get(category)
            .map(|ids| ids.iter().filter_map(|id| self.stocked(*id)).collect())
            .unwrap_or_default()
    }

    pub fn in_category(&self, category: &str, id: ProductId) -> bool {
        self.categories
            .get(category)
            .is_some_and(|ids| ids.contains(&id))
    }

    /// Every stock entry ordered by product id.
    pub fn stock_levels(&self) -> Vec<StockedProduct> {
        self.stock.keys().filter_map(|id| self.stocked(*id)).collect()
    }

    /// Takes `qty` units out of stock. Caller has validated `qty <= stock`.
    pub(crate) fn reserve(&mut self, id: ProductId, qty: u32) -> CoreResult<u32> {
        let level = self.stock.get_mut(&id).ok_or(CoreError::ProductNotFound(id))?;
        if qty > *level {
            return Err(CoreError::InvalidQuantity {
                requested: i64::from(qty),
                available: *level,
            });
        }
        *level -= qty;
        Ok(*level)
    }

    /// Returns `qty` units to stock. No-op for products no longer listed.
    pub(crate) fn release(&mut self, id: ProductId, qty: u32) -> Option<u32> {
        let level = self.stock.get_mut(&id)?;
        *level = level.saturating_add(qty);
        Some(*level)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
