//! 内存产品存储
//!
//! 集合由 `ProductStore` 持有并通过 `State` 注入处理器。写操作在同一个
//! 写锁内完成查找、校验和替换，并发请求不会看到交错的部分写入。

use std::sync::Arc;

use tokio::sync::RwLock;

use super::{
    model::{Product, ProductDraft, ProductQuery},
    query::{self, ProductPage},
};
use crate::core::error::CoreError;

#[derive(Clone, Default)]
pub struct ProductStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl ProductStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// 载入三条示例数据
    pub fn seeded() -> Self {
        Self::new(Product::samples())
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn query(&self, params: &ProductQuery) -> ProductPage {
        query::run(&self.products.read().await, params)
    }

    pub async fn get(&self, id: &str) -> Option<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// 追加到集合末尾
    pub async fn create(&self, draft: ProductDraft) -> Product {
        let product = Product::from_draft(draft);
        self.products.write().await.push(product.clone());
        product
    }

    pub async fn update(&self, id: &str, draft: ProductDraft) -> Result<Product, CoreError> {
        let mut products = self.products.write().await;
        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::NotFound("Product not found".to_string()))?;

        let updated = merge(slot, draft)?;
        *slot = updated.clone();
        Ok(updated)
    }

    /// 返回是否删除了记录
    pub async fn delete(&self, id: &str) -> bool {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        products.len() != before
    }
}

/// id 永远保留原值；价格只有在为正的有限数时才替换
fn merge(existing: &Product, draft: ProductDraft) -> Result<Product, CoreError> {
    let category = match draft.category {
        Some(c) if c.is_empty() => {
            return Err(CoreError::BadRequest(
                "Product category cannot be empty".to_string(),
            ))
        }
        Some(c) => c,
        None => existing.category.clone(),
    };

    let price = if draft.price.is_finite() && draft.price > 0.0 {
        draft.price
    } else {
        existing.price
    };

    Ok(Product {
        id: existing.id.clone(),
        name: draft.name,
        description: draft
            .description
            .unwrap_or_else(|| existing.description.clone()),
        price,
        category,
        in_stock: draft.in_stock.unwrap_or(existing.in_stock),
    })
}
