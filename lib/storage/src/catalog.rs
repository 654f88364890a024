use rekom_core::{RawDocument, Result};

/// Read side of the product catalog.
///
/// The catalog itself is owned elsewhere (typically a relational store
/// behind another service); the recommender only ever lists it in full,
/// since every sync is a complete recompute. Every returned product
/// carries an id and a description - the description may be empty, but
/// never absent.
pub trait CatalogReader {
    fn list_all_products(&self) -> Result<Vec<RawDocument>>;
}

impl<T: CatalogReader + ?Sized> CatalogReader for std::sync::Arc<T> {
    fn list_all_products(&self) -> Result<Vec<RawDocument>> {
        (**self).list_all_products()
    }
}

/// Catalog held in memory, for tests and embedded use.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<RawDocument>,
}

impl InMemoryCatalog {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_products(products: Vec<RawDocument>) -> Self {
        Self { products }
    }

    pub fn push(&mut self, product: RawDocument) {
        self.products.push(product);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogReader for InMemoryCatalog {
    fn list_all_products(&self) -> Result<Vec<RawDocument>> {
        Ok(self.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_product() {
        let mut catalog = InMemoryCatalog::new();
        catalog.push(RawDocument::new(1, "Tas kulit sapi, ideal untuk kerja."));
        catalog.push(RawDocument::new(2, ""));
        let products = catalog.list_all_products().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].description, "");
    }
}
