//! Catalog types

use serde::{Deserialize, Serialize};

/// Shape of records read from a product index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductMode {
    /// Fields carried by the index entry only
    #[default]
    Summary,
    /// Index entry joined with its detail document, one request per entry
    Enriched,
}

impl From<bool> for ProductMode {
    fn from(enrich: bool) -> Self {
        if enrich {
            Self::Enriched
        } else {
            Self::Summary
        }
    }
}

/// Remote list documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    /// Full product index
    AllProducts,
    /// Daily product index
    UpdatedProducts,
    Categories,
    Suppliers,
}

impl FeedKind {
    /// Name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllProducts => "products",
            Self::UpdatedProducts => "updated products",
            Self::Categories => "categories",
            Self::Suppliers => "suppliers",
        }
    }

    /// Element path from the document root to the list, for reference lists
    pub fn list_path(&self) -> &'static [&'static str] {
        match self {
            Self::Categories => &["Response", "CategoriesList"],
            Self::Suppliers => &["Response", "SuppliersList"],
            Self::AllProducts | Self::UpdatedProducts => &[],
        }
    }

    /// Tag of one list entry
    pub fn entry_tag(&self) -> &'static str {
        match self {
            Self::AllProducts | Self::UpdatedProducts => "file",
            Self::Categories => "Category",
            Self::Suppliers => "Supplier",
        }
    }
}
