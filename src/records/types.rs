//! Record types
//!
//! Field names serialize in upper case, the shape callers of the catalog
//! feeds expect.

use crate::error::Result;
use crate::types::{Attributes, JsonValue};
use serde::Serialize;

/// Lightweight product record built from one index `file` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSummary {
    /// Icecat product id (`Product_ID`)
    #[serde(rename = "ID")]
    pub id: String,
    /// Manufacturer part number (`Prod_ID`)
    #[serde(rename = "PROD_ID")]
    pub prod_id: Option<String>,
    /// Model name (`Model_Name`)
    #[serde(rename = "NAME")]
    pub name: Option<String>,
    /// Category id (`Catid`)
    #[serde(rename = "CATEGORY_ID")]
    pub category_id: Option<String>,
    /// Supplier id (`Supplier_id`)
    #[serde(rename = "SUPPLIER_ID")]
    pub supplier_id: Option<String>,
}

/// A single product's detail record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProductDetail {
    /// Attributes of the `Product` element of an XML detail document,
    /// names folded to upper case
    Xml(Attributes),
    /// Raw body of the JSON API, passed through untouched
    Json(String),
}

impl ProductDetail {
    /// Detail attributes, for XML details
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Self::Xml(attributes) => Some(attributes),
            Self::Json(_) => None,
        }
    }

    /// Parse a JSON body
    pub fn to_json(&self) -> Result<JsonValue> {
        match self {
            Self::Xml(attributes) => Ok(serde_json::to_value(attributes)?),
            Self::Json(body) => Ok(serde_json::from_str(body)?),
        }
    }
}

/// Detail attributes joined with the taxonomy links of the index entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedProduct {
    /// Detail attributes, without `CATEGORY_ID` and `SUPPLIER_ID`
    #[serde(flatten)]
    pub detail: Attributes,
    /// Category id from the index entry
    #[serde(rename = "CATEGORY_ID")]
    pub category_id: Option<String>,
    /// Supplier id from the index entry
    #[serde(rename = "SUPPLIER_ID")]
    pub supplier_id: Option<String>,
}

/// A record of either product feed mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProductRecord {
    Summary(ProductSummary),
    Enriched(EnrichedProduct),
}

impl ProductRecord {
    /// Category id linked by the index entry
    pub fn category_id(&self) -> Option<&str> {
        match self {
            Self::Summary(p) => p.category_id.as_deref(),
            Self::Enriched(p) => p.category_id.as_deref(),
        }
    }

    /// Supplier id linked by the index entry
    pub fn supplier_id(&self) -> Option<&str> {
        match self {
            Self::Summary(p) => p.supplier_id.as_deref(),
            Self::Enriched(p) => p.supplier_id.as_deref(),
        }
    }
}

/// Category reference record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    #[serde(rename = "ID")]
    pub id: u64,
    /// First localized name
    #[serde(rename = "NAME")]
    pub name: String,
}

/// Supplier reference record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Supplier {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "LOGOPIC")]
    pub logo_pic: Option<String>,
    #[serde(rename = "LOGOLOWPIC")]
    pub logo_low_pic: Option<String>,
    #[serde(rename = "LOGOHIGHPIC")]
    pub logo_high_pic: Option<String>,
    #[serde(rename = "LOGOORIGINAL")]
    pub logo_original: Option<String>,
}
