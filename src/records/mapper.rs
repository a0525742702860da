//! Entry to record mapping

use super::types::{Category, EnrichedProduct, ProductSummary, Supplier};
use crate::types::Attributes;
use crate::xml::Element;

/// Detail field replaced by the index entry's `Catid`
pub const CATEGORY_ID: &str = "CATEGORY_ID";
/// Detail field replaced by the index entry's `Supplier_id`
pub const SUPPLIER_ID: &str = "SUPPLIER_ID";

/// Lightweight product record; `None` without a `Product_ID`
pub fn map_product_summary(entry: &Attributes) -> Option<ProductSummary> {
    Some(ProductSummary {
        id: entry.get("Product_ID")?.clone(),
        prod_id: entry.get("Prod_ID").cloned(),
        name: entry.get("Model_Name").cloned(),
        category_id: entry.get("Catid").cloned(),
        supplier_id: entry.get("Supplier_id").cloned(),
    })
}

/// Join detail attributes with the index entry's taxonomy links.
///
/// The index entry always wins for `CATEGORY_ID` and `SUPPLIER_ID`.
pub fn merge_enriched(entry: &Attributes, mut detail: Attributes) -> EnrichedProduct {
    detail.remove(CATEGORY_ID);
    detail.remove(SUPPLIER_ID);
    EnrichedProduct {
        detail,
        category_id: entry.get("Catid").cloned(),
        supplier_id: entry.get("Supplier_id").cloned(),
    }
}

/// Upper-case every attribute name
pub fn fold_case(attributes: Attributes) -> Attributes {
    attributes
        .into_iter()
        .map(|(key, value)| (key.to_uppercase(), value))
        .collect()
}

/// Category record; `None` without a numeric `ID` or a localized `Name/@Value`
pub fn map_category(entry: &Element) -> Option<Category> {
    let id = parse_id(entry)?;
    let name = entry.child("Name")?.attr("Value")?;
    Some(Category {
        id,
        name: name.to_string(),
    })
}

/// Supplier record; `None` without a numeric `ID` or a `Name`
pub fn map_supplier(entry: &Element) -> Option<Supplier> {
    let logo = |key: &str| entry.attr(key).map(str::to_string);
    Some(Supplier {
        id: parse_id(entry)?,
        name: entry.attr("Name")?.to_string(),
        logo_pic: logo("LogoPic"),
        logo_low_pic: logo("LogoLowPic"),
        logo_high_pic: logo("LogoHighPic"),
        logo_original: logo("LogoOriginal"),
    })
}

fn parse_id(entry: &Element) -> Option<u64> {
    entry.attr("ID")?.trim().parse().ok()
}
