//! Tests for record mapping

use super::*;
use crate::types::Attributes;
use crate::xml::Element;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn attrs(pairs: &[(&str, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn file_entry() -> Attributes {
    attrs(&[
        ("path", "export/level4/EN/1234.xml"),
        ("Product_ID", "1234"),
        ("Prod_ID", "ABC-1"),
        ("Model_Name", "ThinkPad X1"),
        ("Catid", "151"),
        ("Supplier_id", "7"),
        ("Updated", "20240101"),
    ])
}

// ============================================================================
// Products
// ============================================================================

#[test]
fn test_product_summary_fields() {
    let summary = map_product_summary(&file_entry()).unwrap();

    assert_eq!(
        summary,
        ProductSummary {
            id: "1234".to_string(),
            prod_id: Some("ABC-1".to_string()),
            name: Some("ThinkPad X1".to_string()),
            category_id: Some("151".to_string()),
            supplier_id: Some("7".to_string()),
        }
    );

    // Only the five lightweight fields are delivered
    assert_eq!(
        serde_json::to_value(&summary).unwrap(),
        json!({
            "ID": "1234",
            "PROD_ID": "ABC-1",
            "NAME": "ThinkPad X1",
            "CATEGORY_ID": "151",
            "SUPPLIER_ID": "7"
        })
    );
}

#[test]
fn test_product_summary_requires_id() {
    let mut entry = file_entry();
    entry.remove("Product_ID");
    assert!(map_product_summary(&entry).is_none());

    let sparse = attrs(&[("Product_ID", "9")]);
    let summary = map_product_summary(&sparse).unwrap();
    assert_eq!(summary.name, None);
    assert_eq!(summary.category_id, None);
}

#[test]
fn test_enriched_taxonomy_comes_from_index() {
    let detail = attrs(&[
        ("ID", "1234"),
        ("NAME", "ThinkPad X1 Carbon"),
        ("CATEGORY_ID", "999"),
        ("SUPPLIER_ID", "888"),
    ]);

    let product = merge_enriched(&file_entry(), detail);

    assert_eq!(product.category_id.as_deref(), Some("151"));
    assert_eq!(product.supplier_id.as_deref(), Some("7"));
    assert!(!product.detail.contains_key("CATEGORY_ID"));
    assert_eq!(
        serde_json::to_value(&product).unwrap(),
        json!({
            "ID": "1234",
            "NAME": "ThinkPad X1 Carbon",
            "CATEGORY_ID": "151",
            "SUPPLIER_ID": "7"
        })
    );
}

#[test]
fn test_enriched_without_index_taxonomy() {
    let entry = attrs(&[("path", "p.xml")]);
    let detail = attrs(&[("CATEGORY_ID", "999")]);

    let product = merge_enriched(&entry, detail);
    assert_eq!(product.category_id, None);
    assert!(product.detail.is_empty());
}

#[test]
fn test_fold_case() {
    let folded = fold_case(attrs(&[("Prod_id", "X"), ("Category_ID", "5")]));
    assert_eq!(folded, attrs(&[("PROD_ID", "X"), ("CATEGORY_ID", "5")]));
}

#[test]
fn test_product_detail_variants() {
    let xml = ProductDetail::Xml(attrs(&[("ID", "1")]));
    assert_eq!(xml.attributes().unwrap()["ID"], "1");
    assert_eq!(xml.to_json().unwrap(), json!({"ID": "1"}));

    let body = ProductDetail::Json(r#"{"data":{"GeneralInfo":{}}}"#.to_string());
    assert!(body.attributes().is_none());
    assert!(body.to_json().unwrap()["data"].is_object());

    let broken = ProductDetail::Json("<html>".to_string());
    assert!(broken.to_json().unwrap_err().is_malformed());
}

// ============================================================================
// Reference lists
// ============================================================================

fn category(id: &str, name: Option<&str>) -> Element {
    let entry = Element::new("Category").with_attr("ID", id);
    match name {
        Some(value) => entry.with_child(
            Element::new("Name")
                .with_attr("Value", value)
                .with_attr("langid", "1"),
        ),
        None => entry,
    }
}

#[test]
fn test_map_category() {
    assert_eq!(
        map_category(&category("2", Some("Laptops"))),
        Some(Category {
            id: 2,
            name: "Laptops".to_string(),
        })
    );
}

#[test]
fn test_map_category_uses_first_name() {
    let entry = category("3", Some("Notebooks"))
        .with_child(Element::new("Name").with_attr("Value", "Ordinateurs"));
    assert_eq!(map_category(&entry).unwrap().name, "Notebooks");
}

#[test_case(category("1", None) ; "no localized name")]
#[test_case(Element::new("Category").with_attr("ID", "1").with_child(Element::new("Name")) ; "name without value")]
#[test_case(category("abc", Some("Laptops")) ; "non numeric id")]
#[test_case(Element::new("Category").with_child(Element::new("Name").with_attr("Value", "X")) ; "missing id")]
fn test_map_category_skips(entry: Element) {
    assert_eq!(map_category(&entry), None);
}

#[test]
fn test_map_supplier() {
    let entry = Element::new("Supplier")
        .with_attr("ID", "7")
        .with_attr("Name", "Lenovo")
        .with_attr("LogoPic", "http://img/7.jpg")
        .with_attr("LogoLowPic", "http://img/7-low.jpg")
        .with_attr("LogoHighPic", "http://img/7-high.jpg")
        .with_attr("LogoOriginal", "http://img/7-orig.jpg");

    let supplier = map_supplier(&entry).unwrap();
    assert_eq!(
        serde_json::to_value(&supplier).unwrap(),
        json!({
            "ID": 7,
            "NAME": "Lenovo",
            "LOGOPIC": "http://img/7.jpg",
            "LOGOLOWPIC": "http://img/7-low.jpg",
            "LOGOHIGHPIC": "http://img/7-high.jpg",
            "LOGOORIGINAL": "http://img/7-orig.jpg"
        })
    );
}

#[test]
fn test_map_supplier_optional_logos() {
    let entry = Element::new("Supplier")
        .with_attr("ID", "8")
        .with_attr("Name", "Acme");
    let supplier = map_supplier(&entry).unwrap();
    assert_eq!(supplier.logo_pic, None);
    assert_eq!(supplier.logo_original, None);

    assert!(map_supplier(&Element::new("Supplier").with_attr("ID", "8")).is_none());
}
