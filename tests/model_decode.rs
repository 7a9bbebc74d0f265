use muebleria_catalog::models::{Product, ProductType};

// Decoding matches what real backends ship: ids as numbers or strings,
// stock as numeric strings, prices missing or null, sparse payloads.
#[test]
fn lenient_product_decode() -> anyhow::Result<()> {
    let raw = r#"{
        "id": 42,
        "name": "Silla Eames",
        "sku": "SE-01",
        "slug": "silla-eames",
        "base_price": "249.90",
        "stock": "12",
        "type": "SIMPLE",
        "categories": [{ "id": 3, "name": "Sillas", "slug": "sillas" }],
        "images": [{ "id": "img-1", "url": "eames.jpg", "is_primary": true }],
        "attributes": [{ "name": "Material", "value": "Madera" }],
        "is_active": true,
        "created_at": "2025-02-10T09:30:00Z",
        "sales_count": 17
    }"#;

    let product: Product = serde_json::from_str(raw)?;
    assert_eq!(product.id, "42");
    assert_eq!(product.base_price, Some(249.90));
    assert_eq!(product.stock, 12);
    assert_eq!(product.product_type, ProductType::Simple);
    assert_eq!(product.categories[0].id, "3");
    assert!(product.is_live());
    Ok(())
}

#[test]
fn sparse_payload_gets_defaults() -> anyhow::Result<()> {
    let raw = r#"{ "id": "p9", "name": "Banco minimal" }"#;
    let product: Product = serde_json::from_str(raw)?;

    assert_eq!(product.base_price, None);
    assert_eq!(product.stock, 0);
    assert_eq!(product.product_type, ProductType::Simple);
    assert!(product.variants.is_empty());
    assert!(product.is_active, "missing is_active defaults to live");
    assert_eq!(product.deleted_at, None);
    Ok(())
}

#[test]
fn unparseable_stock_coerces_to_zero() -> anyhow::Result<()> {
    let raw = r#"{ "id": "p1", "name": "Raro", "stock": "muchos", "base_price": "gratis" }"#;
    let product: Product = serde_json::from_str(raw)?;
    assert_eq!(product.stock, 0);
    assert_eq!(product.base_price, None);
    Ok(())
}

#[test]
fn variable_product_with_variants_decodes() -> anyhow::Result<()> {
    let raw = r#"{
        "id": "p2",
        "name": "Sofá modular",
        "type": "VARIABLE",
        "variants": [
            {
                "id": 7,
                "product_id": "p2",
                "sku_suffix": "IZQ",
                "price": 1199.0,
                "stock": "3",
                "min_stock": 1,
                "is_active": true,
                "attributes": { "Lado": "Izquierdo" }
            },
            { "id": 8, "price": "1249", "stock": 0, "is_active": false }
        ]
    }"#;

    let product: Product = serde_json::from_str(raw)?;
    assert_eq!(product.product_type, ProductType::Variable);
    assert_eq!(product.variants.len(), 2);
    assert_eq!(product.variants[0].id, "7");
    assert_eq!(product.variants[0].stock, 3);
    assert_eq!(product.variants[1].price, 1249.0);
    assert!(!product.variants[1].is_active);
    assert_eq!(product.active_variants().count(), 1);
    Ok(())
}

#[test]
fn soft_deleted_product_is_not_live() -> anyhow::Result<()> {
    let raw = r#"{
        "id": "p3",
        "name": "Retirado",
        "is_active": true,
        "deleted_at": "2025-01-01T00:00:00Z"
    }"#;
    let product: Product = serde_json::from_str(raw)?;
    assert!(!product.is_live());
    Ok(())
}
