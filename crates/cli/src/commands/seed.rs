//! Database seeding commands.

use rust_decimal::Decimal;

use vetaris_server::db::products::ProductRepository;
use vetaris_server::db::schema::init_schema;
use vetaris_server::models::product::NewProduct;

use super::CliError;

/// Insert the starter catalog.
///
/// Runs schema initialization first, then refuses to touch a catalog that
/// already has products, so re-running is harmless.
///
/// # Errors
///
/// Returns `CliError` if a query fails.
pub async fn products() -> Result<(), CliError> {
    let pool = super::connect().await?;
    init_schema(&pool).await?;

    let repo = ProductRepository::new(&pool);

    let existing = repo.list(true).await?;
    if !existing.is_empty() {
        tracing::warn!(
            count = existing.len(),
            "catalog already has products, skipping seed"
        );
        return Ok(());
    }

    for product in starter_catalog() {
        let created = repo.create(product).await?;
        tracing::info!(product_id = %created.id, name = %created.name, "created");
    }

    tracing::info!("seeding complete");
    Ok(())
}

/// The launch catalog.
fn starter_catalog() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Vetaris Formül A".to_owned(),
            price: Decimal::new(45000, 2),
            image: Some("/images/formula-a.jpg".to_owned()),
            description: Some(
                "Eklem sağlığı ve hareketlilik için özel formül. Glukozamin ve Kondroitin içerir."
                    .to_owned(),
            ),
            category: Some("Takviye".to_owned()),
            stock: Some(100),
        },
        NewProduct {
            name: "Vetaris Formül B".to_owned(),
            price: Decimal::new(38000, 2),
            image: Some("/images/formula-b.jpg".to_owned()),
            description: Some(
                "Tüy ve deri sağlığı için biotin ve çinko destekli formül.".to_owned(),
            ),
            category: Some("Bakım".to_owned()),
            stock: Some(150),
        },
        NewProduct {
            name: "Vetaris Bakım Spreyi".to_owned(),
            price: Decimal::new(12000, 2),
            image: Some("/images/spray.jpg".to_owned()),
            description: Some(
                "Pati ve tüy temizliği için doğal içerikli bakım spreyi.".to_owned(),
            ),
            category: Some("Hijyen".to_owned()),
            stock: Some(200),
        },
    ]
}
