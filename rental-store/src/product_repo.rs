use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};
use tracing::debug;

use rental_catalog::{
    Attribute, AttributeValue, PageRequest, Product, ProductFilter, ProductPricing, Region,
    RentalPeriod,
};
use rental_core::repository::{ProductPage, ProductRepository, RepositoryError};

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal structs for type-safe querying
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    description: String,
    sku: String,
}

#[derive(sqlx::FromRow)]
struct AttributeRow {
    id: i32,
    product_id: i32,
    name: String,
}

#[derive(sqlx::FromRow)]
struct AttributeValueRow {
    id: i32,
    attribute_id: i32,
    value: String,
}

#[derive(sqlx::FromRow)]
struct PricingRow {
    id: i32,
    product_id: i32,
    price: f64,
    rental_period_id: i32,
    duration_months: i32,
    region_id: i32,
    region_name: String,
}

/// Attach the optional filters as independent `EXISTS` predicates on the
/// aliased `products p`. Each product row appears once however many of its
/// pricing rows match.
fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    if let Some(region) = &filter.region {
        qb.push(
            " AND EXISTS (SELECT 1 FROM product_pricings pp \
             JOIN regions r ON r.id = pp.region_id \
             WHERE pp.product_id = p.id AND r.name = ",
        );
        qb.push_bind(region.clone());
        qb.push(")");
    }

    if let Some(months) = filter.rental_period {
        qb.push(
            " AND EXISTS (SELECT 1 FROM product_pricings pp \
             JOIN rental_periods rp ON rp.id = pp.rental_period_id \
             WHERE pp.product_id = p.id AND rp.duration_months = ",
        );
        qb.push_bind(months);
        qb.push(")");
    }
}

/// Load children for `rows` and assemble owned product graphs, preserving
/// the order of `rows`.
async fn load_graphs(
    conn: &mut PgConnection,
    rows: Vec<ProductRow>,
) -> Result<Vec<Product>, sqlx::Error> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let product_ids: Vec<i32> = rows.iter().map(|r| r.id).collect();

    let attribute_rows: Vec<AttributeRow> = sqlx::query_as(
        "SELECT id, product_id, name FROM attributes WHERE product_id = ANY($1) ORDER BY id",
    )
    .bind(&product_ids)
    .fetch_all(&mut *conn)
    .await?;

    let attribute_ids: Vec<i32> = attribute_rows.iter().map(|a| a.id).collect();
    let value_rows: Vec<AttributeValueRow> = if attribute_ids.is_empty() {
        Vec::new()
    } else {
        sqlx::query_as(
            "SELECT id, attribute_id, value FROM attribute_values WHERE attribute_id = ANY($1) ORDER BY id",
        )
        .bind(&attribute_ids)
        .fetch_all(&mut *conn)
        .await?
    };

    let pricing_rows: Vec<PricingRow> = sqlx::query_as(
        r#"
        SELECT pp.id, pp.product_id, pp.price,
               rp.id AS rental_period_id, rp.duration_months,
               r.id AS region_id, r.name AS region_name
        FROM product_pricings pp
        JOIN rental_periods rp ON rp.id = pp.rental_period_id
        JOIN regions r ON r.id = pp.region_id
        WHERE pp.product_id = ANY($1)
        ORDER BY pp.id
        "#,
    )
    .bind(&product_ids)
    .fetch_all(&mut *conn)
    .await?;

    let mut values: HashMap<i32, Vec<AttributeValue>> = HashMap::new();
    for row in value_rows {
        values.entry(row.attribute_id).or_default().push(AttributeValue {
            id: row.id,
            attribute_id: row.attribute_id,
            value: row.value,
        });
    }

    let mut attributes: HashMap<i32, Vec<Attribute>> = HashMap::new();
    for row in attribute_rows {
        attributes.entry(row.product_id).or_default().push(Attribute {
            id: row.id,
            product_id: row.product_id,
            name: row.name,
            values: values.remove(&row.id).unwrap_or_default(),
        });
    }

    let mut pricings: HashMap<i32, Vec<ProductPricing>> = HashMap::new();
    for row in pricing_rows {
        pricings.entry(row.product_id).or_default().push(ProductPricing {
            id: row.id,
            product_id: row.product_id,
            rental_period: RentalPeriod {
                id: row.rental_period_id,
                duration_months: row.duration_months,
            },
            region: Region {
                id: row.region_id,
                name: row.region_name,
            },
            price: row.price,
        });
    }

    Ok(rows
        .into_iter()
        .map(|row| Product {
            attributes: attributes.remove(&row.id).unwrap_or_default(),
            pricings: pricings.remove(&row.id).unwrap_or_default(),
            id: row.id,
            name: row.name,
            description: row.description,
            sku: row.sku,
        })
        .collect())
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_product(
        &self,
        id: i32,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION READ ONLY").execute(&mut *tx).await?;

        let row: Option<ProductRow> = sqlx::query_as(
            "SELECT id, name, description, sku FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let product = match row {
            Some(row) => load_graphs(&mut tx, vec![row]).await?.pop(),
            None => None,
        };

        tx.commit().await?;
        Ok(product)
    }

    async fn list_products(
        &self,
        filter: &ProductFilter,
        page: &PageRequest,
    ) -> Result<ProductPage, RepositoryError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION READ ONLY").execute(&mut *tx).await?;

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products p WHERE TRUE");
        push_filters(&mut count, filter);
        let total: i64 = count.build_query_scalar().fetch_one(&mut *tx).await?;

        let mut select = QueryBuilder::<Postgres>::new(
            "SELECT p.id, p.name, p.description, p.sku FROM products p WHERE TRUE",
        );
        push_filters(&mut select, filter);
        select.push(" ORDER BY p.id LIMIT ");
        select.push_bind(i64::try_from(page.limit()).unwrap_or(i64::MAX));
        select.push(" OFFSET ");
        select.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows: Vec<ProductRow> = select.build_query_as().fetch_all(&mut *tx).await?;
        debug!(total, page_rows = rows.len(), "Product listing query finished");

        let products = load_graphs(&mut tx, rows).await?;
        tx.commit().await?;

        Ok(ProductPage {
            products,
            total: total.max(0) as u64,
        })
    }
}
