use rand::SeedableRng;
use rand::rngs::SmallRng;
use sqlx::PgPool;
use sqlx::Row;

use crate::error::GenError;
use crate::id::IdGenerator;
use crate::model::{Shop, World, WorldMeta};
use crate::worldgen::{seed, shops};

/// Regenerate one shop's inventory in isolation: read the shop row back,
/// clear its existing inventory rows, generate a fresh inventory, and
/// commit, all in one transaction. Existing item rows are left in place;
/// only the inventory is replaced.
///
/// Pass a seed to make the restock reproducible; `None` draws one.
/// Returns the number of inventory entries created.
pub async fn regenerate_shop_inventory(
    pool: &PgPool,
    world_id: i64,
    shop_id: u64,
    restock_seed: Option<u64>,
) -> Result<u32, GenError> {
    let mut tx = pool.begin().await.map_err(GenError::Storage)?;

    let row = sqlx::query(
        "SELECT location_id, building_id, shop_type, is_legal, reputation, price_modifier \
         FROM shops WHERE world_id = $1 AND id = $2",
    )
    .bind(world_id)
    .bind(shop_id as i64)
    .fetch_optional(&mut *tx)
    .await
    .map_err(GenError::Storage)?
    .ok_or(GenError::MissingReference {
        entity: "shop",
        id: shop_id,
    })?;

    let shop = Shop {
        id: shop_id,
        location_id: row.get::<i64, _>("location_id") as u64,
        building_id: row.get::<Option<i64>, _>("building_id").map(|v| v as u64),
        shop_type: row.get("shop_type"),
        is_legal: row.get("is_legal"),
        reputation: row.get::<i16, _>("reputation") as u8,
        price_modifier: row.get("price_modifier"),
    };

    let world_row = sqlx::query("SELECT name, seed, complexity, author FROM worlds WHERE id = $1")
        .bind(world_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(GenError::Storage)?
        .ok_or(GenError::MissingReference {
            entity: "world",
            id: world_id as u64,
        })?;

    // Fresh item ids continue above everything already persisted
    let max_item_id: i64 =
        sqlx::query_scalar("SELECT COALESCE(MAX(id), 0) FROM items WHERE world_id = $1")
            .bind(world_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(GenError::Storage)?;

    // Rebuild just enough of the world in memory to run the stocking pass.
    // The shop row is placed directly because its id is already allocated.
    let mut scratch = World::new(WorldMeta {
        name: world_row.get("name"),
        seed: world_row.get::<i64, _>("seed") as u64,
        complexity: world_row.get::<i16, _>("complexity") as u8,
        author: world_row.get("author"),
    });
    scratch.id_gen = IdGenerator::starting_from((max_item_id as u64).max(shop_id) + 1);
    scratch.shops.insert(shop_id, shop);

    let resolved = seed::resolve_seed(restock_seed);
    let mut rng: SmallRng = SmallRng::seed_from_u64(resolved);
    shops::stock_shop(&mut scratch, shop_id, &mut rng)?;

    sqlx::query("DELETE FROM shop_inventory WHERE world_id = $1 AND shop_id = $2")
        .bind(world_id)
        .bind(shop_id as i64)
        .execute(&mut *tx)
        .await
        .map_err(GenError::Storage)?;

    for item in scratch.items.values() {
        let stats = serde_json::to_string(&item.stats).expect("stat map serializes");
        sqlx::query(
            "INSERT INTO items (world_id, id, family, item_type, name, rarity, level, stats, \
             price, is_illegal, placement_kind, placement_ref) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8::jsonb, $9, $10, $11, $12)",
        )
        .bind(world_id)
        .bind(item.id as i64)
        .bind(item.family.as_str())
        .bind(&item.item_type)
        .bind(&item.name)
        .bind(item.rarity.as_str())
        .bind(item.level as i16)
        .bind(stats)
        .bind(item.price as i32)
        .bind(item.is_illegal)
        .bind(item.placement.kind_str())
        .bind(item.placement.ref_id().map(|v| v as i64))
        .execute(&mut *tx)
        .await
        .map_err(GenError::Storage)?;
    }

    let mut inserted = 0u32;
    for entry in &scratch.shop_inventory {
        sqlx::query(
            "INSERT INTO shop_inventory (world_id, shop_id, item_id, family, quantity, \
             price_modifier, is_featured, is_limited_time, expires_in_hours) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(world_id)
        .bind(entry.shop_id as i64)
        .bind(entry.item_id as i64)
        .bind(entry.family.as_str())
        .bind(entry.quantity as i32)
        .bind(entry.price_modifier)
        .bind(entry.is_featured)
        .bind(entry.is_limited_time)
        .bind(entry.expires_in_hours.map(|v| v as i32))
        .execute(&mut *tx)
        .await
        .map_err(GenError::Storage)?;
        inserted += 1;
    }

    tx.commit().await.map_err(GenError::Storage)?;
    Ok(inserted)
}
