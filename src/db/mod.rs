pub mod load;
pub mod migrate;
pub mod shops;

pub use load::load_world;
pub use migrate::migrate;
pub use shops::regenerate_shop_inventory;

use sqlx::PgPool;

use crate::error::GenError;
use crate::worldgen::{self, WorldGenConfig};

/// Generate a world and persist it in one call. The caller receives either
/// a valid world id or an error; a failure anywhere rolls the transaction
/// back, so there is no partial-success outcome.
pub async fn create_world(pool: &PgPool, config: &WorldGenConfig) -> Result<i64, GenError> {
    let world = worldgen::generate_world(config)?;
    let world_id = load_world(pool, &world).await?;
    Ok(world_id)
}
