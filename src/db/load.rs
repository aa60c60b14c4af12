use sqlx::{PgPool, Postgres, Transaction};

use crate::model::World;

/// Load an entire generated `World` into Postgres using COPY FROM STDIN
/// (text format), all inside one transaction. A failure at any point rolls
/// everything back so no partial world is ever visible to readers.
///
/// The world row is inserted first so its fresh id prefixes every child row.
/// Order respects FK constraints: locations → connections → buildings →
/// rooms → networks → characters → devices → puzzles → missions →
/// objectives → stories → items → shops → shop_inventory.
///
/// Returns the allocated world id.
pub async fn load_world(pool: &PgPool, world: &World) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let world_id: i64 = sqlx::query_scalar(
        "INSERT INTO worlds (name, seed, complexity, author) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(&world.meta.name)
    .bind(world.meta.seed as i64)
    .bind(world.meta.complexity as i16)
    .bind(world.meta.author.as_deref())
    .fetch_one(&mut *tx)
    .await?;

    // Locations (parents precede children because districts are created
    // after their city and ids are monotonic)
    {
        let mut buf = String::new();
        for l in world.locations.values() {
            buf.push_str(&format!(
                "{world_id}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                l.id,
                escape(&l.name),
                l.x,
                l.y,
                l.security_level,
                l.population,
                escape(&l.services.join(",")),
                escape(&l.tags.join(",")),
                opt_str(l.archetype.map(|a| a.as_str())),
                opt_u64(l.parent_location_id),
                bool_t(l.is_virtual),
                bool_t(l.is_special),
                bool_t(l.is_dangerous),
            ));
        }
        copy_in(&mut tx, include_str!("../../sql/copy_locations.sql"), &buf).await?;
    }

    // Connections
    {
        let mut buf = String::new();
        for c in &world.connections {
            buf.push_str(&format!(
                "{world_id}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                c.source_id,
                c.destination_id,
                c.transport.as_str(),
                c.travel_time,
                c.travel_cost,
                bool_t(c.requires_hacking),
                bool_t(c.requires_special_access),
            ));
        }
        copy_in(&mut tx, include_str!("../../sql/copy_connections.sql"), &buf).await?;
    }

    // Buildings
    {
        let mut buf = String::new();
        for b in world.buildings.values() {
            buf.push_str(&format!(
                "{world_id}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                b.id,
                b.location_id,
                b.building_type.as_str(),
                b.floors,
                b.security_level,
                escape(&b.owner),
                escape(&b.services.join(",")),
                bool_t(b.requires_special_access),
                bool_t(b.requires_hacking),
            ));
        }
        copy_in(&mut tx, include_str!("../../sql/copy_buildings.sql"), &buf).await?;
    }

    // Rooms
    {
        let mut buf = String::new();
        for r in world.rooms.values() {
            buf.push_str(&format!(
                "{world_id}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                r.id,
                r.building_id,
                r.floor,
                escape(&r.room_type),
                bool_t(r.is_locked),
                bool_t(r.is_hackable),
            ));
        }
        copy_in(&mut tx, include_str!("../../sql/copy_rooms.sql"), &buf).await?;
    }

    // Networks
    {
        let mut buf = String::new();
        for n in world.networks.values() {
            buf.push_str(&format!(
                "{world_id}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                n.id,
                n.building_id,
                n.network_type.as_str(),
                n.security_level,
                n.encryption.as_str(),
                bool_t(n.is_hidden),
                bool_t(n.requires_hacking),
            ));
        }
        copy_in(&mut tx, include_str!("../../sql/copy_networks.sql"), &buf).await?;
    }

    // Characters (before devices due to owner FK)
    {
        let mut buf = String::new();
        for c in world.characters.values() {
            buf.push_str(&format!(
                "{world_id}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                c.id,
                c.location_id,
                escape(&c.name),
                escape(&c.profession),
                escape(&c.faction),
                c.traits.importance,
                c.traits.hacking,
                c.traits.combat,
                c.traits.charisma,
                c.traits.wealth,
            ));
        }
        copy_in(&mut tx, include_str!("../../sql/copy_characters.sql"), &buf).await?;
    }

    // Devices
    {
        let mut buf = String::new();
        for d in world.devices.values() {
            buf.push_str(&format!(
                "{world_id}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                d.id,
                d.location_id,
                opt_u64(d.building_id),
                opt_u64(d.owner_id),
                d.device_type.as_str(),
                escape(&d.os),
                d.security_level,
                escape(&d.ip_address),
            ));
        }
        copy_in(&mut tx, include_str!("../../sql/copy_devices.sql"), &buf).await?;
    }

    // Hacking puzzles
    {
        let mut buf = String::new();
        for p in world.puzzles.values() {
            buf.push_str(&format!(
                "{world_id}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                p.id,
                p.target.kind_str(),
                p.target.target_id(),
                p.puzzle_type.as_str(),
                p.difficulty,
                p.reward_credits,
                bool_t(p.reward_data),
            ));
        }
        copy_in(&mut tx, include_str!("../../sql/copy_hacking_puzzles.sql"), &buf).await?;
    }

    // Missions
    {
        let mut buf = String::new();
        for m in world.missions.values() {
            buf.push_str(&format!(
                "{world_id}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                m.id,
                m.mission_type.as_str(),
                m.difficulty,
                m.giver_id,
                m.location_id,
                m.reward.credits,
                m.reward.street_cred,
                bool_t(m.reward.includes_item),
                bool_t(m.is_main_quest),
                bool_t(m.is_repeatable),
                bool_t(m.is_hidden),
            ));
        }
        copy_in(&mut tx, include_str!("../../sql/copy_missions.sql"), &buf).await?;
    }

    // Objectives
    {
        let mut buf = String::new();
        for o in &world.objectives {
            buf.push_str(&format!(
                "{world_id}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                o.id,
                o.mission_id,
                o.order_index,
                o.objective_type.as_str(),
                escape(&o.target),
                bool_t(o.optional),
            ));
        }
        copy_in(&mut tx, include_str!("../../sql/copy_objectives.sql"), &buf).await?;
    }

    // Story elements
    {
        let mut buf = String::new();
        for s in world.stories.values() {
            buf.push_str(&format!(
                "{world_id}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                s.id,
                escape(&s.text),
                opt_u64(s.location_id),
                opt_u64(s.character_id),
                opt_u64(s.mission_id),
                bool_t(s.revealed_by_default),
                opt_str(s.reveal_condition.as_deref()),
            ));
        }
        copy_in(&mut tx, include_str!("../../sql/copy_story_elements.sql"), &buf).await?;
    }

    // Items
    {
        let mut buf = String::new();
        for i in world.items.values() {
            let stats = serde_json::to_string(&i.stats).expect("stat map serializes");
            buf.push_str(&format!(
                "{world_id}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                i.id,
                i.family.as_str(),
                escape(&i.item_type),
                escape(&i.name),
                i.rarity.as_str(),
                i.level,
                escape(&stats),
                i.price,
                bool_t(i.is_illegal),
                i.placement.kind_str(),
                opt_u64(i.placement.ref_id()),
            ));
        }
        copy_in(&mut tx, include_str!("../../sql/copy_items.sql"), &buf).await?;
    }

    // Shops
    {
        let mut buf = String::new();
        for s in world.shops.values() {
            buf.push_str(&format!(
                "{world_id}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                s.id,
                s.location_id,
                opt_u64(s.building_id),
                escape(&s.shop_type),
                bool_t(s.is_legal),
                s.reputation,
                s.price_modifier,
            ));
        }
        copy_in(&mut tx, include_str!("../../sql/copy_shops.sql"), &buf).await?;
    }

    // Shop inventory
    {
        let mut buf = String::new();
        for e in &world.shop_inventory {
            buf.push_str(&format!(
                "{world_id}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                e.shop_id,
                e.item_id,
                e.family.as_str(),
                e.quantity,
                e.price_modifier,
                bool_t(e.is_featured),
                bool_t(e.is_limited_time),
                opt_u32(e.expires_in_hours),
            ));
        }
        copy_in(&mut tx, include_str!("../../sql/copy_shop_inventory.sql"), &buf).await?;
    }

    tx.commit().await?;
    Ok(world_id)
}

/// Execute a COPY FROM STDIN with the given text-format payload on the
/// open transaction.
async fn copy_in(
    tx: &mut Transaction<'_, Postgres>,
    statement: &str,
    data: &str,
) -> Result<(), sqlx::Error> {
    let mut copy = (&mut **tx).copy_in_raw(statement).await?;
    copy.send(data.as_bytes()).await?;
    copy.finish().await?;
    Ok(())
}

/// Escape a string for Postgres COPY text format.
/// Backslash must be escaped first, then the special whitespace characters.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Render an optional id as a COPY text value (`\N` for NULL).
fn opt_u64(v: Option<u64>) -> String {
    match v {
        Some(n) => n.to_string(),
        None => "\\N".to_string(),
    }
}

fn opt_u32(v: Option<u32>) -> String {
    match v {
        Some(n) => n.to_string(),
        None => "\\N".to_string(),
    }
}

fn opt_str(v: Option<&str>) -> String {
    match v {
        Some(s) => escape(s),
        None => "\\N".to_string(),
    }
}

fn bool_t(b: bool) -> &'static str {
    if b { "t" } else { "f" }
}
