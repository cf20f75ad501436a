use anyhow::{Context, Result};
use cutsel_catalog::{Band, BreakerRow, CatalogStore, MaterialRow, ProcessType};
use serde::Deserialize;
use std::path::Path;

/// Column layout of the breakers CSV, one-to-one with the stored schema.
#[derive(Debug, Deserialize)]
struct BreakerRecord {
    id: i64,
    name: String,
    process_type: String,
    depth_min: f64,
    depth_recommended: f64,
    depth_max: f64,
    feed_min: f64,
    feed_recommended: f64,
    feed_max: f64,
}

#[derive(Debug, Deserialize)]
struct MaterialRecord {
    id: i64,
    name: String,
    process_type: String,
    final_priority: String,
    speed_min: f64,
    speed_recommended: f64,
    speed_max: f64,
}

/// Drop and recreate both tables, then load every record in file order.
/// Mirrors the original importer: a full rebuild, never a merge.
pub fn run(store: &CatalogStore, breakers_csv: &Path, materials_csv: &Path) -> Result<()> {
    let breakers = read_breakers(breakers_csv)
        .with_context(|| format!("reading breakers from {breakers_csv:?}"))?;
    let materials = read_materials(materials_csv)
        .with_context(|| format!("reading materials from {materials_csv:?}"))?;

    store.create()?;
    store.insert_breakers(&breakers)?;
    store.insert_materials(&materials)?;

    println!(
        "Imported {} breakers and {} materials into {:?}",
        breakers.len(),
        materials.len(),
        store.path()
    );
    Ok(())
}

fn read_breakers(path: &Path) -> Result<Vec<BreakerRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let rec: BreakerRecord = record?;
        let process_type: ProcessType = rec
            .process_type
            .parse()
            .with_context(|| format!("breaker row id={}", rec.id))?;
        rows.push(BreakerRow {
            id: rec.id,
            name: rec.name,
            process_type,
            depth_of_cut: Band::new(rec.depth_min, rec.depth_recommended, rec.depth_max),
            feed_rate: Band::new(rec.feed_min, rec.feed_recommended, rec.feed_max),
        });
    }
    Ok(rows)
}

fn read_materials(path: &Path) -> Result<Vec<MaterialRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let rec: MaterialRecord = record?;
        let process_type: ProcessType = rec
            .process_type
            .parse()
            .with_context(|| format!("material row id={}", rec.id))?;
        rows.push(MaterialRow {
            id: rec.id,
            name: rec.name,
            process_type,
            final_priority: rec.final_priority,
            cutting_speed: Band::new(rec.speed_min, rec.speed_recommended, rec.speed_max),
        });
    }
    Ok(rows)
}
