use cutsel_catalog::{BreakerRow, MaterialRow};

pub fn print_breakers(rows: &[BreakerRow]) {
    if rows.is_empty() {
        println!("No breaker candidates.");
        return;
    }
    println!("Breaker candidates ({}):", rows.len());
    for row in rows {
        println!(
            "  #{} {} [{}] depth {}-{} (rec {}), feed {}-{} (rec {})",
            row.id,
            row.name,
            row.process_type,
            row.depth_of_cut.min,
            row.depth_of_cut.max,
            row.depth_of_cut.recommended,
            row.feed_rate.min,
            row.feed_rate.max,
            row.feed_rate.recommended,
        );
    }
}

pub fn print_materials(rows: &[MaterialRow]) {
    if rows.is_empty() {
        println!("No material candidates.");
        return;
    }
    println!("Material candidates ({}):", rows.len());
    for row in rows {
        println!(
            "  #{} {} [{}] priority {}, speed {}-{} (rec {})",
            row.id,
            row.name,
            row.process_type,
            row.final_priority,
            row.cutting_speed.min,
            row.cutting_speed.max,
            row.cutting_speed.recommended,
        );
    }
}
