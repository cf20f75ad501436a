use crate::premise::Premise;
use anyhow::Context;
use cutsel_catalog::{BreakerRow, MaterialRow};

/// Everything the system prompt embeds: the premise, the operator's raw
/// inputs exactly as entered, and both candidate sets from the engine.
pub struct PromptContext<'a> {
    pub premise: &'a Premise,
    pub depth_of_cut: &'a str,
    pub feed_rate: &'a str,
    pub cutting_speed: &'a str,
    pub process_type: &'a str,
    pub breakers: &'a [BreakerRow],
    pub materials: &'a [MaterialRow],
}

/// Assemble the system prompt handed to the chat backend together with the
/// transcript. Candidates are rendered as CSV so the assistant argues only
/// from rows the engine actually returned; the instructions forbid it from
/// excluding any listed candidate or inventing data that is not there.
pub fn build_system_prompt(ctx: &PromptContext<'_>) -> anyhow::Result<String> {
    let breaker_csv = breakers_csv(ctx.breakers)?;
    let material_csv = materials_csv(ctx.materials)?;

    let premise_title = if ctx.premise.title.is_empty() {
        "(no title)"
    } else {
        &ctx.premise.title
    };
    let premise_details = if ctx.premise.details.is_empty() {
        "(no details)"
    } else {
        &ctx.premise.details
    };

    Ok(format!(
        "You are an assistant specialized in metal cutting.\n\
         Answer strictly from the premise, the CSV data and the user's input \
         values below; never invent or fill in information that is not there, \
         and say so explicitly when something is unknown.\n\
         \n\
         [Premise]\n\
         Title: {premise_title}\n\
         Details: {premise_details}\n\
         \n\
         [User input]\n\
         - depth of cut (mm): {depth}\n\
         - feed rate (mm/rev): {feed}\n\
         - cutting speed (m/min): {speed}\n\
         - process type: {process}\n\
         \n\
         [Breaker candidates CSV]\n\
         {breaker_csv}\n\
         [Material candidates CSV]\n\
         {material_csv}\n\
         [Instructions]\n\
         1. Discuss the best breaker and material with the user, grounded in \
         the premise, the inputs and the CSV rows only.\n\
         2. List every candidate present in the CSV. Never exclude one; if a \
         value sits outside a recommended range, keep the candidate and \
         explain the trade-off instead.\n\
         3. Do not impose rules of your own such as 'the recommended speed \
         must not be exceeded'; ranges are advisory context, not grounds for \
         rejection.\n\
         4. Always relate your reasoning back to the premise.\n",
        depth = ctx.depth_of_cut,
        feed = ctx.feed_rate,
        speed = ctx.cutting_speed,
        process = ctx.process_type,
    ))
}

fn breakers_csv(rows: &[BreakerRow]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([
        "id",
        "name",
        "process_type",
        "depth_min",
        "depth_recommended",
        "depth_max",
        "feed_min",
        "feed_recommended",
        "feed_max",
    ])?;
    for row in rows {
        wtr.write_record([
            row.id.to_string(),
            row.name.clone(),
            row.process_type.to_string(),
            row.depth_of_cut.min.to_string(),
            row.depth_of_cut.recommended.to_string(),
            row.depth_of_cut.max.to_string(),
            row.feed_rate.min.to_string(),
            row.feed_rate.recommended.to_string(),
            row.feed_rate.max.to_string(),
        ])?;
    }
    finish(wtr)
}

fn materials_csv(rows: &[MaterialRow]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([
        "id",
        "name",
        "process_type",
        "final_priority",
        "speed_min",
        "speed_recommended",
        "speed_max",
    ])?;
    for row in rows {
        wtr.write_record([
            row.id.to_string(),
            row.name.clone(),
            row.process_type.to_string(),
            row.final_priority.clone(),
            row.cutting_speed.min.to_string(),
            row.cutting_speed.recommended.to_string(),
            row.cutting_speed.max.to_string(),
        ])?;
    }
    finish(wtr)
}

fn finish(wtr: csv::Writer<Vec<u8>>) -> anyhow::Result<String> {
    let bytes = wtr.into_inner().context("flushing candidate CSV")?;
    Ok(String::from_utf8(bytes)?)
}
