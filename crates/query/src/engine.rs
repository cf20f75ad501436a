use crate::error::Result;
use cutsel_catalog::{BreakerRow, CatalogStore, MaterialRow, QueryInput};

/// One independent row test. The conjunction of all predicates decides
/// whether a row qualifies; an empty list lets every row through.
type Predicate<R> = Box<dyn Fn(&R) -> bool>;

/// Read-only range-match engine over a catalog store.
///
/// Stateless per invocation: each query fetches the catalog in storage
/// order and filters it through the predicate list built from the present
/// inputs. Nothing is sorted, deduped, or scored, and the `recommended`
/// value of a band is never consulted.
pub struct QueryEngine<'a> {
    store: &'a CatalogStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// Breakers whose depth-of-cut and feed-rate bands contain the present
    /// inputs and whose process type matches, if one is given. With no
    /// inputs present the full catalog comes back in storage order.
    pub fn query_breakers(&self, input: &QueryInput) -> Result<Vec<BreakerRow>> {
        let mut predicates: Vec<Predicate<BreakerRow>> = Vec::new();
        if let Some(pt) = input.process_type {
            predicates.push(Box::new(move |row| row.process_type == pt));
        }
        if let Some(depth) = input.depth_of_cut {
            predicates.push(Box::new(move |row| row.depth_of_cut.contains(depth)));
        }
        if let Some(feed) = input.feed_rate {
            predicates.push(Box::new(move |row| row.feed_rate.contains(feed)));
        }

        let rows = self.store.all_breakers()?;
        let matched = apply(rows, &predicates);
        log::debug!("query_breakers matched {} rows", matched.len());
        Ok(matched)
    }

    /// Materials whose cutting-speed band contains the input and whose
    /// process type matches, if one is given.
    pub fn query_materials(&self, input: &QueryInput) -> Result<Vec<MaterialRow>> {
        let mut predicates: Vec<Predicate<MaterialRow>> = Vec::new();
        if let Some(pt) = input.process_type {
            predicates.push(Box::new(move |row| row.process_type == pt));
        }
        if let Some(speed) = input.cutting_speed {
            predicates.push(Box::new(move |row| row.cutting_speed.contains(speed)));
        }

        let rows = self.store.all_materials()?;
        let matched = apply(rows, &predicates);
        log::debug!("query_materials matched {} rows", matched.len());
        Ok(matched)
    }
}

fn apply<R>(rows: Vec<R>, predicates: &[Predicate<R>]) -> Vec<R> {
    rows.into_iter()
        .filter(|row| predicates.iter().all(|p| p(row)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use cutsel_catalog::{Band, ProcessType};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn breaker(id: i64, pt: ProcessType, depth: (f64, f64, f64), feed: (f64, f64, f64)) -> BreakerRow {
        BreakerRow {
            id,
            name: format!("BK-{id}"),
            process_type: pt,
            depth_of_cut: Band::new(depth.0, depth.1, depth.2),
            feed_rate: Band::new(feed.0, feed.1, feed.2),
        }
    }

    fn material(id: i64, pt: ProcessType, speed: (f64, f64, f64)) -> MaterialRow {
        MaterialRow {
            id,
            name: format!("MT-{id}"),
            process_type: pt,
            final_priority: "standard".to_string(),
            cutting_speed: Band::new(speed.0, speed.1, speed.2),
        }
    }

    fn seeded_store(dir: &TempDir) -> CatalogStore {
        let store = CatalogStore::new(dir.path().join("catalog.db"));
        store.create().unwrap();
        store
            .insert_breakers(&[
                breaker(1, ProcessType::Roughing, (1.0, 2.0, 3.0), (0.1, 0.2, 0.3)),
                breaker(2, ProcessType::Finishing, (0.1, 0.3, 0.8), (0.05, 0.1, 0.15)),
                breaker(3, ProcessType::Roughing, (2.0, 4.0, 6.0), (0.2, 0.35, 0.5)),
            ])
            .unwrap();
        store
            .insert_materials(&[
                material(1, ProcessType::Roughing, (80.0, 120.0, 180.0)),
                material(2, ProcessType::Finishing, (150.0, 220.0, 300.0)),
            ])
            .unwrap();
        store
    }

    fn ids_b(rows: &[BreakerRow]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn in_range_depth_with_category_matches() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let engine = QueryEngine::new(&store);

        let input = QueryInput {
            depth_of_cut: Some(2.0),
            process_type: Some(ProcessType::Roughing),
            ..Default::default()
        };
        assert_eq!(ids_b(&engine.query_breakers(&input).unwrap()), vec![1, 3]);
    }

    #[test]
    fn out_of_range_depth_matches_nothing_and_is_ok() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let engine = QueryEngine::new(&store);

        let input = QueryInput {
            depth_of_cut: Some(3.5),
            process_type: Some(ProcessType::Roughing),
            ..Default::default()
        };
        // Row 3 covers 3.5 but row 1 does not; narrow further with feed.
        assert_eq!(ids_b(&engine.query_breakers(&input).unwrap()), vec![3]);

        let input = QueryInput {
            depth_of_cut: Some(7.0),
            ..Default::default()
        };
        let rows = engine.query_breakers(&input).unwrap();
        assert!(rows.is_empty()); // empty is a valid outcome, not an error
    }

    #[test]
    fn boundary_value_matches_inclusively() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let engine = QueryEngine::new(&store);

        let input = QueryInput {
            depth_of_cut: Some(3.0),
            ..Default::default()
        };
        // depth_max of row 1 is exactly 3.0; row 3 covers it too.
        assert_eq!(ids_b(&engine.query_breakers(&input).unwrap()), vec![1, 3]);
    }

    #[test]
    fn absent_inputs_return_full_catalog_in_storage_order() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let engine = QueryEngine::new(&store);

        let all = engine.query_breakers(&QueryInput::default()).unwrap();
        assert_eq!(ids_b(&all), vec![1, 2, 3]);
    }

    #[test]
    fn category_filter_narrows_to_a_subset() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let engine = QueryEngine::new(&store);

        let numeric_only = QueryInput {
            depth_of_cut: Some(2.5),
            ..Default::default()
        };
        let with_category = QueryInput {
            process_type: Some(ProcessType::Roughing),
            ..numeric_only
        };

        let wide = ids_b(&engine.query_breakers(&numeric_only).unwrap());
        let narrow = ids_b(&engine.query_breakers(&with_category).unwrap());
        assert!(narrow.iter().all(|id| wide.contains(id)));
    }

    #[test]
    fn each_added_predicate_only_narrows() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let engine = QueryEngine::new(&store);

        let mut input = QueryInput::default();
        let mut last = engine.query_breakers(&input).unwrap().len();

        input.depth_of_cut = Some(2.0);
        let n = engine.query_breakers(&input).unwrap().len();
        assert!(n <= last);
        last = n;

        input.feed_rate = Some(0.2);
        let n = engine.query_breakers(&input).unwrap().len();
        assert!(n <= last);
        last = n;

        input.process_type = Some(ProcessType::Roughing);
        let n = engine.query_breakers(&input).unwrap().len();
        assert!(n <= last);
    }

    #[test]
    fn materials_filter_on_speed_and_category() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let engine = QueryEngine::new(&store);

        let input = QueryInput {
            cutting_speed: Some(160.0),
            ..Default::default()
        };
        let rows = engine.query_materials(&input).unwrap();
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);

        let input = QueryInput {
            cutting_speed: Some(160.0),
            process_type: Some(ProcessType::Finishing),
            ..Default::default()
        };
        let rows = engine.query_materials(&input).unwrap();
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn single_row_scenario_hits_misses_and_boundary() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("catalog.db"));
        store.create().unwrap();
        store
            .insert_breakers(&[breaker(
                1,
                ProcessType::Roughing,
                (1.0, 2.0, 3.0),
                (0.1, 0.2, 0.3),
            )])
            .unwrap();
        let engine = QueryEngine::new(&store);

        let hit = QueryInput {
            depth_of_cut: Some(2.0),
            process_type: Some(ProcessType::Roughing),
            ..Default::default()
        };
        assert_eq!(ids_b(&engine.query_breakers(&hit).unwrap()), vec![1]);

        let miss = QueryInput {
            depth_of_cut: Some(3.5),
            process_type: Some(ProcessType::Roughing),
            ..Default::default()
        };
        assert!(engine.query_breakers(&miss).unwrap().is_empty());

        let boundary = QueryInput {
            depth_of_cut: Some(3.0),
            ..Default::default()
        };
        assert_eq!(ids_b(&engine.query_breakers(&boundary).unwrap()), vec![1]);
    }

    #[test]
    fn recommended_value_never_filters() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("catalog.db"));
        store.create().unwrap();
        // Far from recommended but inside [min, max]: must still match.
        store
            .insert_breakers(&[breaker(
                1,
                ProcessType::MediumCutting,
                (1.0, 1.1, 10.0),
                (0.1, 0.11, 1.0),
            )])
            .unwrap();
        let engine = QueryEngine::new(&store);

        let input = QueryInput {
            depth_of_cut: Some(9.9),
            feed_rate: Some(0.99),
            ..Default::default()
        };
        assert_eq!(ids_b(&engine.query_breakers(&input).unwrap()), vec![1]);
    }

    #[test]
    fn midpoint_of_every_band_recovers_the_row() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let engine = QueryEngine::new(&store);

        for row in store.all_breakers().unwrap() {
            let input = QueryInput {
                depth_of_cut: Some((row.depth_of_cut.min + row.depth_of_cut.max) / 2.0),
                feed_rate: Some((row.feed_rate.min + row.feed_rate.max) / 2.0),
                process_type: Some(row.process_type),
                ..Default::default()
            };
            let ids = ids_b(&engine.query_breakers(&input).unwrap());
            assert!(ids.contains(&row.id), "row {} lost its own midpoint", row.id);
        }
    }

    #[test]
    fn unreachable_store_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("missing.db"));
        let engine = QueryEngine::new(&store);
        let err = engine.query_breakers(&QueryInput::default()).unwrap_err();
        assert!(matches!(err, QueryError::Storage(_)));
    }
}
