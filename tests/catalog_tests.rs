// Metric catalog tests: ids, grouping stability

use perfboard::catalog::MetricCatalog;

#[test]
fn test_builtin_catalog_loads() {
    let catalog = MetricCatalog::builtin().expect("builtin catalog");
    assert_eq!(catalog.metrics().len(), 10);
    assert!(catalog.contains("cpu_percentage"));
    assert!(catalog.contains("memory_pss_total"));
    assert!(!catalog.contains("nonexistent_metric"));
}

#[test]
fn test_metric_ids_are_unique() {
    let catalog = MetricCatalog::builtin().unwrap();
    let mut ids: Vec<&str> = catalog.metrics().iter().map(|m| m.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), catalog.metrics().len());
}

#[test]
fn test_grouping_is_stable_insertion_order() {
    let catalog = MetricCatalog::builtin().unwrap();
    let groups = catalog.grouped();
    let categories: Vec<&str> = groups.iter().map(|g| g.category).collect();
    assert_eq!(categories, vec!["Memory", "CPU", "Smoothness", "Battery"]);

    // grouping twice yields the same shape
    let again = catalog.grouped();
    for (a, b) in groups.iter().zip(&again) {
        assert_eq!(a.category, b.category);
        assert_eq!(a.metrics.len(), b.metrics.len());
    }
}

#[test]
fn test_each_metric_appears_in_exactly_one_category() {
    let catalog = MetricCatalog::builtin().unwrap();
    let groups = catalog.grouped();
    let total: usize = groups.iter().map(|g| g.metrics.len()).sum();
    assert_eq!(total, catalog.metrics().len());
}
