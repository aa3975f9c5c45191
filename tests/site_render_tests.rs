//! End-to-end rendering tests: seed a repository, assemble the view data
//! through the service layer, and check the HTML the site module produces.

use vanads::db::repositories::LocalRepository;
use vanads::db::services::{catalog_data, funding_report, tracking_data};
use vanads::models::TransparencyMetrics;
use vanads::site::{render_index, render_reserve_page};

#[tokio::test]
async fn test_index_renders_demo_inventory() {
    let repo = LocalRepository::with_demo_data();

    let catalog = catalog_data(&repo).await.unwrap();
    let tracking = tracking_data(&repo, None).await.unwrap();
    let report = funding_report(&repo).await.unwrap();

    let html = render_index(&catalog, &tracking, &report);

    // Tier cards reflect the seeded 3/5/7 inventory.
    assert!(html.contains("3 of 3 Available"));
    assert!(html.contains("5 of 5 Available"));
    assert!(html.contains("7 of 7 Available"));
    assert!(html.contains("$120.41"));
    assert!(html.contains("$180.62"));
    assert!(html.contains("$240.82"));

    // The GPS section has live coordinates and the demo badge.
    assert!(html.contains("Active Route"));
    assert!(html.contains("Demo Mode: Simulated Routes Active"));
    assert!(html.contains("/v1/routes/stream"));

    // Transparency shows the launch estimates.
    assert!(html.contains("Vehicle Cost - estimated"));
    assert!(html.contains("$59,000"));
    assert!(html.contains("0 / 15"));
}

#[tokio::test]
async fn test_index_renders_published_metrics() {
    let repo = LocalRepository::with_demo_data();
    let mut metrics = TransparencyMetrics::estimated();
    metrics.panels_funded_count = 6;
    metrics.total_revenue = 1_475.0;
    metrics.operating_costs.insert("charging".to_string(), 220.0);
    repo.store_metrics_impl(metrics);

    let catalog = catalog_data(&repo).await.unwrap();
    let tracking = tracking_data(&repo, None).await.unwrap();
    let report = funding_report(&repo).await.unwrap();

    let html = render_index(&catalog, &tracking, &report);

    assert!(!html.contains("Vehicle Cost - estimated"));
    assert!(html.contains("Vehicle Cost"));
    assert!(html.contains("6 / 15"));
    assert!(html.contains("50%"));
    assert!(html.contains("6 active panels"));
    assert!(html.contains("$220/month"));
}

#[tokio::test]
async fn test_index_from_empty_repository_still_renders() {
    let repo = LocalRepository::new();

    let catalog = catalog_data(&repo).await.unwrap();
    let tracking = tracking_data(&repo, None).await.unwrap();
    let report = funding_report(&repo).await.unwrap();

    let html = render_index(&catalog, &tracking, &report);

    assert!(html.contains("No routes yet"));
    assert!(html.contains("Sold Out"));
    // Tier templates stay visible with zero availability.
    assert!(html.contains("0 of 7 Available"));
}

#[tokio::test]
async fn test_reserve_page_options_match_catalog_tiers() {
    let repo = LocalRepository::with_demo_data();
    let catalog = catalog_data(&repo).await.unwrap();

    let html = render_reserve_page(&catalog, false);

    for tier in &catalog.tiers {
        assert!(
            html.contains(&format!("value=\"{}\"", tier.size.as_str())),
            "missing option for {} tier",
            tier.size
        );
    }
    assert!(html.contains("Request Panel Reservation"));
    assert!(html.contains("/v1/reservations"));
}

#[tokio::test]
async fn test_reserve_page_submitted_state() {
    let repo = LocalRepository::with_demo_data();
    let catalog = catalog_data(&repo).await.unwrap();

    let html = render_reserve_page(&catalog, true);

    assert!(html.contains("Reservation Submitted!"));
    assert!(!html.contains("id=\"reserve-form\""));
}
