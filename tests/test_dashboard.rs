//! End-to-end behaviour of the `Dashboard` controller.

mod common;

use common::{call_count, sample_quotes, today, CountingProvider};
use quotebot_dashboard::insights::{InsightFailure, MISSING_CREDENTIAL_MESSAGE};
use quotebot_dashboard::models::ServiceType;
use quotebot_dashboard::{Dashboard, InsightState, Page, Settings, TimeRange, View};

fn dashboard(provider: CountingProvider) -> Dashboard {
    Dashboard::builder()
        .quotes(sample_quotes())
        .reference_date(today())
        .settings(Settings::default())
        .provider(provider)
        .build()
        .unwrap()
}

#[test]
fn starts_on_overview_with_thirty_days() {
    let d = dashboard(CountingProvider::replying(""));
    assert_eq!(d.view(), View::Dashboard);
    assert_eq!(d.time_range(), TimeRange::Last30Days);
    assert_eq!(d.today(), today());
    assert!(!d.insights_open());
    assert_eq!(d.insight_state(), &InsightState::Idle);
}

#[test]
fn metrics_follow_time_range() {
    let mut d = dashboard(CountingProvider::replying(""));

    let m = d.metrics();
    assert_eq!(m.total_quotes, 5);
    assert_eq!(m.total_revenue, 15_850.0);
    assert!((m.acceptance_rate - 40.0).abs() < 1e-9);

    d.set_time_range(TimeRange::Last7Days);
    assert_eq!(d.metrics().total_quotes, 4);

    d.set_time_range(TimeRange::Last90Days);
    assert_eq!(d.metrics().total_quotes, 6);
}

#[test]
fn roster_ignores_time_range() {
    let mut d = dashboard(CountingProvider::replying(""));
    d.set_time_range(TimeRange::Last7Days);
    let names: Vec<String> = d.clients().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Jane Doe", "Bob Stone", "Ann Lee", "Carl Ray"]);
}

#[test]
fn overview_page_contents() {
    let d = dashboard(CountingProvider::replying(""));
    let Page::Dashboard {
        metrics,
        revenue_trend,
        service_distribution,
        recent_quotes,
        volume,
    } = d.page()
    else {
        panic!("expected overview page");
    };

    assert_eq!(metrics.total_quotes, 5);
    assert_eq!(recent_quotes.len(), 5);
    assert_eq!(revenue_trend.len(), 4);
    assert_eq!(volume.len(), 4);
    assert_eq!(revenue_trend.first().map(|p| p.label.as_str()), Some("Feb 20"));
    let repair = service_distribution
        .iter()
        .find(|c| c.service_type == ServiceType::Repair)
        .map(|c| c.count);
    assert_eq!(repair, Some(2));
}

#[test]
fn every_view_renders_its_page() {
    let mut d = dashboard(CountingProvider::replying(""));
    for view in View::ALL {
        d.navigate(view);
        assert_eq!(d.page().view(), view);
    }
}

#[test]
fn clients_page_has_stats() {
    let mut d = dashboard(CountingProvider::replying(""));
    d.navigate(View::Clients);
    match d.page() {
        Page::Clients { stats, clients } => {
            assert_eq!(stats.total_clients, 4);
            assert_eq!(stats.new_this_month, 2);
            assert_eq!(clients.len(), 4);
        }
        other => panic!("unexpected page {other:?}"),
    }
}

#[test]
fn page_serializes_with_view_tag() {
    let mut d = dashboard(CountingProvider::replying(""));
    d.navigate(View::Analytics);
    let json = serde_json::to_value(d.page()).unwrap();
    assert_eq!(json["view"], "analytics");
    assert!(json["revenueTrend"].is_array());
}

#[test]
fn empty_snapshot_renders_empty_state() {
    let d = Dashboard::builder()
        .quotes(Vec::new())
        .reference_date(today())
        .settings(Settings::default())
        .provider(CountingProvider::replying(""))
        .build()
        .unwrap();
    let m = d.metrics();
    assert_eq!(m.total_quotes, 0);
    assert_eq!(m.average_quote_value, 0.0);
    assert_eq!(m.acceptance_rate, 0.0);
    assert!(matches!(
        d.page(),
        Page::Dashboard { ref revenue_trend, .. } if revenue_trend.is_empty()
    ));
}

#[test]
fn search_is_scoped_to_range() {
    let mut d = dashboard(CountingProvider::replying(""));
    assert_eq!(d.search_quotes("carl").len(), 0);
    d.set_time_range(TimeRange::Last90Days);
    assert_eq!(d.search_quotes("carl").len(), 1);
}

#[test]
fn insights_generate_once_until_refreshed() {
    let provider = CountingProvider::replying("<ul><li>Push inspections</li></ul>");
    let calls = provider.calls();
    let prompts = provider.prompts();
    let mut d = dashboard(provider);

    assert!(matches!(d.open_insights(), InsightState::Ready(_)));
    assert!(d.insights_open());
    d.close_insights();
    assert!(!d.insights_open());
    d.open_insights();
    assert_eq!(call_count(&calls), 1);

    d.set_time_range(TimeRange::Last7Days);
    d.refresh_insights();
    assert_eq!(call_count(&calls), 2);
    let sent = prompts.lock().unwrap();
    assert!(sent[0].contains("Total Quotes Generated: 5"));
    assert!(sent[1].contains("Total Quotes Generated: 4"));
    assert!(sent[1].contains("last 7 days"));
}

#[test]
fn insights_without_key_show_message() {
    let mut d = dashboard(CountingProvider::unconfigured());
    let state = d.open_insights();
    assert_eq!(state, &InsightState::Failed(InsightFailure::MissingCredential));
    assert_eq!(state.display_text(), Some(MISSING_CREDENTIAL_MESSAGE));
}

#[test]
fn display_summarizes_state() {
    let mut d = dashboard(CountingProvider::replying(""));
    d.navigate(View::Quotes);
    assert_eq!(
        d.to_string(),
        "Dashboard(quotes=6, view=quotes, range=30d, today=2024-03-15)"
    );
}

#[test]
fn mock_source_is_reproducible() {
    let build = || {
        Dashboard::builder()
            .mock_seed(99)
            .mock_count(25)
            .reference_date(today())
            .settings(Settings::default())
            .provider(CountingProvider::unconfigured())
            .build()
            .unwrap()
    };
    let a = build();
    let b = build();
    assert_eq!(a.dataset().len(), 25);
    assert_eq!(a.dataset().quotes(), b.dataset().quotes());
}
