use lb_core::format::format_thousands;
use lb_core::pipeline::{group_by_stage, PipelineStats, PipelineView};
use lb_core::store::LeadStore;
use lb_core::types::{sample_leads, Lead, LeadStage, STAGES};

fn lead(id: &str, stage: &str, score: i32, value: f64) -> Lead {
    let mut l = Lead::new(format!("Lead {id}"), LeadStage::parse(stage));
    l.id = id.into();
    l.score = score;
    l.value = value;
    l
}

fn column_ids(leads: &[Lead]) -> Vec<Vec<String>> {
    group_by_stage(leads)
        .iter()
        .map(|c| c.leads.iter().map(|l| l.id.clone()).collect())
        .collect()
}

// ---------------------------------------------------------------------------
// Seed scenario
// ---------------------------------------------------------------------------

#[test]
fn seed_data_stats() {
    let stats = PipelineStats::compute(&sample_leads());
    assert_eq!(stats.total, 3);
    assert_eq!(stats.qualified, 2);
    assert_eq!(stats.total_value, 1_055_000.0);
    assert_eq!(stats.avg_score, 81);
}

#[test]
fn seed_data_columns() {
    let store = LeadStore::seeded();
    let view = PipelineView::derive(&store);
    let counts: Vec<usize> = view.columns.iter().map(|c| c.len()).collect();
    assert_eq!(counts, vec![0, 1, 1, 1, 0]);
    assert_eq!(view.columns[1].leads[0].name, "Mike Davis");
    assert_eq!(view.columns[2].leads[0].name, "John Smith");
    assert_eq!(view.columns[3].leads[0].name, "Sarah Johnson");
    assert!(view.columns[0].is_empty());
    assert_eq!(view.placed(), 3);
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

#[test]
fn columns_follow_stage_definitions() {
    let columns = group_by_stage(&[]);
    assert_eq!(columns.len(), STAGES.len());
    for (column, def) in columns.iter().zip(STAGES.iter()) {
        assert_eq!(column.definition.label, def.label);
        assert!(column.is_empty());
    }
}

#[test]
fn grouping_preserves_collection_order() {
    let leads = vec![
        lead("a", "new", 10, 1.0),
        lead("b", "closed", 10, 1.0),
        lead("c", "new", 10, 1.0),
        lead("d", "new", 10, 1.0),
        lead("e", "closed", 10, 1.0),
    ];
    let ids = column_ids(&leads);
    assert_eq!(ids[0], vec!["a", "c", "d"]);
    assert_eq!(ids[4], vec!["b", "e"]);
}

#[test]
fn grouping_partitions_recognized_leads() {
    let leads = vec![
        lead("1", "new", 1, 1.0),
        lead("2", "contacted", 1, 1.0),
        lead("3", "qualified", 1, 1.0),
        lead("4", "negotiating", 1, 1.0),
        lead("5", "closed", 1, 1.0),
        lead("6", "lost", 1, 1.0),
        lead("7", "QUALIFIED", 1, 1.0),
    ];
    let view = PipelineView::from_leads(&leads);
    let recognized = leads.iter().filter(|l| l.stage.is_recognized()).count();
    assert_eq!(view.placed(), recognized);
    assert_eq!(view.placed(), 5);

    let mut placed: Vec<String> = column_ids(&leads).into_iter().flatten().collect();
    placed.sort();
    assert_eq!(placed, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn unrecognized_stage_counted_but_not_placed() {
    let mut leads = sample_leads();
    leads.push(lead("lost-1", "lost", 50, 10_000.0));

    let view = PipelineView::from_leads(&leads);
    assert!(view
        .columns
        .iter()
        .all(|c| c.leads.iter().all(|l| l.id != "lost-1")));
    assert_eq!(view.stats.total, 4);
    assert_eq!(view.stats.total_value, 1_065_000.0);
    assert_eq!(view.stats.qualified, 2);
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

#[test]
fn empty_collection_stats() {
    let stats = PipelineStats::compute(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.qualified, 0);
    assert_eq!(stats.total_value, 0.0);
    assert!(stats.total_value.is_sign_positive());
    assert_eq!(stats.avg_score, 0);
}

#[test]
fn empty_collection_total_value_is_unsigned_zero() {
    let stats = PipelineStats::compute(&[]);
    assert_eq!(format_thousands(stats.total_value, "$"), "$0K");

    let json = serde_json::to_string(&stats).unwrap();
    assert!(json.contains(r#""totalValue":0.0"#), "{json}");
    assert!(!json.contains("-0"), "{json}");
}

#[test]
fn single_lead_stats() {
    let stats = PipelineStats::compute(&[lead("1", "closed", 77, 1234.5)]);
    assert_eq!(stats.total, 1);
    assert_eq!(stats.qualified, 0);
    assert_eq!(stats.total_value, 1234.5);
    assert_eq!(stats.avg_score, 77);
}

#[test]
fn qualified_counts_only_qualified_and_negotiating() {
    let leads = vec![
        lead("1", "new", 0, 0.0),
        lead("2", "contacted", 0, 0.0),
        lead("3", "closed", 0, 0.0),
        lead("4", "lost", 0, 0.0),
    ];
    assert_eq!(PipelineStats::compute(&leads).qualified, 0);

    let leads = vec![
        lead("1", "qualified", 0, 0.0),
        lead("2", "negotiating", 0, 0.0),
        lead("3", "negotiating", 0, 0.0),
        lead("4", "closed", 0, 0.0),
    ];
    assert_eq!(PipelineStats::compute(&leads).qualified, 3);
}

#[test]
fn total_ignores_stage() {
    let leads = vec![lead("1", "lost", 0, 0.0), lead("2", "", 0, 0.0)];
    assert_eq!(PipelineStats::compute(&leads).total, 2);
}

#[test]
fn avg_score_rounds_half_up() {
    let leads = vec![lead("1", "new", 80, 0.0), lead("2", "new", 81, 0.0)];
    assert_eq!(PipelineStats::compute(&leads).avg_score, 81);

    let leads = vec![
        lead("1", "new", 80, 0.0),
        lead("2", "new", 80, 0.0),
        lead("3", "new", 81, 0.0),
    ];
    assert_eq!(PipelineStats::compute(&leads).avg_score, 80);
}

#[test]
fn scores_outside_nominal_range_are_averaged_as_is() {
    let leads = vec![lead("1", "new", 150, 0.0), lead("2", "new", -20, 0.0)];
    assert_eq!(PipelineStats::compute(&leads).avg_score, 65);
}

#[test]
fn stats_serialize_camel_case() {
    let json = serde_json::to_value(PipelineStats::compute(&sample_leads())).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["qualified"], 2);
    assert_eq!(json["totalValue"], 1_055_000.0);
    assert_eq!(json["avgScore"], 81);
}

#[test]
fn view_rederives_after_store_replacement() {
    let store = LeadStore::seeded();
    let before = PipelineView::derive(&store).stats;

    let next = store.with_lead(lead("4", "qualified", 100, 45_000.0)).unwrap();
    let after = PipelineView::derive(&next);
    assert_eq!(before.total, 3);
    assert_eq!(after.stats.total, 4);
    assert_eq!(after.stats.qualified, 3);
    assert_eq!(after.stats.total_value, 1_100_000.0);
    assert_eq!(after.columns[2].len(), 2);
}
