//! Keyword-cluster dependency inference.

use crate::task::domain::{
    KeywordCluster, KeywordRules, Section, TaskId, parse_sections, resolve_dependencies,
};
use rstest::rstest;

fn ids(count: usize) -> Vec<TaskId> {
    (1..=count).map(TaskId::from_sequence).collect()
}

fn resolve(document: &str, rules: &KeywordRules) -> Vec<Vec<TaskId>> {
    let sections = parse_sections(document);
    resolve_dependencies(&sections, &ids(sections.len()), rules)
}

#[rstest]
fn unrelated_sections_fall_back_to_their_predecessor() {
    let resolved = resolve("## A\nbody\n## B\nbody\n## C\nbody", &KeywordRules::default());
    assert_eq!(
        resolved,
        vec![
            vec![],
            vec![TaskId::from_sequence(1)],
            vec![TaskId::from_sequence(2)],
        ]
    );
}

#[rstest]
fn synonyms_link_sections_across_the_document() {
    let document = [
        "## 数据库模型",
        "创建用户表和文章表",
        "",
        "## API 接口",
        "实现 REST API",
        "",
        "## 用户界面",
        "基于 API 接口实现前端页面，展示数据库模型数据",
    ]
    .join("\n");

    let resolved = resolve(&document, &KeywordRules::default());

    assert_eq!(resolved.first(), Some(&Vec::new()));
    assert_eq!(resolved.get(1), Some(&vec![TaskId::from_sequence(1)]));
    assert_eq!(
        resolved.get(2),
        Some(&vec![TaskId::from_sequence(1), TaskId::from_sequence(2)])
    );
}

#[rstest]
fn cluster_membership_matches_english_synonyms() {
    let document = "## Login page\nform\n## Profile\nonly reachable after signup";
    let resolved = resolve(document, &KeywordRules::default());
    assert_eq!(resolved.get(1), Some(&vec![TaskId::from_sequence(1)]));
}

#[rstest]
fn inference_never_points_forward() {
    let document = "## Billing\nuses the reports section\n## Reports\nstandalone\n## Export\nexport billing reports";
    let resolved = resolve(document, &KeywordRules::empty());

    for (position, dependencies) in resolved.iter().enumerate() {
        for dependency in dependencies {
            let index = ids(resolved.len())
                .iter()
                .position(|id| id == dependency)
                .expect("dependency is a known id");
            assert!(index < position, "{dependency} must precede task {position}");
        }
    }
    assert_eq!(
        resolved.get(2),
        Some(&vec![TaskId::from_sequence(1), TaskId::from_sequence(2)])
    );
}

#[rstest]
fn keyword_set_is_title_plus_matching_clusters() {
    let rules = KeywordRules::empty()
        .with_cluster(KeywordCluster::new("billing", ["Invoice", "payment", "  "]))
        .with_cluster(KeywordCluster::new("search", ["query"]));

    assert_eq!(
        rules.keywords_for("Invoice list"),
        vec![
            "invoice list".to_owned(),
            "invoice".to_owned(),
            "payment".to_owned(),
        ]
    );
}

#[rstest]
fn swapping_the_rule_table_changes_inference() {
    let document = "## Invoices\nstore them\n## Search\nindex\n## Dashboard\nshow payment totals";
    let billing = KeywordRules::empty()
        .with_cluster(KeywordCluster::new("billing", ["invoice", "payment"]));
    let sections: Vec<Section> = parse_sections(document);

    let with_rules = resolve_dependencies(&sections, &ids(3), &billing);
    let without_rules = resolve_dependencies(&sections, &ids(3), &KeywordRules::empty());

    assert_eq!(with_rules.get(2), Some(&vec![TaskId::from_sequence(1)]));
    assert_eq!(without_rules.get(2), Some(&vec![TaskId::from_sequence(2)]));
}

#[rstest]
fn default_rules_carry_four_clusters() {
    let rules = KeywordRules::default();
    let names: Vec<&str> = rules.clusters().iter().map(KeywordCluster::name).collect();
    assert_eq!(names, vec!["data", "auth", "api", "ui"]);
}
