//! Keyword-cluster dependency inference between requirement sections.
//!
//! Inference only ever looks backwards: a section can depend on sections that
//! appear before it in the document, never on later ones. When no keyword
//! links a section to an earlier one, it falls back to depending on its
//! immediate predecessor.

use super::{Section, TaskId};

/// A named group of synonyms describing one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCluster {
    name: String,
    keywords: Vec<String>,
}

impl KeywordCluster {
    /// Creates a cluster; keywords are lower-cased and blanks dropped.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let lowered = keyword.as_ref().trim().to_lowercase();
            if !lowered.is_empty() && !normalized.contains(&lowered) {
                normalized.push(lowered);
            }
        }
        Self {
            name: name.into(),
            keywords: normalized,
        }
    }

    /// Returns the cluster name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lower-cased keywords.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn matches(&self, lowered_title: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered_title.contains(keyword.as_str()))
    }
}

/// Rule table mapping topics to synonym lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRules {
    clusters: Vec<KeywordCluster>,
}

impl KeywordRules {
    /// Creates a rule table from explicit clusters.
    #[must_use]
    pub const fn new(clusters: Vec<KeywordCluster>) -> Self {
        Self { clusters }
    }

    /// Creates a rule table with no clusters; only literal titles match.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            clusters: Vec::new(),
        }
    }

    /// Appends a cluster.
    #[must_use]
    pub fn with_cluster(mut self, cluster: KeywordCluster) -> Self {
        self.clusters.push(cluster);
        self
    }

    /// Returns the configured clusters.
    #[must_use]
    pub fn clusters(&self) -> &[KeywordCluster] {
        &self.clusters
    }

    /// Returns the keyword set for a section title.
    ///
    /// The set holds the lower-cased title followed by every keyword of each
    /// cluster the title mentions, without duplicates.
    #[must_use]
    pub fn keywords_for(&self, title: &str) -> Vec<String> {
        let lowered = title.to_lowercase();
        let mut keywords = vec![lowered.clone()];
        for cluster in self.clusters.iter().filter(|c| c.matches(&lowered)) {
            for keyword in &cluster.keywords {
                if !keywords.contains(keyword) {
                    keywords.push(keyword.clone());
                }
            }
        }
        keywords
    }
}

impl Default for KeywordRules {
    fn default() -> Self {
        Self::new(vec![
            KeywordCluster::new(
                "data",
                ["数据模型", "数据库", "schema", "model", "表结构", "ORM"],
            ),
            KeywordCluster::new(
                "auth",
                ["登录", "注册", "认证", "授权", "auth", "login", "signup"],
            ),
            KeywordCluster::new("api", ["接口", "API", "endpoint", "路由", "route"]),
            KeywordCluster::new("ui", ["界面", "页面", "组件", "UI", "component", "view"]),
        ])
    }
}

/// Infers dependency lists for sections identified by `ids`.
///
/// Returns one list per section, in section order. The first section never
/// has dependencies.
#[must_use]
pub fn resolve_dependencies(
    sections: &[Section],
    ids: &[TaskId],
    rules: &KeywordRules,
) -> Vec<Vec<TaskId>> {
    let keyword_sets: Vec<Vec<String>> = sections
        .iter()
        .map(|section| rules.keywords_for(section.title()))
        .collect();

    let mut resolved = Vec::with_capacity(sections.len());
    for (position, section) in sections.iter().enumerate() {
        let text = format!("{} {}", section.body(), section.title()).to_lowercase();
        let mut dependencies: Vec<TaskId> = keyword_sets
            .iter()
            .zip(ids)
            .take(position)
            .filter(|(keywords, _)| keywords.iter().any(|kw| text.contains(kw.as_str())))
            .map(|(_, id)| id.clone())
            .collect();

        if dependencies.is_empty()
            && let Some(previous) = position.checked_sub(1).and_then(|p| ids.get(p))
        {
            dependencies.push(previous.clone());
        }
        resolved.push(dependencies);
    }
    resolved
}
