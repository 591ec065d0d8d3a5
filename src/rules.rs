//! The per-domain rule table and its application to parsed parameters.
//!
//! A rule pairs a domain substring with an allow-list of parameter names.
//! Rules are consulted in table order and the first domain contained in the
//! URL base wins; an empty allow-list drops every parameter.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::models::QueryParam;

/// The table shipped with the crate, covering the domains the tool is most
/// often pasted: Chinese social/shopping sites plus a few video hosts.
const DEFAULT_RULES: &str = include_str!("default_rules.json");

#[derive(Debug, Deserialize)]
struct RawRule {
    #[serde(default)]
    domain: String,
    #[serde(default)]
    allow: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RuleEntry {
    pub domain: String,
    pub allow: Vec<String>,
}

/// An ordered rule table. Order is precedence: lookups return the first
/// entry whose domain is a substring of the queried base.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    entries: Vec<RuleEntry>,
}

impl RuleSet {
    /// The compiled-in default table.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(DEFAULT_RULES).context("Failed to parse built-in rules")
    }

    /// Load a table from a JSON array of `{"domain": ..., "allow": [...]}`
    /// objects. Array order is kept as precedence order.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<RawRule> = serde_json::from_str(json).context("Failed to parse rules JSON")?;

        let entries: Vec<RuleEntry> = raw
            .into_iter()
            .filter(|r| !r.domain.is_empty())
            .map(|r| RuleEntry {
                domain: r.domain,
                allow: r.allow,
            })
            .collect();

        info!("Loaded {} rules", entries.len());
        Ok(Self { entries })
    }

    /// Load a table from a JSON file on disk.
    pub fn from_path(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules file {path}"))?;
        Self::from_json_str(&json)
    }

    pub fn from_entries(entries: Vec<RuleEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First-match lookup: the allow-list of the first entry whose domain is
    /// contained in `base`, or `None` when no rule applies.
    pub fn match_base(&self, base: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|entry| base.contains(&entry.domain))
            .map(|entry| entry.allow.as_slice())
    }

    /// Look up the rule for `base` and apply it to `params` in place.
    pub fn apply(&self, params: &mut [QueryParam], base: &str) {
        apply_allow_list(params, self.match_base(base));
    }
}

/// Set each parameter's `enabled` flag from an allow-list. No list means no
/// rule: everything stays. With a list, a parameter survives only if its key
/// is named. Idempotent.
pub fn apply_allow_list(params: &mut [QueryParam], allow: Option<&[String]>) {
    for param in params {
        param.enabled = match allow {
            None => true,
            Some(list) => list.iter().any(|name| name == &param.key),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RuleSet {
        RuleSet::from_entries(vec![
            RuleEntry {
                domain: "xiaohongshu.com".into(),
                allow: vec!["xsec_token".into()],
            },
            RuleEntry {
                domain: "zhihu.com".into(),
                allow: vec![],
            },
            RuleEntry {
                domain: "bilibili.com".into(),
                allow: vec!["p".into(), "t".into()],
            },
        ])
    }

    // ============ matching ============

    #[test]
    fn test_match_by_substring() {
        let rules = table();
        let allow = rules.match_base("https://www.xiaohongshu.com/item").unwrap();
        assert_eq!(allow, ["xsec_token".to_string()]);
    }

    #[test]
    fn test_match_none() {
        assert!(table().match_base("https://example.com/a").is_none());
    }

    #[test]
    fn test_match_first_entry_wins() {
        let rules = RuleSet::from_entries(vec![
            RuleEntry {
                domain: "example.com".into(),
                allow: vec!["first".into()],
            },
            RuleEntry {
                domain: "sub.example.com".into(),
                allow: vec!["second".into()],
            },
        ]);
        let allow = rules.match_base("https://sub.example.com/p").unwrap();
        assert_eq!(allow, ["first".to_string()]);
    }

    // ============ filtering ============

    #[test]
    fn test_apply_without_rule_enables_all() {
        let mut params = vec![
            QueryParam::new("a", "1", false),
            QueryParam::new("b", "2", false),
        ];
        apply_allow_list(&mut params, None);
        assert!(params.iter().all(|p| p.enabled));
    }

    #[test]
    fn test_apply_allow_list_by_membership() {
        let mut params = vec![
            QueryParam::new("id", "5", true),
            QueryParam::new("xsec_token", "abc123", true),
        ];
        let allow = vec!["xsec_token".to_string()];
        apply_allow_list(&mut params, Some(&allow));
        assert_eq!(
            params,
            vec![
                QueryParam::new("id", "5", false),
                QueryParam::new("xsec_token", "abc123", true),
            ]
        );
    }

    #[test]
    fn test_apply_empty_list_disables_all() {
        let mut params = vec![
            QueryParam::new("x", "1", true),
            QueryParam::new("y", "2", true),
        ];
        apply_allow_list(&mut params, Some(&[]));
        assert!(params.iter().all(|p| !p.enabled));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut params = vec![
            QueryParam::new("p", "1", true),
            QueryParam::new("spm", "xyz", true),
        ];
        let rules = table();
        rules.apply(&mut params, "https://bilibili.com/video/a");
        let once = params.clone();
        rules.apply(&mut params, "https://bilibili.com/video/a");
        assert_eq!(params, once);
    }

    #[test]
    fn test_apply_covers_duplicate_keys() {
        let mut params = vec![
            QueryParam::new("t", "10", true),
            QueryParam::new("spm", "xyz", true),
            QueryParam::new("t", "20", true),
        ];
        table().apply(&mut params, "https://bilibili.com/video/a");
        assert!(params[0].enabled);
        assert!(!params[1].enabled);
        assert!(params[2].enabled);
    }

    // ============ loading ============

    #[test]
    fn test_from_json_keeps_order() {
        let rules = RuleSet::from_json_str(
            r#"[
                {"domain": "b.example", "allow": ["x"]},
                {"domain": "a.example", "allow": []}
            ]"#,
        )
        .unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.match_base("https://b.example/"), Some(&["x".to_string()][..]));
        assert_eq!(rules.match_base("https://a.example/"), Some(&[][..]));
    }

    #[test]
    fn test_from_json_skips_empty_domains() {
        let rules =
            RuleSet::from_json_str(r#"[{"allow": ["x"]}, {"domain": "ok.example"}]"#).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.match_base("https://ok.example/"), Some(&[][..]));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(RuleSet::from_json_str("{not json").is_err());
    }

    #[test]
    fn test_builtin_table_loads() {
        let rules = RuleSet::builtin().unwrap();
        assert!(!rules.is_empty());
        assert_eq!(
            rules.match_base("https://www.zhihu.com/question/1"),
            Some(&[][..])
        );
    }
}
