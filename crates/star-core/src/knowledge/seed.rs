//! Built-in seed vocabulary.
//!
//! The seed is both the fallback artifact when no learned file exists and
//! the guaranteed prefix of every learned verb list.

/// High-impact action verb roots, in the order they are reported.
pub const SEED_VERBS: &[&str] = &["분석", "기획", "개발", "해결", "주도", "달성", "개선", "구축"];

/// Keywords and units that signal a quantitative result.
pub const SEED_METRICS: &[&str] = &["%", "원", "배", "시간", "단축", "증가", "감소"];

/// Owned copy of [`SEED_VERBS`].
pub fn seed_verbs() -> Vec<String> {
    SEED_VERBS.iter().map(|v| v.to_string()).collect()
}

/// Owned copy of [`SEED_METRICS`].
pub fn seed_metrics() -> Vec<String> {
    SEED_METRICS.iter().map(|m| m.to_string()).collect()
}
