//! Accessibility metadata for progress indicators.
//!
//! ## Usage
//!
//! Build a [`ProgressSemantics`] from the indicator's configuration and hand
//! the resulting [`accesskit::Node`] to the host's accessibility tree.

use accesskit::{Node, Role};

use crate::config::{IndicatorConfig, sanitize_progress};

/// Semantic description of a progress indicator.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressSemantics {
    /// Always [`Role::ProgressIndicator`].
    pub role: Role,
    /// Human-readable label.
    pub label: Option<String>,
    /// Announced value string.
    pub value: Option<String>,
    /// Clamped progress, absent while indeterminate.
    pub numeric_value: Option<f64>,
}

impl ProgressSemantics {
    /// Derives semantics for `config` showing `value`.
    ///
    /// Without an explicit label or value override, a determinate indicator
    /// is labelled with its rounded percentage, e.g. `"42%"`.
    pub fn from_config(config: &IndicatorConfig, value: Option<f32>) -> Self {
        let numeric_value = value.map(sanitize_progress);
        let label = match (&config.semantics_label, &config.semantics_value, numeric_value) {
            (Some(label), _, _) => Some(label.clone()),
            (None, None, Some(progress)) => Some(percent_label(progress)),
            _ => None,
        };

        Self {
            role: Role::ProgressIndicator,
            label,
            value: config.semantics_value.clone(),
            numeric_value: numeric_value.map(f64::from),
        }
    }

    /// Builds the AccessKit node for this indicator.
    pub fn to_accesskit_node(&self) -> Node {
        let mut node = Node::new(self.role);
        if let Some(label) = &self.label {
            node.set_label(label.clone());
        }
        if let Some(value) = &self.value {
            node.set_value(value.clone());
        }
        if let Some(numeric_value) = self.numeric_value {
            node.set_min_numeric_value(0.0);
            node.set_max_numeric_value(1.0);
            node.set_numeric_value(numeric_value);
        }
        node
    }
}

fn percent_label(progress: f32) -> String {
    format!("{}%", (progress * 100.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinate_defaults_to_percentage() {
        let config = IndicatorConfig::default();
        let semantics = ProgressSemantics::from_config(&config, Some(0.426));
        assert_eq!(semantics.role, Role::ProgressIndicator);
        assert_eq!(semantics.label.as_deref(), Some("43%"));
        assert_eq!(semantics.value, None);
        assert!((semantics.numeric_value.unwrap() - 0.426).abs() < 1e-6);
    }

    #[test]
    fn indeterminate_has_no_label_or_value() {
        let semantics = ProgressSemantics::from_config(&IndicatorConfig::default(), None);
        assert_eq!(semantics.label, None);
        assert_eq!(semantics.numeric_value, None);
    }

    #[test]
    fn explicit_label_wins() {
        let config = IndicatorConfig::default().semantics_label("Uploading");
        let semantics = ProgressSemantics::from_config(&config, Some(0.5));
        assert_eq!(semantics.label.as_deref(), Some("Uploading"));
    }

    #[test]
    fn value_override_suppresses_percentage() {
        let config = IndicatorConfig::default().semantics_value("3 of 10 files");
        let semantics = ProgressSemantics::from_config(&config, Some(0.3));
        assert_eq!(semantics.label, None);
        assert_eq!(semantics.value.as_deref(), Some("3 of 10 files"));
    }

    #[test]
    fn out_of_range_value_is_clamped() {
        let semantics = ProgressSemantics::from_config(&IndicatorConfig::default(), Some(1.8));
        assert_eq!(semantics.label.as_deref(), Some("100%"));
        assert_eq!(semantics.numeric_value, Some(1.0));
    }

    #[test]
    fn accesskit_node_carries_range() {
        let semantics = ProgressSemantics::from_config(&IndicatorConfig::default(), Some(0.25));
        let node = semantics.to_accesskit_node();
        assert_eq!(node.role(), Role::ProgressIndicator);
        assert_eq!(node.numeric_value(), Some(0.25));
        assert_eq!(node.max_numeric_value(), Some(1.0));
        assert_eq!(node.label(), Some("25%"));
    }
}
