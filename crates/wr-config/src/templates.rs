//! Starter files written by `wr init`.
//!
//! The templates under `templates/` are live TOML spelling out the defaults. `wr init`
//! writes them commented out, so a fresh file documents every knob without pinning any.

/// Template for a project `.wr.toml`.
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Template for `~/.wr.toml`.
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the project template, commented out.
pub fn local_template() -> String {
    commented(LOCAL_TEMPLATE)
}

/// Returns the global template, commented out.
pub fn global_template() -> String {
    commented(GLOBAL_TEMPLATE)
}

/// Prefixes every setting and section line with `# `; comments and blank lines stay.
fn commented(template: &str) -> String {
    template.lines().fold(
        String::with_capacity(template.len() * 2),
        |mut out, line| {
            if !line.is_empty() && !line.starts_with('#') {
                out.push_str("# ");
            }
            out.push_str(line);
            out.push('\n');
            out
        },
    )
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{Config, ParsedConfig, merge_configs, parse::parse_config};

    /// Resolves a template as if it were the only config file.
    fn resolve(template: &str) -> Config {
        let parsed = ParsedConfig {
            path: PathBuf::from("/tmp/.wr.toml"),
            config: parse_config(template).unwrap(),
        };
        merge_configs(&[parsed])
    }

    #[test]
    fn local_template_spells_out_defaults() {
        let config = resolve(LOCAL_TEMPLATE);
        let defaults = Config::default();

        assert_eq!(config.settings.language, defaults.settings.language);
        assert_eq!(config.settings.limit, defaults.settings.limit);
        assert_eq!(config.ranking.exploit, defaults.ranking.exploit);
        assert_eq!(config.ranking.novelty_window, defaults.ranking.novelty_window);
        assert_eq!(config.ranking.novelty, defaults.ranking.novelty);
        assert_eq!(config.stopwords.source, defaults.stopwords.source);
    }

    #[test]
    fn global_template_spells_out_defaults() {
        let config = resolve(GLOBAL_TEMPLATE);
        let defaults = Config::default();

        assert_eq!(config.profile.long_term_decay, defaults.profile.long_term_decay);
        assert_eq!(config.profile.short_term_decay, defaults.profile.short_term_decay);
        assert_eq!(config.profile.epsilon, defaults.profile.epsilon);
        assert_eq!(config.profile.max_terms, defaults.profile.max_terms);
        assert_eq!(config.history.capacity, defaults.history.capacity);
    }

    #[test]
    fn written_templates_set_nothing() {
        for template in [local_template(), global_template()] {
            let raw = parse_config(&template).unwrap();
            assert!(raw.root.is_none());
            assert!(raw.settings.is_none());
            assert!(raw.ranking.is_none());
            assert!(raw.profile.is_none());
            assert!(raw.stopwords.is_none());
        }
    }

    #[test]
    fn commenting_keeps_blank_and_comment_lines() {
        assert_eq!(
            commented("# weights\n[profile]\n\nepsilon = 0.1\n"),
            "# weights\n# [profile]\n\n# epsilon = 0.1\n"
        );
    }
}
