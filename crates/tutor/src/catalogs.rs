#![forbid(unsafe_code)]

//! Catalogs compiled into the binaries.

/// Shell cheat sheet: line editing, history, globbing, fzf.
pub const ZSH: &str = include_str!("../catalogs/zsh.json");

/// Editor cheat sheet: motions, operators, windows, plugins.
pub const NVIM: &str = include_str!("../catalogs/nvim.json");

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_content::{Catalog, ContentLine, MarkupCompiler};
    use tutor_runtime::ProgramConfig;

    #[test]
    fn zsh_catalog_loads() {
        let catalog = Catalog::from_json(ZSH).unwrap();
        assert_eq!(catalog.name(), "zshtutor");
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.key_width(), Some(22));
        assert!(catalog.tagline().is_some());
        assert!(!catalog.banner().is_empty());
    }

    #[test]
    fn nvim_catalog_loads() {
        let catalog = Catalog::from_json(NVIM).unwrap();
        assert_eq!(catalog.name(), "nvimtutor");
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.key_width(), Some(18));
    }

    #[test]
    fn bundled_lines_are_all_tagged() {
        for json in [ZSH, NVIM] {
            let catalog = Catalog::from_json(json).unwrap();
            for entry in catalog.entries() {
                assert!(!entry.section.is_empty(), "{} is empty", entry.label);
                for line in &entry.section {
                    assert!(
                        !matches!(line, ContentLine::Raw(_)),
                        "untagged line in {}: {line}",
                        entry.label
                    );
                }
            }
        }
    }

    #[test]
    fn bundled_sections_compile() {
        for json in [ZSH, NVIM] {
            let catalog = Catalog::from_json(json).unwrap();
            let config = ProgramConfig::for_catalog(&catalog);
            let compiler = MarkupCompiler::new(config.theme, config.key_width);
            for entry in catalog.entries() {
                let lines = compiler.compile(&entry.section);
                assert!(lines.len() >= entry.section.len());
            }
        }
    }
}
