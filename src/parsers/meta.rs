use scraper::Html;

use super::dom::{nth_block, select_all, select_first, trimmed_text};
use super::markup::meta::*;
use crate::domain::MetaData;
use crate::errors::ExtractionError;

/// Parse the tier list page into champion names per role
pub fn extract_meta(document: &Html) -> Result<MetaData, ExtractionError> {
    let root = document.root_element();
    let sections = select_all(root, SECTIONS)?;
    let mut meta = MetaData::default();

    for (offset, role) in ROLE_ORDER.into_iter().enumerate() {
        let section = nth_block(&sections, SKIPPED_SECTIONS + offset, SECTIONS)?;
        let champion_list = select_first(section, CHAMPION_LIST)?;

        *meta.role_mut(role) = select_all(champion_list, CHAMPION)?
            .into_iter()
            .map(trimmed_text)
            .collect();
    }

    Ok(meta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, champions: &[&str]) -> String {
        let entries: String = champions
            .iter()
            .map(|name| format!(r#"<div class="champion"><img alt=""> {} </div>"#, name))
            .collect();

        format!(
            r#"<div class="section"><h2>{}</h2><div class="champions">{}</div></div>"#,
            title, entries
        )
    }

    fn tier_list(sections: &[String]) -> Html {
        Html::parse_document(&format!(
            "<html><body><article>{}</article></body></html>",
            sections.concat()
        ))
    }

    #[test]
    fn test_extract_meta() {
        let html = tier_list(&[
            r#"<div class="section"><h1>Tier list for climbing</h1></div>"#.to_string(),
            section("Top", &["A", "B"]),
            section("Jungle", &["C", "D"]),
            section("Mid", &["E", "F"]),
            section("Bot", &["G", "H"]),
            section("Support", &["I", "J"]),
        ]);

        let meta = extract_meta(&html).unwrap();

        assert_eq!(meta.top, vec!["A", "B"]);
        assert_eq!(meta.jungle, vec!["C", "D"]);
        assert_eq!(meta.mid, vec!["E", "F"]);
        assert_eq!(meta.bot, vec!["G", "H"]);
        assert_eq!(meta.support, vec!["I", "J"]);
    }

    #[test]
    fn test_sections_after_support_are_ignored() {
        let html = tier_list(&[
            section("Intro", &[]),
            section("Top", &["Darius"]),
            section("Jungle", &["Vi"]),
            section("Mid", &["Ahri"]),
            section("Bot", &["Jinx"]),
            section("Support", &["Thresh"]),
            section("Honorable mentions", &["Teemo"]),
        ]);

        let meta = extract_meta(&html).unwrap();

        assert_eq!(meta.support, vec!["Thresh"]);
        assert!(!meta.top.contains(&"Teemo".to_string()));
    }

    #[test]
    fn test_champions_class_does_not_match_champion_entries() {
        let html = tier_list(&[
            section("Intro", &[]),
            section("Top", &[]),
            section("Jungle", &["Vi"]),
            section("Mid", &["Ahri"]),
            section("Bot", &["Jinx"]),
            section("Support", &["Thresh"]),
        ]);

        let meta = extract_meta(&html).unwrap();

        assert!(meta.top.is_empty());
        assert_eq!(meta.jungle, vec!["Vi"]);
    }

    #[test]
    fn test_missing_role_section_fails() {
        let html = tier_list(&[
            section("Intro", &[]),
            section("Top", &["Darius"]),
            section("Jungle", &["Vi"]),
            section("Mid", &["Ahri"]),
            section("Bot", &["Jinx"]),
        ]);

        assert_eq!(
            extract_meta(&html),
            Err(ExtractionError::MissingBlock {
                selector: SECTIONS.to_string(),
                index: 5,
                found: 5,
            })
        );
    }

    #[test]
    fn test_section_without_champion_list_fails() {
        let html = tier_list(&[
            section("Intro", &[]),
            r#"<div class="section"><h2>Top</h2><p>Coming soon</p></div>"#.to_string(),
            section("Jungle", &["Vi"]),
            section("Mid", &["Ahri"]),
            section("Bot", &["Jinx"]),
            section("Support", &["Thresh"]),
        ]);

        assert_eq!(
            extract_meta(&html),
            Err(ExtractionError::MissingElement {
                selector: CHAMPION_LIST.to_string()
            })
        );
    }
}
