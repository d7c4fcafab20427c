// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use maud::html;

use super::fill_container;
use crate::data::TechCategory;
use crate::document::PageDocument;

pub fn techstack(doc: &mut PageDocument, categories: &[TechCategory]) {
    let items = categories.iter().map(|category| {
        html! {
            div class="tech-category" {
                h3 { (category.category) }
                div class="tech-skills" {
                    @for skill in &category.skills {
                        span class="tech-skill" { (skill) }
                    }
                }
            }
        }
    });
    fill_container(doc, "techstack-content", items);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Template;

    #[test]
    fn test_categories_in_order() {
        let mut doc = PageDocument::new(
            Template::parse(r#"<div id="techstack-content"><div class="skeleton"></div></div>"#)
                .expect("parse"),
        );
        let categories = vec![
            TechCategory {
                category: "Languages".to_string(),
                skills: vec!["Rust".to_string(), "C++".to_string()],
            },
            TechCategory {
                category: "Empty".to_string(),
                skills: vec![],
            },
        ];
        techstack(&mut doc, &categories);
        assert_eq!(
            doc.render().expect("render"),
            concat!(
                r#"<div id="techstack-content">"#,
                r#"<div class="tech-category"><h3>Languages</h3><div class="tech-skills"><span class="tech-skill">Rust</span><span class="tech-skill">C++</span></div></div>"#,
                r#"<div class="tech-category"><h3>Empty</h3><div class="tech-skills"></div></div>"#,
                "</div>"
            )
        );
    }
}
