use std::collections::BTreeMap;

use axum::{extract::State, response::Html, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::catalog::Skill;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SkillCatalogResponse {
    pub categories: BTreeMap<String, Vec<String>>,
}

/// GET /
///
/// Landing page listing the selectable skills grouped by category.
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let skills = state.catalog.list_skills().await?;
    Ok(Html(render_index(&group_by_category(skills))))
}

/// GET /api/v1/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
) -> Result<Json<SkillCatalogResponse>, AppError> {
    let skills = state.catalog.list_skills().await?;
    Ok(Json(SkillCatalogResponse {
        categories: group_by_category(skills),
    }))
}

/// Groups skills by category. Names keep the order they arrive in.
pub fn group_by_category(skills: Vec<Skill>) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for skill in skills {
        grouped.entry(skill.category).or_default().push(skill.name);
    }
    grouped
}

fn render_index(grouped: &BTreeMap<String, Vec<String>>) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Career Path Explorer</title>\n</head>\n<body>\n\
         <h1>Career Path Explorer</h1>\n<form id=\"skills-form\">\n",
    );
    for (category, names) in grouped {
        html.push_str(&format!(
            "<fieldset>\n<legend>{}</legend>\n",
            escape_html(category)
        ));
        for name in names {
            let name = escape_html(name);
            html.push_str(&format!(
                "<label><input type=\"checkbox\" name=\"skills\" value=\"{name}\"> {name}</label>\n"
            ));
        }
        html.push_str("</fieldset>\n");
    }
    html.push_str("</form>\n</body>\n</html>\n");
    html
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, category: &str) -> Skill {
        Skill {
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_group_by_category() {
        let grouped = group_by_category(vec![
            skill("Communication", "Soft Skills"),
            skill("Python", "Programming"),
            skill("Leadership", "Soft Skills"),
        ]);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["Soft Skills"], vec!["Communication", "Leadership"]);
        assert_eq!(grouped.keys().next().unwrap(), "Programming");
    }

    #[test]
    fn test_index_escapes_labels() {
        let grouped = group_by_category(vec![skill("C<++>", "R&D")]);
        let html = render_index(&grouped);
        assert!(html.contains("<legend>R&amp;D</legend>"));
        assert!(html.contains("value=\"C&lt;++&gt;\""));
        assert!(!html.contains("C<++>"));
    }
}
