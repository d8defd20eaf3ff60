// src/web/page.rs
// HTML page rendering

use minijinja::{Environment, context};
use serde::Serialize;

use crate::persona::Persona;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Shown when the form is submitted with a blank question
pub const EMPTY_QUESTION_WARNING: &str = "Please enter a question.";

#[derive(Debug, Serialize)]
struct ExpertOption {
    id: &'static str,
    label: &'static str,
}

/// What the page shows besides the static help text
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub selected: String,
    pub question: String,
    pub answer: Option<String>,
    pub warning: Option<String>,
}

impl PageView {
    /// Fresh form with the default expert selected
    pub fn empty() -> Self {
        Self {
            selected: Persona::default().label().to_string(),
            ..Self::default()
        }
    }
}

/// Template environment; `.html` templates are auto-escaped.
pub fn templates() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("index.html", INDEX_TEMPLATE)?;
    Ok(env)
}

pub fn render_index(env: &Environment<'_>, view: &PageView) -> Result<String, minijinja::Error> {
    let experts: Vec<ExpertOption> = Persona::all()
        .iter()
        .map(|p| ExpertOption {
            id: p.id(),
            label: p.label(),
        })
        .collect();

    env.get_template("index.html")?.render(context! {
        experts => experts,
        selected => &view.selected,
        question => &view.question,
        show_answer => view.answer.is_some(),
        answer => view.answer.as_deref().unwrap_or(""),
        warning => &view.warning,
    })
}
