//! Service sheets: one per messaging channel, each with an implementation
//! flow whose steps open in the flow-step dialog.

use serde::Deserialize;

use super::page::{Card, HandledBy, Page, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

impl StepStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StepStatus::Completed => "Completed",
            StepStatus::Active => "In progress",
            StepStatus::Pending => "Pending",
        }
    }
}

/// Detail record for one step of a service's implementation flow.
#[derive(Debug, Clone, Deserialize)]
pub struct FlowStep {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub status: StepStatus,
    pub handled_by: HandledBy,
    pub what_is_this: String,
    pub why_it_exists: String,
    pub before: String,
    pub after: String,
    pub hyperlink_handles: Vec<String>,
    pub customer_handles: Vec<String>,
    /// Empty when the step has no regulatory notes; the section is then omitted.
    #[serde(default)]
    pub compliance: Vec<String>,
    pub timeline: String,
    pub failures: String,
}

#[derive(Debug, Deserialize)]
struct ServiceSheet {
    name: String,
    summary: String,
    features_title: String,
    features: Vec<String>,
    flow_title: String,
    flow_intro: String,
    #[serde(default)]
    highlights: Vec<Highlight>,
    cta_title: String,
    cta_body: String,
    cta_points: Vec<String>,
    form_title: String,
    form_subtitle: String,
    steps: Vec<FlowStep>,
}

#[derive(Debug, Deserialize)]
struct Highlight {
    title: String,
    description: String,
}

impl ServiceSheet {
    fn into_page(self) -> Page {
        let mut sections = vec![
            Section::Checklist {
                title: self.features_title,
                intro: None,
                items: self.features,
            },
            Section::Flow {
                title: self.flow_title,
                intro: self.flow_intro,
            },
        ];
        if !self.highlights.is_empty() {
            sections.push(Section::Cards {
                title: "What You Get in Your Dashboard".to_string(),
                intro: Some(
                    "After the entire process, here's what you'll see and control.".to_string(),
                ),
                items: self
                    .highlights
                    .into_iter()
                    .map(|h| Card {
                        title: h.title,
                        description: h.description,
                        badge: None,
                        points: Vec::new(),
                        link: None,
                    })
                    .collect(),
            });
        }
        sections.push(Section::Callout {
            title: self.cta_title,
            body: self.cta_body,
            points: self.cta_points,
            link_label: None,
            link: None,
        });
        sections.push(Section::Form {
            title: self.form_title,
            subtitle: self.form_subtitle,
        });

        Page {
            title: self.name,
            intro: self.summary,
            sections,
            flow: self.steps,
        }
    }
}

pub(super) fn parse_service(raw: &'static str) -> Result<Page, toml::de::Error> {
    toml::from_str::<ServiceSheet>(raw).map(ServiceSheet::into_page)
}
