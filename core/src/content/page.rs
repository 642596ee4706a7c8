//! Page model: a title, an intro and a list of typed sections.

use serde::Deserialize;

use super::service::FlowStep;

#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub title: String,
    pub intro: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Implementation-flow steps (service pages only).
    #[serde(default)]
    pub flow: Vec<FlowStep>,
}

impl Page {
    /// Hero carousel slides, empty when the page has no carousel.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        self.sections
            .iter()
            .find_map(|section| match section {
                Section::Carousel { slides } => Some(slides.as_slice()),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Title and subtitle of the opt-in form, if the page hosts one.
    #[must_use]
    pub fn form(&self) -> Option<(&str, &str)> {
        self.sections.iter().find_map(|section| match section {
            Section::Form { title, subtitle } => Some((title.as_str(), subtitle.as_str())),
            _ => None,
        })
    }

    #[must_use]
    pub fn flow_step(&self, id: &str) -> Option<&FlowStep> {
        self.flow.iter().find(|step| step.id == id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Carousel {
        slides: Vec<Slide>,
    },
    Cards {
        title: String,
        intro: Option<String>,
        items: Vec<Card>,
    },
    Steps {
        title: String,
        intro: Option<String>,
        items: Vec<ProcessStep>,
    },
    Stats {
        title: Option<String>,
        intro: Option<String>,
        items: Vec<Stat>,
    },
    Checklist {
        title: String,
        intro: Option<String>,
        items: Vec<String>,
    },
    Callout {
        title: String,
        body: String,
        #[serde(default)]
        points: Vec<String>,
        link_label: Option<String>,
        link: Option<String>,
    },
    /// The implementation-flow grid; steps live in [`Page::flow`].
    Flow {
        title: String,
        intro: String,
    },
    Contacts {
        title: String,
        intro: String,
        #[serde(default)]
        hours: Vec<HoursRow>,
        note: Option<String>,
    },
    Faq {
        title: String,
        intro: Option<String>,
        items: Vec<FaqItem>,
    },
    /// Where the opt-in form sits on the page.
    Form {
        title: String,
        subtitle: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slide {
    pub badge: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub points: Vec<String>,
    pub link_label: String,
    pub link: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub badge: Option<String>,
    #[serde(default)]
    pub points: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandledBy {
    Hyperlink,
    Customer,
    Both,
}

impl HandledBy {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            HandledBy::Hyperlink => "Handled by Hyperlink",
            HandledBy::Customer => "Customer Action",
            HandledBy::Both => "Collaborative",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessStep {
    pub number: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
    pub handled_by: Option<HandledBy>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub change: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HoursRow {
    pub days: String,
    pub time: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}
