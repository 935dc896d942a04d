use crate::catalog::ProjectRecord;

/// Optional blocks of the overlay's content pane, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailSection {
    Overview(&'static str),
    Role(&'static str),
    Tools(String),
    Gallery(&'static [&'static str]),
    Link(&'static str),
}

impl DetailSection {
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            DetailSection::Overview(_) => Some("Overview"),
            DetailSection::Role(_) => Some("Role"),
            DetailSection::Tools(_) => Some("Tools"),
            DetailSection::Gallery(_) | DetailSection::Link(_) => None,
        }
    }
}

/// Sections with data to show. Missing or blank fields produce no section.
pub fn detail_sections(project: &ProjectRecord) -> Vec<DetailSection> {
    let mut sections = Vec::new();
    if let Some(details) = project.details.as_ref() {
        if let Some(overview) = non_blank(details.overview) {
            sections.push(DetailSection::Overview(overview));
        }
        if let Some(role) = non_blank(details.role) {
            sections.push(DetailSection::Role(role));
        }
        let tools: Vec<&str> = details
            .tools
            .iter()
            .map(|tool| tool.trim())
            .filter(|tool| !tool.is_empty())
            .collect();
        if !tools.is_empty() {
            sections.push(DetailSection::Tools(tools.join(", ")));
        }
    }
    if !project.project_images.is_empty() {
        sections.push(DetailSection::Gallery(project.project_images));
    }
    if let Some(link) = project
        .details
        .as_ref()
        .and_then(|details| non_blank(details.link))
    {
        sections.push(DetailSection::Link(link));
    }
    sections
}

fn non_blank(value: Option<&'static str>) -> Option<&'static str> {
    value.filter(|text| !text.trim().is_empty())
}
