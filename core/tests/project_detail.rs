use folio_core::{catalog, detail_sections, DetailSection, ProjectDetails, ProjectRecord};

static BARE: ProjectRecord = ProjectRecord {
    id: "bare",
    title: "Bare",
    description: "No details at all.",
    category: "Test",
    year: "2020",
    image: None,
    details: None,
    project_images: &[],
};

static PARTIAL: ProjectRecord = ProjectRecord {
    id: "partial",
    title: "Partial",
    description: "Role only.",
    category: "Test",
    year: "2021",
    image: None,
    details: Some(ProjectDetails {
        overview: Some("   "),
        role: Some("Designer"),
        tools: &["", "  "],
        link: Some("https://example.com/case-study"),
    }),
    project_images: &["https://i.pinimg.com/a.jpg"],
};

#[test]
fn project_without_details_has_no_sections() {
    assert!(detail_sections(&BARE).is_empty());
}

#[test]
fn blank_fields_are_omitted() {
    let sections = detail_sections(&PARTIAL);
    assert_eq!(
        sections,
        vec![
            DetailSection::Role("Designer"),
            DetailSection::Gallery(&["https://i.pinimg.com/a.jpg"]),
            DetailSection::Link("https://example.com/case-study"),
        ]
    );
    assert_eq!(sections[0].heading(), Some("Role"));
    assert_eq!(sections[1].heading(), None);
}

#[test]
fn tools_are_joined_in_order() {
    let project = catalog()
        .iter()
        .find(|entry| entry.details.is_some_and(|details| !details.tools.is_empty()))
        .expect("catalog has a project with tools");
    let details = project.details.expect("details");
    let sections = detail_sections(project);
    assert!(sections.contains(&DetailSection::Tools(details.tools.join(", "))));
}
