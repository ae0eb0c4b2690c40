//! Cross-cutting rendering properties, exercised over every template.

use super::*;
use crate::models::cover_letter::CoverLetterData;
use crate::models::customization::{
    CvCustomization, CvLayout, HeaderStyle, LogoPosition, SectionSpacing, SkillBarStyle,
};
use crate::models::cv::{CvData, Education, Experience, PersonalInfo, Skill};
use crate::models::job_proposal::{Deliverable, JobProposalData, Milestone};
use crate::models::skill::SkillLevel;
use crate::models::{Document, DocumentKind};
use crate::render::escape::escape_html;
use crate::templates::registry;

// ────────────────────────────────────────────────────────────────────────────
// Fixtures
// ────────────────────────────────────────────────────────────────────────────

const LAYOUTS: [CvLayout; 3] = [CvLayout::Traditional, CvLayout::Sidebar, CvLayout::Modern];

fn options() -> PrintOptions {
    PrintOptions::default()
}

fn sample_cv() -> CvData {
    CvData {
        personal_info: PersonalInfo {
            full_name: "Ana Ruiz".to_string(),
            title: "Backend Engineer".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+34 600 000 000".to_string(),
            address: "Madrid".to_string(),
            linkedin: "linkedin.com/in/anaruiz".to_string(),
            summary: "Engineer who likes <b>bold</b> claims & tidy systems.".to_string(),
            ..PersonalInfo::default()
        },
        experience: vec![
            Experience {
                id: "1".to_string(),
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                location: "Remote".to_string(),
                start_date: "2020-01".to_string(),
                end_date: "2021-05".to_string(),
                current: true,
                description: "Built things.".to_string(),
            },
            Experience {
                id: "2".to_string(),
                company: "Globex".to_string(),
                position: "Intern".to_string(),
                start_date: "2018-06".to_string(),
                end_date: "2019-12".to_string(),
                ..Experience::default()
            },
        ],
        education: vec![Education {
            id: "3".to_string(),
            institution: "Universidad Complutense".to_string(),
            degree: "BSc".to_string(),
            field: "Computer Science".to_string(),
            start_date: "2014-09".to_string(),
            end_date: "2018-06".to_string(),
            gpa: Some("8.7".to_string()),
        }],
        skills: vec![
            Skill {
                id: "4".to_string(),
                name: "Go".to_string(),
                level: SkillLevel::Experto,
            },
            Skill {
                id: "5".to_string(),
                name: "SQL".to_string(),
                level: SkillLevel::Avanzado,
            },
        ],
        customization: CvCustomization::default(),
    }
}

fn sample_letter() -> CoverLetterData {
    let mut letter = CoverLetterData::new_dated("2024-03-01");
    letter.personal_info.full_name = "Ana Ruiz".to_string();
    letter.personal_info.email = "ana@example.com".to_string();
    letter.recipient_info.name = "Jordan Lee".to_string();
    letter.recipient_info.company = "Initech".to_string();
    letter.recipient_info.address = "1 Main St\nSpringfield".to_string();
    letter.content.position = "Staff Engineer".to_string();
    letter.content.greeting = "Dear Jordan,".to_string();
    letter.content.introduction = "I am writing to apply.".to_string();
    letter.content.body = "First point.\n\nSecond point.".to_string();
    letter.content.closing = "Thank you for your time.".to_string();
    letter
}

fn sample_proposal() -> JobProposalData {
    let mut proposal = JobProposalData::new_dated("2024-03-01");
    proposal.basic_info.company_name = "Ruiz Consulting".to_string();
    proposal.basic_info.company_logo = "https://example.com/logo.png".to_string();
    proposal.basic_info.client_name = "Jordan Lee".to_string();
    proposal.basic_info.client_company = "Initech".to_string();
    proposal.basic_info.project_title = "Billing revamp".to_string();
    proposal.basic_info.introduction = "We propose a phased rollout.".to_string();
    proposal.deliverables = vec![Deliverable {
        id: "d1".to_string(),
        title: "API design".to_string(),
        description: "OpenAPI contract".to_string(),
    }];
    proposal.milestones = vec![Milestone {
        id: "m1".to_string(),
        title: "Kickoff".to_string(),
        description: "Workshops".to_string(),
        deadline: "2024-04-15".to_string(),
        payment: "1.500 €".to_string(),
    }];
    proposal.total_budget = "6.000 €".to_string();
    proposal.terms = "Net 30.".to_string();
    proposal
}

fn cv_with_layout(layout: CvLayout) -> Document {
    let mut cv = sample_cv();
    cv.customization.layout = layout;
    Document::Cv(cv)
}

/// Every (document, template id) combination worth rendering, for sample data.
fn all_combinations(
    cv: CvData,
    letter: CoverLetterData,
    proposal: JobProposalData,
) -> Vec<(Document, &'static str)> {
    let mut combos = Vec::new();
    for info in registry(DocumentKind::Cv) {
        if info.id == "custom" {
            for layout in LAYOUTS {
                let mut cv = cv.clone();
                cv.customization.layout = layout;
                combos.push((Document::Cv(cv), info.id));
            }
        } else {
            combos.push((Document::Cv(cv.clone()), info.id));
        }
    }
    for info in registry(DocumentKind::CoverLetter) {
        combos.push((Document::CoverLetter(letter.clone()), info.id));
    }
    for info in registry(DocumentKind::JobProposal) {
        combos.push((Document::JobProposal(proposal.clone()), info.id));
    }
    combos
}

/// The document part of a print page: from the root container to the script.
fn print_document_part(html: &str) -> &str {
    let start = html
        .find("<div class=\"folio-document\"")
        .expect("print html must contain the document root");
    let end = html.rfind("</body>").expect("print html must close body");
    let end = html[start..end].find("<script").map_or(end, |i| start + i);
    html[start..end].trim_end()
}

/// Values of attribute `name` in document order, still HTML-escaped.
fn print_attr_values<'a>(html: &'a str, name: &str) -> Vec<&'a str> {
    let needle = format!(" {name}=\"");
    let mut values = Vec::new();
    let mut rest = html;
    while let Some(pos) = rest.find(&needle) {
        let after = &rest[pos + needle.len()..];
        let end = after.find('"').expect("attribute must be closed");
        values.push(&after[..end]);
        rest = &after[end..];
    }
    values
}

/// Non-empty text segments between tags, still HTML-escaped.
fn print_texts(html: &str) -> Vec<&str> {
    html.split('<')
        .filter_map(|chunk| chunk.split_once('>').map(|(_, text)| text))
        .filter(|text| !text.is_empty())
        .collect()
}

fn escaped(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(escape_html).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Dispatch
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_unknown_template_renders_nothing() {
    for doc in [
        Document::Cv(sample_cv()),
        Document::CoverLetter(sample_letter()),
        Document::JobProposal(sample_proposal()),
    ] {
        assert!(render_preview(&doc, "nonexistent").is_none());
        assert!(render_print(&doc, "nonexistent", &options()).is_none());
        assert!(render_preview(&doc, "").is_none());
    }
}

#[test]
fn test_every_registry_id_renders() {
    for (doc, id) in all_combinations(sample_cv(), sample_letter(), sample_proposal()) {
        let tree = render_preview(&doc, id).unwrap_or_else(|| panic!("{id} must render"));
        assert_eq!(tree.attr_values("data-template"), [id]);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Determinism
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_rendering_is_deterministic() {
    for (doc, id) in all_combinations(sample_cv(), sample_letter(), sample_proposal()) {
        assert_eq!(render_preview(&doc, id), render_preview(&doc, id), "preview {id}");
        assert_eq!(
            render_print(&doc, id, &options()),
            render_print(&doc, id, &options()),
            "print {id}"
        );
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Conditional-section omission
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_documents_render_no_sections() {
    let combos = all_combinations(
        CvData::default(),
        CoverLetterData::default(),
        JobProposalData::default(),
    );
    for (doc, id) in combos {
        let tree = render_preview(&doc, id).unwrap();
        assert!(
            tree.attr_values("data-section").is_empty(),
            "{:?}/{id} rendered sections for an empty document: {:?}",
            doc.kind(),
            tree.attr_values("data-section")
        );
        let html = render_print(&doc, id, &options()).unwrap();
        assert!(!html.contains("data-section"), "{id} print rendered a section");
        for heading in ["Experience", "Education", "Skills", "Profile", "Deliverables", "Milestones"] {
            assert!(!tree.texts().contains(&heading), "{id} rendered heading {heading}");
        }
    }
}

#[test]
fn test_empty_education_is_omitted_under_every_cv_template() {
    let mut cv = sample_cv();
    cv.education.clear();
    let combos = all_combinations(cv, CoverLetterData::default(), JobProposalData::default());
    for (doc, id) in combos.into_iter().filter(|(d, _)| d.kind() == DocumentKind::Cv) {
        let tree = render_preview(&doc, id).unwrap();
        let sections = tree.attr_values("data-section");
        assert!(!sections.contains(&"education"), "{id}: {sections:?}");
        assert!(sections.contains(&"experience"), "{id}: {sections:?}");
        assert!(!tree.texts().contains(&"Education"));
        let html = render_print(&doc, id, &options()).unwrap();
        assert!(!html.contains("data-section=\"education\""));
    }
}

#[test]
fn test_empty_milestones_are_omitted() {
    let mut proposal = sample_proposal();
    proposal.milestones.clear();
    proposal.terms.clear();
    for info in registry(DocumentKind::JobProposal) {
        let doc = Document::JobProposal(proposal.clone());
        let tree = render_preview(&doc, info.id).unwrap();
        let sections = tree.attr_values("data-section");
        assert!(!sections.contains(&"milestones"), "{}: {sections:?}", info.id);
        assert!(!sections.contains(&"terms"), "{}: {sections:?}", info.id);
        assert!(sections.contains(&"deliverables"));
    }
}

#[test]
fn test_missing_gpa_is_omitted() {
    let mut cv = sample_cv();
    cv.education[0].gpa = None;
    let tree = render_preview(&Document::Cv(cv), "classic").unwrap();
    assert!(!tree.texts().iter().any(|t| t.starts_with("GPA")));

    let tree = render_preview(&Document::Cv(sample_cv()), "classic").unwrap();
    assert!(tree.texts().contains(&"GPA: 8.7"));
}

// ────────────────────────────────────────────────────────────────────────────
// Current-position override
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_current_experience_always_ends_in_present() {
    for end_date in ["", "2021-05", "garbage", "2030-12-31"] {
        let mut cv = sample_cv();
        cv.experience[0].end_date = end_date.to_string();
        let combos = all_combinations(cv, CoverLetterData::default(), JobProposalData::default());
        for (doc, id) in combos.into_iter().filter(|(d, _)| d.kind() == DocumentKind::Cv) {
            let tree = render_preview(&doc, id).unwrap();
            let texts = tree.texts();
            assert!(
                texts.contains(&"January 2020 - Present"),
                "{id} with end date {end_date:?}: {texts:?}"
            );
            assert!(texts.contains(&"June 2018 - December 2019"));
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cross-renderer equivalence
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_preview_and_print_carry_the_same_content() {
    for (doc, id) in all_combinations(sample_cv(), sample_letter(), sample_proposal()) {
        let tree = render_preview(&doc, id).unwrap();
        let html = render_print(&doc, id, &options()).unwrap();
        let part = print_document_part(&html);

        let preview_texts: Vec<String> = escaped(tree.texts())
            .into_iter()
            .filter(|t| !t.is_empty())
            .collect();
        assert_eq!(preview_texts, print_texts(part), "texts differ for {id}");

        for attr in ["data-section", "data-region", "data-percent", "data-filled", "style"] {
            assert_eq!(
                escaped(tree.attr_values(attr)),
                print_attr_values(part, attr),
                "{attr} differs for {id}"
            );
        }
    }
}

#[test]
fn test_gradient_sidebar_resolves_identically_in_both_renderers() {
    let mut cv = sample_cv();
    cv.customization.base.header_color = "#111111".to_string();
    cv.customization.base.accent_color = "#222222".to_string();
    cv.customization.base.header_style = HeaderStyle::Gradient;
    cv.customization.layout = CvLayout::Sidebar;
    let doc = Document::Cv(cv);
    let gradient = "linear-gradient(135deg, #111111, #222222)";

    let tree = render_preview(&doc, "custom").unwrap();
    let sidebar = tree.find_by_attr("data-region", "sidebar").expect("sidebar region");
    let main = tree.find_by_attr("data-region", "main").expect("main region");
    assert!(sidebar.attr_values("style")[0].contains(gradient));
    assert!(sidebar.texts().contains(&"Ana Ruiz"));
    assert_eq!(sidebar.attr_values("data-section"), ["skills"]);
    assert_eq!(main.attr_values("data-section"), ["summary", "experience", "education"]);
    assert!(tree.find_by_attr("data-region", "header").is_none());

    let html = render_print(&doc, "custom", &options()).unwrap();
    let part = print_document_part(&html);
    let aside_start = part.find("<aside").unwrap();
    let aside_end = part.find("</aside>").unwrap();
    let aside = &part[aside_start..aside_end];
    assert!(aside.contains(gradient));
    assert!(aside.contains("Ana Ruiz"));
    assert_eq!(print_attr_values(aside, "data-section"), ["skills"]);
    assert_eq!(
        print_attr_values(&part[aside_end..], "data-section"),
        ["summary", "experience", "education"]
    );
}

/// `property` value in an inline style string.
fn style_value<'a>(style: &'a str, property: &str) -> Option<&'a str> {
    style.split("; ").find_map(|decl| {
        let (prop, value) = decl.split_once(": ")?;
        (prop == property).then_some(value)
    })
}

#[test]
fn test_sidebar_headings_stay_readable_on_the_sidebar_fill() {
    let mut cv = sample_cv();
    cv.customization.base.header_color = "#111111".to_string();
    cv.customization.base.header_style = HeaderStyle::Solid;
    cv.customization.layout = CvLayout::Sidebar;
    let custom = Document::Cv(cv);
    let creative = Document::Cv(sample_cv());

    for (doc, template) in [(&creative, "creative"), (&custom, "custom")] {
        let tree = render_preview(doc, template).unwrap();
        let sidebar = tree.find_by_attr("data-region", "sidebar").expect("sidebar region");
        let fill = style_value(sidebar.attr_values("style")[0], "background-color").unwrap();
        let heading = sidebar.find_by_attr("class", "folio-heading").expect("sidebar heading");
        let color = style_value(heading.attr_values("style")[0], "color").unwrap();
        assert_ne!(color, fill, "{template}: sidebar heading is drawn in the sidebar fill color");
        assert_eq!(color, "#ffffff", "{template}: sidebar heading must use the sidebar text color");

        let html = render_print(doc, template, &options()).unwrap();
        let part = print_document_part(&html);
        let aside = &part[part.find("<aside").unwrap()..part.find("</aside>").unwrap()];
        let print_fill = style_value(print_attr_values(aside, "style")[0], "background-color").unwrap();
        let h2 = &aside[aside.find("<h2").expect("printed sidebar heading")..];
        let print_color = style_value(print_attr_values(h2, "style")[0], "color").unwrap();
        assert_eq!(print_fill, fill);
        assert_ne!(print_color, print_fill, "{template}: printed sidebar heading matches the fill");
        assert_eq!(print_color, color);
    }
}

#[test]
fn test_modern_layout_splits_history_from_profile() {
    let tree = render_preview(&cv_with_layout(CvLayout::Modern), "custom").unwrap();
    let left = tree.find_by_attr("data-region", "left").unwrap();
    let right = tree.find_by_attr("data-region", "right").unwrap();
    assert_eq!(left.attr_values("data-section"), ["experience", "education"]);
    assert_eq!(right.attr_values("data-section"), ["summary", "skills"]);
    assert!(tree.find_by_attr("data-region", "header").is_some());
}

#[test]
fn test_traditional_layout_is_single_column() {
    let tree = render_preview(&cv_with_layout(CvLayout::Traditional), "custom").unwrap();
    let main = tree.find_by_attr("data-region", "main").unwrap();
    assert_eq!(
        main.attr_values("data-section"),
        ["summary", "experience", "education", "skills"]
    );
    assert!(tree.find_by_attr("data-region", "sidebar").is_none());
}

// ────────────────────────────────────────────────────────────────────────────
// Customization independence of fixed templates
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_fixed_templates_ignore_customization() {
    let plain = sample_cv();
    let mut loud = sample_cv();
    loud.customization = CvCustomization {
        show_skill_bars: false,
        skill_bar_style: SkillBarStyle::Circles,
        layout: CvLayout::Sidebar,
        ..CvCustomization::default()
    };
    loud.customization.base.header_color = "#ff0000".to_string();
    loud.customization.base.header_style = HeaderStyle::Pattern;
    loud.customization.base.section_spacing = SectionSpacing::Spacious;
    loud.customization.base.show_icons = false;

    for id in ["modern", "classic", "creative"] {
        let a = Document::Cv(plain.clone());
        let b = Document::Cv(loud.clone());
        assert_eq!(render_preview(&a, id), render_preview(&b, id), "cv {id}");
        assert_eq!(render_print(&a, id, &options()), render_print(&b, id, &options()));
    }

    let plain = sample_letter();
    let mut loud = sample_letter();
    let mut custom = crate::models::customization::Customization::default();
    custom.header_color = "#ff0000".to_string();
    custom.show_icons = false;
    loud.customization = Some(custom);
    for id in ["professional", "modern", "creative"] {
        let a = Document::CoverLetter(plain.clone());
        let b = Document::CoverLetter(loud.clone());
        assert_eq!(render_preview(&a, id), render_preview(&b, id), "letter {id}");
    }

    let plain = sample_proposal();
    let mut loud = sample_proposal();
    loud.customization.logo_position = LogoPosition::Right;
    loud.customization.base.accent_color = "#00ff00".to_string();
    for id in ["professional", "modern"] {
        let a = Document::JobProposal(plain.clone());
        let b = Document::JobProposal(loud.clone());
        assert_eq!(render_preview(&a, id), render_preview(&b, id), "proposal {id}");
    }
}

#[test]
fn test_custom_template_reacts_to_customization() {
    let plain = Document::Cv(sample_cv());
    let mut cv = sample_cv();
    cv.customization.base.header_color = "#ff0000".to_string();
    let tinted = Document::Cv(cv);
    assert_ne!(render_preview(&plain, "custom"), render_preview(&tinted, "custom"));
}

// ────────────────────────────────────────────────────────────────────────────
// Skill display
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_custom_skill_styles() {
    let mut cv = sample_cv();
    cv.customization.skill_bar_style = SkillBarStyle::Circles;
    let tree = render_preview(&Document::Cv(cv.clone()), "custom").unwrap();
    // Experto → 5 of 5, Avanzado → 3 of 5
    assert_eq!(tree.attr_values("data-filled"), ["5", "3"]);
    assert_eq!(tree.attr_values("data-total"), ["5", "5"]);

    cv.customization.skill_bar_style = SkillBarStyle::Dots;
    let tree = render_preview(&Document::Cv(cv.clone()), "custom").unwrap();
    assert_eq!(tree.attr_values("data-filled"), ["4", "3"]);
    assert_eq!(tree.attr_values("data-total"), ["4", "4"]);

    cv.customization.show_skill_bars = false;
    let tree = render_preview(&Document::Cv(cv), "custom").unwrap();
    assert!(tree.attr_values("data-filled").is_empty());
    assert!(tree.attr_values("data-percent").is_empty());
    assert!(tree.texts().contains(&"Go"));
    assert!(tree.texts().contains(&"Experto"));
}

#[test]
fn test_unknown_skill_level_renders_at_half() {
    let mut cv = sample_cv();
    cv.skills[0].level = SkillLevel::from("Wizard");
    let tree = render_preview(&Document::Cv(cv), "custom").unwrap();
    assert_eq!(tree.attr_values("data-percent"), ["50", "75"]);
    assert!(tree.texts().contains(&"Wizard"));
}

// ────────────────────────────────────────────────────────────────────────────
// Icons, logo, spacing
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_show_icons_toggles_glyphs() {
    let mut cv = sample_cv();
    cv.customization.base.show_icons = true;
    let with_icons = render_preview(&Document::Cv(cv.clone()), "custom").unwrap();
    assert!(with_icons.to_html().contains("folio-icon"));

    cv.customization.base.show_icons = false;
    let without = render_preview(&Document::Cv(cv), "custom").unwrap();
    assert!(!without.to_html().contains("folio-icon"));
}

#[test]
fn test_logo_position_only_applies_with_a_logo() {
    let mut proposal = sample_proposal();
    proposal.customization.logo_position = LogoPosition::Right;
    let tree = render_preview(&Document::JobProposal(proposal.clone()), "custom").unwrap();
    let html = tree.to_html();
    assert!(html.contains("<div class=\"folio-logo\" style=\"text-align: right\">"), "{html}");

    proposal.basic_info.company_logo.clear();
    let tree = render_preview(&Document::JobProposal(proposal), "custom").unwrap();
    assert!(!tree.to_html().contains("folio-logo"));
}

#[test]
fn test_section_spacing_applies_to_every_section() {
    let mut letter = sample_letter();
    let mut custom = crate::models::customization::Customization::default();
    custom.section_spacing = SectionSpacing::Compact;
    letter.customization = Some(custom);
    let tree = render_preview(&Document::CoverLetter(letter), "custom").unwrap();
    let html = tree.to_html();
    let sections = tree.attr_values("data-section").len();
    assert!(sections >= 4);
    assert_eq!(html.matches("margin-bottom: 0.75rem").count(), sections);
}

#[test]
fn test_cover_letter_without_customization_uses_defaults_for_custom() {
    let letter = sample_letter();
    assert!(letter.customization.is_none());
    let tree = render_preview(&Document::CoverLetter(letter), "custom").unwrap();
    let header = tree.find_by_attr("data-region", "header").unwrap();
    assert!(header.attr_values("style")[0].contains("background-color: #2563eb"));
}

// ────────────────────────────────────────────────────────────────────────────
// Escaping
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_markup_in_fields_cannot_break_structure() {
    let mut cv = sample_cv();
    cv.personal_info.full_name = "<script>alert(\"x\")</script> & Co".to_string();
    cv.experience[0].company = "</div></section><h1>".to_string();
    cv.customization.base.header_color = "red\" onload=\"evil()".to_string();
    let doc = Document::Cv(cv);

    for id in ["modern", "custom"] {
        let html = render_print(&doc, id, &options()).unwrap();
        assert!(!html.contains("<script>alert"), "{id}");
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; Co"));
        assert!(!html.contains("</div></section><h1>"));
        assert!(!html.contains("onload=\"evil()"));
        assert_eq!(html.matches("<script>").count(), 1, "only the print script");
        assert_eq!(
            html.matches("<section").count(),
            html.matches("</section>").count()
        );

        let fragment = render_preview(&doc, id).unwrap().to_html();
        assert!(!fragment.contains("<script>"));
        assert!(!fragment.contains("</div></section><h1>"));
    }
}

#[test]
fn test_print_script_is_optional() {
    let doc = Document::Cv(sample_cv());
    let quiet = PrintOptions {
        auto_print: false,
        settle_delay_ms: 0,
    };
    let html = render_print(&doc, "modern", &quiet).unwrap();
    assert!(!html.contains("<script"));
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Ana Ruiz - CV</title>"));

    let html = render_print(&doc, "modern", &PrintOptions { auto_print: true, settle_delay_ms: 750 })
        .unwrap();
    assert!(html.contains("window.print()"));
    assert!(html.contains("}, 750)"));
}

// ────────────────────────────────────────────────────────────────────────────
// End-to-end scenario
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_end_to_end_custom_traditional_cv() {
    let cv = CvData {
        personal_info: PersonalInfo {
            full_name: "Ana Ruiz".to_string(),
            ..PersonalInfo::default()
        },
        experience: vec![Experience {
            id: "1".to_string(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2020-01".to_string(),
            end_date: String::new(),
            current: true,
            ..Experience::default()
        }],
        education: vec![],
        skills: vec![Skill {
            id: "2".to_string(),
            name: "Go".to_string(),
            level: SkillLevel::Experto,
        }],
        customization: serde_json::from_str(
            r##"{
                "layout": "traditional",
                "header_style": "solid",
                "header_color": "#112233",
                "accent_color": "#445566",
                "show_skill_bars": true,
                "skill_bar_style": "bars",
                "section_spacing": "normal",
                "show_icons": false
            }"##,
        )
        .unwrap(),
    };
    let doc = Document::Cv(cv);

    let tree = render_preview(&doc, "custom").unwrap();
    let header = tree.find_by_attr("data-region", "header").unwrap();
    assert!(header.attr_values("style")[0].contains("background-color: #112233"));
    assert!(!header.attr_values("style")[0].contains("gradient"));
    assert_eq!(header.texts(), ["Ana Ruiz"]);

    assert_eq!(tree.attr_values("data-section"), ["experience", "skills"]);

    let experience = tree.find_by_attr("data-section", "experience").unwrap();
    let texts = experience.texts();
    assert!(texts.contains(&"Engineer"));
    assert!(texts.contains(&"Acme"));
    assert!(texts.contains(&"January 2020 - Present"));

    let skills = tree.find_by_attr("data-section", "skills").unwrap();
    assert!(skills.texts().contains(&"Go"));
    assert_eq!(skills.attr_values("data-percent"), ["100"]);
    assert!(skills
        .attr_values("style")
        .contains(&"width: 100%; background-color: #445566"));

    let html = render_print(&doc, "custom", &options()).unwrap();
    assert!(html.contains("background-color: #112233"));
    assert!(html.contains("Ana Ruiz"));
    assert!(!html.contains("data-section=\"education\""));
    assert!(html.contains("January 2020 - Present"));
    assert!(html.contains("width: 100%; background-color: #445566"));
}
