//! Preview materialiser: turns a [`Page`] into an on-screen visual tree.
//!
//! The tree serialises to JSON for interactive front ends and to an HTML
//! fragment for direct embedding.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::render::escape::escape_html;
use crate::render::page::{
    Block, Body, EntryBlock, Identity, MilestoneBlock, Page, Section, SkillBlock, SkillMeter, Theme,
};
use crate::render::style::{self, Declarations};

// ────────────────────────────────────────────────────────────────────────────
// Tree types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<&'static str, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: BTreeMap::new(),
        children: Vec::new(),
    }
}

impl Element {
    fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value.into());
        self
    }

    fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    fn style(self, decls: &Declarations) -> Self {
        if decls.is_empty() {
            return self;
        }
        self.attr("style", style::inline(decls))
    }

    fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text { text: text.into() })
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

const VOID_TAGS: &[&str] = &["img", "br", "hr", "meta"];

impl Node {
    /// Serialises the tree as an HTML fragment with all text escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(&escape_html(text)),
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                for (name, value) in &element.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_html(value));
                    out.push('"');
                }
                out.push('>');
                if VOID_TAGS.contains(&element.tag) {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(element.tag);
                out.push('>');
            }
        }
    }
}

#[cfg(test)]
impl Node {
    /// All text nodes in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut texts = Vec::new();
        self.walk(&mut |node| {
            if let Node::Text { text } = node {
                texts.push(text.as_str());
            }
        });
        texts
    }

    /// Values of attribute `name` across all elements, in document order.
    pub fn attr_values(&self, name: &str) -> Vec<&str> {
        let mut values = Vec::new();
        self.walk(&mut |node| {
            if let Node::Element(element) = node {
                if let Some(value) = element.attrs.get(name) {
                    values.push(value.as_str());
                }
            }
        });
        values
    }

    /// First node whose element carries `name="value"`.
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&Node> {
        let Node::Element(element) = self else {
            return None;
        };
        if element.attrs.get(name).map(String::as_str) == Some(value) {
            return Some(self);
        }
        element
            .children
            .iter()
            .find_map(|child| child.find_by_attr(name, value))
    }

    fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Node)) {
        visit(self);
        if let Node::Element(element) = self {
            for child in &element.children {
                child.walk(visit);
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Materialisation
// ────────────────────────────────────────────────────────────────────────────

/// Builds the preview tree for a resolved page.
pub fn materialize(page: &Page) -> Node {
    let theme = &page.theme;
    let mut root = el("div")
        .class("folio-document")
        .attr("data-kind", page.kind.as_str())
        .attr("data-template", page.template)
        .style(&style::page_declarations(theme));

    if let Some(header) = &page.header {
        root = root.child(identity(header, "header", theme).attr("data-region", "header"));
    }

    let body = match &page.body {
        Body::Single { sections } => el("div")
            .class("folio-body")
            .attr("data-region", "main")
            .children(sections.iter().map(|s| section(s, theme))),
        Body::Sidebar {
            identity: sidebar_identity,
            sidebar,
            main,
        } => {
            let sidebar_theme = style::sidebar_theme(theme, &sidebar_identity.text_color);
            el("div")
                .class("folio-columns folio-sidebar-layout")
                .child(
                    el("aside")
                        .class("folio-sidebar")
                        .attr("data-region", "sidebar")
                        .style(&style::identity_declarations(
                            &sidebar_identity.background,
                            &sidebar_identity.text_color,
                            sidebar_identity.align,
                        ))
                        .child(identity(sidebar_identity, "div", theme))
                        .children(sidebar.iter().map(|s| section(s, &sidebar_theme))),
                )
                .child(
                    el("main")
                        .class("folio-main")
                        .attr("data-region", "main")
                        .children(main.iter().map(|s| section(s, theme))),
                )
        }
        Body::Split { left, right } => el("div")
            .class("folio-columns folio-split")
            .child(
                el("div")
                    .class("folio-column")
                    .attr("data-region", "left")
                    .children(left.iter().map(|s| section(s, theme))),
            )
            .child(
                el("div")
                    .class("folio-column")
                    .attr("data-region", "right")
                    .children(right.iter().map(|s| section(s, theme))),
            ),
    };

    root.child(body).into()
}

fn identity(identity: &Identity, tag: &'static str, theme: &Theme) -> Element {
    let mut node = el(tag)
        .class("folio-identity")
        .style(&style::identity_declarations(
            &identity.background,
            &identity.text_color,
            identity.align,
        ));

    if let Some(logo) = &identity.logo {
        node = node.child(
            el("div")
                .class("folio-logo")
                .style(&vec![("text-align", style::align_value(logo.align).to_string())])
                .child(
                    el("img")
                        .attr("src", logo.src.as_str())
                        .attr("alt", "Logo")
                        .style(&vec![("border-radius", style::radius(theme))]),
                ),
        );
    }
    if let Some(name) = &identity.name {
        node = node.child(el("h1").class("folio-name").text(name.as_str()));
    }
    if let Some(headline) = &identity.headline {
        node = node.child(el("p").class("folio-headline").text(headline.as_str()));
    }
    if !identity.contacts.is_empty() {
        node = node.child(el("ul").class("folio-contacts").children(
            identity.contacts.iter().map(|contact| {
                let mut item = el("li").class("folio-contact");
                if let Some(icon) = contact.icon {
                    item = item.child(el("span").class("folio-icon").text(icon.glyph()));
                }
                item.child(el("span").text(contact.text.as_str()))
            }),
        ));
    }
    node
}

fn section(section: &Section, theme: &Theme) -> Element {
    let mut node = el("section")
        .class("folio-section")
        .attr("data-section", section.kind.as_str())
        .style(&style::section_declarations(theme));

    if let Some(heading) = &section.heading {
        let mut h = el("h2")
            .class("folio-heading")
            .style(&style::heading_declarations(theme));
        if let Some(icon) = section.icon {
            h = h.child(el("span").class("folio-icon").text(icon.glyph()));
        }
        node = node.child(h.text(heading.as_str()));
    }

    node.children(section.blocks.iter().map(|b| block(b, theme)))
}

fn block(block: &Block, theme: &Theme) -> Element {
    match block {
        Block::Paragraph { text } => el("p").class("folio-paragraph").text(text.as_str()),
        Block::Lines { lines } => el("div")
            .class("folio-lines")
            .children(lines.iter().map(|line| el("div").text(line.as_str()))),
        Block::Field { label, value } => el("div")
            .class("folio-field")
            .child(el("span").class("folio-field-label").text(label.as_str()))
            .child(el("span").class("folio-field-value").text(value.as_str())),
        Block::Entry(entry) => entry_block(entry),
        Block::Skill(skill) => skill_block(skill, theme),
        Block::Milestone(milestone) => milestone_block(milestone),
    }
}

fn entry_block(entry: &EntryBlock) -> Element {
    let mut head = el("div")
        .class("folio-entry-head")
        .child(el("h3").class("folio-entry-title").text(entry.title.as_str()));
    if let Some(dates) = &entry.dates {
        head = head.child(el("span").class("folio-entry-dates").text(dates.as_str()));
    }

    let mut node = el("div").class("folio-entry").child(head);
    if entry.subtitle.is_some() || entry.location.is_some() {
        let mut line = el("div").class("folio-entry-subline");
        if let Some(subtitle) = &entry.subtitle {
            line = line.child(el("span").class("folio-entry-subtitle").text(subtitle.as_str()));
        }
        if let Some(location) = &entry.location {
            line = line.child(el("span").class("folio-entry-location").text(location.as_str()));
        }
        node = node.child(line);
    }
    if let Some(details) = &entry.details {
        node = node.child(el("p").class("folio-entry-details").text(details.as_str()));
    }
    node
}

fn skill_block(skill: &SkillBlock, theme: &Theme) -> Element {
    let node = el("div").class("folio-skill").child(
        el("div")
            .class("folio-skill-head")
            .child(el("span").class("folio-skill-name").text(skill.name.as_str()))
            .child(el("span").class("folio-skill-level").text(skill.level.as_str())),
    );

    match skill.meter {
        SkillMeter::Label => node,
        SkillMeter::Bar { percent } => node.child(
            el("div")
                .class("folio-skill-track")
                .style(&vec![("border-radius", style::radius(theme))])
                .child(
                    el("div")
                        .class("folio-skill-fill")
                        .attr("data-percent", percent.to_string())
                        .style(&style::skill_fill_declarations(percent, &skill.color)),
                ),
        ),
        SkillMeter::Circles { filled, total } => node.child(marks("circle", filled, total, &skill.color)),
        SkillMeter::Dots { filled, total } => node.child(marks("dot", filled, total, &skill.color)),
    }
}

fn marks(shape: &'static str, filled: u8, total: u8, color: &str) -> Element {
    el("div")
        .class("folio-skill-marks")
        .attr("data-filled", filled.to_string())
        .attr("data-total", total.to_string())
        .children((0..total).map(|i| {
            let is_filled = i < filled;
            el("span")
                .class(&format!(
                    "folio-skill-mark {shape}{}",
                    if is_filled { " filled" } else { "" }
                ))
                .style(&style::skill_mark_declarations(is_filled, color))
        }))
}

fn milestone_block(milestone: &MilestoneBlock) -> Element {
    let mut head = el("div")
        .class("folio-milestone-head")
        .child(el("h3").class("folio-milestone-title").text(milestone.title.as_str()));
    if let Some(payment) = &milestone.payment {
        head = head.child(el("span").class("folio-milestone-payment").text(payment.as_str()));
    }

    let mut node = el("div").class("folio-milestone").child(head);
    if let Some(deadline) = &milestone.deadline {
        node = node.child(el("div").class("folio-milestone-deadline").text(deadline.as_str()));
    }
    if let Some(description) = &milestone.description {
        node = node.child(el("p").class("folio-entry-details").text(description.as_str()));
    }
    node
}
