//! Document structure contract.
//!
//! The page is described as a flat arena of elements with a role and an
//! optional parent. Event handling dispatches on the role of the target
//! element, so elements added after startup are handled the same way as
//! the initial ones.

use std::collections::HashMap;

use crate::content::PageContent;
use crate::types::{ElementId, SectionId, SurfaceKey};

pub const HEADER_ID: &str = "header";
pub const NAME_TITLE_ID: &str = "name-title";
pub const SKILLS_TRIGGER_ID: &str = "skills-trigger";
pub const GENERATE_TRIGGER_ID: &str = "generate-btn";
pub const RESUME_TOGGLE_ID: &str = "resume-toggle";
pub const RESUME_CONTAINER_ID: &str = "resume-container";
pub const PROJECT_DETAILS_ID: &str = "project-details";
pub const IMAGE_PREVIEW_ID: &str = "image-preview";

/// What an element does when clicked (or that it does nothing)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// Root of an overlay surface; the root is also its backdrop
    Surface(SurfaceKey),
    /// Inner content region of a surface
    SurfaceContent,
    /// Explicit close control, bound to the nearest enclosing surface
    CloseControl,
    /// Injectable content container of a surface
    DetailContainer,
    /// Opens a surface with static content
    OpenSurface(SurfaceKey),
    /// Opens the detail surface for a content key
    DetailTrigger(String),
    /// Opens the image surface for the 1-based plot index
    ImageTrigger(usize),
    ResumeToggle,
    GenerateTrigger,
    AnchorLink(SectionId),
    Section(SectionId),
    Static,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub role: Role,
    pub parent: Option<ElementId>,
}

impl Element {
    pub fn new(id: impl Into<ElementId>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
            parent: None,
        }
    }

    pub fn child_of(mut self, parent: impl Into<ElementId>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

/// Pointer click delivered to the page, identified by its target element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEvent {
    pub target: ElementId,
}

impl PointerEvent {
    pub fn on(target: impl Into<ElementId>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// Element arena keyed by id
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    index: HashMap<ElementId, usize>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element. An element with the same id is replaced.
    pub fn insert(&mut self, element: Element) -> &mut Self {
        match self.index.get(&element.id) {
            Some(&i) => {
                tracing::debug!(id = %element.id, "Replacing document element");
                self.elements[i] = element;
            }
            None => {
                self.index.insert(element.id.clone(), self.elements.len());
                self.elements.push(element);
            }
        }
        self
    }

    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.index.get(id).map(|&i| &self.elements[i])
    }

    pub fn role(&self, id: &ElementId) -> Option<&Role> {
        self.get(id).map(|e| &e.role)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Every surface key declared in the document, in insertion order
    pub fn surfaces(&self) -> impl Iterator<Item = &SurfaceKey> {
        self.elements.iter().filter_map(|e| match &e.role {
            Role::Surface(key) => Some(key),
            _ => None,
        })
    }

    /// The root (backdrop) element of a surface
    pub fn surface_element(&self, key: &SurfaceKey) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| matches!(&e.role, Role::Surface(k) if k == key))
    }

    /// Parent chain of an element, nearest first, excluding the element
    pub fn ancestors<'a>(&'a self, id: &ElementId) -> impl Iterator<Item = &'a Element> + 'a {
        let mut next = self.get(id).and_then(|e| e.parent.clone());
        let mut hops = 0usize;
        let limit = self.elements.len();
        std::iter::from_fn(move || {
            // A malformed parent cycle ends the walk instead of looping
            if hops > limit {
                return None;
            }
            hops += 1;
            let element = self.get(next.as_ref()?)?;
            next = element.parent.clone();
            Some(element)
        })
    }

    /// Closest surface strictly enclosing `id`
    pub fn nearest_surface(&self, id: &ElementId) -> Option<&SurfaceKey> {
        self.ancestors(id).find_map(|e| match &e.role {
            Role::Surface(key) => Some(key),
            _ => None,
        })
    }

    pub fn is_descendant(&self, id: &ElementId, ancestor: &ElementId) -> bool {
        self.ancestors(id).any(|e| &e.id == ancestor)
    }

    /// Injectable container belonging to a surface
    pub fn content_container(&self, key: &SurfaceKey) -> Option<&ElementId> {
        self.elements
            .iter()
            .filter(|e| e.role == Role::DetailContainer)
            .find(|e| self.nearest_surface(&e.id) == Some(key))
            .map(|e| &e.id)
    }

    pub fn has_section(&self, section: SectionId) -> bool {
        self.elements.iter().any(|e| e.role == Role::Section(section))
    }

    /// Declare a surface with its content region, close control and
    /// (optionally) an injectable container.
    pub fn insert_surface(&mut self, key: &SurfaceKey, container: Option<&str>) -> &mut Self {
        let root = ElementId::new(key.as_str());
        let content = surface_content_id(key);
        self.insert(Element::new(root.clone(), Role::Surface(key.clone())))
            .insert(Element::new(content.clone(), Role::SurfaceContent).child_of(root))
            .insert(Element::new(close_control_id(key), Role::CloseControl).child_of(content.clone()));
        if let Some(container) = container {
            self.insert(Element::new(container, Role::DetailContainer).child_of(content));
        }
        self
    }

    /// The portfolio page: navigation, sections, triggers and the three
    /// overlay surfaces.
    pub fn portfolio(content: &PageContent) -> Self {
        let mut doc = Document::new();

        doc.insert(Element::new(HEADER_ID, Role::Static));
        for section in SectionId::ALL {
            doc.insert(Element::new(nav_link_id(section), Role::AnchorLink(section)).child_of(HEADER_ID));
        }
        for section in SectionId::ALL {
            doc.insert(Element::new(section.as_str(), Role::Section(section)));
        }

        doc.insert(Element::new(NAME_TITLE_ID, Role::Static).child_of(SectionId::Home.as_str()));
        doc.insert(
            Element::new(SKILLS_TRIGGER_ID, Role::OpenSurface(SurfaceKey::skills()))
                .child_of(SectionId::Skills.as_str()),
        );

        for record in content.registry.records() {
            doc.insert(
                Element::new(project_card_id(&record.key), Role::DetailTrigger(record.key.clone()))
                    .child_of(SectionId::Projects.as_str()),
            );
        }

        for index in 1..=content.plot_count() {
            doc.insert(
                Element::new(plot_thumb_id(index), Role::ImageTrigger(index))
                    .child_of(SectionId::Visualizations.as_str()),
            );
        }
        doc.insert(
            Element::new(GENERATE_TRIGGER_ID, Role::GenerateTrigger).child_of(SectionId::Visualizations.as_str()),
        );

        doc.insert(Element::new(RESUME_TOGGLE_ID, Role::ResumeToggle).child_of(SectionId::Resume.as_str()));
        doc.insert(Element::new(RESUME_CONTAINER_ID, Role::Static).child_of(SectionId::Resume.as_str()));

        doc.insert_surface(&SurfaceKey::skills(), None);
        doc.insert_surface(&SurfaceKey::detail(), Some(PROJECT_DETAILS_ID));
        doc.insert_surface(&SurfaceKey::image(), Some(IMAGE_PREVIEW_ID));

        doc
    }
}

pub fn surface_content_id(key: &SurfaceKey) -> ElementId {
    ElementId::new(format!("{}-content", key))
}

pub fn close_control_id(key: &SurfaceKey) -> ElementId {
    ElementId::new(format!("{}-close", key))
}

pub fn nav_link_id(section: SectionId) -> ElementId {
    ElementId::new(format!("nav-{}", section))
}

pub fn project_card_id(key: &str) -> ElementId {
    ElementId::new(format!("project-card-{}", key))
}

pub fn plot_thumb_id(index: usize) -> ElementId {
    ElementId::new(format!("plot-thumb-{}", index))
}
