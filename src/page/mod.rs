// ABOUTME: In-memory page document that the wizard reads from and writes to
// Elements live in an arena addressed by ElementId; class lists drive visibility

pub mod builder;
pub mod controls;

pub use builder::{
    build_page, AddonHandle, BillingHandles, NavigationHandles, SignupForm, SummaryHandles,
};
pub use controls::{InputControl, InputKind};

use std::collections::{BTreeMap, BTreeSet};

/// Class that hides an element (and everything below it) from rendering
pub const CLASS_HIDDEN: &str = "hidden";
/// Class that marks a highlighted step indicator
pub const CLASS_ACTIVE: &str = "active";

/// Handle to an element in a [`Page`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Colour role applied to caption text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Emphasis,
    Muted,
}

/// A constraint violation surfaced to the user on a specific control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub element: ElementId,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub html_id: Option<String>,
    pub text: String,
    pub tone: Option<Tone>,
    pub dataset: BTreeMap<String, String>,
    pub control: Option<InputControl>,
    classes: BTreeSet<String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            html_id: None,
            text: String::new(),
            tone: None,
            dataset: BTreeMap::new(),
            control: None,
            classes: BTreeSet::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// The document tree. Handles stay valid until their subtree is removed with
/// [`Page::remove_children`]; removed slots are reused by later elements.
#[derive(Debug, Clone)]
pub struct Page {
    elements: Vec<Element>,
    free: Vec<ElementId>,
    root: ElementId,
    focused: Option<ElementId>,
    report: Option<ValidationReport>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            elements: vec![Element::new("body")],
            free: Vec::new(),
            root: ElementId(0),
            focused: None,
            report: None,
        }
    }

    pub const fn root(&self) -> ElementId {
        self.root
    }

    pub fn create_element(&mut self, tag: &str) -> ElementId {
        if let Some(id) = self.free.pop() {
            self.elements[id.0] = Element::new(tag);
            return id;
        }
        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(tag));
        id
    }

    /// Arena slots in use, live or free
    pub fn slot_count(&self) -> usize {
        self.elements.len()
    }

    /// Create an element carrying an `id` attribute
    pub fn create_with_id(&mut self, tag: &str, html_id: &str) -> ElementId {
        let id = self.create_element(tag);
        self.elements[id.0].html_id = Some(html_id.to_string());
        id
    }

    /// Append `child` to `parent`, detaching it from any previous parent
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        self.detach(child);
        self.elements[child.0].parent = Some(parent);
        self.elements[parent.0].children.push(child);
    }

    fn detach(&mut self, child: ElementId) {
        if let Some(old) = self.elements[child.0].parent.take() {
            self.elements[old.0].children.retain(|c| *c != child);
        }
    }

    /// Delete every descendant of `id` and hand their slots back for reuse.
    /// Handles to the removed elements must not be used afterwards.
    pub fn remove_children(&mut self, id: ElementId) {
        let removed = self.descendants(id);
        self.elements[id.0].children.clear();
        for gone in removed {
            if self.focused == Some(gone) {
                self.focused = None;
            }
            if self.report.as_ref().is_some_and(|r| r.element == gone) {
                self.report = None;
            }
            self.elements[gone.0] = Element::new("");
            self.free.push(gone);
        }
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    pub fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        &self.elements[id.0].children
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements[id.0].parent
    }

    /// All descendants of `id` in document (pre-)order, excluding `id` itself
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Whether `id` is reachable from the root
    pub fn is_attached(&self, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(el) = current {
            if el == self.root {
                return true;
            }
            current = self.parent(el);
        }
        false
    }

    pub fn get_element_by_id(&self, html_id: &str) -> Option<ElementId> {
        self.descendants(self.root)
            .into_iter()
            .find(|id| self.element(*id).html_id.as_deref() == Some(html_id))
    }

    pub fn find_by_class(&self, scope: ElementId, class: &str) -> Vec<ElementId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| self.has_class(*id, class))
            .collect()
    }

    // Class list

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements[id.0].has_class(class)
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        self.elements[id.0].classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        self.elements[id.0].classes.remove(class);
    }

    /// Add `class` when `force` is true, remove it otherwise
    pub fn toggle_class(&mut self, id: ElementId, class: &str, force: bool) {
        if force {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.has_class(id, CLASS_HIDDEN)
    }

    /// Attached with no hidden ancestor-or-self
    pub fn is_rendered(&self, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(el) = current {
            if self.is_hidden(el) {
                return false;
            }
            if el == self.root {
                return true;
            }
            current = self.parent(el);
        }
        false
    }

    // Text and presentation

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        self.elements[id.0].text = text.into();
    }

    pub fn text(&self, id: ElementId) -> &str {
        &self.elements[id.0].text
    }

    /// Own text followed by the text of every rendered descendant, space separated
    pub fn inner_text(&self, id: ElementId) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if !self.text(id).is_empty() {
            parts.push(self.text(id));
        }
        for child in self.descendants(id) {
            if self.is_hidden(child) || self.ancestors_hidden_below(child, id) {
                continue;
            }
            let text = self.text(child);
            if !text.is_empty() {
                parts.push(text);
            }
        }
        parts.join(" ")
    }

    fn ancestors_hidden_below(&self, id: ElementId, scope: ElementId) -> bool {
        let mut current = self.parent(id);
        while let Some(el) = current {
            if el == scope {
                return false;
            }
            if self.is_hidden(el) {
                return true;
            }
            current = self.parent(el);
        }
        false
    }

    pub fn set_tone(&mut self, id: ElementId, tone: Tone) {
        self.elements[id.0].tone = Some(tone);
    }

    pub fn tone(&self, id: ElementId) -> Option<Tone> {
        self.elements[id.0].tone
    }

    pub fn set_data(&mut self, id: ElementId, key: &str, value: impl Into<String>) {
        self.elements[id.0].dataset.insert(key.to_string(), value.into());
    }

    pub fn data(&self, id: ElementId, key: &str) -> Option<&str> {
        self.elements[id.0].dataset.get(key).map(String::as_str)
    }

    // Form controls

    pub fn control(&self, id: ElementId) -> Option<&InputControl> {
        self.elements[id.0].control.as_ref()
    }

    pub fn control_mut(&mut self, id: ElementId) -> Option<&mut InputControl> {
        self.elements[id.0].control.as_mut()
    }

    /// Input controls inside `scope`, in document order
    pub fn inputs_in(&self, scope: ElementId) -> Vec<ElementId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| self.control(*id).is_some())
            .collect()
    }

    pub fn value(&self, id: ElementId) -> &str {
        self.control(id).map_or("", |c| c.value.as_str())
    }

    pub fn set_value(&mut self, id: ElementId, value: impl Into<String>) {
        if let Some(control) = self.control_mut(id) {
            control.value = value.into();
        }
    }

    pub fn is_checked(&self, id: ElementId) -> bool {
        self.control(id).is_some_and(|c| c.checked)
    }

    /// Set the checked state. Checking a radio unchecks the rest of its group.
    pub fn set_checked(&mut self, id: ElementId, checked: bool) {
        let Some(control) = self.control(id) else {
            return;
        };
        if control.kind == InputKind::Radio && checked {
            let group = control.name.clone();
            for other in self.radio_group(&group) {
                if let Some(c) = self.control_mut(other) {
                    c.checked = false;
                }
            }
        }
        if let Some(control) = self.control_mut(id) {
            control.checked = checked;
        }
    }

    /// Every attached radio sharing `name`, in document order
    pub fn radio_group(&self, name: &str) -> Vec<ElementId> {
        self.inputs_in(self.root)
            .into_iter()
            .filter(|id| {
                self.control(*id)
                    .is_some_and(|c| c.kind == InputKind::Radio && c.name == name)
            })
            .collect()
    }

    pub fn radio_group_checked(&self, name: &str) -> bool {
        self.radio_group(name).into_iter().any(|id| self.is_checked(id))
    }

    // Focus and validation reporting

    pub fn focus(&mut self, id: ElementId) {
        self.focused = Some(id);
    }

    pub const fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Focus the control and attach the violation message to it
    pub fn report_validity(&mut self, id: ElementId, message: impl Into<String>) {
        self.focused = Some(id);
        self.report = Some(ValidationReport {
            element: id,
            message: message.into(),
        });
    }

    pub const fn validation_report(&self) -> Option<&ValidationReport> {
        self.report.as_ref()
    }

    pub fn clear_validation_report(&mut self) {
        self.report = None;
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
