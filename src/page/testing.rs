//! In-memory page for behavior tests.
//!
//! A small document tree with a descendant-only selector matcher, a manual
//! clock for timers, a navigation log and an optional tooltip toolkit.
//! Clicking a `data-bs-dismiss="alert"` element closes its enclosing
//! `.alert`, mirroring the toolkit's close behavior.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::Duration;

use super::dom::{DomElement, PageHost, TooltipToolkit};
use super::error::{PageError, PageResult};

const DOCUMENT: usize = 0;
const BODY: usize = 1;

#[derive(Default)]
struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    style: HashMap<String, String>,
    parent: Option<usize>,
    children: Vec<usize>,
    listeners: Vec<Box<dyn FnMut()>>,
    dismissals: usize,
}

impl Node {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

struct Timer {
    due: Duration,
    seq: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct State {
    nodes: Vec<Node>,
    now: Duration,
    timers: Vec<Timer>,
    next_seq: u64,
    navigations: Vec<String>,
    fail_navigation: bool,
    toolkit: bool,
    toolkit_probes: usize,
    tooltips: Vec<usize>,
    rejected: HashSet<usize>,
    refuse_listeners: HashSet<usize>,
}

impl State {
    fn is_attached(&self, mut id: usize) -> bool {
        loop {
            if id == DOCUMENT {
                return true;
            }
            match self.nodes[id].parent {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    fn detach(&mut self, id: usize) {
        if let Some(parent) = self.nodes[id].parent.take() {
            self.nodes[parent].children.retain(|&child| child != id);
        }
    }

    /// Descendants of `root` in document order, excluding `root`
    fn descendants(&self, root: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack: Vec<usize> = self.nodes[root].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id].children.iter().rev().copied());
        }
        out
    }

    fn query(&self, root: usize, selectors: &str) -> PageResult<Vec<usize>> {
        let selector = parse_selector(selectors)?;
        Ok(self
            .descendants(root)
            .into_iter()
            .filter(|&id| self.matches(id, &selector))
            .collect())
    }

    fn matches(&self, id: usize, selector: &[Compound]) -> bool {
        let Some((last, ancestors)) = selector.split_last() else {
            return false;
        };
        if !last.matches(&self.nodes[id]) {
            return false;
        }

        let mut current = self.nodes[id].parent;
        for compound in ancestors.iter().rev() {
            loop {
                match current {
                    Some(DOCUMENT) | None => return false,
                    Some(ancestor) => {
                        current = self.nodes[ancestor].parent;
                        if compound.matches(&self.nodes[ancestor]) {
                            break;
                        }
                    }
                }
            }
        }
        true
    }

    fn closest_with_class(&self, mut id: usize, class: &str) -> Option<usize> {
        loop {
            if id != DOCUMENT && self.nodes[id].has_class(class) {
                return Some(id);
            }
            id = self.nodes[id].parent?;
        }
    }
}

/// One compound selector: `tag.class[attr="value"]`
#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, Option<String>)>,
}

impl Compound {
    fn matches(&self, node: &Node) -> bool {
        self.tag.as_ref().map_or(true, |tag| *tag == node.tag)
            && self.classes.iter().all(|class| node.has_class(class))
            && self.attributes.iter().all(|(name, expected)| {
                match (node.attribute(name), expected) {
                    (Some(actual), Some(expected)) => actual == expected,
                    (Some(_), None) => true,
                    (None, _) => false,
                }
            })
    }
}

fn parse_selector(selectors: &str) -> PageResult<Vec<Compound>> {
    let invalid = |reason: &str| PageError::selector(selectors, reason);

    let mut compounds = Vec::new();
    let mut chars = selectors.trim().chars().peekable();

    while chars.peek().is_some() {
        let mut compound = Compound::default();

        let tag = take_ident(&mut chars);
        if !tag.is_empty() {
            compound.tag = Some(tag.to_ascii_lowercase());
        } else if chars.peek() == Some(&'*') {
            chars.next();
        }

        while let Some(&ch) = chars.peek() {
            match ch {
                '.' => {
                    chars.next();
                    let class = take_ident(&mut chars);
                    if class.is_empty() {
                        return Err(invalid("empty class name"));
                    }
                    compound.classes.push(class);
                }
                '[' => {
                    chars.next();
                    let mut body = String::new();
                    loop {
                        match chars.next() {
                            Some(']') => break,
                            Some(c) => body.push(c),
                            None => return Err(invalid("unterminated attribute selector")),
                        }
                    }
                    let (name, value) = match body.split_once('=') {
                        Some((name, value)) => {
                            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
                            (name.trim().to_string(), Some(value.to_string()))
                        }
                        None => (body.trim().to_string(), None),
                    };
                    if name.is_empty() {
                        return Err(invalid("empty attribute name"));
                    }
                    compound.attributes.push((name, value));
                }
                c if c.is_whitespace() => break,
                c => return Err(invalid(&format!("unsupported character {:?}", c))),
            }
        }

        compounds.push(compound);
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
    }

    if compounds.is_empty() {
        return Err(invalid("empty selector"));
    }
    Ok(compounds)
}

fn take_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            ident.push(c);
            chars.next();
        } else {
            break;
        }
    }
    ident
}

/// In-memory [`PageHost`]
#[derive(Clone)]
pub struct FakePage {
    state: Rc<RefCell<State>>,
}

impl Default for FakePage {
    fn default() -> Self {
        Self::new()
    }
}

impl FakePage {
    pub fn new() -> Self {
        let mut state = State::default();
        state.nodes.push(Node {
            tag: "#document".to_string(),
            children: vec![BODY],
            ..Node::default()
        });
        state.nodes.push(Node {
            tag: "body".to_string(),
            parent: Some(DOCUMENT),
            ..Node::default()
        });

        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Load the tooltip toolkit on this page
    pub fn with_toolkit(self) -> Self {
        self.state.borrow_mut().toolkit = true;
        self
    }

    pub fn body(&self) -> usize {
        BODY
    }

    pub fn append(&self, parent: usize, tag: &str, attributes: &[(&str, &str)]) -> usize {
        let mut state = self.state.borrow_mut();
        let id = state.nodes.len();
        state.nodes.push(Node {
            tag: tag.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            parent: Some(parent),
            ..Node::default()
        });
        state.nodes[parent].children.push(id);
        id
    }

    pub fn set_attribute(&self, id: usize, name: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        let node = &mut state.nodes[id];
        node.attributes.retain(|(key, _)| key != name);
        node.attributes.push((name.to_string(), value.to_string()));
    }

    pub fn element(&self, id: usize) -> FakeElement {
        FakeElement {
            state: Rc::clone(&self.state),
            id,
        }
    }

    pub fn click(&self, id: usize) {
        self.element(id).click();
    }

    /// Move the clock forward, firing due timers in order
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + by;
        loop {
            let timer = {
                let mut state = self.state.borrow_mut();
                let next = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due <= target)
                    .min_by_key(|(_, timer)| (timer.due, timer.seq))
                    .map(|(index, _)| index);
                match next {
                    Some(index) => {
                        let timer = state.timers.remove(index);
                        state.now = timer.due;
                        timer
                    }
                    None => break,
                }
            };
            (timer.callback)();
        }
        self.state.borrow_mut().now = target;
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub fn is_attached(&self, id: usize) -> bool {
        self.state.borrow().is_attached(id)
    }

    /// How many times the alert was closed
    pub fn dismiss_count(&self, id: usize) -> usize {
        self.state.borrow().nodes[id].dismissals
    }

    pub fn style(&self, id: usize, property: &str) -> Option<String> {
        self.state.borrow().nodes[id].style.get(property).cloned()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.state.borrow().navigations.clone()
    }

    pub fn fail_navigation(&self, fail: bool) {
        self.state.borrow_mut().fail_navigation = fail;
    }

    pub fn tooltips(&self) -> Vec<usize> {
        self.state.borrow().tooltips.clone()
    }

    /// Make `on_click` fail for this element
    pub fn refuse_listeners(&self, id: usize) {
        self.state.borrow_mut().refuse_listeners.insert(id);
    }

    pub fn reject_tooltip(&self, id: usize) {
        self.state.borrow_mut().rejected.insert(id);
    }

    /// How many times the toolkit capability was looked up
    pub fn toolkit_probes(&self) -> usize {
        self.state.borrow().toolkit_probes
    }
}

impl PageHost for FakePage {
    type Element = FakeElement;

    fn query_selector_all(&self, selectors: &str) -> PageResult<Vec<FakeElement>> {
        let ids = self.state.borrow().query(DOCUMENT, selectors)?;
        Ok(ids.into_iter().map(|id| self.element(id)).collect())
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let mut state = self.state.borrow_mut();
        let due = state.now + delay;
        let seq = state.next_seq;
        state.next_seq += 1;
        state.timers.push(Timer { due, seq, callback });
    }

    fn navigate(&self, url: &str) -> PageResult<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_navigation {
            return Err(PageError::navigation(url, "navigation blocked"));
        }
        state.navigations.push(url.to_string());
        Ok(())
    }

    fn tooltip_toolkit(&self) -> Option<Box<dyn TooltipToolkit<FakeElement>>> {
        let mut state = self.state.borrow_mut();
        state.toolkit_probes += 1;
        if !state.toolkit {
            return None;
        }
        Some(Box::new(FakeToolkit {
            state: Rc::clone(&self.state),
        }))
    }
}

/// Handle to a node of a [`FakePage`]
#[derive(Clone)]
pub struct FakeElement {
    state: Rc<RefCell<State>>,
    id: usize,
}

impl DomElement for FakeElement {
    fn query_selector(&self, selectors: &str) -> PageResult<Option<Self>> {
        Ok(self.query_selector_all(selectors)?.into_iter().next())
    }

    fn query_selector_all(&self, selectors: &str) -> PageResult<Vec<Self>> {
        let ids = self.state.borrow().query(self.id, selectors)?;
        Ok(ids
            .into_iter()
            .map(|id| FakeElement {
                state: Rc::clone(&self.state),
                id,
            })
            .collect())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().nodes[self.id]
            .attribute(name)
            .map(str::to_string)
    }

    fn set_style(&self, property: &str, value: &str) -> PageResult<()> {
        self.state.borrow_mut().nodes[self.id]
            .style
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn click(&self) {
        let mut listeners = {
            let mut state = self.state.borrow_mut();

            if state.nodes[self.id].attribute("data-bs-dismiss") == Some("alert") {
                if let Some(alert) = state.closest_with_class(self.id, "alert") {
                    if state.is_attached(alert) {
                        state.detach(alert);
                        state.nodes[alert].dismissals += 1;
                    }
                }
            }

            std::mem::take(&mut state.nodes[self.id].listeners)
        };

        for listener in listeners.iter_mut() {
            listener();
        }

        let mut state = self.state.borrow_mut();
        let added = std::mem::replace(&mut state.nodes[self.id].listeners, listeners);
        state.nodes[self.id].listeners.extend(added);
    }

    fn on_click(&self, handler: Box<dyn FnMut()>) -> PageResult<()> {
        let mut state = self.state.borrow_mut();
        if state.refuse_listeners.contains(&self.id) {
            return Err(PageError::Dom("listener refused".to_string()));
        }
        state.nodes[self.id].listeners.push(handler);
        Ok(())
    }
}

struct FakeToolkit {
    state: Rc<RefCell<State>>,
}

impl TooltipToolkit<FakeElement> for FakeToolkit {
    fn activate(&self, element: &FakeElement) -> PageResult<()> {
        let mut state = self.state.borrow_mut();
        if state.rejected.contains(&element.id) {
            return Err(PageError::Tooltip("element has no title".to_string()));
        }
        state.tooltips.push(element.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_matching() {
        let page = FakePage::new();
        let table = page.append(page.body(), "table", &[("class", "table table-clickable")]);
        let head = page.append(table, "thead", &[]);
        let head_row = page.append(head, "tr", &[]);
        let body = page.append(table, "tbody", &[]);
        let row = page.append(body, "tr", &[]);

        let tables = page.query_selector_all(".table-clickable").unwrap();
        assert_eq!(tables.len(), 1);

        let rows = tables[0].query_selector_all("tbody tr").unwrap();
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![row]);

        let all_rows = page.query_selector_all("tr").unwrap();
        assert_eq!(all_rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![head_row, row]);
    }

    #[test]
    fn test_attribute_selector() {
        let page = FakePage::new();
        let tip = page.append(page.body(), "span", &[("data-bs-toggle", "tooltip")]);
        page.append(page.body(), "span", &[("data-bs-toggle", "popover")]);

        let found = page.query_selector_all(r#"[data-bs-toggle="tooltip"]"#).unwrap();
        assert_eq!(found.iter().map(|e| e.id).collect::<Vec<_>>(), vec![tip]);
        assert_eq!(page.query_selector_all("span[data-bs-toggle]").unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_selectors() {
        let page = FakePage::new();
        assert!(page.query_selector_all("table[").is_err());
        assert!(page.query_selector_all("div > p").is_err());
        assert!(page.query_selector_all("").is_err());
    }

    #[test]
    fn test_detached_nodes_leave_document() {
        let page = FakePage::new();
        let alert = page.append(page.body(), "div", &[("class", "alert")]);
        let close = page.append(alert, "button", &[("data-bs-dismiss", "alert")]);

        page.click(close);
        assert!(!page.is_attached(alert));
        assert!(page.query_selector_all(".alert").unwrap().is_empty());
        assert_eq!(page.element(alert).query_selector_all("button").unwrap().len(), 1);
    }

    #[test]
    fn test_timers_fire_in_order() {
        let page = FakePage::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (label, ms) in [("late", 300), ("early", 100), ("tie", 300)] {
            let log = Rc::clone(&log);
            page.set_timeout(
                Duration::from_millis(ms),
                Box::new(move || log.borrow_mut().push(label)),
            );
        }

        page.advance(Duration::from_millis(299));
        assert_eq!(*log.borrow(), vec!["early"]);
        page.advance(Duration::from_millis(1));
        assert_eq!(*log.borrow(), vec!["early", "late", "tie"]);
    }
}
