//! Nav Collapser - keeps only the relevant sidebar section expanded
//!
//! The collapser owns the ordered list of navigation items for one page
//! load. Section headers own the leaves that follow them up to the next
//! header. Every operation runs to completion against the in-memory items;
//! the resulting presentation is pushed to a [`NavSurface`] with
//! [`Collapser::flush`].

use log::{debug, trace};

use crate::error::{NavError, NavResult};
use crate::fragment::extract_fragment;
use crate::item::{ItemSource, NavItem, Visibility};
use crate::surface::NavSurface;

/// Whether a container scrolls, i.e. its content is taller than its box.
///
/// Short navigation trees keep the default, fully expanded presentation.
pub fn overflows(scroll_height: i32, client_height: i32) -> bool {
    scroll_height > client_height
}

/// Selection marker for headers, visibility for leaves
fn presentation(item: &NavItem) -> bool {
    match item {
        NavItem::SectionHeader { selected, .. } => *selected,
        NavItem::Leaf { visibility, .. } => visibility.is_visible(),
    }
}

/// The sidebar collapsing component
#[derive(Debug, Clone)]
pub struct Collapser {
    items: Vec<NavItem>,
    /// Presentation last written to the surface, per item
    presented: Vec<bool>,
    /// Item carrying the scrollspy marker at the last scroll event
    last_active: Option<usize>,
}

impl Collapser {
    /// Parse the page's navigation entries, in document order
    pub fn new(sources: &[ItemSource]) -> Self {
        let items: Vec<NavItem> = sources.iter().map(NavItem::parse).collect();
        let presented = items.iter().map(presentation).collect();
        debug!(
            "collapser built over {} item(s), {} section header(s)",
            items.len(),
            items.iter().filter(|item| item.is_header()).count()
        );
        Self {
            items,
            presented,
            last_active: None,
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First header carrying the selection marker
    pub fn selected_header(&self) -> Option<usize> {
        self.items.iter().position(NavItem::is_selected)
    }

    /// Indices of the leaves currently shown
    pub fn visible_leaves(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.visibility() == Some(Visibility::Visible))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn last_active(&self) -> Option<usize> {
        self.last_active
    }

    // ========================
    // Section operations
    // ========================

    /// Select a header and show every leaf up to the next header
    pub fn open(&mut self, header: usize) -> NavResult<()> {
        self.check_header(header)?;
        self.expand(header);
        Ok(())
    }

    /// Unselect every header and hide every leaf
    pub fn close_all(&mut self) {
        for item in &mut self.items {
            match item {
                NavItem::SectionHeader { selected, .. } => *selected = false,
                NavItem::Leaf { visibility, .. } => *visibility = Visibility::Hidden,
            }
        }
        trace!("all sections closed");
    }

    /// Click on a header: collapse it if it is the open one, otherwise make
    /// it the only open section
    pub fn header_activated(&mut self, header: usize) -> NavResult<()> {
        let opening = !self.check_header(header)?.is_selected();
        self.close_all();
        if opening {
            self.expand(header);
        } else {
            debug!("section {header} collapsed");
        }
        Ok(())
    }

    /// Header of the section containing the item linking to `fragment`.
    ///
    /// A header whose own link matches owns itself. A leaf matching before
    /// any header has no owner.
    pub fn find_header_owning(&self, fragment: &str) -> Option<usize> {
        let mut owner = None;
        for (index, item) in self.items.iter().enumerate() {
            if item.is_header() {
                owner = Some(index);
            }
            if item.fragment() == Some(fragment) {
                return owner;
            }
        }
        None
    }

    /// Open the section owning `fragment`, if there is one.
    ///
    /// Returns the opened header.
    pub fn reveal_for_fragment(&mut self, fragment: Option<&str>) -> Option<usize> {
        let fragment = fragment?;
        let Some(header) = self.find_header_owning(fragment) else {
            trace!("no section owns {fragment}");
            return None;
        };
        debug!("{fragment} resolved to section {header}");
        self.expand(header);
        Some(header)
    }

    // ========================
    // Page events
    // ========================

    /// Startup: hide every leaf, then open the section of the page's own
    /// fragment, if it has one
    pub fn start(&mut self, location_url: Option<&str>) {
        for item in &mut self.items {
            if let NavItem::Leaf { visibility, .. } = item {
                *visibility = Visibility::Hidden;
            }
        }
        if let Some(fragment) = location_url.and_then(extract_fragment) {
            self.close_all();
            self.reveal_for_fragment(Some(fragment));
        }
    }

    /// A link in the page content was followed
    pub fn content_link_followed(&mut self, href: &str) {
        self.close_all();
        self.reveal_for_fragment(extract_fragment(href));
    }

    /// Record the item marked active at startup, without re-synchronizing
    pub fn seed_active(&mut self, active: Option<usize>) {
        self.last_active = active;
    }

    /// Scroll event: follow the item the scrollspy marks as active.
    ///
    /// Returns true when the expanded section was re-synchronized. Losing
    /// the marker only forgets the previous item.
    pub fn active_changed(&mut self, active: Option<usize>) -> bool {
        if active == self.last_active {
            return false;
        }
        self.last_active = active;

        let Some(index) = active else {
            trace!("no item marked active");
            return false;
        };
        let fragment = self
            .items
            .get(index)
            .and_then(NavItem::fragment)
            .map(str::to_owned);
        self.close_all();
        self.reveal_for_fragment(fragment.as_deref());
        true
    }

    // ========================
    // Rendering
    // ========================

    /// Push every presentation change since the last flush to `surface`.
    ///
    /// Returns the number of writes issued.
    pub fn flush<S: NavSurface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let mut writes = 0;
        for (index, item) in self.items.iter().enumerate() {
            let current = presentation(item);
            if self.presented[index] == current {
                continue;
            }
            match item {
                NavItem::SectionHeader { selected, .. } => surface.set_selected(index, *selected),
                NavItem::Leaf { visibility, .. } => surface.set_visibility(index, *visibility),
            }
            self.presented[index] = current;
            writes += 1;
        }
        trace!("flushed {writes} change(s)");
        writes
    }

    // ========================
    // Internal
    // ========================

    fn check_header(&self, index: usize) -> NavResult<&NavItem> {
        match self.items.get(index) {
            None => Err(NavError::ItemOutOfRange(index)),
            Some(item) if !item.is_header() => Err(NavError::NotASectionHeader(index)),
            Some(item) => Ok(item),
        }
    }

    /// `header` must index a section header
    fn expand(&mut self, header: usize) {
        if let NavItem::SectionHeader { selected, .. } = &mut self.items[header] {
            *selected = true;
        }
        let mut revealed = 0;
        for item in &mut self.items[header + 1..] {
            match item {
                NavItem::SectionHeader { .. } => break,
                NavItem::Leaf { visibility, .. } => {
                    *visibility = Visibility::Visible;
                    revealed += 1;
                }
            }
        }
        debug!("section {header} opened, {revealed} item(s) shown");
    }
}
