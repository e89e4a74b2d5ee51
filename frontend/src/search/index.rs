//! In-memory site search.
//!
//! A [`SearchIndex`] holds the static catalog of places a visitor can jump
//! to. A [`SearchSession`] is the state of one open search box: the query,
//! its results and the keyboard cursor.

use std::rc::Rc;

use yew::functional::Reducible;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigableEntry {
    pub title: String,
    /// `#id` for an in-page anchor, otherwise a site path.
    pub target: String,
    pub category: String,
}

impl NavigableEntry {
    pub fn new(title: impl Into<String>, target: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            target: target.into(),
            category: category.into(),
        }
    }

    pub fn destination(&self) -> Destination<'_> {
        match self.target.strip_prefix('#') {
            Some(id) => Destination::Anchor(id),
            None => Destination::Path(&self.target),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination<'a> {
    Anchor(&'a str),
    Path(&'a str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    pub entry: NavigableEntry,
    /// Position of the entry's category in catalog declaration order.
    pub category_rank: usize,
}

impl MatchResult {
    pub fn title(&self) -> &str {
        &self.entry.title
    }

    pub fn category(&self) -> &str {
        &self.entry.category
    }
}

#[derive(Debug, PartialEq)]
pub struct SearchIndex {
    entries: Vec<NavigableEntry>,
    categories: Vec<String>,
}

impl SearchIndex {
    pub fn new(entries: Vec<NavigableEntry>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for entry in &entries {
            if !categories.contains(&entry.category) {
                categories.push(entry.category.clone());
            }
        }
        Self { entries, categories }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive title substring search. Results are grouped by
    /// category (declaration order) and keep catalog order inside a group.
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<MatchResult> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        let mut results: Vec<MatchResult> = self
            .entries
            .iter()
            .filter(|entry| entry.title.to_lowercase().contains(&needle))
            .map(|entry| MatchResult {
                entry: entry.clone(),
                category_rank: self.category_rank(&entry.category),
            })
            .collect();
        results.sort_by_key(|result| result.category_rank);
        results
    }

    fn category_rank(&self, category: &str) -> usize {
        self.categories
            .iter()
            .position(|c| c == category)
            .unwrap_or(self.categories.len())
    }
}

/// Splits already-grouped results into `(category, [(flat index, result)])`
/// runs for rendering under headings.
pub fn group_by_category(results: &[MatchResult]) -> Vec<(&str, Vec<(usize, &MatchResult)>)> {
    let mut groups: Vec<(&str, Vec<(usize, &MatchResult)>)> = Vec::new();
    for (index, result) in results.iter().enumerate() {
        let continues = groups
            .last()
            .map_or(false, |(category, _)| *category == result.category());
        if !continues {
            groups.push((result.category(), Vec::new()));
        }
        if let Some((_, members)) = groups.last_mut() {
            members.push((index, result));
        }
    }
    groups
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Lets activation check whether an anchor exists on the current page.
pub trait DocumentProbe {
    fn has_anchor(&self, id: &str) -> bool;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Scroll to the element with this id on the current page.
    ScrollTo(String),
    /// Route to another page.
    Navigate(String),
    /// The anchor is not on the current page; nothing happens.
    MissingAnchor(String),
}

pub fn activate(result: &MatchResult, probe: &impl DocumentProbe) -> Activation {
    match result.entry.destination() {
        Destination::Anchor(id) if probe.has_anchor(id) => Activation::ScrollTo(id.to_string()),
        Destination::Anchor(id) => Activation::MissingAnchor(id.to_string()),
        Destination::Path(path) => Activation::Navigate(path.to_string()),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchSession {
    index: Rc<SearchIndex>,
    pub is_open: bool,
    pub query: String,
    pub results: Vec<MatchResult>,
    /// `None` means nothing is selected.
    pub selected: Option<usize>,
}

impl SearchSession {
    pub fn new(index: Rc<SearchIndex>) -> Self {
        Self {
            index,
            is_open: false,
            query: String::new(),
            results: Vec::new(),
            selected: None,
        }
    }

    pub fn open(&mut self) {
        self.reset();
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.reset();
        self.is_open = false;
    }

    pub fn set_query(&mut self, query: String) {
        self.results = self.index.search(&query);
        self.query = query;
        self.selected = None;
    }

    /// Moves the cursor without wrapping. From "nothing selected" either
    /// direction lands on the first result.
    pub fn advance_selection(&mut self, direction: Direction) {
        let len = self.results.len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match (direction, self.selected) {
            (_, None) => 0,
            (Direction::Next, Some(i)) => (i + 1).min(len - 1),
            (Direction::Previous, Some(i)) => i.saturating_sub(1),
        });
    }

    pub fn selected_result(&self) -> Option<&MatchResult> {
        self.selected.and_then(|i| self.results.get(i))
    }

    /// Activates the selected result, or the first one when nothing is selected.
    pub fn activate_selected(&self, probe: &impl DocumentProbe) -> Option<Activation> {
        self.selected_result()
            .or_else(|| self.results.first())
            .map(|result| activate(result, probe))
    }

    pub fn activate_index(&self, index: usize, probe: &impl DocumentProbe) -> Option<Activation> {
        self.results.get(index).map(|result| activate(result, probe))
    }

    fn reset(&mut self) {
        self.query.clear();
        self.results.clear();
        self.selected = None;
    }
}

pub enum SearchAction {
    Open,
    Close,
    Query(String),
    Advance(Direction),
    Select(usize),
}

impl Reducible for SearchSession {
    type Action = SearchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SearchAction::Open => next.open(),
            SearchAction::Close => next.close(),
            SearchAction::Query(query) => next.set_query(query),
            SearchAction::Advance(direction) => next.advance_selection(direction),
            SearchAction::Select(index) if index < next.results.len() => next.selected = Some(index),
            SearchAction::Select(_) => return self,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeDocument(&'static [&'static str]);

    impl DocumentProbe for FakeDocument {
        fn has_anchor(&self, id: &str) -> bool {
            self.0.contains(&id)
        }
    }

    fn two_entry_catalog() -> Rc<SearchIndex> {
        Rc::new(SearchIndex::new(vec![
            NavigableEntry::new("About Us", "#about", "pages"),
            NavigableEntry::new("Web Development", "#services", "services"),
        ]))
    }

    fn mixed_catalog() -> SearchIndex {
        SearchIndex::new(vec![
            NavigableEntry::new("Design Process", "#about", "pages"),
            NavigableEntry::new("Brand Design", "#services", "services"),
            NavigableEntry::new("Design Team", "/team", "pages"),
            NavigableEntry::new("Interface Design Sprint", "#portfolio", "work"),
        ])
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let index = two_entry_catalog();
        assert!(index.search("").is_empty());
        assert!(index.search("   ").is_empty());
        assert!(index.search("\t\n").is_empty());
    }

    #[test]
    fn test_search_ignores_case() {
        let results = two_entry_catalog().search("WEB");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title(), "Web Development");
    }

    #[test]
    fn test_results_grouped_in_declaration_order() {
        let index = mixed_catalog();
        let results = index.search("design");
        let titles: Vec<&str> = results.iter().map(|r| r.title()).collect();

        assert_eq!(
            titles,
            vec!["Design Process", "Design Team", "Brand Design", "Interface Design Sprint"]
        );
    }

    #[test]
    fn test_group_by_category_keeps_flat_indices() {
        let index = mixed_catalog();
        let results = index.search("design");
        let groups = group_by_category(&results);

        let shape: Vec<(&str, Vec<usize>)> = groups
            .iter()
            .map(|(category, members)| (*category, members.iter().map(|(i, _)| *i).collect()))
            .collect();
        assert_eq!(
            shape,
            vec![("pages", vec![0, 1]), ("services", vec![2]), ("work", vec![3])]
        );
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(mixed_catalog().search("zzz").is_empty());
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut session = SearchSession::new(Rc::new(mixed_catalog()));
        session.set_query("design ".to_string());
        assert_eq!(session.results.len(), 3);

        session.selected = Some(0);
        for _ in 0..4 {
            session.advance_selection(Direction::Previous);
            assert_eq!(session.selected, Some(0));
        }
        for _ in 0..6 {
            session.advance_selection(Direction::Next);
        }
        assert_eq!(session.selected, Some(2));
    }

    #[test]
    fn test_selection_without_results_stays_empty() {
        let mut session = SearchSession::new(two_entry_catalog());
        session.advance_selection(Direction::Next);
        assert_eq!(session.selected, None);
    }

    #[test]
    fn test_open_and_close_reset_state() {
        let mut session = SearchSession::new(two_entry_catalog());
        session.open();
        session.set_query("ab".to_string());
        session.advance_selection(Direction::Next);
        assert_eq!(session.selected, Some(0));

        session.close();
        assert!(!session.is_open);
        assert!(session.query.is_empty());
        assert!(session.results.is_empty());
        assert_eq!(session.selected, None);

        session.set_query("web".to_string());
        session.open();
        assert!(session.is_open);
        assert!(session.results.is_empty());
    }

    #[test]
    fn test_search_then_activate_scrolls_to_anchor() {
        let mut session = SearchSession::new(two_entry_catalog());
        session.open();
        session.set_query("ab".to_string());

        assert_eq!(session.results.len(), 1);
        assert_eq!(session.results[0].title(), "About Us");

        let document = FakeDocument(&["about", "services"]);
        let activation = activate(&session.results[0], &document);
        assert_eq!(activation, Activation::ScrollTo("about".to_string()));
        assert_eq!(session.activate_selected(&document), Some(activation));
    }

    #[test]
    fn test_missing_anchor_is_reported() {
        let index = two_entry_catalog();
        let results = index.search("about");
        assert_eq!(
            activate(&results[0], &FakeDocument(&[])),
            Activation::MissingAnchor("about".to_string())
        );
    }

    #[test]
    fn test_path_targets_navigate() {
        let index = mixed_catalog();
        let results = index.search("team");
        assert_eq!(
            activate(&results[0], &FakeDocument(&["team"])),
            Activation::Navigate("/team".to_string())
        );
    }

    #[test]
    fn test_reducer_ignores_out_of_range_select() {
        let session = Rc::new(SearchSession::new(two_entry_catalog()));
        let next = session.clone().reduce(SearchAction::Select(3));
        assert!(Rc::ptr_eq(&session, &next));

        let next = next.reduce(SearchAction::Query("web".to_string()));
        let next = next.reduce(SearchAction::Select(0));
        assert_eq!(next.selected, Some(0));
        assert_eq!(next.activate_index(0, &FakeDocument(&["services"])), Some(Activation::ScrollTo("services".to_string())));
    }
}
