//! Static route table: paths, the guards wrapping them, and path resolution.
//!
//! Matching is structural and ordered. Roots are tried in declaration order
//! and the first one that matches wins; children are only tried under a
//! parent whose own segments already matched, and inherit the parent's
//! guards (outermost first). `:name` segments capture a parameter; `*`
//! matches anything and must come last.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::guard::{Guard, Verdict, evaluate_chain};
use crate::record::Role;
use crate::store::SessionSnapshot;

pub const ROOT: &str = "/";
pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";
pub const LOADING: &str = "/loading";
pub const FARMER_LANDING: &str = "/farmer/dashboard";
pub const BUYER_LANDING: &str = "/buyer/dashboard";

/// Where a signed-in subject with `role` belongs.
#[must_use]
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Farmer => FARMER_LANDING,
        Role::Buyer => BUYER_LANDING,
        Role::Unknown => LOADING,
    }
}

/// Every screen the router can mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    Login,
    Signup,
    FarmerArea,
    FarmerDashboard,
    CattleManagement,
    FarmerProducts,
    FarmerProduct,
    BreedCompatibility,
    DiseasePrediction,
    DiseaseQna,
    FarmerSettings,
    FarmerArticles,
    FarmerArticle,
    FarmerEvents,
    BuyerArea,
    BuyerDashboard,
    BreedExplorer,
    ItemList,
    ProductDetail,
    BuyerArticles,
    BuyerArticle,
    Loading,
    NotFound,
}

/// One node of the route tree.
#[derive(Debug)]
pub struct RouteNode {
    /// Path relative to the parent: `"/"`, `"login"`, `"article/:articleId"`, `"*"`.
    pub path: &'static str,
    pub page: Page,
    pub guards: &'static [Guard],
    /// Navigation label; `None` keeps the route out of area menus.
    pub label: Option<&'static str>,
    pub children: &'static [RouteNode],
}

const AUTH: &[Guard] = &[Guard::RequireAuth];
const PUBLIC: &[Guard] = &[Guard::PublicOnly];
const FARMER: &[Guard] = &[Guard::RequireAuth, Guard::RequireRole(Role::Farmer)];
const BUYER: &[Guard] = &[Guard::RequireAuth, Guard::RequireRole(Role::Buyer)];

const fn leaf(path: &'static str, page: Page, label: Option<&'static str>) -> RouteNode {
    RouteNode { path, page, guards: &[], label, children: &[] }
}

const FARMER_CHILDREN: &[RouteNode] = &[
    leaf("dashboard", Page::FarmerDashboard, Some("Dashboard")),
    leaf("manage-cow", Page::CattleManagement, Some("Manage Cows")),
    leaf("products", Page::FarmerProducts, Some("Products List")),
    leaf("product/:productId", Page::FarmerProduct, None),
    leaf("breed", Page::BreedCompatibility, Some("Breeding Pair")),
    leaf("disease", Page::DiseasePrediction, Some("Predict Disease")),
    leaf("disease-qna", Page::DiseaseQna, Some("Disease Q&A")),
    leaf("settings", Page::FarmerSettings, Some("Settings")),
    leaf("article", Page::FarmerArticles, Some("Articles")),
    leaf("article/:articleId", Page::FarmerArticle, None),
    leaf("events", Page::FarmerEvents, Some("Events")),
];

const BUYER_CHILDREN: &[RouteNode] = &[
    leaf("dashboard", Page::BuyerDashboard, Some("Dashboard")),
    leaf("breed", Page::BreedExplorer, Some("Explore Breeds")),
    leaf("item-list", Page::ItemList, Some("Products")),
    leaf("product/:productId", Page::ProductDetail, None),
    leaf("article", Page::BuyerArticles, Some("Articles")),
    leaf("article/:articleId", Page::BuyerArticle, None),
];

const STANDARD: &[RouteNode] = &[
    RouteNode { path: "/", page: Page::Landing, guards: AUTH, label: None, children: &[] },
    RouteNode { path: "login", page: Page::Login, guards: PUBLIC, label: None, children: &[] },
    RouteNode { path: "signup", page: Page::Signup, guards: PUBLIC, label: None, children: &[] },
    RouteNode { path: "farmer", page: Page::FarmerArea, guards: FARMER, label: None, children: FARMER_CHILDREN },
    RouteNode { path: "buyer", page: Page::BuyerArea, guards: BUYER, label: None, children: BUYER_CHILDREN },
    leaf("loading", Page::Loading, None),
    leaf("*", Page::NotFound, None),
];

/// A resolved request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub page: Page,
    /// Guards from the outermost matched ancestor down to the page.
    pub guards: Vec<Guard>,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }
}

/// Result of a navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Pending,
    Render(RouteMatch),
    Redirect(&'static str),
}

#[derive(Clone, Copy, Debug)]
pub struct RouteTable {
    roots: &'static [RouteNode],
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RouteTable {
    /// The application's route tree.
    #[must_use]
    pub const fn standard() -> Self {
        Self { roots: STANDARD }
    }

    #[must_use]
    pub fn roots(&self) -> &'static [RouteNode] {
        self.roots
    }

    /// Resolve `path` (query and fragment ignored) to a page.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let segments = split_segments(path);
        self.roots.iter().find_map(|node| match_node(node, &segments, Vec::new(), Vec::new()))
    }

    /// Resolve `path` and run its guard chain against `snapshot`.
    #[must_use]
    pub fn navigate(&self, path: &str, snapshot: &SessionSnapshot) -> Navigation {
        let Some(found) = self.resolve(path) else {
            return Navigation::Redirect(ROOT);
        };
        match evaluate_chain(&found.guards, snapshot) {
            Verdict::Pending => Navigation::Pending,
            Verdict::Render => Navigation::Render(found),
            Verdict::Redirect(to) => Navigation::Redirect(to),
        }
    }

    /// Node declared for `page`, searched depth-first.
    #[must_use]
    pub fn node(&self, page: Page) -> Option<&'static RouteNode> {
        find_node(self.roots, page)
    }

    /// Full guard chain protecting `page`, inherited guards included.
    #[must_use]
    pub fn guards_for(&self, page: Page) -> Vec<Guard> {
        let mut chain = Vec::new();
        if collect_guards(self.roots, page, &mut chain) { chain } else { Vec::new() }
    }

    /// Every routable path in router syntax (`/farmer/article/:articleId`).
    ///
    /// An area contributes its own path, served by its index route; the `*`
    /// fallback is left out.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_paths(self.roots, "", &mut out);
        out
    }

    /// Menu entries of an area: `(absolute path, label)` for labelled children.
    #[must_use]
    pub fn menu(&self, area: Page) -> Vec<(String, &'static str)> {
        let Some(node) = self.node(area) else {
            return Vec::new();
        };
        node.children
            .iter()
            .filter_map(|child| child.label.map(|label| (format!("/{}/{}", node.path, child.path), label)))
            .collect()
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).collect()
}

fn match_node(
    node: &'static RouteNode,
    segments: &[&str],
    mut guards: Vec<Guard>,
    mut params: Vec<(&'static str, String)>,
) -> Option<RouteMatch> {
    let pattern = split_segments(node.path);
    if pattern.last() == Some(&"*") {
        guards.extend_from_slice(node.guards);
        return Some(RouteMatch { page: node.page, guards, params });
    }
    if segments.len() < pattern.len() {
        return None;
    }
    for (expected, actual) in pattern.iter().zip(segments) {
        if let Some(name) = expected.strip_prefix(':') {
            params.push((name, (*actual).to_owned()));
        } else if expected != actual {
            return None;
        }
    }
    guards.extend_from_slice(node.guards);
    let rest = &segments[pattern.len()..];
    if rest.is_empty() {
        return Some(RouteMatch { page: node.page, guards, params });
    }
    node.children
        .iter()
        .find_map(|child| match_node(child, rest, guards.clone(), params.clone()))
}

fn find_node(nodes: &'static [RouteNode], page: Page) -> Option<&'static RouteNode> {
    nodes.iter().find_map(|node| if node.page == page { Some(node) } else { find_node(node.children, page) })
}

fn collect_guards(nodes: &'static [RouteNode], page: Page, chain: &mut Vec<Guard>) -> bool {
    for node in nodes {
        let depth = chain.len();
        chain.extend_from_slice(node.guards);
        if node.page == page || collect_guards(node.children, page, chain) {
            return true;
        }
        chain.truncate(depth);
    }
    false
}

fn collect_paths(nodes: &'static [RouteNode], prefix: &str, out: &mut Vec<String>) {
    for node in nodes.iter().filter(|node| node.path != "*") {
        let full = match node.path {
            "/" if prefix.is_empty() => "/".to_owned(),
            "/" => prefix.to_owned(),
            path => format!("{prefix}/{path}"),
        };
        collect_paths(node.children, &full, out);
        out.push(full);
    }
}
