//! Ordered route table with nested, pathless layout groups

use super::guard::Access;
use super::pattern::{normalize_path, Params, PathPattern};
use super::RouteError;

/// Pattern string that designates the catch-all entry.
pub const CATCH_ALL: &str = "*";

/// A route as registered by the application.
///
/// Entries without a path are layout groups: they contribute their access
/// policy (and optionally a layout view rendered around the outlet) to every
/// child.
#[derive(Debug, Clone)]
pub struct RouteEntry<V> {
    path: Option<String>,
    view: Option<V>,
    access: Access,
    children: Vec<RouteEntry<V>>,
}

impl<V> RouteEntry<V> {
    /// A page reachable by everyone
    pub fn page(path: impl Into<String>, view: V) -> Self {
        Self {
            path: Some(path.into()),
            view: Some(view),
            access: Access::Open,
            children: Vec::new(),
        }
    }

    /// A pathless group whose children share `access`
    pub fn group(access: Access) -> Self {
        Self {
            path: None,
            view: None,
            access,
            children: Vec::new(),
        }
    }

    pub fn protected(mut self) -> Self {
        self.access = Access::Authenticated;
        self
    }

    pub fn guest_only(mut self, fallback: impl Into<String>) -> Self {
        self.access = Access::guest_only(fallback);
        self
    }

    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    /// View rendered around the children's outlet
    pub fn layout_view(mut self, view: V) -> Self {
        self.view = Some(view);
        self
    }

    pub fn child(mut self, child: RouteEntry<V>) -> Self {
        self.children.push(child);
        self
    }
}

/// A leaf route after nesting has been flattened
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledRoute<V> {
    pub pattern: PathPattern,
    pub view: V,
    /// Access policies from the outermost group down to the leaf
    pub guards: Vec<Access>,
    /// Layout views wrapping this route, outermost first
    pub layouts: Vec<V>,
}

impl<V> CompiledRoute<V> {
    pub fn requires_auth(&self) -> bool {
        self.guards.iter().any(Access::requires_auth)
    }
}

/// Immutable, validated route table
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<CompiledRoute<V>>,
    catch_all: V,
}

impl<V: Clone> RouteTable<V> {
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder {
            entries: Vec::new(),
        }
    }

    pub fn routes(&self) -> &[CompiledRoute<V>] {
        &self.routes
    }

    pub fn catch_all(&self) -> &V {
        &self.catch_all
    }

    /// First route matching `path`, with its captured parameters.
    pub fn find(&self, path: &str) -> Option<(&CompiledRoute<V>, Params)> {
        let path = normalize_path(path);
        let found = self
            .routes
            .iter()
            .find_map(|route| route.pattern.matches(&path).map(|params| (route, params)));

        match &found {
            Some((route, _)) => tracing::debug!(%path, pattern = %route.pattern, "route matched"),
            None => tracing::debug!(%path, "no route matched, using catch-all"),
        }
        found
    }
}

/// Collects entries and validates them into a [`RouteTable`]
#[derive(Debug)]
pub struct RouteTableBuilder<V> {
    entries: Vec<RouteEntry<V>>,
}

impl<V: Clone> RouteTableBuilder<V> {
    pub fn route(mut self, entry: RouteEntry<V>) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn build(self) -> Result<RouteTable<V>, RouteError> {
        let mut routes = Vec::new();
        let mut catch_all = None;

        for entry in self.entries {
            if entry.path.as_deref() == Some(CATCH_ALL) {
                if !entry.children.is_empty() {
                    return Err(RouteError::InvalidPattern(
                        CATCH_ALL.to_string(),
                        "the catch-all route cannot have children".to_string(),
                    ));
                }
                if catch_all.is_some() {
                    return Err(RouteError::DuplicateCatchAll);
                }
                catch_all = entry.view;
                continue;
            }
            flatten(entry, &PathPattern::root(), &[], &[], &mut routes)?;
        }

        for (i, route) in routes.iter().enumerate() {
            if let Some(other) = routes[..i].iter().find(|o| o.pattern.overlaps(&route.pattern)) {
                return Err(RouteError::Ambiguous(
                    other.pattern.to_string(),
                    route.pattern.to_string(),
                ));
            }
        }

        let catch_all = catch_all.ok_or(RouteError::MissingCatchAll)?;
        Ok(RouteTable { routes, catch_all })
    }
}

fn flatten<V: Clone>(
    entry: RouteEntry<V>,
    prefix: &PathPattern,
    guards: &[Access],
    layouts: &[V],
    out: &mut Vec<CompiledRoute<V>>,
) -> Result<(), RouteError> {
    let mut guards = guards.to_vec();
    if entry.access != Access::Open {
        guards.push(entry.access.clone());
    }

    let pattern = match entry.path.as_deref() {
        Some(CATCH_ALL) => {
            return Err(RouteError::InvalidPattern(
                CATCH_ALL.to_string(),
                "the catch-all route must be registered at the top level".to_string(),
            ));
        }
        Some(path) => Some(prefix.join(&PathPattern::parse(path)?)?),
        None => None,
    };

    if entry.children.is_empty() {
        let (Some(pattern), Some(view)) = (pattern, entry.view) else {
            return Err(RouteError::InvalidPattern(
                entry.path.unwrap_or_default(),
                "a route without children needs both a path and a view".to_string(),
            ));
        };
        out.push(CompiledRoute {
            pattern,
            view,
            guards,
            layouts: layouts.to_vec(),
        });
        return Ok(());
    }

    let mut layouts = layouts.to_vec();
    if let Some(view) = entry.view {
        layouts.push(view);
    }
    let prefix = pattern.unwrap_or_else(|| prefix.clone());
    for child in entry.children {
        flatten(child, &prefix, &guards, &layouts, out)?;
    }
    Ok(())
}
