use crate::LOGIN_ROUTE;

/// A navigable view and whether it needs a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub public: bool,
}

impl RouteDescriptor {
    pub const fn protected(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            public: false,
        }
    }

    pub const fn public(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            public: true,
        }
    }
}

/// Views of the admin console.
pub const DEFAULT_ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::public(LOGIN_ROUTE, "Login"),
    RouteDescriptor::protected("/", "Dashboard"),
    RouteDescriptor::protected("/account-management", "AccountManagement"),
    RouteDescriptor::protected("/material-management", "MaterialManagement"),
    RouteDescriptor::protected("/publish-center", "PublishCenter"),
    RouteDescriptor::protected("/about", "About"),
    RouteDescriptor::protected("/website", "Website"),
    RouteDescriptor::protected("/data", "Data"),
];

/// Static route configuration. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }

    pub fn find(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// Unknown paths are protected.
    pub fn is_public(&self, path: &str) -> bool {
        self.find(path).is_some_and(|route| route.public)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(DEFAULT_ROUTES.to_vec())
    }
}
