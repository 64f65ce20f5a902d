use std::fmt;

/// Where the portal sends the user after an operation settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// The admin dashboard, after a successful account creation.
    AdminDashboard,
    /// The login page; `verified` carries the just-verified marker along.
    Login { verified: bool },
}

impl Destination {
    /// Route as the embedding router spells it.
    pub fn path(&self) -> &'static str {
        match self {
            Self::AdminDashboard => "/admin",
            Self::Login { verified: true } => "/login?verified=true",
            Self::Login { verified: false } => "/login",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Routing seam the pages invoke for delayed redirects.
///
/// The embedding shell decides what navigating means (swap a view, push a
/// history entry); the pages only pick the destination and the moment.
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: Destination);
}
