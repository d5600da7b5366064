//! Marketplace tenant roles.
//!
//! The marketplace serves three separate audiences behind one backend:
//! customers browsing and bidding, sellers listing and settling, and
//! administrators. Each tenant owns its own session; a client bound to
//! one tenant never reads another tenant's tokens.

use serde::{Deserialize, Serialize};

/// One of the three marketplace roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tenant {
    /// Buyer-facing storefront role.
    #[default]
    Customer,
    /// Seller dashboard role (listings, auctions, settlements).
    Seller,
    /// Back-office administration role.
    Admin,
}

impl Tenant {
    /// All tenants, in display order.
    pub const ALL: [Self; 3] = [Self::Customer, Self::Seller, Self::Admin];

    /// Returns the login route users are sent to when this tenant's
    /// session expires.
    #[must_use]
    pub const fn login_path(self) -> &'static str {
        match self {
            Self::Customer => "/login",
            Self::Seller => "/seller/login",
            Self::Admin => "/admin/login",
        }
    }

    /// Returns the path prefix that identifies this tenant's pages.
    ///
    /// The customer storefront owns every path not claimed by the
    /// seller or admin trees, so its prefix is the root.
    #[must_use]
    pub const fn path_prefix(self) -> &'static str {
        match self {
            Self::Customer => "/",
            Self::Seller => "/seller",
            Self::Admin => "/admin",
        }
    }

    /// Returns the storage key under which this tenant's session is
    /// persisted.
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Customer => "customer-session",
            Self::Seller => "seller-session",
            Self::Admin => "admin-session",
        }
    }

    /// Resolves a tenant from the current view path.
    ///
    /// Used at session-expiry time: the redirect target is chosen by
    /// inspecting where the user currently is, not by which tenant's
    /// client observed the failure, so a shared layout showing the
    /// wrong tenant's page still lands on the right login screen.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        if path == "/admin" || path.starts_with("/admin/") {
            Self::Admin
        } else if path == "/seller" || path.starts_with("/seller/") {
            Self::Seller
        } else {
            Self::Customer
        }
    }

    /// Human-readable tenant name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Seller => "seller",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Tenant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
