//! Static catalog of composable strategy modules.

use crate::error::{Error, Result};

/// Version tag reported in catalog mismatch errors.
pub const CATALOG_VERSION: &str = "ado-v1";

/// A building block that can be composed into a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleCatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Every module offered by the strategy builder, in display order.
pub const MODULE_CATALOG: &[ModuleCatalogEntry] = &[
    ModuleCatalogEntry {
        id: "cw20",
        name: "CW20 Token",
        category: "Core",
        description: "Create and manage custom tokens",
        icon: "◎",
    },
    ModuleCatalogEntry {
        id: "staking",
        name: "Staking",
        category: "Yield",
        description: "Stake tokens for rewards",
        icon: "◉",
    },
    ModuleCatalogEntry {
        id: "splitter",
        name: "Splitter",
        category: "Distribution",
        description: "Split funds across multiple strategies",
        icon: "⇄",
    },
    ModuleCatalogEntry {
        id: "vault",
        name: "Vault",
        category: "Security",
        description: "Secure asset storage with access controls",
        icon: "⛨",
    },
    ModuleCatalogEntry {
        id: "crowdfund",
        name: "Crowdfund v2.0",
        category: "Fundraising",
        description: "Raise funds for DeFi strategies",
        icon: "$",
    },
    ModuleCatalogEntry {
        id: "auction",
        name: "Auction",
        category: "Trading",
        description: "Automated asset auctions",
        icon: "↗",
    },
];

/// Look up a catalog entry by id.
pub fn find(id: &str) -> Option<&'static ModuleCatalogEntry> {
    MODULE_CATALOG.iter().find(|entry| entry.id == id)
}

/// Check that every id is known to the catalog.
pub fn validate<S: AsRef<str>>(ids: &[S]) -> Result<()> {
    let unknown: Vec<String> = ids
        .iter()
        .map(AsRef::as_ref)
        .filter(|id| find(id).is_none())
        .map(str::to_string)
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(Error::CatalogMismatch {
            catalog: CATALOG_VERSION.to_string(),
            unknown,
        })
    }
}
