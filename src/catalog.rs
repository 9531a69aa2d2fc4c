//! Static catalog of randomizer commands.
//!
//! Activation walks this table, checks each name against the resolved plugin
//! configuration, and hands the enabled entries to the host.

use crate::commands::{CommandFn, chance, choice, ident};

/// One command the randomizer can register.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub help: &'static str,
    pub enabled_by_default: bool,
    pub run: CommandFn,
}

/// Every command, in registration order.
pub static CATALOG: [CatalogEntry; 8] = [
    CatalogEntry {
        name: "pick",
        help: "pick elements from arguments",
        enabled_by_default: true,
        run: choice::pick,
    },
    CatalogEntry {
        name: "shuffle",
        help: "Shuffle arguments into a random order",
        enabled_by_default: true,
        run: choice::shuffle,
    },
    CatalogEntry {
        name: "magic8",
        help: "consult the spirits for guidance",
        enabled_by_default: true,
        run: choice::magic8,
    },
    CatalogEntry {
        name: "wasteaguid",
        help: "generate a GUID and throw it away",
        enabled_by_default: true,
        run: ident::waste_a_guid,
    },
    CatalogEntry {
        name: "password",
        help: "generate a secure random password",
        enabled_by_default: true,
        run: ident::password,
    },
    CatalogEntry {
        name: "decide",
        help: "let fate answer a yes or no question",
        enabled_by_default: true,
        run: chance::decide,
    },
    CatalogEntry {
        name: "flip",
        help: "flip a coin",
        enabled_by_default: true,
        run: chance::flip,
    },
    CatalogEntry {
        name: "try",
        help: "attempt something, optionally with a success probability first",
        enabled_by_default: true,
        run: chance::attempt,
    },
];

/// Look up a catalog entry by name.
pub fn lookup(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

/// Iterate over catalog command names.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|entry| entry.name)
}
