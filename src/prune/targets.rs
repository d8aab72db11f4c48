//! Built-in list of entries slated for removal.

/// An identifier slated for removal, with a note on what it actually is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// The `"id"` field value to match in the data file.
    pub id: &'static str,
    /// Human-readable note. Never matched against the file.
    pub note: &'static str,
}

/// Entries known to be wrong in the dataset. Order is the processing order.
pub const DEFAULT_TARGETS: &[Target] = &[
    Target {
        id: "ChIJoxvjXzQ_NoYR7hH3JDwi17s",
        note: "Arcade in Longview",
    },
    Target {
        id: "ChIJXV_VgYYjNoYRnjt_Ewj5-gM",
        note: "Skydive East Texas in Gladewater",
    },
];

/// Default location of the generated parks data module.
pub const DEFAULT_DATA_FILE: &str = "src/data/texas-parks.ts";
