//! Bundled SPDX license identifier registry.
//!
//! The list lives in `data/spdx_license_ids.txt` and is compiled into the
//! binary. Lookups are exact and case-sensitive.

use std::collections::HashSet;
use std::sync::LazyLock;

static RAW_IDS: &str = include_str!("../data/spdx_license_ids.txt");

static LICENSE_IDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    RAW_IDS
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
});

/// Is `id` a known SPDX license identifier?
#[must_use]
pub fn is_known_license(id: &str) -> bool {
    LICENSE_IDS.contains(id)
}
