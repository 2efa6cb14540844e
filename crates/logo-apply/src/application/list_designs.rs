//! ListDesigns: reports every catalog entry and whether its design file is on disk.

use std::path::Path;

use logo_core::{design_file_name, Design, DesignCatalog};

use super::assets::AssetStore;

/// One row of the design listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignListing {
    pub design: &'static Design,
    /// `true` when `logo_design_<N>.png` exists in the working directory.
    pub file_present: bool,
}

/// Lists the catalog in ascending design order, checking each design file.
///
/// Performs existence checks only; nothing is written.
pub fn list_designs(catalog: &DesignCatalog, store: &dyn AssetStore) -> Vec<DesignListing> {
    catalog
        .iter()
        .map(|design| {
            let file_name = design_file_name(design.number);
            let file_present = store.exists(Path::new(&file_name));
            tracing::debug!(design = %design.number, file = %file_name, file_present, "checked design file");
            DesignListing {
                design,
                file_present,
            }
        })
        .collect()
}
