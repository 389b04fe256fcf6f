use anyhow::{anyhow, Result};
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use std::collections::BTreeSet;

/// Font families installed on the system, backed by a `fontdb` database.
pub struct SystemFonts {
    db: fontdb::Database,
    families: Vec<String>,
}

impl std::fmt::Debug for SystemFonts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemFonts")
            .field("families", &self.families.len())
            .finish()
    }
}

impl SystemFonts {
    pub fn load() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        let fonts = Self::from_database(db);
        tracing::debug!(families = fonts.families.len(), "system fonts enumerated");
        fonts
    }

    pub fn from_database(db: fontdb::Database) -> Self {
        let families = collect_families(&db);
        Self { db, families }
    }

    /// Sorted, de-duplicated family names.
    pub fn families(&self) -> &[String] {
        &self.families
    }

    pub fn contains(&self, family: &str) -> bool {
        self.families.binary_search_by(|f| f.as_str().cmp(family)).is_ok()
    }

    pub fn face_data(&self, family: &str) -> Result<FontData> {
        let families = [fontdb::Family::Name(family)];
        let query = fontdb::Query {
            families: &families,
            ..fontdb::Query::default()
        };
        let id = self
            .db
            .query(&query)
            .ok_or_else(|| anyhow!("font family {family:?} is not installed"))?;
        self.db
            .with_face_data(id, |data, index| {
                let mut font = FontData::from_owned(data.to_vec());
                font.index = index;
                font
            })
            .ok_or_else(|| anyhow!("font data for {family:?} could not be read"))
    }
}

fn collect_families(db: &fontdb::Database) -> Vec<String> {
    db.faces()
        .filter_map(|face| face.families.first().map(|(name, _)| name.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Register `family` as a named egui family that falls back to the built-in
/// proportional chain for missing glyphs.
pub fn register_family(defs: &mut FontDefinitions, family: &str, data: FontData) {
    defs.font_data.insert(family.to_owned(), data);
    let mut chain = vec![family.to_owned()];
    if let Some(fallback) = defs.families.get(&FontFamily::Proportional) {
        chain.extend(fallback.iter().cloned());
    }
    defs.families.insert(FontFamily::Name(family.into()), chain);
}

/// Load `family` from the system and hand it to egui. The family becomes
/// usable from the next frame on.
pub fn install_family(ctx: &egui::Context, fonts: &SystemFonts, family: &str) -> Result<()> {
    let data = fonts.face_data(family)?;
    let mut defs = FontDefinitions::default();
    register_family(&mut defs, family, data);
    ctx.set_fonts(defs);
    tracing::debug!(family, "font family installed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_database_has_no_families() {
        let fonts = SystemFonts::from_database(fontdb::Database::new());
        assert!(fonts.families().is_empty());
        assert!(!fonts.contains("Arial"));
        assert!(fonts.face_data("Arial").is_err());
    }

    #[test]
    fn registered_family_falls_back_to_proportional_chain() {
        let mut defs = FontDefinitions::default();
        let proportional = defs.families[&FontFamily::Proportional].clone();

        register_family(&mut defs, "Script Sans", FontData::from_static(&[]));

        let chain = &defs.families[&FontFamily::Name("Script Sans".into())];
        assert_eq!(chain[0], "Script Sans");
        assert_eq!(&chain[1..], proportional.as_slice());
        assert!(defs.font_data.contains_key("Script Sans"));
    }
}
