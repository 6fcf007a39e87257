mod columns;
mod relations;

use super::{Mapping, Mappings, PropertyDef};
use crate::{Error, Result};

struct Verify<'a> {
    mappings: &'a Mappings,
}

impl Mappings {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { mappings: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        let mut hazards = vec![];
        for mapping in self.mappings.iter() {
            self.verify_columns(mapping, &mut hazards);
        }
        self.verify_tables(&mut hazards);

        if !hazards.is_empty() {
            self.report(&hazards);
            return Err(Error::invalid_schema(hazards));
        }

        let mut issues = vec![];
        for mapping in self.mappings.iter() {
            self.verify_relation(mapping, &mut issues);
        }

        if !issues.is_empty() {
            self.report(&issues);
            return Err(Error::inconsistent_relationship(issues));
        }

        Ok(())
    }

    /// `Class::property`, for messages.
    fn full_name(&self, def: &PropertyDef) -> String {
        format!(
            "{}::{}",
            self.mappings.catalog().name(def.selector.class()),
            def.selector.property()
        )
    }

    fn report(&self, issues: &[String]) {
        for issue in issues {
            log::warn!("mapping verification failed: {issue}");
        }
    }
}
