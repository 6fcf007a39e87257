use super::{db, Catalog, ClassId, Mapping};
use crate::{Error, Result};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

/// Collects mapping declarations per class while the model is being built.
///
/// Registration may happen from several threads; a single lock serializes
/// appends, which keeps duplicate detection exact for each class. Once
/// [`Registry::finalize`] succeeds, the registry is frozen and reads go
/// through the lock-free [`Mappings`] view.
#[derive(Debug)]
pub struct Registry {
    catalog: Arc<Catalog>,

    /// Declarations collected before finalization
    building: Mutex<IndexMap<ClassId, Vec<Mapping>>>,

    /// Set exactly once, by a successful `finalize`
    frozen: OnceLock<Mappings>,
}

/// The finalized, read-only mapping set handed to schema and query builders.
#[derive(Debug)]
pub struct Mappings {
    catalog: Arc<Catalog>,

    /// Per-class definitions, in registration order.
    classes: IndexMap<ClassId, Vec<Mapping>>,
}

impl Registry {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            building: Mutex::new(IndexMap::new()),
            frozen: OnceLock::new(),
        }
    }

    /// The catalog mapping kinds are constructed against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Appends `mapping` to `class`'s ordered definitions.
    pub fn register(&self, class: ClassId, mapping: impl Into<Mapping>) -> Result<()> {
        let mapping = mapping.into();
        let class_name = self.catalog.try_class(class)?.name.as_str();

        if mapping.class() != class {
            return Err(Error::configuration(format!(
                "`{}::{}` cannot be registered on `{class_name}`",
                self.catalog.try_class(mapping.class())?.name,
                mapping.property(),
            )));
        }

        if let Some(target) = mapping.target() {
            self.catalog.try_class(target)?;
        }

        let mut building = self.lock();

        // `finalize` sets the frozen view while holding the lock, so checking
        // here cannot race with it.
        if self.frozen.get().is_some() {
            return Err(Error::registry_closed(class_name));
        }

        let definitions = building.entry(class).or_default();

        if definitions
            .iter()
            .any(|existing| existing.field_name() == mapping.field_name())
        {
            return Err(Error::duplicate_mapping(class_name, mapping.field_name()));
        }

        log::debug!(
            "registered {} `{class_name}::{}` as `{}`.`{}`",
            mapping.kind(),
            mapping.property(),
            mapping.table_name(),
            mapping.field_name()
        );

        definitions.push(mapping);
        Ok(())
    }

    /// Definitions registered for `class`, in registration order.
    ///
    /// Unmapped classes yield an empty sequence. After finalization this
    /// borrows from the frozen view without locking.
    pub fn definitions_for(&self, class: ClassId) -> Cow<'_, [Mapping]> {
        if let Some(mappings) = self.frozen.get() {
            return Cow::Borrowed(mappings.definitions_for(class));
        }

        let building = self.lock();
        Cow::Owned(building.get(&class).cloned().unwrap_or_default())
    }

    /// Validates every declaration together and freezes the registry.
    ///
    /// On failure the registry stays open. Calling this again after a
    /// successful finalize returns the same frozen view.
    pub fn finalize(&self) -> Result<&Mappings> {
        if let Some(mappings) = self.frozen.get() {
            return Ok(mappings);
        }

        let mut building = self.lock();

        if let Some(mappings) = self.frozen.get() {
            return Ok(mappings);
        }

        let mappings = Mappings {
            catalog: self.catalog.clone(),
            classes: std::mem::take(&mut *building),
        };

        if let Err(err) = mappings.verify() {
            *building = mappings.classes;
            return Err(err);
        }

        log::info!(
            "mapping registry finalized: {} classes, {} definitions",
            mappings.classes.len(),
            mappings.classes.values().map(Vec::len).sum::<usize>()
        );

        Ok(self.frozen.get_or_init(|| mappings))
    }

    pub fn is_finalized(&self) -> bool {
        self.frozen.get().is_some()
    }

    /// The frozen view, once finalized.
    pub fn mappings(&self) -> Option<&Mappings> {
        self.frozen.get()
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<ClassId, Vec<Mapping>>> {
        // Registration never leaves the map half-updated, so a poisoned lock
        // still guards consistent data.
        self.building.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Mappings {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Definitions for `class`, or an empty slice when the class is unmapped.
    pub fn definitions_for(&self, class: ClassId) -> &[Mapping] {
        self.classes.get(&class).map(Vec::as_slice).unwrap_or_default()
    }

    /// Mapped classes, in first-registration order.
    pub fn classes(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.classes.keys().copied()
    }

    pub fn is_mapped(&self, class: ClassId) -> bool {
        self.classes.contains_key(&class)
    }

    /// All definitions across all classes.
    pub fn iter(&self) -> impl Iterator<Item = &Mapping> {
        self.classes.values().flatten()
    }

    /// Find a definition by its resolved field name.
    pub fn field(&self, class: ClassId, field_name: &str) -> Option<&Mapping> {
        self.definitions_for(class)
            .iter()
            .find(|mapping| mapping.field_name() == field_name)
    }

    /// Find a definition by the property it maps.
    pub fn property(&self, class: ClassId, property: &str) -> Option<&Mapping> {
        self.definitions_for(class)
            .iter()
            .find(|mapping| mapping.property() == property)
    }

    /// The entity table a class's columns live in.
    pub fn table_name(&self, class: ClassId) -> String {
        self.definitions_for(class)
            .iter()
            .find(|mapping| !matches!(mapping, Mapping::ManyToMany(_)))
            .map(|mapping| mapping.table_name().to_string())
            .unwrap_or_else(|| self.catalog.naming().table_name(&self.catalog, class))
    }

    /// Derives the table layout a DDL generator consumes.
    pub fn db_schema(&self) -> db::Schema {
        db::Schema::from_mappings(self)
    }
}
