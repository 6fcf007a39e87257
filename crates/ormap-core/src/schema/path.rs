use super::{ClassId, MappingKind, Mappings};

/// A property path resolved to table and column references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub steps: Vec<PathStep>,
}

/// One hop of a resolved property path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    /// Class the property is declared on
    pub class: ClassId,

    pub kind: MappingKind,

    /// Table the step reads from. For many-to-many this is the join table.
    pub table_name: String,

    pub field_name: String,

    /// The class the next step continues from, for relations
    pub target: Option<ClassId>,

    /// Table of the target class, for relations
    pub target_table: Option<String>,
}

impl PathStep {
    /// Returns `true` if reading this step requires joining another table.
    pub fn needs_join(&self) -> bool {
        self.kind != MappingKind::Scalar
    }
}

impl ResolvedPath {
    /// Returns `true` if any step requires a join.
    pub fn needs_join(&self) -> bool {
        self.steps.iter().any(PathStep::needs_join)
    }

    /// The final step. Paths always have at least one step.
    pub fn last(&self) -> &PathStep {
        self.steps.last().expect("resolved path has no steps")
    }
}

impl Mappings {
    /// Resolve a property path, starting at `root`.
    ///
    /// Returns `None` if:
    /// - The path is empty
    /// - Any step names a property that is not mapped
    /// - A step tries to continue past a scalar
    pub fn resolve_path(&self, root: ClassId, path: &[&str]) -> Option<ResolvedPath> {
        if path.is_empty() {
            return None;
        }

        let mut steps = Vec::with_capacity(path.len());
        let mut current = Some(root);

        for property in path {
            // A previous scalar step leaves nothing to project through.
            let class = current?;
            let mapping = self.property(class, property)?;
            let target = mapping.target();

            steps.push(PathStep {
                class,
                kind: mapping.kind(),
                table_name: mapping.table_name().to_string(),
                field_name: mapping.field_name().to_string(),
                target,
                target_table: target.map(|target| self.table_name(target)),
            });

            current = target;
        }

        Some(ResolvedPath { steps })
    }
}
