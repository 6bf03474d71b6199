use super::{Annotation, ClassId, Documentation, JavaModel};

/// One compilation unit: package, imports and top-level classes.
#[derive(Debug, Clone, Default)]
pub struct JavaSource {
    pub(crate) package: Option<JavaPackage>,
    pub(crate) imports: Vec<String>,
    pub(crate) classes: Vec<ClassId>,
    pub(crate) origin: Option<String>,
}

impl JavaSource {
    pub fn package(&self) -> Option<&JavaPackage> {
        self.package.as_ref()
    }

    /// Package name, empty for the default package.
    pub fn package_name(&self) -> &str {
        self.package.as_ref().map(|p| p.name.as_str()).unwrap_or("")
    }

    /// Imports as written, e.g. `java.util.*` or `static java.lang.Math.max`.
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// Top-level classes in declaration order.
    pub fn class_ids(&self) -> &[ClassId] {
        &self.classes
    }

    /// Where the events came from (a path or URL), if the producer said.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Prefix for top-level class names: `"p."`, or empty in the default package.
    pub fn class_name_prefix(&self) -> String {
        match self.package_name() {
            "" => String::new(),
            package => format!("{package}."),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JavaPackage {
    pub(crate) name: String,
    pub(crate) annotations: Vec<Annotation>,
    pub(crate) documentation: Documentation,
    pub(crate) line: usize,
}

impl JavaPackage {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl JavaModel for JavaPackage {
    fn documentation(&self) -> &Documentation {
        &self.documentation
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn line_number(&self) -> usize {
        self.line
    }
}
