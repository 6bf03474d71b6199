use super::{Annotation, EntityRef};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static NAMED_PARAMETER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([\w.\-]+)\s*=\s*(?:"([^"]*)"|(\S+))"#).expect("static regex")
});

static PARAMETER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"]*"|\S+"#).expect("static regex"));

/// Declaration modifiers in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers(Vec<String>);

impl Modifiers {
    pub fn new<I, S>(modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(modifiers.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, modifier: &str) -> bool {
        self.0.iter().any(|m| m == modifier)
    }

    pub fn is_public(&self) -> bool {
        self.contains("public")
    }

    pub fn is_protected(&self) -> bool {
        self.contains("protected")
    }

    pub fn is_private(&self) -> bool {
        self.contains("private")
    }

    pub fn is_static(&self) -> bool {
        self.contains("static")
    }

    pub fn is_final(&self) -> bool {
        self.contains("final")
    }

    pub fn is_abstract(&self) -> bool {
        self.contains("abstract")
    }

    pub fn is_synchronized(&self) -> bool {
        self.contains("synchronized")
    }

    pub fn is_transient(&self) -> bool {
        self.contains("transient")
    }

    pub fn is_volatile(&self) -> bool {
        self.contains("volatile")
    }

    pub fn is_native(&self) -> bool {
        self.contains("native")
    }

    pub fn is_strictfp(&self) -> bool {
        self.contains("strictfp")
    }

    /// Space separated, each followed by a space: `"public static "`.
    pub fn render(&self) -> String {
        self.0.iter().map(|m| format!("{m} ")).collect()
    }
}

/// A javadoc block tag such as `@param name the name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocletTag {
    name: String,
    value: String,
    line: usize,
    context: EntityRef,
}

impl DocletTag {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        context: EntityRef,
        line: usize,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            line,
            context,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn line_number(&self) -> usize {
        self.line
    }

    /// The entity the tag documents.
    pub fn context(&self) -> EntityRef {
        self.context
    }

    /// Whitespace separated words, double-quoted runs kept together.
    pub fn parameters(&self) -> Vec<String> {
        PARAMETER_TOKEN
            .find_iter(&self.value)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Value of `key=value` or `key="some value"` inside the tag text.
    pub fn named_parameter(&self, key: &str) -> Option<String> {
        NAMED_PARAMETER.captures_iter(&self.value).find_map(|caps| {
            if &caps[1] != key {
                return None;
            }
            caps.get(2)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str().to_string())
        })
    }
}

/// Creates tags for the builder; lets callers canonicalize or decorate tags.
pub trait DocletTagFactory: Send + Sync {
    fn create_tag(&self, name: &str, value: &str, context: EntityRef, line: usize) -> DocletTag;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDocletTagFactory;

impl DocletTagFactory for DefaultDocletTagFactory {
    fn create_tag(&self, name: &str, value: &str, context: EntityRef, line: usize) -> DocletTag {
        DocletTag::new(name, value, context, line)
    }
}

/// Renames aliased tags (`@exception` to `@throws`, say) before delegating.
pub struct AliasDocletTagFactory {
    aliases: HashMap<String, String>,
    inner: Box<dyn DocletTagFactory>,
}

impl AliasDocletTagFactory {
    pub fn new(inner: Box<dyn DocletTagFactory>) -> Self {
        Self {
            aliases: HashMap::new(),
            inner,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), canonical.into());
        self
    }
}

impl DocletTagFactory for AliasDocletTagFactory {
    fn create_tag(&self, name: &str, value: &str, context: EntityRef, line: usize) -> DocletTag {
        let name = self.aliases.get(name).map(String::as_str).unwrap_or(name);
        self.inner.create_tag(name, value, context, line)
    }
}

/// Javadoc attached to an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
    pub(crate) comment: Option<String>,
    pub(crate) tags: Vec<DocletTag>,
}

impl Documentation {
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn tags(&self) -> &[DocletTag] {
        &self.tags
    }
}

/// Shared surface of everything that carries javadoc and annotations.
pub trait JavaModel {
    fn documentation(&self) -> &Documentation;

    fn annotations(&self) -> &[Annotation];

    fn line_number(&self) -> usize;

    fn comment(&self) -> Option<&str> {
        self.documentation().comment()
    }

    fn tags(&self) -> &[DocletTag] {
        self.documentation().tags()
    }

    fn tags_by_name(&self, name: &str) -> Vec<&DocletTag> {
        self.tags().iter().filter(|t| t.name() == name).collect()
    }

    fn tag_by_name(&self, name: &str) -> Option<&DocletTag> {
        self.tags().iter().find(|t| t.name() == name)
    }

    /// `named_parameter` of the first tag called `tag`.
    fn named_parameter(&self, tag: &str, parameter: &str) -> Option<String> {
        self.tag_by_name(tag)
            .and_then(|t| t.named_parameter(parameter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClassId;

    fn tag(value: &str) -> DocletTag {
        DefaultDocletTagFactory.create_tag("x", value, EntityRef::Class(ClassId(0)), 1)
    }

    #[test]
    fn test_parameters_keep_quoted_runs() {
        let t = tag(r#"name "a quoted run" tail"#);
        assert_eq!(t.parameters(), vec!["name", "\"a quoted run\"", "tail"]);
    }

    #[test]
    fn test_named_parameters() {
        let t = tag(r#"type=int name="the thing" flag"#);
        assert_eq!(t.named_parameter("type").as_deref(), Some("int"));
        assert_eq!(t.named_parameter("name").as_deref(), Some("the thing"));
        assert_eq!(t.named_parameter("flag"), None);
    }

    #[test]
    fn test_alias_factory_renames() {
        let factory = AliasDocletTagFactory::new(Box::new(DefaultDocletTagFactory))
            .with_alias("exception", "throws");
        let t = factory.create_tag("exception", "IOException", EntityRef::Class(ClassId(0)), 3);
        assert_eq!(t.name(), "throws");
        assert_eq!(t.line_number(), 3);
    }

    #[test]
    fn test_modifiers() {
        let m = Modifiers::new(["public", "static", "final"]);
        assert!(m.is_public() && m.is_static() && m.is_final());
        assert!(!m.is_private());
        assert_eq!(m.render(), "public static final ");
    }
}
