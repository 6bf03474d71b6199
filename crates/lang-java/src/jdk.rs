//! Built-in knowledge of the core JDK packages.
//!
//! No JDK installation is inspected; the table below covers the commonly
//! referenced types of `java.lang`, `java.util` and `java.io` with their
//! direct supertypes, which is enough for import resolution and subtype
//! checks against the platform.

use once_cell::sync::Lazy;
use srcmodel_api::{ClassKind, ClassLibrary, ClassMetadata};
use std::collections::HashMap;

use ClassKind::{Annotation, Class, Enum, Interface};

/// `(fqn, kind, superclass, interfaces)`
type Entry = (
    &'static str,
    ClassKind,
    Option<&'static str>,
    &'static [&'static str],
);

const OBJECT: Option<&str> = Some("java.lang.Object");

const JDK_CLASSES: &[Entry] = &[
    // java.lang
    ("java.lang.Object", Class, None, &[]),
    ("java.lang.Class", Class, OBJECT, &["java.io.Serializable"]),
    (
        "java.lang.String",
        Class,
        OBJECT,
        &["java.io.Serializable", "java.lang.Comparable", "java.lang.CharSequence"],
    ),
    ("java.lang.CharSequence", Interface, None, &[]),
    ("java.lang.Comparable", Interface, None, &[]),
    ("java.lang.Iterable", Interface, None, &[]),
    ("java.lang.Runnable", Interface, None, &[]),
    ("java.lang.Cloneable", Interface, None, &[]),
    ("java.lang.AutoCloseable", Interface, None, &[]),
    ("java.lang.Appendable", Interface, None, &[]),
    (
        "java.lang.StringBuilder",
        Class,
        OBJECT,
        &["java.io.Serializable", "java.lang.CharSequence", "java.lang.Appendable"],
    ),
    (
        "java.lang.StringBuffer",
        Class,
        OBJECT,
        &["java.io.Serializable", "java.lang.CharSequence", "java.lang.Appendable"],
    ),
    ("java.lang.Number", Class, OBJECT, &["java.io.Serializable"]),
    ("java.lang.Integer", Class, Some("java.lang.Number"), &["java.lang.Comparable"]),
    ("java.lang.Long", Class, Some("java.lang.Number"), &["java.lang.Comparable"]),
    ("java.lang.Short", Class, Some("java.lang.Number"), &["java.lang.Comparable"]),
    ("java.lang.Byte", Class, Some("java.lang.Number"), &["java.lang.Comparable"]),
    ("java.lang.Float", Class, Some("java.lang.Number"), &["java.lang.Comparable"]),
    ("java.lang.Double", Class, Some("java.lang.Number"), &["java.lang.Comparable"]),
    (
        "java.lang.Boolean",
        Class,
        OBJECT,
        &["java.io.Serializable", "java.lang.Comparable"],
    ),
    (
        "java.lang.Character",
        Class,
        OBJECT,
        &["java.io.Serializable", "java.lang.Comparable"],
    ),
    ("java.lang.Void", Class, OBJECT, &[]),
    ("java.lang.Math", Class, OBJECT, &[]),
    ("java.lang.System", Class, OBJECT, &[]),
    ("java.lang.Thread", Class, OBJECT, &["java.lang.Runnable"]),
    (
        "java.lang.Enum",
        Class,
        OBJECT,
        &["java.lang.Comparable", "java.io.Serializable"],
    ),
    ("java.lang.Throwable", Class, OBJECT, &["java.io.Serializable"]),
    ("java.lang.Exception", Class, Some("java.lang.Throwable"), &[]),
    ("java.lang.Error", Class, Some("java.lang.Throwable"), &[]),
    ("java.lang.RuntimeException", Class, Some("java.lang.Exception"), &[]),
    (
        "java.lang.IllegalArgumentException",
        Class,
        Some("java.lang.RuntimeException"),
        &[],
    ),
    (
        "java.lang.IllegalStateException",
        Class,
        Some("java.lang.RuntimeException"),
        &[],
    ),
    (
        "java.lang.NullPointerException",
        Class,
        Some("java.lang.RuntimeException"),
        &[],
    ),
    (
        "java.lang.UnsupportedOperationException",
        Class,
        Some("java.lang.RuntimeException"),
        &[],
    ),
    (
        "java.lang.ClassNotFoundException",
        Class,
        Some("java.lang.Exception"),
        &[],
    ),
    ("java.lang.Deprecated", Annotation, None, &[]),
    ("java.lang.Override", Annotation, None, &[]),
    ("java.lang.SuppressWarnings", Annotation, None, &[]),
    ("java.lang.FunctionalInterface", Annotation, None, &[]),
    ("java.lang.Thread$State", Enum, Some("java.lang.Enum"), &[]),
    // java.util
    ("java.util.Collection", Interface, None, &["java.lang.Iterable"]),
    ("java.util.List", Interface, None, &["java.util.Collection"]),
    ("java.util.Set", Interface, None, &["java.util.Collection"]),
    ("java.util.SortedSet", Interface, None, &["java.util.Set"]),
    ("java.util.Queue", Interface, None, &["java.util.Collection"]),
    ("java.util.Deque", Interface, None, &["java.util.Queue"]),
    ("java.util.Map", Interface, None, &[]),
    ("java.util.Map$Entry", Interface, None, &[]),
    ("java.util.SortedMap", Interface, None, &["java.util.Map"]),
    ("java.util.Iterator", Interface, None, &[]),
    ("java.util.Comparator", Interface, None, &[]),
    ("java.util.RandomAccess", Interface, None, &[]),
    ("java.util.EventListener", Interface, None, &[]),
    (
        "java.util.AbstractCollection",
        Class,
        OBJECT,
        &["java.util.Collection"],
    ),
    (
        "java.util.AbstractList",
        Class,
        Some("java.util.AbstractCollection"),
        &["java.util.List"],
    ),
    (
        "java.util.AbstractSet",
        Class,
        Some("java.util.AbstractCollection"),
        &["java.util.Set"],
    ),
    ("java.util.AbstractMap", Class, OBJECT, &["java.util.Map"]),
    (
        "java.util.ArrayList",
        Class,
        Some("java.util.AbstractList"),
        &[
            "java.util.List",
            "java.util.RandomAccess",
            "java.lang.Cloneable",
            "java.io.Serializable",
        ],
    ),
    (
        "java.util.LinkedList",
        Class,
        Some("java.util.AbstractList"),
        &["java.util.List", "java.util.Deque", "java.lang.Cloneable", "java.io.Serializable"],
    ),
    (
        "java.util.Vector",
        Class,
        Some("java.util.AbstractList"),
        &[
            "java.util.List",
            "java.util.RandomAccess",
            "java.lang.Cloneable",
            "java.io.Serializable",
        ],
    ),
    (
        "java.util.HashSet",
        Class,
        Some("java.util.AbstractSet"),
        &["java.util.Set", "java.lang.Cloneable", "java.io.Serializable"],
    ),
    (
        "java.util.LinkedHashSet",
        Class,
        Some("java.util.HashSet"),
        &["java.util.Set", "java.lang.Cloneable", "java.io.Serializable"],
    ),
    (
        "java.util.TreeSet",
        Class,
        Some("java.util.AbstractSet"),
        &["java.util.SortedSet", "java.lang.Cloneable", "java.io.Serializable"],
    ),
    (
        "java.util.HashMap",
        Class,
        Some("java.util.AbstractMap"),
        &["java.util.Map", "java.lang.Cloneable", "java.io.Serializable"],
    ),
    (
        "java.util.LinkedHashMap",
        Class,
        Some("java.util.HashMap"),
        &["java.util.Map"],
    ),
    (
        "java.util.TreeMap",
        Class,
        Some("java.util.AbstractMap"),
        &["java.util.SortedMap", "java.lang.Cloneable", "java.io.Serializable"],
    ),
    (
        "java.util.Hashtable",
        Class,
        OBJECT,
        &["java.util.Map", "java.lang.Cloneable", "java.io.Serializable"],
    ),
    ("java.util.Properties", Class, Some("java.util.Hashtable"), &[]),
    (
        "java.util.Date",
        Class,
        OBJECT,
        &["java.io.Serializable", "java.lang.Cloneable", "java.lang.Comparable"],
    ),
    ("java.util.Collections", Class, OBJECT, &[]),
    ("java.util.Arrays", Class, OBJECT, &[]),
    ("java.util.Objects", Class, OBJECT, &[]),
    ("java.util.Optional", Class, OBJECT, &[]),
    ("java.util.EventObject", Class, OBJECT, &["java.io.Serializable"]),
    (
        "java.util.NoSuchElementException",
        Class,
        Some("java.lang.RuntimeException"),
        &[],
    ),
    // java.io
    ("java.io.Serializable", Interface, None, &[]),
    ("java.io.Closeable", Interface, None, &["java.lang.AutoCloseable"]),
    ("java.io.Flushable", Interface, None, &[]),
    (
        "java.io.InputStream",
        Class,
        OBJECT,
        &["java.io.Closeable"],
    ),
    (
        "java.io.OutputStream",
        Class,
        OBJECT,
        &["java.io.Closeable", "java.io.Flushable"],
    ),
    (
        "java.io.Reader",
        Class,
        OBJECT,
        &["java.lang.Readable", "java.io.Closeable"],
    ),
    (
        "java.io.Writer",
        Class,
        OBJECT,
        &["java.lang.Appendable", "java.io.Closeable", "java.io.Flushable"],
    ),
    ("java.lang.Readable", Interface, None, &[]),
    ("java.io.StringReader", Class, Some("java.io.Reader"), &[]),
    ("java.io.StringWriter", Class, Some("java.io.Writer"), &[]),
    ("java.io.File", Class, OBJECT, &["java.io.Serializable", "java.lang.Comparable"]),
    ("java.io.IOException", Class, Some("java.lang.Exception"), &[]),
    (
        "java.io.FileNotFoundException",
        Class,
        Some("java.io.IOException"),
        &[],
    ),
    (
        "java.io.UncheckedIOException",
        Class,
        Some("java.lang.RuntimeException"),
        &[],
    ),
];

static JDK_INDEX: Lazy<HashMap<&'static str, &'static Entry>> =
    Lazy::new(|| JDK_CLASSES.iter().map(|entry| (entry.0, entry)).collect());

/// Class library backed by a fixed table of JDK types.
#[derive(Debug, Default, Clone, Copy)]
pub struct JdkClassLibrary;

impl JdkClassLibrary {
    pub fn new() -> Self {
        Self
    }

    /// Number of known JDK types.
    pub fn len(&self) -> usize {
        JDK_CLASSES.len()
    }

    pub fn is_empty(&self) -> bool {
        JDK_CLASSES.is_empty()
    }
}

impl ClassLibrary for JdkClassLibrary {
    fn lookup(&self, fqn: &str) -> Option<ClassMetadata> {
        let &&(name, kind, superclass, interfaces) = JDK_INDEX.get(fqn)?;
        let mut metadata =
            ClassMetadata::new(name, kind).with_interfaces(interfaces.iter().copied());
        metadata.superclass = superclass.map(str::to_string);
        Some(metadata)
    }

    fn exists(&self, fqn: &str) -> bool {
        JDK_INDEX.contains_key(fqn)
    }
}
