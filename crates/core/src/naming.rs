/// Separator used between packages and between package/class.
pub const TYPE_SEPARATOR: char = '.';

/// Separator used between a class and its nested classes in internal names.
pub const NESTING_SEPARATOR: char = '$';

pub const OBJECT_FQN: &str = "java.lang.Object";
pub const ENUM_FQN: &str = "java.lang.Enum";

const PRIMITIVES: &[&str] = &[
    "void", "boolean", "byte", "char", "short", "int", "long", "float", "double",
];

/// Members of `java.lang` that resolve without consulting any class library.
const JAVA_LANG_TYPES: &[&str] = &[
    "Appendable",
    "AutoCloseable",
    "Boolean",
    "Byte",
    "CharSequence",
    "Character",
    "Class",
    "ClassCastException",
    "ClassLoader",
    "ClassNotFoundException",
    "CloneNotSupportedException",
    "Cloneable",
    "Comparable",
    "Deprecated",
    "Double",
    "Enum",
    "Error",
    "Exception",
    "Float",
    "FunctionalInterface",
    "IllegalArgumentException",
    "IllegalStateException",
    "IndexOutOfBoundsException",
    "Integer",
    "InterruptedException",
    "Iterable",
    "Long",
    "Math",
    "NullPointerException",
    "Number",
    "Object",
    "Override",
    "Process",
    "Record",
    "Runnable",
    "Runtime",
    "RuntimeException",
    "SafeVarargs",
    "Short",
    "String",
    "StringBuffer",
    "StringBuilder",
    "SuppressWarnings",
    "System",
    "Thread",
    "ThreadLocal",
    "Throwable",
    "UnsupportedOperationException",
    "Void",
];

pub fn is_primitive(name: &str) -> bool {
    PRIMITIVES.contains(&name)
}

/// Fully qualified name for a well-known `java.lang` simple name.
pub fn implicit_java_lang(name: &str) -> Option<String> {
    JAVA_LANG_TYPES
        .binary_search(&name)
        .ok()
        .map(|_| format!("java.lang.{name}"))
}

/// Usage form of an internal name: `p.Outer$Inner` becomes `p.Outer.Inner`.
pub fn to_source_form(fqn: &str) -> String {
    fqn.replace(NESTING_SEPARATOR, ".")
}

pub fn join_package(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{package}{TYPE_SEPARATOR}{name}")
    }
}

/// Candidate internal names for a dotted name, outermost reading first.
///
/// `a.b.C.D` yields `a.b.C.D`, `a.b.C$D`, `a.b$C$D`, `a$b$C$D`: any dot may
/// turn out to be a nesting boundary.
pub fn nesting_candidates(name: &str) -> Vec<String> {
    let mut candidates = vec![name.to_string()];
    let mut current = name.to_string();
    while let Some(idx) = current.rfind(TYPE_SEPARATOR) {
        current.replace_range(idx..idx + 1, "$");
        candidates.push(current.clone());
    }
    candidates
}

/// Bean-style decapitalization: `Foo` to `foo`, but `URL` stays `URL`.
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if let Some(second) = chars.next() {
        if first.is_uppercase() && second.is_uppercase() {
            return name.to_string();
        }
    }
    let mut result: String = first.to_lowercase().collect();
    result.push_str(&name[first.len_utf8()..]);
    result
}

/// Split `Outer.Inner.Deep` into (`Outer`, `.Inner.Deep`).
pub fn split_outer(name: &str) -> (&str, &str) {
    match name.find(TYPE_SEPARATOR) {
        Some(idx) => (&name[..idx], &name[idx..]),
        None => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_lang_table_is_sorted() {
        let mut sorted = JAVA_LANG_TYPES.to_vec();
        sorted.sort();
        assert_eq!(sorted, JAVA_LANG_TYPES);
    }

    #[test]
    fn test_implicit_java_lang() {
        assert_eq!(implicit_java_lang("String").as_deref(), Some("java.lang.String"));
        assert_eq!(implicit_java_lang("List"), None);
    }

    #[test]
    fn test_nesting_candidates() {
        assert_eq!(
            nesting_candidates("p.Outer.Inner"),
            vec!["p.Outer.Inner", "p.Outer$Inner", "p$Outer$Inner"]
        );
        assert_eq!(nesting_candidates("Foo"), vec!["Foo"]);
    }

    #[test]
    fn test_decapitalize() {
        assert_eq!(decapitalize("Foo"), "foo");
        assert_eq!(decapitalize("McFnord"), "mcFnord");
        assert_eq!(decapitalize("URL"), "URL");
        assert_eq!(decapitalize(""), "");
    }

    #[test]
    fn test_source_form() {
        assert_eq!(to_source_form("p.Outer$Inner"), "p.Outer.Inner");
    }
}
