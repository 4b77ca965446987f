use crate::models::{MethodSet, Signature};

/// Appended to the receiver type name to name the interface
pub const INTERFACE_SUFFIX: &str = "Interface";

const INDENT: &str = "    ";

/// Render an interface declaration from the exported signatures
///
/// Signatures that are not exported are dropped. The result has no trailing
/// newline.
pub fn render_interface(type_name: &str, signatures: &[Signature]) -> String {
    render_lines(type_name, signatures.iter().filter(|s| s.is_exported()))
}

/// Render the interface for a scan result
pub fn format_interface(method_set: &MethodSet) -> String {
    render_lines(&method_set.type_name, method_set.exported())
}

/// Render the header, one line per given signature, and the closing brace
fn render_lines<'a>(type_name: &str, exported: impl Iterator<Item = &'a Signature>) -> String {
    let mut lines = vec![format!(
        "type {}{} interface {{",
        type_name, INTERFACE_SUFFIX
    )];
    lines.extend(exported.map(|s| format!("{}func {}", INDENT, s)));
    lines.push("}".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceFile;
    use proptest::prelude::*;
    use std::path::PathBuf;

    #[test]
    fn test_empty_interface() {
        assert_eq!(render_interface("Foo", &[]), "type FooInterface interface {\n}");
    }

    #[test]
    fn test_unexported_dropped() {
        let signatures = vec![
            Signature::new("Get(id int) (string, error)"),
            Signature::new("put(id int) error"),
        ];
        assert_eq!(
            render_interface("Client", &signatures),
            "type ClientInterface interface {\n    func Get(id int) (string, error)\n}"
        );
    }

    #[test]
    fn test_format_interface_keeps_scan_order() {
        let set = MethodSet {
            type_name: "Store".to_string(),
            package_dir: PathBuf::from("/go/src/app"),
            files: vec![
                SourceFile {
                    path: PathBuf::from("/go/src/app/a.go"),
                    signatures: vec![Signature::new("Load(key string) ([]byte, error)")],
                },
                SourceFile {
                    path: PathBuf::from("/go/src/app/b.go"),
                    signatures: vec![
                        Signature::new("flush()"),
                        Signature::new("Save(key string, v []byte) error"),
                    ],
                },
            ],
        };

        let expected = [
            "type StoreInterface interface {",
            "    func Load(key string) ([]byte, error)",
            "    func Save(key string, v []byte) error",
            "}",
        ]
        .join("\n");
        assert_eq!(format_interface(&set), expected);
    }

    proptest! {
        #[test]
        fn prop_never_emits_lowercase(texts in proptest::collection::vec("[A-Za-z_][a-zA-Z0-9]{0,8}\\(\\)", 0..12)) {
            let signatures: Vec<Signature> = texts.into_iter().map(Signature::new).collect();
            let rendered = render_interface("T", &signatures);
            let lines: Vec<&str> = rendered.lines().collect();

            prop_assert_eq!(lines[0], "type TInterface interface {");
            prop_assert_eq!(*lines.last().unwrap(), "}");
            for line in &lines[1..lines.len() - 1] {
                let body = line.strip_prefix("    func ").unwrap();
                prop_assert!(body.starts_with(|c: char| c.is_ascii_uppercase()));
            }
            let exported = signatures.iter().filter(|s| s.is_exported()).count();
            prop_assert_eq!(lines.len(), exported + 2);
        }
    }
}
