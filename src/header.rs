//! Header document emission.

/// Guard name baked into every generated header. The same literal is used
/// for every input file; there is no collision avoidance.
pub const HEADER_GUARD: &str = "GENERATED_HEADER_H";

/// Render the header document for an ordered list of signatures: include
/// guard preamble, one `<signature>;` line per entry, closing guard line.
/// An empty list produces a valid header with an empty body.
pub fn generate_header(signatures: &[String]) -> String {
    let mut content = format!("#ifndef {HEADER_GUARD}\n#define {HEADER_GUARD}\n\n");
    for signature in signatures {
        content.push_str(signature);
        content.push_str(";\n");
    }
    content.push_str(&format!("\n#endif // {HEADER_GUARD}\n"));
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_produces_empty_body() {
        let header = generate_header(&[]);
        assert_eq!(
            header,
            "#ifndef GENERATED_HEADER_H\n#define GENERATED_HEADER_H\n\n\n#endif // GENERATED_HEADER_H\n"
        );
    }

    #[test]
    fn test_single_signature_line() {
        let header = generate_header(&["int add(int a, int b)".to_string()]);
        assert!(header.contains("int add(int a, int b);\n"));
        assert!(header.starts_with("#ifndef GENERATED_HEADER_H\n#define GENERATED_HEADER_H\n\n"));
        assert!(header.ends_with("\n#endif // GENERATED_HEADER_H\n"));
    }

    #[test]
    fn test_signatures_emitted_in_order() {
        let signatures = vec![
            "int first(void)".to_string(),
            "char second(int x)".to_string(),
            "long third(void)".to_string(),
        ];
        let header = generate_header(&signatures);
        let first = header.find("int first(void);").unwrap();
        let second = header.find("char second(int x);").unwrap();
        let third = header.find("long third(void);").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_duplicate_signatures_each_get_a_line() {
        let signatures = vec![
            "int twice(void)".to_string(),
            "int twice(void)".to_string(),
        ];
        let header = generate_header(&signatures);
        assert_eq!(header.matches("int twice(void);\n").count(), 2);
    }

    #[test]
    fn test_emission_is_idempotent() {
        let signatures = vec![
            "int add(int a, int b)".to_string(),
            "int area(int w, int h)".to_string(),
        ];
        assert_eq!(generate_header(&signatures), generate_header(&signatures));
    }
}
