use super::*;

fn run(check: &impl Check, source: &str) -> Vec<Finding> {
    check.check(&Document::from_source(source))
}

#[test]
fn image_without_alt_text_is_an_error() {
    let check = AltTextCheck::new();
    let findings = run(&check, "![](photo.png)");

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Error);
    assert_eq!(findings[0].rule_id, "alt-text");
    assert!(run(&check, "![a cat sleeping](photo.png)").is_empty());
}

#[test]
fn whitespace_alt_text_counts_as_empty() {
    let findings = run(&AltTextCheck::new(), "Logo: ![  ](logo.svg) and ![](x.png)");

    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].column, 6);
}

#[test]
fn alt_text_is_checked_inside_code_blocks() {
    let findings = run(&AltTextCheck::new(), "```\n![](photo.png)\n```\n");

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line_number, 2);
}

#[test]
fn bare_color_is_flagged() {
    let findings = run(&ColorOnlyCheck::new(), "Errors are shown in Red.");

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].column, 20);
    assert!(findings[0].message.contains("('red')"));
}

#[test]
fn qualified_color_is_fine() {
    let check = ColorOnlyCheck::new();
    assert!(run(&check, "Press the green button.").is_empty());
    assert!(run(&check, "The red text marks errors.").is_empty());
    assert!(run(&check, "Bluetooth is unrelated.").is_empty());
}

#[test]
fn qualified_then_bare_occurrence_is_flagged() {
    let findings = run(&ColorOnlyCheck::new(), "The red icon means red.");

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].column, 19);
}
