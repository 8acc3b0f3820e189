use super::*;

fn run(check: &impl Check, source: &str) -> Vec<Finding> {
    check.check(&Document::from_source(source))
}

#[test]
fn heading_with_colon_and_gerund() {
    let source = "## Configuring The System:";

    let punctuation = run(&HeadingPunctuationCheck::new(), source);
    assert_eq!(punctuation.len(), 1);
    assert_eq!(punctuation[0].column, source.len() - 1);
    assert_eq!(punctuation[0].severity, Severity::Warning);

    let gerund = run(&HeadingGerundCheck::new(), source);
    assert_eq!(gerund.len(), 1);
    assert!(gerund[0].message.contains("'Configuring'"));

    // "The" is too short to count, so only one of two trailing words qualifies.
    assert!(run(&HeadingCaseCheck::new(), source).is_empty());
}

#[test]
fn title_case_heading_is_flagged() {
    let findings = run(&HeadingCaseCheck::new(), "# Install Your First Package");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].column, 0);

    assert!(run(&HeadingCaseCheck::new(), "# Install your first package").is_empty());
    assert!(run(&HeadingCaseCheck::new(), "# Overview").is_empty());
}

#[test]
fn non_headings_are_ignored() {
    let check = HeadingPunctuationCheck::new();
    assert!(run(&check, "#hashtag without space.").is_empty());
    assert!(run(&check, "####### Seven hashes.").is_empty());
    assert!(run(&check, "Plain sentence.").is_empty());
}

#[test]
fn headings_inside_code_blocks_are_still_checked() {
    let findings = run(&HeadingPunctuationCheck::new(), "```\n# Comment in code.\n```");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line_number, 2);
}

#[test]
fn lowercase_item_after_capitalized_item_is_not_parallel() {
    let source = "- First item\n- second item\n- third item";
    let findings = run(&ListParallelCheck::new(), source);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line_number, 2);
}

#[test]
fn ordered_lists_are_compared_too() {
    let findings = run(&ListParallelCheck::new(), "1. Open it\n2. close it");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line_number, 2);
}

#[test]
fn first_list_item_has_no_predecessor() {
    assert!(run(&ListParallelCheck::new(), "- lowercase start").is_empty());
    assert!(run(&ListParallelCheck::new(), "Intro\n- lowercase start").is_empty());
}

#[test]
fn long_list_item_needs_terminal_punctuation() {
    let check = ListPunctuationCheck::new();
    let source = "- This item has more than five words in it";
    let findings = run(&check, source);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].column, source.len() - 1);

    assert!(run(&check, "- This item has more than five words in it.").is_empty());
    assert!(run(&check, "- Short item").is_empty());
}
