use scout::sift::{Clause, Comparator, Direction, SkipReason, parse_clauses};

#[test]
fn garbage_line_is_skipped_not_fatal() {
    let parsed = parse_clauses("FILTER industry = Education\nblah blah");
    assert_eq!(parsed.clauses.len(), 1, "the well-formed clause survives");
    assert_eq!(parsed.skipped.len(), 1);
    assert_eq!(parsed.skipped[0].line, 2);
    assert_eq!(parsed.skipped[0].text, "blah blah");
    assert_eq!(parsed.skipped[0].reason, SkipReason::UnknownKeyword);
}

#[test]
fn empty_lines_are_ignored_silently() {
    let parsed = parse_clauses("\nFILTER industry = Education\n\n   \nLIMIT 3\n");
    assert_eq!(parsed.clauses.len(), 2);
    assert!(parsed.skipped.is_empty(), "blank lines produce no diagnostics");
}

#[test]
fn all_three_clause_forms_parse() {
    let parsed = parse_clauses("FILTER num_followers >= 1000\nORDER start_date desc\nLIMIT 10");
    assert_eq!(
        parsed.clauses,
        vec![
            Clause::Filter {
                column: "num_followers".to_string(),
                comparator: Comparator::GreaterOrEqual,
                value: "1000".to_string(),
            },
            Clause::Order {
                column: "start_date".to_string(),
                direction: Direction::Descending,
            },
            Clause::Limit { count: 10 },
        ]
    );
}

#[test]
fn unsupported_comparator_is_dropped_with_reason() {
    let parsed = parse_clauses("FILTER num_followers != 1000");
    assert!(parsed.clauses.is_empty());
    assert_eq!(parsed.skipped[0].reason, SkipReason::UnsupportedComparator);
}

#[test]
fn unsupported_direction_is_dropped_with_reason() {
    let parsed = parse_clauses("ORDER num_followers descending");
    assert!(parsed.clauses.is_empty());
    assert_eq!(parsed.skipped[0].reason, SkipReason::UnsupportedDirection);
}

#[test]
fn bad_limit_counts_are_dropped() {
    for text in ["LIMIT -3", "LIMIT ten", "LIMIT 1.5"] {
        let parsed = parse_clauses(text);
        assert!(parsed.clauses.is_empty(), "{text} must not parse");
        assert_eq!(parsed.skipped[0].reason, SkipReason::BadCount);
    }
}

#[test]
fn truncated_lines_are_malformed() {
    for text in ["FILTER industry =", "FILTER industry", "ORDER num_followers", "LIMIT"] {
        let parsed = parse_clauses(text);
        assert!(parsed.clauses.is_empty(), "{text} must not parse");
        assert_eq!(parsed.skipped[0].reason, SkipReason::Malformed);
    }
}

#[test]
fn fixed_arity_lines_reject_trailing_tokens() {
    for text in ["ORDER num_followers desc extra", "LIMIT 3 4"] {
        let parsed = parse_clauses(text);
        assert!(parsed.clauses.is_empty(), "{text} must not parse");
        assert_eq!(parsed.skipped[0].reason, SkipReason::Malformed);
    }
}

#[test]
fn filter_value_is_the_line_remainder() {
    let parsed = parse_clauses("FILTER name_company = Bits & Bobs Ltd");
    assert_eq!(
        parsed.clauses,
        vec![Clause::Filter {
            column: "name_company".to_string(),
            comparator: Comparator::Equal,
            value: "Bits & Bobs Ltd".to_string(),
        }]
    );
}

#[test]
fn parsing_continues_after_multiple_bad_lines() {
    let text = "who knows\nFILTER industry = Finance\nORDER revenue sideways\nLIMIT 5\nLIMIT soon";
    let parsed = parse_clauses(text);
    assert_eq!(parsed.clauses.len(), 2);
    assert_eq!(parsed.skipped.len(), 3);
    let lines: Vec<usize> = parsed.skipped.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![1, 3, 5]);
}
