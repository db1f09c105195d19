use scout::sift::{Clause, Comparator, Direction, parse_clauses, render_clauses};

fn sample() -> Vec<Clause> {
    vec![
        Clause::Filter {
            column: "industry".to_string(),
            comparator: Comparator::Equal,
            value: "Health Care".to_string(),
        },
        Clause::Filter {
            column: "revenue".to_string(),
            comparator: Comparator::GreaterOrEqual,
            value: "1000000000".to_string(),
        },
        Clause::Order {
            column: "num_followers".to_string(),
            direction: Direction::Descending,
        },
        Clause::Limit { count: 5 },
    ]
}

#[test]
fn rendered_clauses_reparse_to_the_same_sequence() {
    let clauses = sample();
    let text = render_clauses(&clauses);
    let parsed = parse_clauses(&text);
    assert!(parsed.skipped.is_empty(), "canonical text has no bad lines");
    assert_eq!(parsed.clauses, clauses);
}

#[test]
fn conforming_text_renders_back_verbatim() {
    let text = "FILTER industry = Education\nORDER num_followers desc\nLIMIT 10";
    let parsed = parse_clauses(text);
    assert!(parsed.skipped.is_empty());
    assert_eq!(render_clauses(&parsed.clauses), text);
}

#[test]
fn every_comparator_round_trips() {
    for op in ["=", ">", "<", ">=", "<="] {
        let text = format!("FILTER revenue {op} 100");
        let parsed = parse_clauses(&text);
        assert!(parsed.skipped.is_empty(), "operator {op} parses");
        assert_eq!(render_clauses(&parsed.clauses), text);
    }
}
