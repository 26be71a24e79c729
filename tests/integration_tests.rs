use console_exercises::console::Console;
use console_exercises::grading::validate::{is_number, parse_grade};
use console_exercises::grading::{self, Record, Roster, Summary};
use console_exercises::guessing;
use proptest::prelude::*;
use std::io::Cursor;

fn grade_session(input: &str) -> (Option<Summary>, String) {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let summary = grading::run(&mut console).expect("session failed");
    let out = String::from_utf8(console.into_output()).expect("output is utf-8");
    (summary, out)
}

#[test]
fn test_full_grade_session() {
    let (summary, out) = grade_session("A\n70\nB\n90\nC\n80\ndone\n");
    let summary = summary.expect("roster was not empty");

    assert_eq!(summary.average, 80.0);
    assert_eq!(summary.lowest, 70.0);
    assert_eq!(summary.highest, 90.0);

    let report = out.rsplit_once("finish): ").map(|(_, r)| r).unwrap_or_default();
    assert_eq!(
        report,
        "\nStudent: A, Grade: 70\n\
         Student: B, Grade: 90\n\
         Student: C, Grade: 80\n\
         \nAverage grade: 80\n\
         Lowest grade: 70\n\
         Highest grade: 90\n"
    );
}

#[test]
fn test_session_with_rejected_inputs() {
    let (summary, out) = grade_session("\nAlice\n\n105\n12.\n85\ndone\n");
    let summary = summary.expect("one record accepted");

    assert_eq!(summary.count, 1);
    assert_eq!(summary.average, 85.0);
    assert_eq!(out.matches("Invalid input. Please enter a non-empty name.").count(), 1);
    assert_eq!(
        out.matches("Invalid input. Please enter a valid grade between 0 and 100.")
            .count(),
        3
    );
    assert_eq!(out.matches("Enter Alice's grade: ").count(), 4);
    assert!(out.contains("Student: Alice, Grade: 85\n"));
}

#[test]
fn test_done_first_reports_no_data() {
    let (summary, out) = grade_session("done\n");
    assert_eq!(summary, None);
    assert_eq!(
        out,
        "Enter student name (or 'done' to finish): No student data entered.\n"
    );
}

#[test]
fn test_closed_input_reports_no_data() {
    let (summary, out) = grade_session("");
    assert_eq!(summary, None);
    assert!(out.ends_with("No student data entered.\n"));
}

#[test]
fn test_guessing_game_with_fixed_secret() {
    let mut console = Console::new(Cursor::new(b"50\n75\n63\n".to_vec()), Vec::new());
    let attempts = guessing::play(&mut console, 63).unwrap();
    assert_eq!(attempts, Some(3));
}

proptest! {
    #[test]
    fn accepted_grades_are_within_bounds(input in "[0-9.]{0,6}") {
        if let Ok(grade) = parse_grade(&input) {
            prop_assert!((0.0..=100.0).contains(&grade));
            prop_assert!(is_number(&input));
        }
    }

    #[test]
    fn validation_is_idempotent(input in "\\PC{0,8}") {
        prop_assert_eq!(parse_grade(&input), parse_grade(&input));
    }

    #[test]
    fn average_lies_between_extremes(grades in prop::collection::vec(0.0f64..=100.0, 1..20)) {
        let roster: Roster = grades
            .iter()
            .enumerate()
            .map(|(i, g)| Record::new(format!("student{i}"), *g).unwrap())
            .collect();
        let summary = Summary::from_roster(&roster).unwrap();

        let sum: f64 = grades.iter().sum();
        prop_assert_eq!(summary.average, sum / grades.len() as f64);
        prop_assert!(summary.lowest <= summary.average + 1e-9);
        prop_assert!(summary.average <= summary.highest + 1e-9);
    }
}
