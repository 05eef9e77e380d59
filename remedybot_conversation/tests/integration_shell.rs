//! End-to-end transcript checks for the interactive shell.

use std::io::Cursor;

use remedybot_conversation::{Shell, ShellConfig, TurnOutcome};
use remedybot_core::MedicineTable;

fn run(script: &str) -> String {
    let mut shell = Shell::new(MedicineTable::builtin());
    let mut output = Vec::new();
    shell
        .run_loop(Cursor::new(script), &mut output)
        .unwrap_or_default();
    String::from_utf8(output).unwrap_or_default()
}

#[test]
fn full_session_transcript() {
    let text = run(
        "I have a headache in Germany\n\
         hi\n\
         I feel allergy symptoms while in Spain\n\
         exit\n",
    );

    assert_eq!(
        text,
        "Welcome to RemedyBot! I can help you find over-the-counter medicines.\n\
         Describe your issue (or type 'exit' to quit): \
         For headache in Germany, you can consider these over-the-counter medicines: Aspirin, Ibuprofen, Paracetamol.\n\
         \n\
         Describe your issue (or type 'exit' to quit): \
         Your input seems too short. Please include more details about your issue.\n\
         Describe your issue (or type 'exit' to quit): \
         Sorry, I couldn't understand your input.\n\
         Supported countries: USA, UK, India, Canada, Australia, Germany\n\
         \n\
         Describe your issue (or type 'exit' to quit): \
         Goodbye! Stay healthy.\n"
    );
}

#[test]
fn all_caps_countries_never_resolve_in_a_session() {
    let text = run("I caught a cold in the USA\nexit\n");
    assert!(text.contains("Sorry, I couldn't find a match.\n\n"));
    assert!(!text.contains("over-the-counter medicines:"));
}

#[test]
fn every_titlecase_country_and_ailment_resolves() {
    let table = MedicineTable::builtin();
    let mut shell = Shell::new(table);

    for country in ["India", "Canada", "Australia", "Germany"] {
        for ailment in table.ailment_names() {
            let outcome = shell.process_turn(&format!("I have a {ailment} in {country}"));
            match outcome {
                TurnOutcome::Reply(reply) => {
                    assert!(
                        reply.starts_with(&format!("For {ailment} in {country}, ")),
                        "unexpected reply for {country}/{ailment}: {reply}"
                    );
                }
                other => panic!("expected a reply for {country}/{ailment}, got {other:?}"),
            }
        }
    }
}

#[test]
fn custom_exit_command_is_honored() {
    let config = ShellConfig::default().with_exit_command("quit".to_string());
    let mut shell = Shell::with_config(MedicineTable::builtin(), config);

    assert_eq!(shell.process_turn("quit"), TurnOutcome::Exit);
    assert!(matches!(shell.process_turn("exit"), TurnOutcome::Rejected(_)));
}

#[test]
fn session_records_only_accepted_turns() {
    let mut shell = Shell::new(MedicineTable::builtin());

    let _ = shell.process_turn("hi");
    let _ = shell.process_turn("I have heartburn in Canada");
    let _ = shell.process_turn("   ");

    assert_eq!(shell.session().turn_count(), 1);
    assert_eq!(shell.session().message_count(), 2);
}
