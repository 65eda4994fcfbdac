//! End-to-end integration tests
//!
//! These tests run complete command scripts through the runner using
//! predefined fixtures. Each test:
//! 1. Builds a bank from `accounts.csv` in the fixture directory, or from the
//!    built-in demo accounts when the fixture has none
//! 2. Runs `input.txt` through the runner
//! 3. Compares the written frames with `expected.txt`
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Login, including a rejected PIN, and sort toggling
//! - Transfers and loans, including every rejected precondition
//! - Account closure and the session it ends
//! - Custom seed accounts under both deposit classifications

#[cfg(test)]
mod tests {
    use bankist::io::{load_accounts_csv, ScriptReader};
    use bankist::{run_script, AccountStore, Bank, BankConfig, Classification};
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Run a fixture's script and compare the output with expected.txt
    fn run_test_fixture(fixture_name: &str, classification: Classification) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let accounts_path = format!("{}/accounts.csv", fixture_dir);
        let input_path = format!("{}/input.txt", fixture_dir);
        let expected_path = format!("{}/expected.txt", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let store = if Path::new(&accounts_path).exists() {
            load_accounts_csv(Path::new(&accounts_path))
                .unwrap_or_else(|e| panic!("Failed to load seed accounts: {}", e))
        } else {
            AccountStore::demo()
        };
        let mut bank = Bank::new(store, BankConfig { classification });

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");
        let script = ScriptReader::open(Path::new(&input_path))
            .unwrap_or_else(|e| panic!("Failed to open script: {}", e));

        run_script(&mut bank, script, &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to run script: {}", e));
        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("login_and_sort", Classification::Positive)]
    #[case("transfer_and_loan", Classification::Positive)]
    #[case("close_account", Classification::Positive)]
    #[case("custom_seed", Classification::Positive)]
    #[case("custom_seed_legacy", Classification::Legacy)]
    fn test_fixtures(#[case] fixture: &str, #[case] classification: Classification) {
        run_test_fixture(fixture, classification);
    }

    #[test]
    fn test_transfer_updates_both_accounts_across_sessions() {
        let mut bank = Bank::demo();
        let script = "login js 1111\ntransfer jd 200\nlogin jd 2222\n";
        let mut output = Vec::new();

        let summary =
            run_script(&mut bank, ScriptReader::new(script.as_bytes()), &mut output).unwrap();
        assert_eq!(summary.applied, 3);

        let current = bank.current_account().unwrap();
        assert_eq!(current.username(), "jd");
        assert_eq!(current.balance(), rust_decimal::Decimal::from(11920));
    }
}
