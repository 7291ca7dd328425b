use french_numerals::Formatter;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct TestCase {
    value: i64,
    dialect: String,
    expected: String,
}

#[derive(Debug, Deserialize)]
struct TestCases {
    cases: Vec<TestCase>,
}

fn run_test_case(case: &TestCase) -> Result<(), String> {
    let formatter = Formatter::from_token(&case.dialect)
        .map_err(|e| format!("Formatter error: {e}"))?;

    let result = formatter
        .format(case.value)
        .map_err(|e| format!("Format error for {}: {e}", case.value))?;

    if result != case.expected {
        return Err(format!(
            "\n✗ Mismatch for value: {}\nDialect:    \"{}\"\nExpected:   \"{}\"\nActual:     \"{}\"",
            case.value, case.dialect, case.expected, result
        ));
    }

    Ok(())
}

#[test]
fn test_reference_cases() {
    let toml_path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("reference-cases.toml");

    let toml_content = fs::read_to_string(&toml_path)
        .unwrap_or_else(|e| panic!("Failed to read TOML file {}: {}", toml_path.display(), e));

    let test_suite: TestCases = toml::from_str(&toml_content)
        .unwrap_or_else(|e| panic!("Failed to parse TOML file {}: {}", toml_path.display(), e));
    assert!(!test_suite.cases.is_empty());

    let failures: Vec<String> = test_suite
        .cases
        .iter()
        .enumerate()
        .filter_map(|(i, case)| {
            run_test_case(case)
                .err()
                .map(|msg| format!("[Case {}] {}", i + 1, msg))
        })
        .collect();

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
