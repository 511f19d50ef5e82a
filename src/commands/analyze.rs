use anyhow::Result;
use routecycle::analyze::{run_sorted, run_unsorted};
use routecycle::best::Best;
use routecycle::source::Input;

pub fn run(input: &str, sorted: bool, validate: bool, json: bool) -> Result<()> {
    let input = Input::from_arg(input);

    let best = if sorted {
        let report = run_sorted(&input, validate)?;
        if let Some(v) = &report.violation {
            eprintln!(
                "Warning: input is not sorted by (claim_id, status_code): \
                 line {} has key {} after {}",
                v.line, v.found, v.previous
            );
        }
        report.best
    } else {
        run_unsorted(&input)?
    };

    print_result(&best, json)
}

fn print_result(best: &Best, json: bool) -> Result<()> {
    if json {
        let output = serde_json::json!({
            "claim_id": best.key.as_ref().map(|k| k.claim_id.as_str()),
            "status_code": best.key.as_ref().map(|k| k.status_code.as_str()),
            "cycle_length": best.length,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match &best.key {
        Some(key) => println!("{},{},{}", key.claim_id, key.status_code, best.length),
        None => println!("0,0,0"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_analyze_missing_file_fails() {
        let result = run("/no/such/records.txt", false, false, false);
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("/no/such/records.txt"));
    }

    #[test]
    fn test_analyze_runs_in_both_modes() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "A|B|a|1\nB|A|a|1\n").unwrap();
        let path = file.path().to_str().unwrap();

        assert!(run(path, false, false, false).is_ok());
        assert!(run(path, true, true, false).is_ok());
        assert!(run(path, true, false, true).is_ok());
    }
}
