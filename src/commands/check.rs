use anyhow::Result;
use routecycle::order;
use routecycle::source::Input;

pub fn run(input: &str, json: bool) -> Result<()> {
    let input = Input::from_arg(input);
    let violation = order::check(input.open()?)?;

    if json {
        let output = serde_json::json!({
            "sorted": violation.is_none(),
            "violation": violation,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match &violation {
        Some(v) => println!(
            "Out of order at line {}: key {} after {}",
            v.line, v.found, v.previous
        ),
        None => println!("Input is sorted by (claim_id, status_code)"),
    }
    Ok(())
}
