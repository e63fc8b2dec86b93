// This needs cleaned up a bit before clippy should run here
#![allow(warnings)]

use afl::fuzz;
use id_holidays::{
    input_feedback, validate, IdNumberChecksum, Validator, ID_NUMBER_LENGTH,
};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    run_fuzz(input);
    Some(())
}

fn run_fuzz(input: &str) {
    let result = validate(input);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Result: {:?}", result);
    }

    // feedback never contradicts full validation
    match input_feedback(input) {
        None => assert!(input.is_empty() || result.is_ok()),
        Some(err) => assert_eq!(result.as_ref().err(), Some(&err)),
    }

    let Ok(decoded) = result else {
        return;
    };

    assert_eq!(decoded.id_number, input);
    assert_eq!(input.len(), ID_NUMBER_LENGTH);
    assert!(input.bytes().all(|b| b.is_ascii_digit()));
    assert!(IdNumberChecksum.is_valid_match(input));

    let full_date = decoded.full_date();
    assert_eq!(full_date.len(), 10);
    assert!(decoded.summary("").contains(&full_date));
    assert_eq!(validate(input), Ok(decoded));
}
