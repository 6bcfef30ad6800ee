use pretty_assertions::assert_eq;

use super::*;

#[test]
fn all_codes_are_sorted_and_unique() {
    let numbers: Vec<u16> = ErrorCode::ALL.iter().map(ErrorCode::number).collect();
    let mut sorted = numbers.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(numbers, sorted);
}

#[test]
fn phase_follows_first_digit() {
    assert_eq!(ErrorCode::E1300.phase(), Phase::Internal);
    assert_eq!(ErrorCode::E2001.phase(), Phase::Lexical);
    assert_eq!(ErrorCode::E3001.phase(), Phase::Syntactic);
    assert_eq!(ErrorCode::E4001.phase(), Phase::Semantic);
    assert_eq!(ErrorCode::E5101.phase(), Phase::User);
    assert!(ErrorCode::E1201.is_internal());
    assert!(!ErrorCode::E2332.is_internal());
}

#[test]
fn parse_round_trips_display() {
    for &code in ErrorCode::ALL {
        assert_eq!(code.to_string().parse::<ErrorCode>(), Ok(code));
    }
    assert_eq!("e2321".parse::<ErrorCode>(), Ok(ErrorCode::E2321));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
}

#[test]
fn every_template_is_non_empty() {
    for code in ErrorCode::ALL {
        assert!(!code.template().is_empty(), "{code}");
    }
}

#[test]
fn number_errors_map_to_codes() {
    assert_eq!(ErrorCode::from(&NumberError::DivisionByZero), ErrorCode::E4001);
    assert_eq!(
        ErrorCode::from(&NumberError::Overflow("9223372036854775808".into())),
        ErrorCode::E2321
    );
}
