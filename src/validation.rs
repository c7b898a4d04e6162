//! Input and result validation.
//!
//! Two groups of checks live here:
//!
//! - **Line admission**: whether a tokenized `service` or `request` line is
//!   well formed. Rejected lines never reach the registry.
//! - **Result integrity**: whether a match result respects the matching
//!   rules against the registry it was computed from:
//!   - every referenced request and provider exists
//!   - a request is solved at most once
//!   - the solved day lies inside the request's window
//!   - the provider offers the request's category
//!   - a provider serves at most one request per day

use crate::models::{DaySpec, MatchResult, Registry};
use std::collections::HashSet;
use thiserror::Error;

/// Minimum token count of a `service` line: keyword, provider, one category.
pub const SERVICE_MIN_TOKENS: usize = 3;

/// Exact token count of a `request` line: keyword, name, category, days.
pub const REQUEST_TOKENS: usize = 4;

/// Why a day token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DaySpecError {
    /// The token was empty.
    #[error("empty day specification")]
    Empty,
    /// A part of the token is not a plain decimal number.
    #[error("'{0}' is not a day number")]
    NotANumber(String),
    /// More than one `-` separator.
    #[error("'{0}' has more than one range separator")]
    TooManyParts(String),
    /// A day lies outside `1..=horizon`.
    #[error("day '{value}' is outside the horizon 1..={horizon}")]
    OutOfHorizon {
        /// Offending day text.
        value: String,
        /// Horizon length in days.
        horizon: u32,
    },
    /// A range whose first day comes after its last day.
    #[error("range {first}-{last} is reversed")]
    Reversed {
        /// First day as written.
        first: u32,
        /// Last day as written.
        last: u32,
    },
}

/// Parses a day token: `D` or `D1-D2`, every day within `1..=horizon`.
pub fn parse_day_spec(token: &str, horizon: u32) -> Result<DaySpec, DaySpecError> {
    if token.is_empty() {
        return Err(DaySpecError::Empty);
    }

    let parts: Vec<&str> = token.split('-').collect();
    if parts.len() > 2 {
        return Err(DaySpecError::TooManyParts(token.to_string()));
    }

    let days = parts
        .iter()
        .map(|part| parse_day(part, horizon))
        .collect::<Result<Vec<u32>, _>>()?;

    match days.as_slice() {
        [day] => Ok(DaySpec::Single(*day)),
        [first, last] if first > last => Err(DaySpecError::Reversed {
            first: *first,
            last: *last,
        }),
        [first, last] => Ok(DaySpec::Range {
            first: *first,
            last: *last,
        }),
        _ => Err(DaySpecError::TooManyParts(token.to_string())),
    }
}

fn parse_day(part: &str, horizon: u32) -> Result<u32, DaySpecError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DaySpecError::NotANumber(part.to_string()));
    }
    let out_of_horizon = || DaySpecError::OutOfHorizon {
        value: part.to_string(),
        horizon,
    };
    // All-digit text only fails to parse on overflow.
    let day: u32 = part.parse().map_err(|_| out_of_horizon())?;
    if (1..=horizon).contains(&day) {
        Ok(day)
    } else {
        Err(out_of_horizon())
    }
}

/// Whether `token` is a valid single day or inclusive day range.
pub fn is_valid_day_spec(token: &str, horizon: u32) -> bool {
    parse_day_spec(token, horizon).is_ok()
}

/// Whether a tokenized line can be a `service` declaration.
///
/// Only the token count is checked.
pub fn is_valid_service_line<S: AsRef<str>>(tokens: &[S]) -> bool {
    tokens.len() >= SERVICE_MIN_TOKENS
}

/// Whether a tokenized line can be a `request` declaration.
pub fn is_valid_request_line<S: AsRef<str>>(tokens: &[S], horizon: u32) -> bool {
    tokens.len() == REQUEST_TOKENS && is_valid_day_spec(tokens[3].as_ref(), horizon)
}

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of result validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A solved record names a request that isn't in the registry.
    UnknownRequest,
    /// A solved record names a provider that isn't in the registry.
    UnknownProvider,
    /// A solved record lacks its provider or day.
    IncompleteAssignment,
    /// The same request appears twice in the solved set.
    DuplicateSolve,
    /// The solved day is not one of the request's eligible days.
    DayOutsideWindow,
    /// The provider does not offer the request's category.
    CategoryNotOffered,
    /// The provider serves two requests on the same day.
    ProviderDoubleBooked,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a match result against the registry it was computed from.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_result(registry: &Registry, result: &MatchResult) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen_requests = HashSet::new();
    let mut bookings: HashSet<(&str, u32)> = HashSet::new();

    for solved in &result.solved {
        if !seen_requests.insert(solved.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSolve,
                format!("Request '{}' is solved more than once", solved.id),
            ));
        }

        let Some(request) = registry.request(&solved.id) else {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownRequest,
                format!("Unknown request '{}'", solved.id),
            ));
            continue;
        };

        let (Some(provider_id), Some(day)) = (solved.solved_by.as_deref(), solved.solved_day)
        else {
            errors.push(ValidationError::new(
                ValidationErrorKind::IncompleteAssignment,
                format!("Request '{}' has no provider or day", solved.id),
            ));
            continue;
        };

        if !request.is_eligible_on(day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DayOutsideWindow,
                format!(
                    "Request '{}' solved on day {day} outside its window",
                    solved.id
                ),
            ));
        }

        match registry.provider(provider_id) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::UnknownProvider,
                format!(
                    "Request '{}' references unknown provider '{provider_id}'",
                    solved.id
                ),
            )),
            Some(provider) if !provider.offers(&request.category) => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::CategoryNotOffered,
                    format!(
                        "Provider '{provider_id}' does not offer '{}' needed by '{}'",
                        request.category, solved.id
                    ),
                ))
            }
            Some(_) => {}
        }

        if !bookings.insert((provider_id, day)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ProviderDoubleBooked,
                format!("Provider '{provider_id}' serves more than one request on day {day}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceRequest;

    const HORIZON: u32 = 20;

    #[test]
    fn test_day_spec_bounds() {
        assert_eq!(parse_day_spec("1", HORIZON), Ok(DaySpec::Single(1)));
        assert_eq!(parse_day_spec("20", HORIZON), Ok(DaySpec::Single(20)));
        assert_eq!(
            parse_day_spec("2-19", HORIZON),
            Ok(DaySpec::Range { first: 2, last: 19 })
        );
        assert_eq!(
            parse_day_spec("4-4", HORIZON),
            Ok(DaySpec::Range { first: 4, last: 4 })
        );
    }

    #[test]
    fn test_day_spec_rejections() {
        assert!(matches!(
            parse_day_spec("0", HORIZON),
            Err(DaySpecError::OutOfHorizon { .. })
        ));
        assert!(matches!(
            parse_day_spec("21", HORIZON),
            Err(DaySpecError::OutOfHorizon { .. })
        ));
        assert_eq!(
            parse_day_spec("5-3", HORIZON),
            Err(DaySpecError::Reversed { first: 5, last: 3 })
        );
        assert_eq!(
            parse_day_spec("abc", HORIZON),
            Err(DaySpecError::NotANumber("abc".into()))
        );
        assert_eq!(
            parse_day_spec("1-2-3", HORIZON),
            Err(DaySpecError::TooManyParts("1-2-3".into()))
        );
        assert_eq!(parse_day_spec("", HORIZON), Err(DaySpecError::Empty));
    }

    #[test]
    fn test_day_spec_rejects_partial_numbers() {
        for token in ["5x", "-5", "5-", "+5", " 5", "1-x", "99999999999"] {
            assert!(!is_valid_day_spec(token, HORIZON), "accepted {token:?}");
        }
    }

    #[test]
    fn test_day_spec_respects_custom_horizon() {
        assert!(is_valid_day_spec("30", 30));
        assert!(!is_valid_day_spec("30", 20));
        assert!(!is_valid_day_spec("1", 0));
    }

    #[test]
    fn test_service_line() {
        assert!(is_valid_service_line(&["service", "A", "x"]));
        assert!(is_valid_service_line(&["service", "A", "x", "y", "z"]));
        assert!(!is_valid_service_line(&["service", "A"]));
        assert!(!is_valid_service_line::<&str>(&[]));
    }

    #[test]
    fn test_request_line() {
        assert!(is_valid_request_line(&["request", "r1", "x", "3"], HORIZON));
        assert!(is_valid_request_line(&["request", "r1", "x", "3-9"], HORIZON));
        assert!(!is_valid_request_line(&["request", "r1", "x"], HORIZON));
        assert!(!is_valid_request_line(
            &["request", "r1", "x", "3", "extra"],
            HORIZON
        ));
        assert!(!is_valid_request_line(&["request", "r1", "x", "21"], HORIZON));
    }

    fn sample_registry() -> Registry {
        let mut reg = Registry::new();
        reg.add_service("A", ["x"]);
        reg.add_service("B", ["y"]);
        reg.add_request("r1", "x", DaySpec::Range { first: 1, last: 3 });
        reg.add_request("r2", "x", DaySpec::Single(1));
        reg.add_request("r3", "y", DaySpec::Single(2));
        reg
    }

    fn solved(reg: &Registry, id: &str, provider: &str, day: u32) -> ServiceRequest {
        let mut r = reg.request(id).cloned().unwrap();
        r.mark_solved(provider, day);
        r
    }

    #[test]
    fn test_valid_result() {
        let reg = sample_registry();
        let mut result = MatchResult::new();
        result.add_solved(solved(&reg, "r2", "A", 1));
        result.add_solved(solved(&reg, "r1", "A", 2));
        result.add_solved(solved(&reg, "r3", "B", 2));

        assert!(validate_result(&reg, &result).is_ok());
    }

    #[test]
    fn test_double_booking_detected() {
        let reg = sample_registry();
        let mut result = MatchResult::new();
        result.add_solved(solved(&reg, "r1", "A", 1));
        result.add_solved(solved(&reg, "r2", "A", 1));

        let errors = validate_result(&reg, &result).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ProviderDoubleBooked);
    }

    #[test]
    fn test_window_and_category_detected() {
        let reg = sample_registry();
        let mut result = MatchResult::new();
        result.add_solved(solved(&reg, "r3", "A", 5));

        let errors = validate_result(&reg, &result).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert!(kinds.contains(&ValidationErrorKind::DayOutsideWindow));
        assert!(kinds.contains(&ValidationErrorKind::CategoryNotOffered));
    }

    #[test]
    fn test_unknown_entities_detected() {
        let reg = sample_registry();
        let mut result = MatchResult::new();
        result.add_solved(solved(&reg, "r1", "Z", 1));
        let mut ghost = ServiceRequest::new("ghost", "x", DaySpec::Single(1));
        ghost.mark_solved("A", 1);
        result.add_solved(ghost);

        let errors = validate_result(&reg, &result).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert!(kinds.contains(&ValidationErrorKind::UnknownProvider));
        assert!(kinds.contains(&ValidationErrorKind::UnknownRequest));
    }

    #[test]
    fn test_duplicate_and_incomplete_detected() {
        let reg = sample_registry();
        let mut result = MatchResult::new();
        result.add_solved(solved(&reg, "r1", "A", 1));
        result.add_solved(solved(&reg, "r1", "A", 2));
        result.add_solved(reg.request("r3").cloned().unwrap());

        let errors = validate_result(&reg, &result).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert!(kinds.contains(&ValidationErrorKind::DuplicateSolve));
        assert!(kinds.contains(&ValidationErrorKind::IncompleteAssignment));
    }
}
