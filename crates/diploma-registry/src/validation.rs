//! # Field Validation Checklist
//!
//! The per-field part of the issuance checklist, as an ordered list of
//! predicate / error pairs. Evaluation is short-circuit and the first
//! failing rule decides the error, so when a request violates several
//! rules at once the caller always sees the same code.
//!
//! ```text
//! 101 institution  102 student   103 template   104 hash     105 issuance date
//! 111 degree       110 gpa       115 honors     116 major    117 minor
//! 118 location     119 currency  121 expiry     122 credits  123 thesis
//! 124 advisor      125 committee
//! ```
//!
//! The capacity check runs before this list; authorization, duplicate
//! hash and authority-contract checks run after it. Those depend on
//! registry state and live in [`crate::registry`].

use diploma_core::{BlockHeight, ContentHash, Currency, DegreeType, CONTENT_HASH_LEN};

use crate::error::IssueError;
use crate::record::IssueRequest;

/// Highest fixed-point GPA (4.00).
pub const MAX_GPA: u32 = 400;
pub const MAX_HONORS_LEN: usize = 50;
pub const MAX_MAJOR_LEN: usize = 100;
pub const MAX_MINOR_LEN: usize = 100;
pub const MAX_LOCATION_LEN: usize = 100;
pub const MAX_THESIS_LEN: usize = 200;
pub const MAX_ADVISOR_LEN: usize = 100;
pub const MAX_COMMITTEE_SIZE: usize = 5;

/// Number of rules in the field checklist.
pub const FIELD_RULE_COUNT: usize = 17;

/// One entry of the checklist: the error reported when `holds` is false.
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub error: IssueError,
    pub holds: fn(&IssueRequest, BlockHeight) -> bool,
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule").field("error", &self.error).finish()
    }
}

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Whether `gpa` lies in the accepted range.
pub fn gpa_in_range(gpa: u32) -> bool {
    gpa <= MAX_GPA
}

/// Whether `honors` fits the length ceiling.
pub fn honors_fit(honors: &str) -> bool {
    char_len(honors) <= MAX_HONORS_LEN
}

fn non_empty_within(s: &str, max: usize) -> bool {
    !s.is_empty() && char_len(s) <= max
}

/// The field checklist in evaluation order.
pub fn field_rules() -> [FieldRule; FIELD_RULE_COUNT] {
    [
        FieldRule {
            error: IssueError::InvalidInstitution,
            holds: |r, _| r.institution_id > 0,
        },
        FieldRule {
            error: IssueError::InvalidStudent,
            holds: |r, _| r.student_id > 0,
        },
        FieldRule {
            error: IssueError::InvalidTemplate,
            holds: |r, _| r.template_id > 0,
        },
        FieldRule {
            error: IssueError::InvalidHash,
            holds: |r, _| r.content_hash.len() == CONTENT_HASH_LEN,
        },
        FieldRule {
            error: IssueError::InvalidIssuanceDate,
            holds: |r, now| r.issuance_date >= now,
        },
        FieldRule {
            error: IssueError::InvalidDegreeType,
            holds: |r, _| r.degree_type.parse::<DegreeType>().is_ok(),
        },
        FieldRule {
            error: IssueError::InvalidGpa,
            holds: |r, _| gpa_in_range(r.gpa),
        },
        FieldRule {
            error: IssueError::InvalidHonors,
            holds: |r, _| honors_fit(&r.honors),
        },
        FieldRule {
            error: IssueError::InvalidMajor,
            holds: |r, _| non_empty_within(&r.major, MAX_MAJOR_LEN),
        },
        FieldRule {
            error: IssueError::InvalidMinor,
            holds: |r, _| char_len(&r.minor) <= MAX_MINOR_LEN,
        },
        FieldRule {
            error: IssueError::InvalidLocation,
            holds: |r, _| non_empty_within(&r.location, MAX_LOCATION_LEN),
        },
        FieldRule {
            error: IssueError::InvalidCurrency,
            holds: |r, _| r.currency.parse::<Currency>().is_ok(),
        },
        FieldRule {
            error: IssueError::InvalidExpiry,
            holds: |r, now| r.expiry >= now,
        },
        FieldRule {
            error: IssueError::InvalidCredits,
            holds: |r, _| r.credits > 0,
        },
        FieldRule {
            error: IssueError::InvalidThesis,
            holds: |r, _| char_len(&r.thesis_title) <= MAX_THESIS_LEN,
        },
        FieldRule {
            error: IssueError::InvalidAdvisor,
            holds: |r, _| char_len(&r.advisor) <= MAX_ADVISOR_LEN,
        },
        FieldRule {
            error: IssueError::InvalidCommittee,
            holds: |r, _| r.committee.len() <= MAX_COMMITTEE_SIZE,
        },
    ]
}

/// Typed values extracted from a request that passed the field checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedFields {
    pub content_hash: ContentHash,
    pub degree_type: DegreeType,
    pub currency: Currency,
}

/// Run the field checklist against `request` at block height `now`.
pub fn validate_fields(
    request: &IssueRequest,
    now: BlockHeight,
) -> Result<ValidatedFields, IssueError> {
    if let Some(rule) = field_rules()
        .iter()
        .find(|rule| !(rule.holds)(request, now))
    {
        return Err(rule.error);
    }

    let content_hash =
        ContentHash::from_slice(&request.content_hash).map_err(|_| IssueError::InvalidHash)?;
    let degree_type = request
        .degree_type
        .parse()
        .map_err(|_| IssueError::InvalidDegreeType)?;
    let currency = request
        .currency
        .parse()
        .map_err(|_| IssueError::InvalidCurrency)?;

    Ok(ValidatedFields {
        content_hash,
        degree_type,
        currency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> IssueRequest {
        IssueRequest {
            institution_id: 1,
            student_id: 1,
            template_id: 1,
            content_hash: vec![1u8; 32],
            issuance_date: BlockHeight(100),
            degree_type: "Bachelor".into(),
            gpa: 350,
            honors: "Cum Laude".into(),
            major: "Computer Science".into(),
            minor: "Math".into(),
            location: "University City".into(),
            currency: "STX".into(),
            expiry: BlockHeight(200),
            credits: 120,
            thesis_title: "AI Thesis".into(),
            advisor: "Dr. Smith".into(),
            committee: vec!["Dr. A".into()],
        }
    }

    fn check(r: &IssueRequest) -> Result<ValidatedFields, IssueError> {
        validate_fields(r, BlockHeight::GENESIS)
    }

    #[test]
    fn test_valid_request_yields_typed_fields() {
        let fields = check(&valid_request()).unwrap();
        assert_eq!(fields.content_hash, ContentHash::new([1u8; 32]));
        assert_eq!(fields.degree_type, DegreeType::Bachelor);
        assert_eq!(fields.currency, Currency::Stx);
    }

    #[test]
    fn test_rule_order_matches_code_table() {
        let codes: Vec<u32> = field_rules().iter().map(|r| r.error.code()).collect();
        assert_eq!(
            codes,
            vec![101, 102, 103, 104, 105, 111, 110, 115, 116, 117, 118, 119, 121, 122, 123, 124, 125]
        );
    }

    #[test]
    fn test_each_rule_in_isolation() {
        let cases: [(IssueError, fn(&mut IssueRequest)); 16] = [
            (IssueError::InvalidInstitution, |r| r.institution_id = 0),
            (IssueError::InvalidStudent, |r| r.student_id = 0),
            (IssueError::InvalidTemplate, |r| r.template_id = 0),
            (IssueError::InvalidHash, |r| r.content_hash = vec![1u8; 31]),
            (IssueError::InvalidDegreeType, |r| r.degree_type = "Invalid".into()),
            (IssueError::InvalidGpa, |r| r.gpa = 450),
            (IssueError::InvalidHonors, |r| r.honors = "h".repeat(51)),
            (IssueError::InvalidMajor, |r| r.major = String::new()),
            (IssueError::InvalidMajor, |r| r.major = "m".repeat(101)),
            (IssueError::InvalidMinor, |r| r.minor = "m".repeat(101)),
            (IssueError::InvalidLocation, |r| r.location = String::new()),
            (IssueError::InvalidCurrency, |r| r.currency = "EUR".into()),
            (IssueError::InvalidCredits, |r| r.credits = 0),
            (IssueError::InvalidThesis, |r| r.thesis_title = "t".repeat(201)),
            (IssueError::InvalidAdvisor, |r| r.advisor = "a".repeat(101)),
            (IssueError::InvalidCommittee, |r| {
                r.committee = (0..6)
                    .map(|i| format!("Member {i}"))
                    .collect()
            }),
        ];
        for (expected, mutate) in cases {
            let mut r = valid_request();
            mutate(&mut r);
            assert_eq!(check(&r), Err(expected), "expected {expected:?}");
        }
    }

    #[test]
    fn test_dates_compare_against_current_height() {
        let r = valid_request();
        assert_eq!(
            validate_fields(&r, BlockHeight(101)),
            Err(IssueError::InvalidIssuanceDate)
        );
        // Issuance date equal to now is accepted.
        assert!(validate_fields(&r, BlockHeight(100)).is_ok());

        let mut r = valid_request();
        r.issuance_date = BlockHeight(300);
        assert_eq!(
            validate_fields(&r, BlockHeight(250)),
            Err(IssueError::InvalidExpiry)
        );
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let mut r = valid_request();
        r.gpa = MAX_GPA;
        r.honors = "h".repeat(MAX_HONORS_LEN);
        r.major = "m".repeat(MAX_MAJOR_LEN);
        r.minor = String::new();
        r.thesis_title = "t".repeat(MAX_THESIS_LEN);
        r.advisor = String::new();
        r.committee = (0..MAX_COMMITTEE_SIZE)
            .map(|i| format!("Member {i}"))
            .collect();
        assert!(check(&r).is_ok());
    }

    #[test]
    fn test_committee_names_are_free_text() {
        let mut r = valid_request();
        r.committee = vec!["Dr. A".into(), "Dr. B".into(), String::new()];
        assert!(check(&r).is_ok());
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        let mut r = valid_request();
        // 50 two-byte characters: 100 bytes, still within the honors limit.
        r.honors = "é".repeat(MAX_HONORS_LEN);
        assert!(check(&r).is_ok());
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let mut r = valid_request();
        r.content_hash = vec![0u8; 31];
        r.gpa = 999;
        r.committee = (0..9)
            .map(|i| format!("Member {i}"))
            .collect();
        assert_eq!(check(&r), Err(IssueError::InvalidHash));

        r.content_hash = vec![0u8; 32];
        assert_eq!(check(&r), Err(IssueError::InvalidGpa));
    }

    #[test]
    fn test_degree_type_checked_before_gpa() {
        let mut r = valid_request();
        r.degree_type = "Diploma".into();
        r.gpa = 401;
        assert_eq!(check(&r), Err(IssueError::InvalidDegreeType));
    }
}
