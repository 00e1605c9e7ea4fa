//! # Diploma Registry
//!
//! The registry table and its operations. State is a dense id → record
//! table, a content-hash → id index, the latest update per id, and three
//! scalars: the id counter, the issuance fee and the write-once authority
//! contract.
//!
//! ## Issuance checklist
//!
//! ```text
//! capacity (114) ─▶ field checklist (101..125) ─▶ authority (100)
//!                ─▶ duplicate hash (106) ─▶ authority contract set (109)
//!                ─▶ fee transfer (120) ─▶ insert
//! ```
//!
//! The first failing check decides the error. Every check runs before
//! any write, and the fee transfer is the last fallible step, so a failed
//! call leaves the state exactly as it was.
//!
//! ## Lifecycle
//!
//! Records are created only by issuance and changed only by an update from
//! their original issuer. Nothing is ever deleted.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use diploma_core::{BlockHeight, ContentHash, DiplomaId, Principal};

use crate::config::RegistryConfig;
use crate::error::{IssueError, Rejected};
use crate::ledger::{AuthorityOracle, FeeTransfer, TransferSink};
use crate::record::{DiplomaRecord, DiplomaUpdateRecord, IssueRequest};
use crate::validation;

/// Per-call inputs supplied by the host ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    /// The principal invoking the operation.
    pub caller: Principal,
    /// The current block height.
    pub block_height: BlockHeight,
}

impl CallContext {
    pub fn new(caller: Principal, block_height: BlockHeight) -> Self {
        Self {
            caller,
            block_height,
        }
    }
}

#[derive(Debug, Clone)]
struct RegistryState {
    next_diploma_id: DiplomaId,
    max_diplomas: u64,
    issuance_fee: u64,
    authority_contract: Option<Principal>,
    diplomas: BTreeMap<DiplomaId, DiplomaRecord>,
    diploma_updates: BTreeMap<DiplomaId, DiplomaUpdateRecord>,
    diplomas_by_hash: HashMap<ContentHash, DiplomaId>,
}

impl RegistryState {
    fn new(config: &RegistryConfig) -> Self {
        Self {
            next_diploma_id: DiplomaId::FIRST,
            max_diplomas: config.max_diplomas,
            issuance_fee: config.issuance_fee,
            authority_contract: None,
            diplomas: BTreeMap::new(),
            diploma_updates: BTreeMap::new(),
            diplomas_by_hash: HashMap::new(),
        }
    }
}

/// The diploma registry.
pub struct DiplomaRegistry {
    state: RegistryState,
    authorities: Arc<dyn AuthorityOracle>,
    transfers: Arc<dyn TransferSink>,
}

impl std::fmt::Debug for DiplomaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiplomaRegistry")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl DiplomaRegistry {
    /// Create an empty registry.
    pub fn new(
        config: RegistryConfig,
        authorities: Arc<dyn AuthorityOracle>,
        transfers: Arc<dyn TransferSink>,
    ) -> Self {
        Self {
            state: RegistryState::new(&config),
            authorities,
            transfers,
        }
    }

    // ── Configuration ────────────────────────────────────────────────

    /// Designate the fee-receiving authority contract. Write-once.
    ///
    /// Rejected if `contract` is the burn principal or a contract is
    /// already set.
    pub fn set_authority_contract(&mut self, contract: Principal) -> Result<(), Rejected> {
        if contract.is_burn() {
            tracing::debug!(contract = %contract, "authority contract rejected: burn principal");
            return Err(Rejected);
        }
        if let Some(existing) = &self.state.authority_contract {
            tracing::debug!(
                contract = %contract,
                existing = %existing,
                "authority contract rejected: already set"
            );
            return Err(Rejected);
        }
        tracing::info!(contract = %contract, "authority contract set");
        self.state.authority_contract = Some(contract);
        Ok(())
    }

    /// Replace the issuance fee. Rejected until an authority contract is set.
    pub fn set_issuance_fee(&mut self, fee: u64) -> Result<(), Rejected> {
        if self.state.authority_contract.is_none() {
            tracing::debug!(fee, "issuance fee rejected: authority contract not set");
            return Err(Rejected);
        }
        tracing::info!(old = self.state.issuance_fee, new = fee, "issuance fee changed");
        self.state.issuance_fee = fee;
        Ok(())
    }

    // ── Issuance ─────────────────────────────────────────────────────

    /// Issue a diploma and return its id.
    ///
    /// On success the issuance fee has been handed to the transfer sink,
    /// the record is stored with `status = true` and `timestamp` set to the
    /// current block height, and the content hash is indexed.
    pub fn issue_diploma(
        &mut self,
        ctx: &CallContext,
        request: IssueRequest,
    ) -> Result<DiplomaId, IssueError> {
        match self.try_issue(ctx, request) {
            Ok(id) => Ok(id),
            Err(err) => {
                tracing::debug!(
                    caller = %ctx.caller,
                    code = err.code(),
                    reason = %err,
                    "issuance rejected"
                );
                Err(err)
            }
        }
    }

    fn try_issue(
        &mut self,
        ctx: &CallContext,
        request: IssueRequest,
    ) -> Result<DiplomaId, IssueError> {
        if self.state.next_diploma_id.value() >= self.state.max_diplomas {
            return Err(IssueError::MaxDiplomasExceeded);
        }
        let fields = validation::validate_fields(&request, ctx.block_height)?;
        if !self.authorities.is_verified_authority(&ctx.caller) {
            return Err(IssueError::NotAuthorized);
        }
        if self.state.diplomas_by_hash.contains_key(&fields.content_hash) {
            return Err(IssueError::AlreadyIssued);
        }
        let authority = self
            .state
            .authority_contract
            .clone()
            .ok_or(IssueError::AuthorityNotConfigured)?;

        let fee = FeeTransfer {
            amount: self.state.issuance_fee,
            from: ctx.caller.clone(),
            to: authority,
        };
        self.transfers.transfer(&fee).map_err(|e| {
            tracing::warn!(caller = %ctx.caller, amount = fee.amount, error = %e, "fee transfer refused");
            IssueError::FeeTransferFailed
        })?;

        let id = self.state.next_diploma_id;
        let record = DiplomaRecord {
            institution_id: request.institution_id,
            student_id: request.student_id,
            template_id: request.template_id,
            content_hash: fields.content_hash,
            issuance_date: request.issuance_date,
            timestamp: ctx.block_height,
            issuer: ctx.caller.clone(),
            degree_type: fields.degree_type,
            gpa: request.gpa,
            honors: request.honors,
            major: request.major,
            minor: request.minor,
            location: request.location,
            currency: fields.currency,
            status: true,
            expiry: request.expiry,
            credits: request.credits,
            thesis_title: request.thesis_title,
            advisor: request.advisor,
            committee: request.committee,
        };
        self.state.diplomas.insert(id, record);
        self.state.diplomas_by_hash.insert(fields.content_hash, id);
        self.state.next_diploma_id = id.next();

        tracing::info!(
            id = id.value(),
            issuer = %ctx.caller,
            content_hash = %fields.content_hash,
            fee = fee.amount,
            "diploma issued"
        );
        Ok(id)
    }

    // ── Update ───────────────────────────────────────────────────────

    /// Overwrite the GPA and honors of a diploma.
    ///
    /// Only the original issuer may update. Any failure (unknown id,
    /// different caller, GPA out of range, honors too long) is the same
    /// [`Rejected`].
    pub fn update_diploma(
        &mut self,
        ctx: &CallContext,
        id: DiplomaId,
        gpa: u32,
        honors: String,
    ) -> Result<(), Rejected> {
        let Some(record) = self.state.diplomas.get_mut(&id) else {
            tracing::debug!(id = id.value(), "update rejected: diploma not found");
            return Err(Rejected);
        };
        if record.issuer != ctx.caller {
            tracing::debug!(
                id = id.value(),
                caller = %ctx.caller,
                "update rejected: caller is not the issuer"
            );
            return Err(Rejected);
        }
        if !validation::gpa_in_range(gpa) {
            tracing::debug!(id = id.value(), gpa, "update rejected: gpa out of range");
            return Err(Rejected);
        }
        if !validation::honors_fit(&honors) {
            tracing::debug!(id = id.value(), "update rejected: honors too long");
            return Err(Rejected);
        }

        record.gpa = gpa;
        record.honors = honors.clone();
        record.timestamp = ctx.block_height;
        self.state.diploma_updates.insert(
            id,
            DiplomaUpdateRecord {
                update_gpa: gpa,
                update_honors: honors,
                update_timestamp: ctx.block_height,
                updater: ctx.caller.clone(),
            },
        );
        tracing::info!(id = id.value(), updater = %ctx.caller, gpa, "diploma updated");
        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// The stored record for `id`, if any.
    pub fn get_diploma(&self, id: DiplomaId) -> Option<&DiplomaRecord> {
        self.state.diplomas.get(&id)
    }

    /// The latest update applied to `id`, if any.
    pub fn get_diploma_update(&self, id: DiplomaId) -> Option<&DiplomaUpdateRecord> {
        self.state.diploma_updates.get(&id)
    }

    /// Number of diplomas issued so far, which is also the next id.
    pub fn get_diploma_count(&self) -> u64 {
        self.state.next_diploma_id.value()
    }

    /// Whether a diploma was issued under `hash`.
    pub fn check_diploma_existence(&self, hash: &ContentHash) -> bool {
        self.state.diplomas_by_hash.contains_key(hash)
    }

    /// The id issued under `hash`, if any.
    pub fn find_diploma_by_hash(&self, hash: &ContentHash) -> Option<DiplomaId> {
        self.state.diplomas_by_hash.get(hash).copied()
    }

    /// Whether `principal` may issue, as reported by the authority oracle.
    pub fn is_verified_authority(&self, principal: &Principal) -> bool {
        self.authorities.is_verified_authority(principal)
    }

    /// The current issuance fee.
    pub fn issuance_fee(&self) -> u64 {
        self.state.issuance_fee
    }

    /// The authority contract, once set.
    pub fn authority_contract(&self) -> Option<&Principal> {
        self.state.authority_contract.as_ref()
    }

    /// Registry capacity.
    pub fn max_diplomas(&self) -> u64 {
        self.state.max_diplomas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{AuthoritySet, TransferError, TransferLog};

    fn p(s: &str) -> Principal {
        Principal::new(s).unwrap()
    }

    fn ctx(caller: &str) -> CallContext {
        CallContext::new(p(caller), BlockHeight::GENESIS)
    }

    fn request(fill: u8) -> IssueRequest {
        IssueRequest {
            institution_id: 1,
            student_id: 1,
            template_id: 1,
            content_hash: vec![fill; 32],
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
            committee: vec!["Dr. A".into(), "Dr. B".into()],
        }
    }

    fn second_request(fill: u8) -> IssueRequest {
        IssueRequest {
            institution_id: 2,
            student_id: 2,
            template_id: 2,
            content_hash: vec![fill; 32],
            issuance_date: BlockHeight(150),
            degree_type: "Master".into(),
            gpa: 380,
            honors: "Magna Cum Laude".into(),
            major: "Engineering".into(),
            minor: "Physics".into(),
            location: "Tech Town".into(),
            currency: "USD".into(),
            expiry: BlockHeight(250),
            credits: 60,
            thesis_title: "ML Thesis".into(),
            advisor: "Dr. Johnson".into(),
            committee: vec!["Dr. C".into(), "Dr. D".into()],
        }
    }

    struct Fixture {
        registry: DiplomaRegistry,
        authorities: Arc<AuthoritySet>,
        transfers: Arc<TransferLog>,
    }

    fn fixture_with(config: RegistryConfig) -> Fixture {
        let authorities = Arc::new(AuthoritySet::new([p("ST1TEST")]));
        let transfers = Arc::new(TransferLog::new());
        let registry = DiplomaRegistry::new(config, authorities.clone(), transfers.clone());
        Fixture {
            registry,
            authorities,
            transfers,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(RegistryConfig::default())
    }

    fn configured() -> Fixture {
        let mut f = fixture();
        f.registry.set_authority_contract(p("ST2TEST")).unwrap();
        f
    }

    struct RefusingSink;

    impl TransferSink for RefusingSink {
        fn transfer(&self, transfer: &FeeTransfer) -> Result<(), TransferError> {
            Err(TransferError::InsufficientFunds {
                payer: transfer.from.clone(),
                amount: transfer.amount,
            })
        }
    }

    // ── Issuance ─────────────────────────────────────────────────────

    #[test]
    fn test_issue_diploma_success() {
        let mut f = configured();
        let id = f.registry.issue_diploma(&ctx("ST1TEST"), request(1)).unwrap();
        assert_eq!(id, DiplomaId(0));

        let d = f.registry.get_diploma(id).unwrap();
        assert_eq!(d.institution_id, 1);
        assert_eq!(d.student_id, 1);
        assert_eq!(d.template_id, 1);
        assert_eq!(d.content_hash, ContentHash::new([1u8; 32]));
        assert_eq!(d.issuance_date, BlockHeight(100));
        assert_eq!(d.degree_type, diploma_core::DegreeType::Bachelor);
        assert_eq!(d.gpa, 350);
        assert_eq!(d.honors, "Cum Laude");
        assert_eq!(d.major, "Computer Science");
        assert_eq!(d.minor, "Math");
        assert_eq!(d.location, "University City");
        assert_eq!(d.currency, diploma_core::Currency::Stx);
        assert_eq!(d.expiry, BlockHeight(200));
        assert_eq!(d.credits, 120);
        assert_eq!(d.thesis_title, "AI Thesis");
        assert_eq!(d.advisor, "Dr. Smith");
        assert_eq!(d.committee, vec!["Dr. A", "Dr. B"]);
        assert_eq!(d.issuer, p("ST1TEST"));
        assert!(d.status);
        assert_eq!(d.timestamp, BlockHeight::GENESIS);

        assert_eq!(
            f.transfers.transfers(),
            vec![FeeTransfer {
                amount: 100,
                from: p("ST1TEST"),
                to: p("ST2TEST"),
            }]
        );
    }

    #[test]
    fn test_timestamp_is_current_block_height() {
        let mut f = configured();
        let call = CallContext::new(p("ST1TEST"), BlockHeight(42));
        let id = f.registry.issue_diploma(&call, request(1)).unwrap();
        assert_eq!(f.registry.get_diploma(id).unwrap().timestamp, BlockHeight(42));
    }

    #[test]
    fn test_duplicate_hash_rejected() {
        let mut f = configured();
        f.registry.issue_diploma(&ctx("ST1TEST"), request(1)).unwrap();
        let err = f
            .registry
            .issue_diploma(&ctx("ST1TEST"), second_request(1))
            .unwrap_err();
        assert_eq!(err, IssueError::AlreadyIssued);
        assert_eq!(err.code(), 106);
        assert_eq!(f.registry.get_diploma_count(), 1);
        assert_eq!(f.transfers.len(), 1);
    }

    #[test]
    fn test_unauthorized_caller_rejected() {
        let mut f = configured();
        f.authorities.revoke(&p("ST1TEST"));
        let err = f
            .registry
            .issue_diploma(&ctx("ST2FAKE"), request(2))
            .unwrap_err();
        assert_eq!(err, IssueError::NotAuthorized);
        assert!(f.transfers.is_empty());
    }

    #[test]
    fn test_authority_contract_required() {
        let mut f = fixture();
        let err = f
            .registry
            .issue_diploma(&ctx("ST1TEST"), request(4))
            .unwrap_err();
        assert_eq!(err, IssueError::AuthorityNotConfigured);
        assert_eq!(err.code(), 109);
    }

    #[test]
    fn test_invalid_gpa_rejected() {
        let mut f = configured();
        let mut r = request(5);
        r.gpa = 450;
        assert_eq!(
            f.registry.issue_diploma(&ctx("ST1TEST"), r),
            Err(IssueError::InvalidGpa)
        );
    }

    #[test]
    fn test_invalid_degree_type_rejected() {
        let mut f = configured();
        let mut r = request(6);
        r.degree_type = "Invalid".into();
        assert_eq!(
            f.registry.issue_diploma(&ctx("ST1TEST"), r),
            Err(IssueError::InvalidDegreeType)
        );
    }

    #[test]
    fn test_invalid_hash_checked_before_authorization() {
        let mut f = configured();
        let mut r = request(14);
        r.content_hash = vec![14u8; 31];
        assert_eq!(
            f.registry.issue_diploma(&ctx("ST9NOBODY"), r),
            Err(IssueError::InvalidHash)
        );
    }

    #[test]
    fn test_authorization_checked_before_duplicate_and_contract() {
        let mut f = fixture();
        // No authority contract and an unknown caller: authorization wins.
        assert_eq!(
            f.registry.issue_diploma(&ctx("ST9NOBODY"), request(1)),
            Err(IssueError::NotAuthorized)
        );
    }

    #[test]
    fn test_duplicate_checked_before_contract() {
        let mut f = configured();
        f.registry.issue_diploma(&ctx("ST1TEST"), request(1)).unwrap();
        // Re-issuing is reported as a duplicate even with other bad state absent.
        assert_eq!(
            f.registry.issue_diploma(&ctx("ST1TEST"), request(1)),
            Err(IssueError::AlreadyIssued)
        );
    }

    #[test]
    fn test_capacity_checked_first() {
        let mut f = fixture_with(RegistryConfig {
            max_diplomas: 1,
            ..RegistryConfig::default()
        });
        f.registry.set_authority_contract(p("ST2TEST")).unwrap();
        assert_eq!(
            f.registry.issue_diploma(&ctx("ST1TEST"), request(15)),
            Ok(DiplomaId(0))
        );
        // Invalid fields too, but capacity is evaluated before them.
        let mut r = second_request(16);
        r.institution_id = 0;
        assert_eq!(
            f.registry.issue_diploma(&ctx("ST1TEST"), r),
            Err(IssueError::MaxDiplomasExceeded)
        );
        assert_eq!(f.registry.get_diploma_count(), 1);
    }

    #[test]
    fn test_refused_transfer_leaves_state_untouched() {
        let authorities = Arc::new(AuthoritySet::new([p("ST1TEST")]));
        let mut registry = DiplomaRegistry::new(
            RegistryConfig::default(),
            authorities,
            Arc::new(RefusingSink),
        );
        registry.set_authority_contract(p("ST2TEST")).unwrap();
        let err = registry.issue_diploma(&ctx("ST1TEST"), request(1)).unwrap_err();
        assert_eq!(err, IssueError::FeeTransferFailed);
        assert_eq!(err.code(), 120);
        assert_eq!(registry.get_diploma_count(), 0);
        assert!(registry.get_diploma(DiplomaId(0)).is_none());
        assert!(!registry.check_diploma_existence(&ContentHash::new([1u8; 32])));
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut f = configured();
        for i in 0..5u8 {
            let id = f
                .registry
                .issue_diploma(&ctx("ST1TEST"), request(i + 1))
                .unwrap();
            assert_eq!(id, DiplomaId(u64::from(i)));
        }
        assert_eq!(f.registry.get_diploma_count(), 5);
    }

    // ── Configuration ────────────────────────────────────────────────

    #[test]
    fn test_set_authority_contract_once() {
        let mut f = fixture();
        assert_eq!(f.registry.set_authority_contract(p("ST2TEST")), Ok(()));
        assert_eq!(f.registry.authority_contract(), Some(&p("ST2TEST")));
        assert_eq!(f.registry.set_authority_contract(p("ST3OTHER")), Err(Rejected));
        assert_eq!(f.registry.authority_contract(), Some(&p("ST2TEST")));
    }

    #[test]
    fn test_burn_principal_rejected_as_authority_contract() {
        let mut f = fixture();
        assert_eq!(f.registry.set_authority_contract(Principal::burn()), Err(Rejected));
        assert_eq!(f.registry.authority_contract(), None);
        // The cell is still unset, so a real contract can follow.
        assert!(f.registry.set_authority_contract(p("ST2TEST")).is_ok());
    }

    #[test]
    fn test_set_issuance_fee() {
        let mut f = configured();
        assert_eq!(f.registry.set_issuance_fee(200), Ok(()));
        assert_eq!(f.registry.issuance_fee(), 200);
        f.registry.issue_diploma(&ctx("ST1TEST"), request(9)).unwrap();
        assert_eq!(
            f.transfers.transfers(),
            vec![FeeTransfer {
                amount: 200,
                from: p("ST1TEST"),
                to: p("ST2TEST"),
            }]
        );
    }

    #[test]
    fn test_set_issuance_fee_requires_authority_contract() {
        let mut f = fixture();
        assert_eq!(f.registry.set_issuance_fee(200), Err(Rejected));
        assert_eq!(f.registry.issuance_fee(), 100);
    }

    // ── Update ───────────────────────────────────────────────────────

    #[test]
    fn test_update_diploma_success() {
        let mut f = configured();
        let id = f.registry.issue_diploma(&ctx("ST1TEST"), request(7)).unwrap();
        let later = CallContext::new(p("ST1TEST"), BlockHeight(10));
        f.registry
            .update_diploma(&later, id, 360, "Summa Cum Laude".into())
            .unwrap();

        let d = f.registry.get_diploma(id).unwrap();
        assert_eq!(d.gpa, 360);
        assert_eq!(d.honors, "Summa Cum Laude");
        assert_eq!(d.timestamp, BlockHeight(10));

        let u = f.registry.get_diploma_update(id).unwrap();
        assert_eq!(u.update_gpa, 360);
        assert_eq!(u.update_honors, "Summa Cum Laude");
        assert_eq!(u.update_timestamp, BlockHeight(10));
        assert_eq!(u.updater, p("ST1TEST"));
    }

    #[test]
    fn test_update_overwrites_previous_update() {
        let mut f = configured();
        let id = f.registry.issue_diploma(&ctx("ST1TEST"), request(7)).unwrap();
        f.registry
            .update_diploma(&ctx("ST1TEST"), id, 360, "First".into())
            .unwrap();
        f.registry
            .update_diploma(&ctx("ST1TEST"), id, 370, "Second".into())
            .unwrap();
        let u = f.registry.get_diploma_update(id).unwrap();
        assert_eq!(u.update_gpa, 370);
        assert_eq!(u.update_honors, "Second");
    }

    #[test]
    fn test_update_unknown_diploma_rejected() {
        let mut f = configured();
        assert_eq!(
            f.registry
                .update_diploma(&ctx("ST1TEST"), DiplomaId(99), 360, "Summa Cum Laude".into()),
            Err(Rejected)
        );
    }

    #[test]
    fn test_update_by_non_issuer_rejected() {
        let mut f = configured();
        let id = f.registry.issue_diploma(&ctx("ST1TEST"), request(8)).unwrap();
        let before = f.registry.get_diploma(id).cloned();
        assert_eq!(
            f.registry
                .update_diploma(&ctx("ST3FAKE"), id, 360, "Summa Cum Laude".into()),
            Err(Rejected)
        );
        assert_eq!(f.registry.get_diploma(id).cloned(), before);
        assert!(f.registry.get_diploma_update(id).is_none());
    }

    #[test]
    fn test_update_invalid_values_rejected() {
        let mut f = configured();
        let id = f.registry.issue_diploma(&ctx("ST1TEST"), request(8)).unwrap();
        assert_eq!(
            f.registry.update_diploma(&ctx("ST1TEST"), id, 401, "ok".into()),
            Err(Rejected)
        );
        assert_eq!(
            f.registry
                .update_diploma(&ctx("ST1TEST"), id, 300, "h".repeat(51)),
            Err(Rejected)
        );
        assert_eq!(f.registry.get_diploma(id).unwrap().gpa, 350);
    }

    // ── Queries ──────────────────────────────────────────────────────

    #[test]
    fn test_diploma_count() {
        let mut f = configured();
        f.registry.issue_diploma(&ctx("ST1TEST"), request(10)).unwrap();
        f.registry
            .issue_diploma(&ctx("ST1TEST"), second_request(11))
            .unwrap();
        assert_eq!(f.registry.get_diploma_count(), 2);
    }

    #[test]
    fn test_check_diploma_existence() {
        let mut f = configured();
        f.registry.issue_diploma(&ctx("ST1TEST"), request(12)).unwrap();
        assert!(f
            .registry
            .check_diploma_existence(&ContentHash::new([12u8; 32])));
        assert!(!f
            .registry
            .check_diploma_existence(&ContentHash::new([13u8; 32])));
        assert_eq!(
            f.registry.find_diploma_by_hash(&ContentHash::new([12u8; 32])),
            Some(DiplomaId(0))
        );
    }

    #[test]
    fn test_get_missing_diploma() {
        let f = configured();
        assert!(f.registry.get_diploma(DiplomaId(0)).is_none());
    }

    #[test]
    fn test_is_verified_authority_delegates_to_oracle() {
        let f = fixture();
        assert!(f.registry.is_verified_authority(&p("ST1TEST")));
        assert!(!f.registry.is_verified_authority(&p("ST2TEST")));
        f.authorities.grant(p("ST2TEST"));
        assert!(f.registry.is_verified_authority(&p("ST2TEST")));
    }
}
