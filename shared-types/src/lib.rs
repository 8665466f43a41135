#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub const FINGERPRINT_LEN: usize = 32;
pub const MAX_ID_LEN: usize = 64;
pub const MAX_PAGE_SIZE: u64 = 100;
pub const MAX_PENALTY_RATE_PCT: u64 = 100;
pub const MAX_SLA_DESCRIPTION_LEN: usize = 256;
pub const MAX_AMENDMENT_NOTES_LEN: usize = 256;
pub const MAX_COMPLAINT_DESCRIPTION_LEN: usize = 256;
pub const MAX_STATUS_NOTES_LEN: usize = 256;
// Kept below the SLA description bound.
pub const MAX_EVIDENCE_NOTES_LEN: usize = 128;

pub type Fingerprint<M> = ManagedByteArray<M, FINGERPRINT_LEN>;

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PartyRole {
    Provider,
    Customer,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SlaEventKind {
    Created,
    Updated,
    Terminated,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AmendmentStatus {
    Pending,
    Applied,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AmendmentApplication {
    Pending,
    Applied,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ComplaintStatus {
    Filed,
    InProgress,
    Resolved,
    Escalated,
}

impl ComplaintStatus {
    /// Statuses a provider may request through a status update.
    pub fn is_requestable(&self) -> bool {
        !matches!(self, ComplaintStatus::Filed)
    }

    pub fn is_closable(&self) -> bool {
        matches!(self, ComplaintStatus::Resolved)
    }

    /// Statuses the deadline poller is allowed to escalate from.
    pub fn is_open_for_escalation(&self) -> bool {
        matches!(self, ComplaintStatus::Filed | ComplaintStatus::InProgress)
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Sla<M: ManagedTypeApi> {
    pub id: ManagedBuffer<M>,
    pub provider: ManagedAddress<M>,
    pub customer: ManagedAddress<M>,
    pub resolution_window: u64,
    pub penalty_rate: u64,
    pub max_penalties: u64,
    pub deposit_required: BigUint<M>,
    pub terms_hash: Fingerprint<M>,
    pub description: ManagedBuffer<M>,
    pub created_at: u64,
    pub updated_at: u64,
    pub active: bool,
}

impl<M: ManagedTypeApi> Sla<M> {
    pub fn role_of(&self, address: &ManagedAddress<M>) -> Option<PartyRole> {
        if address == &self.provider {
            Some(PartyRole::Provider)
        } else if address == &self.customer {
            Some(PartyRole::Customer)
        } else {
            None
        }
    }

    pub fn party(&self, role: PartyRole) -> &ManagedAddress<M> {
        match role {
            PartyRole::Provider => &self.provider,
            PartyRole::Customer => &self.customer,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PartyBinding<M: ManagedTypeApi> {
    pub sla_id: ManagedBuffer<M>,
    pub party: ManagedAddress<M>,
    pub role: PartyRole,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct SlaEventRecord<M: ManagedTypeApi> {
    pub kind: SlaEventKind,
    pub detail: ManagedBuffer<M>,
    pub timestamp: u64,
}

/// Replacement terms carried by an amendment. `None` leaves the field unchanged.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AmendmentTerms<M: ManagedTypeApi> {
    pub resolution_window: Option<u64>,
    pub penalty_rate: Option<u64>,
    pub max_penalties: Option<u64>,
    pub deposit_required: Option<BigUint<M>>,
}

impl<M: ManagedTypeApi> AmendmentTerms<M> {
    pub fn is_empty(&self) -> bool {
        self.resolution_window.is_none()
            && self.penalty_rate.is_none()
            && self.max_penalties.is_none()
            && self.deposit_required.is_none()
    }

    pub fn is_within_bounds(&self) -> bool {
        match self.penalty_rate {
            Some(rate) => rate <= MAX_PENALTY_RATE_PCT,
            None => true,
        }
    }

    /// Writes every present replacement value into `sla`.
    pub fn apply_to(&self, sla: &mut Sla<M>) {
        if let Some(window) = self.resolution_window {
            sla.resolution_window = window;
        }
        if let Some(rate) = self.penalty_rate {
            sla.penalty_rate = rate;
        }
        if let Some(max) = self.max_penalties {
            sla.max_penalties = max;
        }
        if let Some(deposit) = &self.deposit_required {
            sla.deposit_required = deposit.clone();
        }
    }
}

/// Two-slot approval set. Only the provider and the customer of an SLA can
/// ever appear in it, and each at most once.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ApprovalSet {
    pub provider: bool,
    pub customer: bool,
}

impl ApprovalSet {
    pub fn proposed_by(role: PartyRole) -> Self {
        let mut set = ApprovalSet::default();
        set.approve(role);
        set
    }

    /// Records the approval. Returns `false` if `role` had already approved.
    pub fn approve(&mut self, role: PartyRole) -> bool {
        let slot = match role {
            PartyRole::Provider => &mut self.provider,
            PartyRole::Customer => &mut self.customer,
        };
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    pub fn has_approved(&self, role: PartyRole) -> bool {
        match role {
            PartyRole::Provider => self.provider,
            PartyRole::Customer => self.customer,
        }
    }

    pub fn is_unanimous(&self) -> bool {
        self.provider && self.customer
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Amendment<M: ManagedTypeApi> {
    pub sla_id: ManagedBuffer<M>,
    pub amendment_id: ManagedBuffer<M>,
    pub proposer: ManagedAddress<M>,
    pub terms: AmendmentTerms<M>,
    pub notes: ManagedBuffer<M>,
    pub approvals: ApprovalSet,
    pub status: AmendmentStatus,
    pub proposed_at: u64,
    pub updated_at: u64,
    pub applied_at: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct RegistryStats {
    pub total_slas: u64,
    pub active_slas: u64,
    pub amendments_proposed: u64,
    pub amendments_applied: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Complaint<M: ManagedTypeApi> {
    pub complaint_id: ManagedBuffer<M>,
    pub sla_id: ManagedBuffer<M>,
    pub filer: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    pub evidence_hash: Fingerprint<M>,
    pub status: ComplaintStatus,
    pub filed_at: u64,
    pub updated_at: u64,
    pub deposit: BigUint<M>,
    pub resolution_deadline: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct StatusRecord<M: ManagedTypeApi> {
    pub previous_status: Option<ComplaintStatus>,
    pub new_status: ComplaintStatus,
    pub updated_by: ManagedAddress<M>,
    pub notes: ManagedBuffer<M>,
    pub timestamp: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct ComplaintStats {
    pub total_filed: u64,
    pub open_complaints: u64,
    pub escalated: u64,
    pub closed: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct ComplaintRegistryConfig<M: ManagedTypeApi> {
    pub sla_registry: ManagedAddress<M>,
    pub deposit_custody: ManagedAddress<M>,
    pub max_description_len: u64,
    pub max_status_notes_len: u64,
    pub max_evidence_notes_len: u64,
}

/// Absolute deadline for a complaint filed at `filed_at`. Fixed at filing time.
pub fn resolution_deadline(filed_at: u64, resolution_window: u64) -> u64 {
    filed_at.saturating_add(resolution_window)
}

pub fn is_deadline_missed(now: u64, deadline: u64) -> bool {
    now > deadline
}

/// Status that a provider update actually stores. A missed deadline forces
/// `Escalated` whatever was requested.
pub fn effective_status(requested: ComplaintStatus, now: u64, deadline: u64) -> ComplaintStatus {
    if is_deadline_missed(now, deadline) {
        ComplaintStatus::Escalated
    } else {
        requested
    }
}

pub fn is_valid_id<M: ManagedTypeApi>(id: &ManagedBuffer<M>) -> bool {
    !id.is_empty() && id.len() <= MAX_ID_LEN
}
