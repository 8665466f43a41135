#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod complaint_registry_proxy;
mod deposit_custody_proxy;
mod sla_registry_proxy;

use deposit_custody_proxy::DepositCustodyProxy;
use shared_types::{
    effective_status, is_deadline_missed, is_valid_id, resolution_deadline, Complaint,
    ComplaintRegistryConfig, ComplaintStats, ComplaintStatus, Fingerprint, Sla, StatusRecord,
    MAX_COMPLAINT_DESCRIPTION_LEN, MAX_EVIDENCE_NOTES_LEN, MAX_PAGE_SIZE, MAX_STATUS_NOTES_LEN,
};
use sla_registry_proxy::SlaRegistryProxy;

pub const ERR_ALREADY_EXISTS: &str = "ERR_ALREADY_EXISTS";
pub const ERR_INVALID_REFERENCE: &str = "ERR_INVALID_REFERENCE";
pub const ERR_UNAUTHORIZED: &str = "ERR_UNAUTHORIZED";
pub const ERR_INVALID_STATUS: &str = "ERR_INVALID_STATUS";
pub const ERR_EVIDENCE_TOO_LONG: &str = "ERR_EVIDENCE_TOO_LONG";
pub const ERR_INSUFFICIENT_DEPOSIT: &str = "ERR_INSUFFICIENT_DEPOSIT";
pub const ERR_DEADLINE_NOT_REACHED: &str = "ERR_DEADLINE_NOT_REACHED";

const NOTES_DEADLINE_MISSED: &[u8] = b"resolution deadline missed";

#[multiversx_sc::contract]
pub trait ComplaintRegistry {
    #[init]
    fn init(&self, sla_registry: ManagedAddress, deposit_custody: ManagedAddress) {
        require!(!sla_registry.is_zero(), ERR_INVALID_REFERENCE);
        require!(!deposit_custody.is_zero(), ERR_INVALID_REFERENCE);

        self.sla_registry().set(sla_registry);
        self.deposit_custody().set(deposit_custody);

        self.total_filed_count().set(0u64);
        self.open_complaint_count().set(0u64);
        self.escalated_count().set(0u64);
        self.closed_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(fileComplaint)]
    fn file_complaint(
        &self,
        complaint_id: ManagedBuffer,
        sla_id: ManagedBuffer,
        description: ManagedBuffer,
        evidence_hash: Fingerprint<Self::Api>,
    ) {
        require!(
            self.complaints(&complaint_id, &sla_id).is_empty(),
            ERR_ALREADY_EXISTS
        );
        require!(is_valid_id(&complaint_id), ERR_INVALID_REFERENCE);
        require!(self.sla_is_active(&sla_id), ERR_INVALID_REFERENCE);
        require!(
            description.len() <= MAX_COMPLAINT_DESCRIPTION_LEN,
            ERR_EVIDENCE_TOO_LONG
        );

        let sla = self.fetch_sla(&sla_id);
        let caller = self.blockchain().get_caller();

        let deposit = sla.deposit_required.clone();
        let locked: bool = self
            .tx()
            .to(self.deposit_custody().get())
            .typed(DepositCustodyProxy)
            .lock_deposit(caller.clone(), deposit.clone())
            .returns(ReturnsResult)
            .sync_call();
        require!(locked, ERR_INSUFFICIENT_DEPOSIT);

        // Never recomputed, even if the SLA window is amended later.
        let now = self.blockchain().get_block_timestamp();
        let deadline = resolution_deadline(now, sla.resolution_window);

        let complaint = Complaint {
            complaint_id: complaint_id.clone(),
            sla_id: sla_id.clone(),
            filer: caller.clone(),
            description,
            evidence_hash,
            status: ComplaintStatus::Filed,
            filed_at: now,
            updated_at: now,
            deposit: deposit.clone(),
            resolution_deadline: deadline,
        };
        self.complaints(&complaint_id, &sla_id).set(complaint);

        self.record_status(
            &complaint_id,
            &sla_id,
            StatusRecord {
                previous_status: None,
                new_status: ComplaintStatus::Filed,
                updated_by: caller.clone(),
                notes: ManagedBuffer::new(),
                timestamp: now,
            },
        );
        self.total_filed_count().update(|v| *v += 1);
        self.open_complaint_count().update(|v| *v += 1);

        self.complaint_filed_event(&complaint_id, &sla_id, &caller, deposit, deadline, now);
    }

    /// Provider-driven status transition. Once the resolution deadline has
    /// passed the stored status is `Escalated` regardless of the request.
    #[endpoint(updateStatus)]
    fn update_status(
        &self,
        complaint_id: ManagedBuffer,
        sla_id: ManagedBuffer,
        requested: ComplaintStatus,
        notes: ManagedBuffer,
    ) -> ComplaintStatus {
        let mut complaint = self.require_complaint(&complaint_id, &sla_id);
        require!(requested.is_requestable(), ERR_INVALID_STATUS);

        let sla = self.fetch_sla(&sla_id);
        let caller = self.blockchain().get_caller();
        require!(caller == sla.provider, ERR_UNAUTHORIZED);
        require!(notes.len() <= MAX_STATUS_NOTES_LEN, ERR_EVIDENCE_TOO_LONG);

        let now = self.blockchain().get_block_timestamp();
        let previous = complaint.status;
        let next = effective_status(requested, now, complaint.resolution_deadline);

        complaint.status = next;
        complaint.updated_at = now;
        self.complaints(&complaint_id, &sla_id).set(complaint);

        self.record_status(
            &complaint_id,
            &sla_id,
            StatusRecord {
                previous_status: Some(previous),
                new_status: next,
                updated_by: caller.clone(),
                notes,
                timestamp: now,
            },
        );
        self.complaint_status_updated_event(&complaint_id, &sla_id, &caller, previous, next, now);
        if next == ComplaintStatus::Escalated && previous != ComplaintStatus::Escalated {
            self.count_escalation(&complaint_id, &sla_id);
            self.complaint_escalated_event(&complaint_id, &sla_id, now);
        }

        next
    }

    /// Permissionless deadline check for external pollers.
    #[endpoint(escalateOverdue)]
    fn escalate_overdue(&self, complaint_id: ManagedBuffer, sla_id: ManagedBuffer) {
        let mut complaint = self.require_complaint(&complaint_id, &sla_id);
        require!(
            complaint.status.is_open_for_escalation(),
            ERR_INVALID_STATUS
        );

        let now = self.blockchain().get_block_timestamp();
        require!(
            is_deadline_missed(now, complaint.resolution_deadline),
            ERR_DEADLINE_NOT_REACHED
        );

        let caller = self.blockchain().get_caller();
        let previous = complaint.status;
        complaint.status = ComplaintStatus::Escalated;
        complaint.updated_at = now;
        self.complaints(&complaint_id, &sla_id).set(complaint);

        self.record_status(
            &complaint_id,
            &sla_id,
            StatusRecord {
                previous_status: Some(previous),
                new_status: ComplaintStatus::Escalated,
                updated_by: caller.clone(),
                notes: ManagedBuffer::from(NOTES_DEADLINE_MISSED),
                timestamp: now,
            },
        );
        self.count_escalation(&complaint_id, &sla_id);

        self.complaint_status_updated_event(
            &complaint_id,
            &sla_id,
            &caller,
            previous,
            ComplaintStatus::Escalated,
            now,
        );
        self.complaint_escalated_event(&complaint_id, &sla_id, now);
    }

    #[endpoint(addEvidence)]
    fn add_evidence(
        &self,
        complaint_id: ManagedBuffer,
        sla_id: ManagedBuffer,
        evidence_hash: Fingerprint<Self::Api>,
        notes: ManagedBuffer,
    ) {
        let mut complaint = self.require_complaint(&complaint_id, &sla_id);
        let caller = self.blockchain().get_caller();
        if caller != complaint.filer {
            let sla = self.fetch_sla(&sla_id);
            require!(caller == sla.provider, ERR_UNAUTHORIZED);
        }
        require!(notes.len() <= MAX_EVIDENCE_NOTES_LEN, ERR_EVIDENCE_TOO_LONG);

        let now = self.blockchain().get_block_timestamp();
        complaint.evidence_hash = evidence_hash;
        complaint.updated_at = now;
        self.complaints(&complaint_id, &sla_id).set(complaint);

        self.evidence_added_event(&complaint_id, &sla_id, &caller, notes, now);
    }

    #[endpoint(closeComplaint)]
    fn close_complaint(&self, complaint_id: ManagedBuffer, sla_id: ManagedBuffer) {
        let complaint = self.require_complaint(&complaint_id, &sla_id);
        require!(complaint.status.is_closable(), ERR_INVALID_STATUS);

        let sla = self.fetch_sla(&sla_id);
        let caller = self.blockchain().get_caller();
        require!(caller == sla.provider, ERR_UNAUTHORIZED);

        self.complaints(&complaint_id, &sla_id).clear();
        self.escalation_counted(&complaint_id, &sla_id).clear();
        self.open_complaint_count().update(|v| {
            if *v > 0 {
                *v -= 1;
            }
        });
        self.closed_count().update(|v| *v += 1);

        self.tx()
            .to(self.deposit_custody().get())
            .typed(DepositCustodyProxy)
            .release_deposit(complaint.filer.clone(), complaint.deposit.clone())
            .sync_call();

        let now = self.blockchain().get_block_timestamp();
        self.complaint_closed_event(&complaint_id, &sla_id, &caller, complaint.deposit, now);
    }

    #[view(getComplaint)]
    fn get_complaint(
        &self,
        complaint_id: ManagedBuffer,
        sla_id: ManagedBuffer,
    ) -> OptionalValue<Complaint<Self::Api>> {
        if self.complaints(&complaint_id, &sla_id).is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.complaints(&complaint_id, &sla_id).get())
        }
    }

    #[view(getStatusHistory)]
    fn get_status_history(
        &self,
        complaint_id: ManagedBuffer,
        sla_id: ManagedBuffer,
        from: u64,
        size: u64,
    ) -> MultiValueEncoded<StatusRecord<Self::Api>> {
        let mut out = MultiValueEncoded::new();
        let history = self.status_history(&complaint_id, &sla_id);
        let total = history.len() as u64;
        let effective_size = core::cmp::min(size, MAX_PAGE_SIZE);
        if total == 0 || effective_size == 0 {
            return out;
        }

        if from >= total {
            return out;
        }

        let mut idx = from + 1;
        let mut emitted = 0;
        while idx <= total && emitted < effective_size {
            out.push(history.get(idx as usize));
            idx += 1;
            emitted += 1;
        }
        out
    }

    #[view(getStatusHistoryCount)]
    fn get_status_history_count(&self, complaint_id: ManagedBuffer, sla_id: ManagedBuffer) -> u64 {
        self.status_history(&complaint_id, &sla_id).len() as u64
    }

    #[view(isDeadlineMissed)]
    fn is_complaint_overdue(&self, complaint_id: ManagedBuffer, sla_id: ManagedBuffer) -> bool {
        let complaint = self.require_complaint(&complaint_id, &sla_id);
        is_deadline_missed(
            self.blockchain().get_block_timestamp(),
            complaint.resolution_deadline,
        )
    }

    #[view(getComplaintStats)]
    fn get_complaint_stats(&self) -> ComplaintStats {
        ComplaintStats {
            total_filed: self.total_filed_count().get(),
            open_complaints: self.open_complaint_count().get(),
            escalated: self.escalated_count().get(),
            closed: self.closed_count().get(),
        }
    }

    #[view(getConfig)]
    fn get_config(&self) -> ComplaintRegistryConfig<Self::Api> {
        ComplaintRegistryConfig {
            sla_registry: self.sla_registry().get(),
            deposit_custody: self.deposit_custody().get(),
            max_description_len: MAX_COMPLAINT_DESCRIPTION_LEN as u64,
            max_status_notes_len: MAX_STATUS_NOTES_LEN as u64,
            max_evidence_notes_len: MAX_EVIDENCE_NOTES_LEN as u64,
        }
    }

    fn require_complaint(
        &self,
        complaint_id: &ManagedBuffer,
        sla_id: &ManagedBuffer,
    ) -> Complaint<Self::Api> {
        require!(
            !self.complaints(complaint_id, sla_id).is_empty(),
            ERR_INVALID_REFERENCE
        );
        self.complaints(complaint_id, sla_id).get()
    }

    fn sla_is_active(&self, sla_id: &ManagedBuffer) -> bool {
        self.tx()
            .to(self.sla_registry().get())
            .typed(SlaRegistryProxy)
            .is_active(sla_id.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn fetch_sla(&self, sla_id: &ManagedBuffer) -> Sla<Self::Api> {
        let sla: OptionalValue<Sla<Self::Api>> = self
            .tx()
            .to(self.sla_registry().get())
            .typed(SlaRegistryProxy)
            .get_sla(sla_id.clone())
            .returns(ReturnsResult)
            .sync_call();

        match sla {
            OptionalValue::Some(value) => value,
            OptionalValue::None => sc_panic!(ERR_INVALID_REFERENCE),
        }
    }

    /// A complaint adds to the escalated total once per filing, however
    /// often it re-enters `Escalated`.
    fn count_escalation(&self, complaint_id: &ManagedBuffer, sla_id: &ManagedBuffer) {
        let counted = self.escalation_counted(complaint_id, sla_id);
        if counted.get() {
            return;
        }
        counted.set(true);
        self.escalated_count().update(|v| *v += 1);
    }

    fn record_status(
        &self,
        complaint_id: &ManagedBuffer,
        sla_id: &ManagedBuffer,
        record: StatusRecord<Self::Api>,
    ) {
        self.status_history(complaint_id, sla_id).push(&record);
    }

    #[event("complaintFiled")]
    fn complaint_filed_event(
        &self,
        #[indexed] complaint_id: &ManagedBuffer,
        #[indexed] sla_id: &ManagedBuffer,
        #[indexed] filer: &ManagedAddress,
        #[indexed] deposit: BigUint,
        #[indexed] resolution_deadline: u64,
        timestamp: u64,
    );

    #[event("complaintStatusUpdated")]
    fn complaint_status_updated_event(
        &self,
        #[indexed] complaint_id: &ManagedBuffer,
        #[indexed] sla_id: &ManagedBuffer,
        #[indexed] by: &ManagedAddress,
        #[indexed] previous_status: ComplaintStatus,
        #[indexed] new_status: ComplaintStatus,
        timestamp: u64,
    );

    #[event("complaintEscalated")]
    fn complaint_escalated_event(
        &self,
        #[indexed] complaint_id: &ManagedBuffer,
        #[indexed] sla_id: &ManagedBuffer,
        timestamp: u64,
    );

    #[event("evidenceAdded")]
    fn evidence_added_event(
        &self,
        #[indexed] complaint_id: &ManagedBuffer,
        #[indexed] sla_id: &ManagedBuffer,
        #[indexed] by: &ManagedAddress,
        #[indexed] notes: ManagedBuffer,
        timestamp: u64,
    );

    #[event("complaintClosed")]
    fn complaint_closed_event(
        &self,
        #[indexed] complaint_id: &ManagedBuffer,
        #[indexed] sla_id: &ManagedBuffer,
        #[indexed] closer: &ManagedAddress,
        #[indexed] released_deposit: BigUint,
        timestamp: u64,
    );

    #[storage_mapper("slaRegistry")]
    fn sla_registry(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("depositCustody")]
    fn deposit_custody(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("complaints")]
    fn complaints(
        &self,
        complaint_id: &ManagedBuffer,
        sla_id: &ManagedBuffer,
    ) -> SingleValueMapper<Complaint<Self::Api>>;

    #[storage_mapper("statusHistory")]
    fn status_history(
        &self,
        complaint_id: &ManagedBuffer,
        sla_id: &ManagedBuffer,
    ) -> VecMapper<StatusRecord<Self::Api>>;

    #[storage_mapper("escalationCounted")]
    fn escalation_counted(
        &self,
        complaint_id: &ManagedBuffer,
        sla_id: &ManagedBuffer,
    ) -> SingleValueMapper<bool>;

    #[storage_mapper("totalFiledCount")]
    fn total_filed_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("openComplaintCount")]
    fn open_complaint_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("escalatedCount")]
    fn escalated_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("closedCount")]
    fn closed_count(&self) -> SingleValueMapper<u64>;
}
