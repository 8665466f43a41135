#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod sla_registry_proxy;

use shared_types::{
    is_valid_id, Amendment, AmendmentApplication, AmendmentStatus, AmendmentTerms, ApprovalSet,
    Fingerprint, PartyBinding, PartyRole, RegistryStats, Sla, SlaEventKind, SlaEventRecord,
    MAX_AMENDMENT_NOTES_LEN, MAX_PAGE_SIZE, MAX_PENALTY_RATE_PCT, MAX_SLA_DESCRIPTION_LEN,
};

pub const ERR_ALREADY_EXISTS: &str = "ERR_ALREADY_EXISTS";
pub const ERR_NOT_FOUND: &str = "ERR_NOT_FOUND";
pub const ERR_UNAUTHORIZED: &str = "ERR_UNAUTHORIZED";
pub const ERR_INVALID_TERMS: &str = "ERR_INVALID_TERMS";

const DETAIL_CREATED: &[u8] = b"sla created";
const DETAIL_DESCRIPTION_UPDATED: &[u8] = b"description updated";
const DETAIL_AMENDMENT_APPLIED: &[u8] = b"amendment applied: ";
const DETAIL_TERMINATED: &[u8] = b"sla terminated";

#[multiversx_sc::contract]
pub trait SlaRegistry {
    #[init]
    fn init(&self) {
        self.sla_count().set(0u64);
        self.active_sla_count().set(0u64);
        self.amendments_proposed_count().set(0u64);
        self.amendments_applied_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(createSla)]
    fn create_sla(
        &self,
        sla_id: ManagedBuffer,
        provider: ManagedAddress,
        customer: ManagedAddress,
        resolution_window: u64,
        penalty_rate: u64,
        max_penalties: u64,
        deposit_required: BigUint,
        terms_hash: Fingerprint<Self::Api>,
        description: ManagedBuffer,
    ) {
        require!(self.slas(&sla_id).is_empty(), ERR_ALREADY_EXISTS);
        require!(is_valid_id(&sla_id), ERR_INVALID_TERMS);
        require!(description.len() <= MAX_SLA_DESCRIPTION_LEN, ERR_INVALID_TERMS);
        require!(penalty_rate <= MAX_PENALTY_RATE_PCT, ERR_INVALID_TERMS);
        require!(provider != customer, ERR_INVALID_TERMS);

        let caller = self.blockchain().get_caller();
        require!(caller == provider || caller == customer, ERR_UNAUTHORIZED);

        let now = self.blockchain().get_block_timestamp();
        let sla = Sla {
            id: sla_id.clone(),
            provider: provider.clone(),
            customer: customer.clone(),
            resolution_window,
            penalty_rate,
            max_penalties,
            deposit_required,
            terms_hash,
            description,
            created_at: now,
            updated_at: now,
            active: true,
        };
        self.slas(&sla_id).set(sla);

        self.party_role(&sla_id, &provider).set(PartyRole::Provider);
        self.party_role(&sla_id, &customer).set(PartyRole::Customer);
        self.sla_ids_by_party(&provider).push(&sla_id);
        self.sla_ids_by_party(&customer).push(&sla_id);

        self.sla_count().update(|v| *v += 1);
        self.active_sla_count().update(|v| *v += 1);

        self.record_event(&sla_id, SlaEventKind::Created, ManagedBuffer::from(DETAIL_CREATED), now);
        self.sla_created_event(&sla_id, &provider, &customer, now);
    }

    #[endpoint(updateDescription)]
    fn update_description(&self, sla_id: ManagedBuffer, description: ManagedBuffer) {
        let mut sla = self.require_sla(&sla_id);
        let caller = self.blockchain().get_caller();
        self.require_party(&sla, &caller);
        require!(sla.active, ERR_UNAUTHORIZED);
        require!(description.len() <= MAX_SLA_DESCRIPTION_LEN, ERR_INVALID_TERMS);

        let now = self.blockchain().get_block_timestamp();
        sla.description = description;
        sla.updated_at = now;
        self.slas(&sla_id).set(sla);

        self.record_event(
            &sla_id,
            SlaEventKind::Updated,
            ManagedBuffer::from(DETAIL_DESCRIPTION_UPDATED),
            now,
        );
        self.sla_description_updated_event(&sla_id, &caller, now);
    }

    #[endpoint(proposeAmendment)]
    fn propose_amendment(
        &self,
        sla_id: ManagedBuffer,
        amendment_id: ManagedBuffer,
        terms: AmendmentTerms<Self::Api>,
        notes: ManagedBuffer,
    ) {
        let sla = self.require_sla(&sla_id);
        require!(sla.active, ERR_UNAUTHORIZED);
        let caller = self.blockchain().get_caller();
        let role = self.require_party(&sla, &caller);

        require!(notes.len() <= MAX_AMENDMENT_NOTES_LEN, ERR_INVALID_TERMS);
        require!(is_valid_id(&amendment_id), ERR_INVALID_TERMS);
        require!(!terms.is_empty(), ERR_INVALID_TERMS);
        require!(terms.is_within_bounds(), ERR_INVALID_TERMS);
        require!(
            self.amendments(&sla_id, &amendment_id).is_empty(),
            ERR_ALREADY_EXISTS
        );

        let now = self.blockchain().get_block_timestamp();
        let amendment = Amendment {
            sla_id: sla_id.clone(),
            amendment_id: amendment_id.clone(),
            proposer: caller.clone(),
            terms,
            notes,
            approvals: ApprovalSet::proposed_by(role),
            status: AmendmentStatus::Pending,
            proposed_at: now,
            updated_at: now,
            applied_at: 0,
        };
        self.amendments(&sla_id, &amendment_id).set(amendment);
        self.amendment_ids(&sla_id).push(&amendment_id);
        self.amendments_proposed_count().update(|v| *v += 1);

        self.amendment_proposed_event(&sla_id, &amendment_id, &caller, now);
    }

    /// Records the caller's approval. Applies the amendment once both parties
    /// have approved; the proposer counts as already approved.
    #[endpoint(approveAmendment)]
    fn approve_amendment(
        &self,
        sla_id: ManagedBuffer,
        amendment_id: ManagedBuffer,
    ) -> AmendmentApplication {
        let mut sla = self.require_sla(&sla_id);
        let mut amendment = self.require_amendment(&sla_id, &amendment_id);
        let caller = self.blockchain().get_caller();
        let role = self.require_party(&sla, &caller);

        if amendment.status == AmendmentStatus::Applied {
            return AmendmentApplication::Applied;
        }
        require!(sla.active, ERR_UNAUTHORIZED);

        let now = self.blockchain().get_block_timestamp();
        if amendment.approvals.approve(role) {
            amendment.updated_at = now;
            self.amendment_approved_event(&sla_id, &amendment_id, &caller, now);
        }

        if !amendment.approvals.is_unanimous() {
            self.amendments(&sla_id, &amendment_id).set(amendment);
            return AmendmentApplication::Pending;
        }

        amendment.terms.apply_to(&mut sla);
        sla.updated_at = now;
        amendment.status = AmendmentStatus::Applied;
        amendment.applied_at = now;

        self.slas(&sla_id).set(sla);
        self.amendments(&sla_id, &amendment_id).set(amendment);
        self.amendments_applied_count().update(|v| *v += 1);

        let mut detail = ManagedBuffer::from(DETAIL_AMENDMENT_APPLIED);
        detail.append(&amendment_id);
        self.record_event(&sla_id, SlaEventKind::Updated, detail, now);
        self.amendment_applied_event(&sla_id, &amendment_id, now);

        AmendmentApplication::Applied
    }

    /// Deactivates the SLA. Terminating an inactive SLA succeeds without
    /// recording a second event.
    #[endpoint(terminate)]
    fn terminate(&self, sla_id: ManagedBuffer) {
        let mut sla = self.require_sla(&sla_id);
        let caller = self.blockchain().get_caller();
        self.require_party(&sla, &caller);

        if !sla.active {
            return;
        }

        let now = self.blockchain().get_block_timestamp();
        sla.active = false;
        self.slas(&sla_id).set(sla);
        self.active_sla_count().update(|v| {
            if *v > 0 {
                *v -= 1;
            }
        });

        self.record_event(
            &sla_id,
            SlaEventKind::Terminated,
            ManagedBuffer::from(DETAIL_TERMINATED),
            now,
        );
        self.sla_terminated_event(&sla_id, &caller, now);
    }

    #[view(getSla)]
    fn get_sla(&self, sla_id: ManagedBuffer) -> OptionalValue<Sla<Self::Api>> {
        if self.slas(&sla_id).is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.slas(&sla_id).get())
        }
    }

    #[view(isActive)]
    fn is_active(&self, sla_id: ManagedBuffer) -> bool {
        !self.slas(&sla_id).is_empty() && self.slas(&sla_id).get().active
    }

    #[view(getParties)]
    fn get_parties(&self, sla_id: ManagedBuffer) -> MultiValueEncoded<PartyBinding<Self::Api>> {
        let mut out = MultiValueEncoded::new();
        if self.slas(&sla_id).is_empty() {
            return out;
        }
        let sla = self.slas(&sla_id).get();
        for party in [sla.provider, sla.customer] {
            let role = self.party_role(&sla_id, &party).get();
            out.push(PartyBinding {
                sla_id: sla_id.clone(),
                party,
                role,
            });
        }
        out
    }

    #[view(verifyParty)]
    fn verify_party(&self, sla_id: ManagedBuffer, party: ManagedAddress) -> PartyRole {
        require!(!self.slas(&sla_id).is_empty(), ERR_NOT_FOUND);
        require!(!self.party_role(&sla_id, &party).is_empty(), ERR_UNAUTHORIZED);
        self.party_role(&sla_id, &party).get()
    }

    #[view(getAmendment)]
    fn get_amendment(
        &self,
        sla_id: ManagedBuffer,
        amendment_id: ManagedBuffer,
    ) -> OptionalValue<Amendment<Self::Api>> {
        if self.amendments(&sla_id, &amendment_id).is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.amendments(&sla_id, &amendment_id).get())
        }
    }

    #[view(getAmendmentApprovers)]
    fn get_amendment_approvers(
        &self,
        sla_id: ManagedBuffer,
        amendment_id: ManagedBuffer,
    ) -> MultiValueEncoded<ManagedAddress> {
        let mut out = MultiValueEncoded::new();
        if self.slas(&sla_id).is_empty() || self.amendments(&sla_id, &amendment_id).is_empty() {
            return out;
        }
        let sla = self.slas(&sla_id).get();
        let approvals = self.amendments(&sla_id, &amendment_id).get().approvals;
        for role in [PartyRole::Provider, PartyRole::Customer] {
            if approvals.has_approved(role) {
                out.push(sla.party(role).clone());
            }
        }
        out
    }

    #[view(getAmendmentIds)]
    fn get_amendment_ids(&self, sla_id: ManagedBuffer) -> MultiValueEncoded<ManagedBuffer> {
        let mut out = MultiValueEncoded::new();
        for amendment_id in self.amendment_ids(&sla_id).iter() {
            out.push(amendment_id);
        }
        out
    }

    #[view(getEvents)]
    fn get_events(
        &self,
        sla_id: ManagedBuffer,
        from: u64,
        size: u64,
    ) -> MultiValueEncoded<SlaEventRecord<Self::Api>> {
        let mut out = MultiValueEncoded::new();
        let log = self.sla_events(&sla_id);
        let total = log.len() as u64;
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
            out.push(log.get(idx as usize));
            idx += 1;
            emitted += 1;
        }
        out
    }

    #[view(getEventCount)]
    fn get_event_count(&self, sla_id: ManagedBuffer) -> u64 {
        self.sla_events(&sla_id).len() as u64
    }

    #[view(getSlaIdsByParty)]
    fn get_sla_ids_by_party(&self, party: ManagedAddress) -> MultiValueEncoded<ManagedBuffer> {
        let mut out = MultiValueEncoded::new();
        for sla_id in self.sla_ids_by_party(&party).iter() {
            out.push(sla_id);
        }
        out
    }

    #[view(getRegistryStats)]
    fn get_registry_stats(&self) -> RegistryStats {
        RegistryStats {
            total_slas: self.sla_count().get(),
            active_slas: self.active_sla_count().get(),
            amendments_proposed: self.amendments_proposed_count().get(),
            amendments_applied: self.amendments_applied_count().get(),
        }
    }

    fn require_sla(&self, sla_id: &ManagedBuffer) -> Sla<Self::Api> {
        require!(!self.slas(sla_id).is_empty(), ERR_NOT_FOUND);
        self.slas(sla_id).get()
    }

    fn require_amendment(
        &self,
        sla_id: &ManagedBuffer,
        amendment_id: &ManagedBuffer,
    ) -> Amendment<Self::Api> {
        require!(
            !self.amendments(sla_id, amendment_id).is_empty(),
            ERR_NOT_FOUND
        );
        self.amendments(sla_id, amendment_id).get()
    }

    fn require_party(&self, sla: &Sla<Self::Api>, caller: &ManagedAddress) -> PartyRole {
        match sla.role_of(caller) {
            Some(role) => role,
            None => sc_panic!(ERR_UNAUTHORIZED),
        }
    }

    fn record_event(
        &self,
        sla_id: &ManagedBuffer,
        kind: SlaEventKind,
        detail: ManagedBuffer,
        timestamp: u64,
    ) {
        self.sla_events(sla_id).push(&SlaEventRecord {
            kind,
            detail,
            timestamp,
        });
    }

    #[event("slaCreated")]
    fn sla_created_event(
        &self,
        #[indexed] sla_id: &ManagedBuffer,
        #[indexed] provider: &ManagedAddress,
        #[indexed] customer: &ManagedAddress,
        timestamp: u64,
    );

    #[event("slaDescriptionUpdated")]
    fn sla_description_updated_event(
        &self,
        #[indexed] sla_id: &ManagedBuffer,
        #[indexed] by: &ManagedAddress,
        timestamp: u64,
    );

    #[event("amendmentProposed")]
    fn amendment_proposed_event(
        &self,
        #[indexed] sla_id: &ManagedBuffer,
        #[indexed] amendment_id: &ManagedBuffer,
        #[indexed] proposer: &ManagedAddress,
        timestamp: u64,
    );

    #[event("amendmentApproved")]
    fn amendment_approved_event(
        &self,
        #[indexed] sla_id: &ManagedBuffer,
        #[indexed] amendment_id: &ManagedBuffer,
        #[indexed] approver: &ManagedAddress,
        timestamp: u64,
    );

    #[event("amendmentApplied")]
    fn amendment_applied_event(
        &self,
        #[indexed] sla_id: &ManagedBuffer,
        #[indexed] amendment_id: &ManagedBuffer,
        timestamp: u64,
    );

    #[event("slaTerminated")]
    fn sla_terminated_event(
        &self,
        #[indexed] sla_id: &ManagedBuffer,
        #[indexed] by: &ManagedAddress,
        timestamp: u64,
    );

    #[storage_mapper("slas")]
    fn slas(&self, sla_id: &ManagedBuffer) -> SingleValueMapper<Sla<Self::Api>>;

    #[storage_mapper("partyRole")]
    fn party_role(
        &self,
        sla_id: &ManagedBuffer,
        party: &ManagedAddress,
    ) -> SingleValueMapper<PartyRole>;

    #[storage_mapper("slaIdsByParty")]
    fn sla_ids_by_party(&self, party: &ManagedAddress) -> VecMapper<ManagedBuffer>;

    #[storage_mapper("amendments")]
    fn amendments(
        &self,
        sla_id: &ManagedBuffer,
        amendment_id: &ManagedBuffer,
    ) -> SingleValueMapper<Amendment<Self::Api>>;

    #[storage_mapper("amendmentIds")]
    fn amendment_ids(&self, sla_id: &ManagedBuffer) -> VecMapper<ManagedBuffer>;

    #[storage_mapper("slaEvents")]
    fn sla_events(&self, sla_id: &ManagedBuffer) -> VecMapper<SlaEventRecord<Self::Api>>;

    #[storage_mapper("slaCount")]
    fn sla_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("activeSlaCount")]
    fn active_sla_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("amendmentsProposedCount")]
    fn amendments_proposed_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("amendmentsAppliedCount")]
    fn amendments_applied_count(&self) -> SingleValueMapper<u64>;
}
