#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod sla_source_mock_proxy;

use shared_types::{Sla, FINGERPRINT_LEN};

/// Stand-in SLA source exposing the registry's read surface, so the complaint
/// registry can be exercised against hand-set SLA state.
#[multiversx_sc::contract]
pub trait SlaSourceMock {
    #[init]
    fn init(&self) {
        self.owner().set(self.blockchain().get_caller());
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setSla)]
    fn set_sla(
        &self,
        sla_id: ManagedBuffer,
        provider: ManagedAddress,
        customer: ManagedAddress,
        resolution_window: u64,
        deposit_required: BigUint,
        active: bool,
    ) {
        self.require_owner();
        let now = self.blockchain().get_block_timestamp();
        let sla = Sla {
            id: sla_id.clone(),
            provider,
            customer,
            resolution_window,
            penalty_rate: 0,
            max_penalties: 0,
            deposit_required,
            terms_hash: ManagedByteArray::new_from_bytes(&[0u8; FINGERPRINT_LEN]),
            description: ManagedBuffer::new(),
            created_at: now,
            updated_at: now,
            active,
        };
        self.slas(&sla_id).set(sla);
    }

    #[view(isActive)]
    fn is_active(&self, sla_id: ManagedBuffer) -> bool {
        !self.slas(&sla_id).is_empty() && self.slas(&sla_id).get().active
    }

    #[view(getSla)]
    fn get_sla(&self, sla_id: ManagedBuffer) -> OptionalValue<Sla<Self::Api>> {
        if self.slas(&sla_id).is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.slas(&sla_id).get())
        }
    }

    fn require_owner(&self) {
        require!(
            self.blockchain().get_caller() == self.owner().get(),
            "ERR_UNAUTHORIZED"
        );
    }

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("slas")]
    fn slas(&self, sla_id: &ManagedBuffer) -> SingleValueMapper<Sla<Self::Api>>;
}
