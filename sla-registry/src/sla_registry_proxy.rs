use multiversx_sc::proxy_imports::*;
use shared_types::{
    Amendment, AmendmentApplication, AmendmentTerms, Fingerprint, PartyBinding, PartyRole,
    RegistryStats, Sla, SlaEventRecord,
};

pub struct SlaRegistryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for SlaRegistryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = SlaRegistryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        SlaRegistryProxyMethods { wrapped_tx: tx }
    }
}

pub struct SlaRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> SlaRegistryProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init(self) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .original_result()
    }
}

impl<Env, From, To, Gas> SlaRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> SlaRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn create_sla<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<u64>,
        Arg5: ProxyArg<u64>,
        Arg6: ProxyArg<BigUint<Env::Api>>,
        Arg7: ProxyArg<Fingerprint<Env::Api>>,
        Arg8: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        sla_id: Arg0,
        provider: Arg1,
        customer: Arg2,
        resolution_window: Arg3,
        penalty_rate: Arg4,
        max_penalties: Arg5,
        deposit_required: Arg6,
        terms_hash: Arg7,
        description: Arg8,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createSla")
            .argument(&sla_id)
            .argument(&provider)
            .argument(&customer)
            .argument(&resolution_window)
            .argument(&penalty_rate)
            .argument(&max_penalties)
            .argument(&deposit_required)
            .argument(&terms_hash)
            .argument(&description)
            .original_result()
    }

    pub fn update_description<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        sla_id: Arg0,
        description: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updateDescription")
            .argument(&sla_id)
            .argument(&description)
            .original_result()
    }

    pub fn propose_amendment<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<AmendmentTerms<Env::Api>>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        sla_id: Arg0,
        amendment_id: Arg1,
        terms: Arg2,
        notes: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposeAmendment")
            .argument(&sla_id)
            .argument(&amendment_id)
            .argument(&terms)
            .argument(&notes)
            .original_result()
    }

    pub fn approve_amendment<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        sla_id: Arg0,
        amendment_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, AmendmentApplication> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("approveAmendment")
            .argument(&sla_id)
            .argument(&amendment_id)
            .original_result()
    }

    pub fn terminate<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        sla_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("terminate")
            .argument(&sla_id)
            .original_result()
    }

    pub fn get_sla<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        sla_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<Sla<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSla")
            .argument(&sla_id)
            .original_result()
    }

    pub fn is_active<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        sla_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isActive")
            .argument(&sla_id)
            .original_result()
    }

    pub fn get_parties<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        sla_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, PartyBinding<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getParties")
            .argument(&sla_id)
            .original_result()
    }

    pub fn verify_party<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        sla_id: Arg0,
        party: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, PartyRole> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("verifyParty")
            .argument(&sla_id)
            .argument(&party)
            .original_result()
    }

    pub fn get_amendment<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        sla_id: Arg0,
        amendment_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<Amendment<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAmendment")
            .argument(&sla_id)
            .argument(&amendment_id)
            .original_result()
    }

    pub fn get_amendment_approvers<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        sla_id: Arg0,
        amendment_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAmendmentApprovers")
            .argument(&sla_id)
            .argument(&amendment_id)
            .original_result()
    }

    pub fn get_amendment_ids<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        sla_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedBuffer<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAmendmentIds")
            .argument(&sla_id)
            .original_result()
    }

    pub fn get_events<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        sla_id: Arg0,
        from: Arg1,
        size: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, SlaEventRecord<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEvents")
            .argument(&sla_id)
            .argument(&from)
            .argument(&size)
            .original_result()
    }

    pub fn get_event_count<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        sla_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEventCount")
            .argument(&sla_id)
            .original_result()
    }

    pub fn get_sla_ids_by_party<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        party: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedBuffer<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSlaIdsByParty")
            .argument(&party)
            .original_result()
    }

    pub fn get_registry_stats(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, RegistryStats> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRegistryStats")
            .original_result()
    }
}
