use multiversx_sc::proxy_imports::*;
use shared_types::{
    Complaint, ComplaintRegistryConfig, ComplaintStats, ComplaintStatus, Fingerprint, StatusRecord,
};

pub struct ComplaintRegistryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ComplaintRegistryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ComplaintRegistryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ComplaintRegistryProxyMethods { wrapped_tx: tx }
    }
}

pub struct ComplaintRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> ComplaintRegistryProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        sla_registry: Arg0,
        deposit_custody: Arg1,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&sla_registry)
            .argument(&deposit_custody)
            .original_result()
    }
}

impl<Env, From, To, Gas> ComplaintRegistryProxyMethods<Env, From, To, Gas>
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

impl<Env, From, To, Gas> ComplaintRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn file_complaint<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<Fingerprint<Env::Api>>,
    >(
        self,
        complaint_id: Arg0,
        sla_id: Arg1,
        description: Arg2,
        evidence_hash: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("fileComplaint")
            .argument(&complaint_id)
            .argument(&sla_id)
            .argument(&description)
            .argument(&evidence_hash)
            .original_result()
    }

    pub fn update_status<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<ComplaintStatus>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        complaint_id: Arg0,
        sla_id: Arg1,
        requested: Arg2,
        notes: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ComplaintStatus> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updateStatus")
            .argument(&complaint_id)
            .argument(&sla_id)
            .argument(&requested)
            .argument(&notes)
            .original_result()
    }

    pub fn escalate_overdue<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        complaint_id: Arg0,
        sla_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("escalateOverdue")
            .argument(&complaint_id)
            .argument(&sla_id)
            .original_result()
    }

    pub fn add_evidence<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<Fingerprint<Env::Api>>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        complaint_id: Arg0,
        sla_id: Arg1,
        evidence_hash: Arg2,
        notes: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addEvidence")
            .argument(&complaint_id)
            .argument(&sla_id)
            .argument(&evidence_hash)
            .argument(&notes)
            .original_result()
    }

    pub fn close_complaint<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        complaint_id: Arg0,
        sla_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("closeComplaint")
            .argument(&complaint_id)
            .argument(&sla_id)
            .original_result()
    }

    pub fn get_complaint<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        complaint_id: Arg0,
        sla_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<Complaint<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getComplaint")
            .argument(&complaint_id)
            .argument(&sla_id)
            .original_result()
    }

    pub fn get_status_history<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<u64>,
    >(
        self,
        complaint_id: Arg0,
        sla_id: Arg1,
        from: Arg2,
        size: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, StatusRecord<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getStatusHistory")
            .argument(&complaint_id)
            .argument(&sla_id)
            .argument(&from)
            .argument(&size)
            .original_result()
    }

    pub fn get_status_history_count<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        complaint_id: Arg0,
        sla_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getStatusHistoryCount")
            .argument(&complaint_id)
            .argument(&sla_id)
            .original_result()
    }

    pub fn is_deadline_missed<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        complaint_id: Arg0,
        sla_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isDeadlineMissed")
            .argument(&complaint_id)
            .argument(&sla_id)
            .original_result()
    }

    pub fn get_complaint_stats(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ComplaintStats> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getComplaintStats")
            .original_result()
    }

    pub fn get_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ComplaintRegistryConfig<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getConfig")
            .original_result()
    }
}
