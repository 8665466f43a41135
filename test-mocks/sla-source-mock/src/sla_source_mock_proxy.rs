use multiversx_sc::proxy_imports::*;
use shared_types::Sla;

pub struct SlaSourceMockProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for SlaSourceMockProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = SlaSourceMockProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        SlaSourceMockProxyMethods { wrapped_tx: tx }
    }
}

pub struct SlaSourceMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> SlaSourceMockProxyMethods<Env, From, (), Gas>
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

impl<Env, From, To, Gas> SlaSourceMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_sla<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<BigUint<Env::Api>>,
        Arg5: ProxyArg<bool>,
    >(
        self,
        sla_id: Arg0,
        provider: Arg1,
        customer: Arg2,
        resolution_window: Arg3,
        deposit_required: Arg4,
        active: Arg5,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setSla")
            .argument(&sla_id)
            .argument(&provider)
            .argument(&customer)
            .argument(&resolution_window)
            .argument(&deposit_required)
            .argument(&active)
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
}
