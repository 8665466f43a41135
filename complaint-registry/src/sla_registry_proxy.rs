use multiversx_sc::proxy_imports::*;
use shared_types::Sla;

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

impl<Env, From, To, Gas> SlaRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
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
