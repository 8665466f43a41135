#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod deposit_custody_mock_proxy;

#[multiversx_sc::contract]
pub trait DepositCustodyMock {
    #[init]
    fn init(&self) {
        self.owner().set(self.blockchain().get_caller());
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setAvailable)]
    fn set_available(&self, account: ManagedAddress, amount: BigUint) {
        self.require_owner();
        self.available(&account).set(amount);
    }

    /// Moves `amount` from the account's available balance into the locked
    /// balance. Reports `false` instead of failing when funds are short.
    #[endpoint(lockDeposit)]
    fn lock_deposit(&self, account: ManagedAddress, amount: BigUint) -> bool {
        let available = self.available(&account).get();
        if available < amount {
            return false;
        }
        self.available(&account).set(&available - &amount);
        self.locked(&account).update(|v| *v += &amount);
        true
    }

    #[endpoint(releaseDeposit)]
    fn release_deposit(&self, account: ManagedAddress, amount: BigUint) {
        let locked = self.locked(&account).get();
        let released = if locked < amount { locked.clone() } else { amount };
        self.locked(&account).set(&locked - &released);
        self.available(&account).update(|v| *v += &released);
    }

    #[view(getAvailable)]
    fn get_available(&self, account: ManagedAddress) -> BigUint {
        self.available(&account).get()
    }

    #[view(getLocked)]
    fn get_locked(&self, account: ManagedAddress) -> BigUint {
        self.locked(&account).get()
    }

    fn require_owner(&self) {
        require!(
            self.blockchain().get_caller() == self.owner().get(),
            "ERR_UNAUTHORIZED"
        );
    }

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("available")]
    fn available(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("locked")]
    fn locked(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
