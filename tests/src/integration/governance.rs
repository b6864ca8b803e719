//! # Governance Flows
//!
//! Target chain scoping, fee accounting, and contract upgrades for both
//! governance modules.

#[cfg(test)]
mod tests {
    use bridge_runtime::{BridgeError, Disposition, SubmitOutcome};
    use bridge_types::{ChainId, U256};
    use gb_04_token_bridge::{GovernanceEffect, TokenBridgeAction, TokenBridgeError};
    use gb_05_governance::{CoreAction, CoreEffect, GovernanceError, CORE_MODULE};

    use crate::fixtures::*;

    fn set_fee(fee: u64) -> CoreAction {
        CoreAction::SetMessageFee {
            fee: U256::from(fee),
        }
    }

    #[test]
    fn test_target_chain_scoping() {
        let network = Network::new(4);
        let action = set_fee(1);

        // 0 = every chain
        network
            .submit(&network.governance(CORE_MODULE, action.action_id(), ChainId::ANY, action.encode()))
            .unwrap();
        // this chain
        network
            .submit(&network.governance(CORE_MODULE, action.action_id(), HOST, action.encode()))
            .unwrap();
        assert_eq!(network.node.ledger().len(), 2);

        // another chain
        let err = network
            .submit(&network.governance(CORE_MODULE, action.action_id(), ChainId::BSC, action.encode()))
            .unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Governance(GovernanceError::InvalidTargetChain { target, current })
                if target == ChainId::BSC && current == HOST
        ));
        assert_eq!(err.disposition(), Disposition::PermanentlyInvalid);
        assert_eq!(network.node.ledger().len(), 2);
    }

    #[test]
    fn test_fees_accrue_and_transfer_out() {
        let network = Network::new(4);
        let bridge = network.node.token_bridge();
        bridge.register_native_asset(NATIVE_TOKEN, 8, "NAT", "Native");

        bridge.fund_message_fees(ALICE, U256::from(30u64));
        let fee = U256::from(10u64);

        network.submit(&network.core(set_fee(10))).unwrap();
        bridge.attest_token(NATIVE_TOKEN, ALICE, fee, 0).unwrap();
        bridge.attest_token(NATIVE_TOKEN, ALICE, fee, 1).unwrap();
        assert_eq!(network.node.core().state().collected_fees, U256::from(20u64));
        assert_eq!(bridge.message_fee_funds(&ALICE), fee);

        let outcome = network
            .submit(&network.core(CoreAction::TransferFees {
                amount: U256::from(15u64),
                recipient: BOB,
            }))
            .unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Core(CoreEffect::FeesTransferred {
                amount: U256::from(15u64),
                recipient: BOB,
            })
        );

        // 5 left; the claim of a failing transfer is released
        let overdraw = network.core(CoreAction::TransferFees {
            amount: U256::from(6u64),
            recipient: BOB,
        });
        let claims = network.node.ledger().len();
        let err = network.submit(&overdraw).unwrap_err();
        assert_eq!(err.disposition(), Disposition::Deferred);
        assert_eq!(network.node.ledger().len(), claims);

        bridge.attest_token(NATIVE_TOKEN, ALICE, fee, 2).unwrap();
        network.submit(&overdraw).unwrap();
        assert_eq!(network.node.core().state().collected_fees, U256::from(9u64));
    }

    #[test]
    fn test_unpaid_messages_accrue_nothing() {
        let network = Network::new(4);
        let bridge = network.node.token_bridge();
        bridge.register_native_asset(NATIVE_TOKEN, 8, "NAT", "Native");
        network.submit(&network.core(set_fee(5))).unwrap();

        // No fee funds: the message is never published
        for nonce in 0..3 {
            assert!(bridge
                .attest_token(NATIVE_TOKEN, ALICE, U256::from(5u64), nonce)
                .is_err());
        }
        assert_eq!(network.node.core().state().collected_fees, U256::zero());
        assert!(bridge.publisher().messages().is_empty());

        let err = network
            .submit(&network.core(CoreAction::TransferFees {
                amount: U256::from(15u64),
                recipient: BOB,
            }))
            .unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Governance(GovernanceError::InsufficientFees { .. })
        ));
    }

    #[test]
    fn test_contract_upgrades() {
        let network = Network::new(4);
        network
            .submit(&network.core(CoreAction::ContractUpgrade {
                new_contract: [0xC0; 32],
            }))
            .unwrap();
        assert_eq!(network.node.core().state().contract, Some([0xC0; 32]));

        let outcome = network
            .submit(&network.token_bridge(TokenBridgeAction::UpgradeContract {
                new_contract: [0xC1; 32],
            }))
            .unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::TokenBridgeGovernance(GovernanceEffect::ContractUpgraded {
                new_contract: [0xC1; 32],
            })
        );
        assert_eq!(network.node.token_bridge().state().contract, Some([0xC1; 32]));
    }

    #[test]
    fn test_chain_registered_once() {
        let network = Network::with_foreign_bridge(4);
        assert_eq!(
            network.node.token_bridge().registered_emitter(FOREIGN),
            Some(FOREIGN_BRIDGE)
        );

        let err = network
            .submit(&network.token_bridge(TokenBridgeAction::RegisterChain {
                chain: FOREIGN,
                emitter_address: [0xEE; 32],
            }))
            .unwrap_err();
        assert!(matches!(
            err,
            BridgeError::TokenBridge(TokenBridgeError::ChainAlreadyRegistered(chain)) if chain == FOREIGN
        ));
        assert_eq!(
            network.node.token_bridge().registered_emitter(FOREIGN),
            Some(FOREIGN_BRIDGE)
        );
    }

    #[test]
    fn test_host_chain_cannot_register_itself() {
        let network = Network::new(4);
        let err = network
            .submit(&network.token_bridge(TokenBridgeAction::RegisterChain {
                chain: HOST,
                emitter_address: [0xEE; 32],
            }))
            .unwrap_err();
        assert!(matches!(
            err,
            BridgeError::TokenBridge(TokenBridgeError::InvalidRegistration(_))
        ));
    }

    #[test]
    fn test_unknown_core_action_is_malformed() {
        let network = Network::new(4);
        let err = network
            .submit(&network.governance(CORE_MODULE, 9, ChainId::ANY, vec![]))
            .unwrap_err();
        assert_eq!(err.disposition(), Disposition::Malformed);
        assert!(network.node.ledger().is_empty());
    }
}
