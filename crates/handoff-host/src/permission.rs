//! Policy-driven permission authority.
//!
//! Desktop hosts have no modal permission dialog, so the authority is
//! configured with a policy: grant everything, deny everything, or suspend
//! until a decision is delivered through the [`DecisionInbox`]. The inbox
//! keys pending requests by correlation identifier, so overlapping requests
//! resolve independently and a decision for a finished request is ignored.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use handoff_core::{Capability, CorrelationId, PermissionAuthority, PermissionDecision};
use tokio::sync::oneshot;
use tracing::{info, warn};

/// How the authority answers permission requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionPolicy {
    /// Grant every request immediately.
    AllowAll,
    /// Deny every request immediately.
    DenyAll,
    /// Suspend until a decision arrives through the inbox.
    Prompt,
}

/// Handle used to deliver grant/deny decisions for suspended requests.
#[derive(Debug, Clone, Default)]
pub struct DecisionInbox {
    pending: Arc<Mutex<HashMap<CorrelationId, oneshot::Sender<PermissionDecision>>>>,
}

impl DecisionInbox {
    /// Deliver a decision for a pending request. Returns `false` when no
    /// request with that identifier is waiting (already resolved, timed
    /// out, or never existed).
    ///
    /// # Panics
    ///
    /// Panics if the inbox mutex has been poisoned.
    pub fn deliver(&self, id: CorrelationId, decision: PermissionDecision) -> bool {
        let sender = self
            .pending
            .lock()
            .expect("decision inbox mutex poisoned")
            .remove(&id);
        match sender {
            Some(sender) => sender.send(decision).is_ok(),
            None => {
                warn!(correlation_id = %id, "decision delivered for unknown request");
                false
            }
        }
    }

    /// Number of requests currently suspended on a decision.
    ///
    /// # Panics
    ///
    /// Panics if the inbox mutex has been poisoned.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending
            .lock()
            .expect("decision inbox mutex poisoned")
            .len()
    }

    /// Identifiers of requests currently suspended on a decision.
    ///
    /// # Panics
    ///
    /// Panics if the inbox mutex has been poisoned.
    #[must_use]
    pub fn pending_ids(&self) -> Vec<CorrelationId> {
        self.pending
            .lock()
            .expect("decision inbox mutex poisoned")
            .keys()
            .copied()
            .collect()
    }

    fn register(&self, id: CorrelationId) -> (oneshot::Receiver<PermissionDecision>, PendingEntry) {
        let (sender, receiver) = oneshot::channel();
        self.pending
            .lock()
            .expect("decision inbox mutex poisoned")
            .insert(id, sender);
        let entry = PendingEntry {
            inbox: self.clone(),
            id,
        };
        (receiver, entry)
    }

    fn discard(&self, id: CorrelationId) {
        self.pending
            .lock()
            .expect("decision inbox mutex poisoned")
            .remove(&id);
    }
}

/// Removes the registered sender when the requesting future goes away,
/// delivered or not. A request dropped at its deadline must not leave a
/// dead entry behind in the inbox.
struct PendingEntry {
    inbox: DecisionInbox,
    id: CorrelationId,
}

impl Drop for PendingEntry {
    fn drop(&mut self) {
        self.inbox.discard(self.id);
    }
}

/// Permission authority combining a static policy with a granted set.
pub struct PolicyPermissionAuthority {
    policy: PermissionPolicy,
    granted: RwLock<HashSet<Capability>>,
    inbox: DecisionInbox,
}

impl PolicyPermissionAuthority {
    /// Build an authority with the given policy and nothing pre-granted.
    #[must_use]
    pub fn new(policy: PermissionPolicy) -> Self {
        Self {
            policy,
            granted: RwLock::new(HashSet::new()),
            inbox: DecisionInbox::default(),
        }
    }

    /// Pre-grant a capability, as if the user accepted it previously.
    ///
    /// # Panics
    ///
    /// Panics if the granted-set lock has been poisoned.
    #[must_use]
    pub fn with_granted(self, capability: Capability) -> Self {
        self.granted
            .write()
            .expect("granted set lock poisoned")
            .insert(capability);
        self
    }

    /// Inbox handle for delivering decisions to suspended requests.
    #[must_use]
    pub fn inbox(&self) -> DecisionInbox {
        self.inbox.clone()
    }

    fn record_grant(&self, capability: Capability) {
        self.granted
            .write()
            .expect("granted set lock poisoned")
            .insert(capability);
    }
}

#[async_trait]
impl PermissionAuthority for PolicyPermissionAuthority {
    async fn has_permission(&self, capability: Capability) -> bool {
        self.granted
            .read()
            .expect("granted set lock poisoned")
            .contains(&capability)
    }

    async fn request_permission(
        &self,
        id: CorrelationId,
        capability: Capability,
    ) -> PermissionDecision {
        match self.policy {
            PermissionPolicy::AllowAll => {
                self.record_grant(capability);
                info!(correlation_id = %id, capability = capability.as_str(), "policy granted");
                PermissionDecision::Granted
            }
            PermissionPolicy::DenyAll => {
                info!(correlation_id = %id, capability = capability.as_str(), "policy denied");
                PermissionDecision::Denied
            }
            PermissionPolicy::Prompt => {
                let (receiver, _entry) = self.inbox.register(id);
                info!(
                    correlation_id = %id,
                    capability = capability.as_str(),
                    "awaiting permission decision"
                );
                match receiver.await {
                    Ok(PermissionDecision::Granted) => {
                        self.record_grant(capability);
                        PermissionDecision::Granted
                    }
                    Ok(PermissionDecision::Denied) => PermissionDecision::Denied,
                    // Sender dropped without a decision; treat as denial.
                    Err(_) => PermissionDecision::Denied,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn allow_all_grants_and_records() {
        let authority = PolicyPermissionAuthority::new(PermissionPolicy::AllowAll);
        let capability = Capability::ReadSharedStorage;
        assert!(!authority.has_permission(capability).await);

        let decision = authority
            .request_permission(CorrelationId::new(), capability)
            .await;
        assert_eq!(decision, PermissionDecision::Granted);
        assert!(authority.has_permission(capability).await);
    }

    #[tokio::test]
    async fn deny_all_denies_without_recording() {
        let authority = PolicyPermissionAuthority::new(PermissionPolicy::DenyAll);
        let capability = Capability::ReadSharedStorage;
        let decision = authority
            .request_permission(CorrelationId::new(), capability)
            .await;
        assert_eq!(decision, PermissionDecision::Denied);
        assert!(!authority.has_permission(capability).await);
    }

    #[tokio::test]
    async fn prompt_resolves_through_the_inbox() {
        let authority = Arc::new(PolicyPermissionAuthority::new(PermissionPolicy::Prompt));
        let inbox = authority.inbox();
        let id = CorrelationId::new();

        let pending = {
            let authority = Arc::clone(&authority);
            tokio::spawn(async move {
                authority
                    .request_permission(id, Capability::ReadSharedStorage)
                    .await
            })
        };

        // Let the request register before delivering.
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(inbox.pending_len(), 1);
        assert!(inbox.deliver(id, PermissionDecision::Granted));

        let decision = pending.await.expect("request task panicked");
        assert_eq!(decision, PermissionDecision::Granted);
        assert!(
            authority
                .has_permission(Capability::ReadSharedStorage)
                .await
        );
    }

    #[tokio::test]
    async fn timed_out_prompts_release_their_inbox_entries() {
        let authority = PolicyPermissionAuthority::new(PermissionPolicy::Prompt);
        let inbox = authority.inbox();
        let id = CorrelationId::new();

        let outcome = tokio::time::timeout(
            Duration::from_millis(20),
            authority.request_permission(id, Capability::ReadSharedStorage),
        )
        .await;
        assert!(outcome.is_err());

        // The dropped request must take its sender with it.
        assert_eq!(inbox.pending_len(), 0);
        assert!(!inbox.deliver(id, PermissionDecision::Granted));
    }

    #[tokio::test]
    async fn decisions_for_unknown_requests_are_ignored() {
        let authority = PolicyPermissionAuthority::new(PermissionPolicy::Prompt);
        let inbox = authority.inbox();
        assert!(!inbox.deliver(CorrelationId::new(), PermissionDecision::Granted));
    }

    #[tokio::test]
    async fn overlapping_prompts_resolve_independently() {
        let authority = Arc::new(PolicyPermissionAuthority::new(PermissionPolicy::Prompt));
        let inbox = authority.inbox();
        let first = CorrelationId::new();
        let second = CorrelationId::new();

        let first_task = {
            let authority = Arc::clone(&authority);
            tokio::spawn(
                async move { authority.request_permission(first, Capability::ReadSharedStorage).await },
            )
        };
        let second_task = {
            let authority = Arc::clone(&authority);
            tokio::spawn(async move {
                authority
                    .request_permission(second, Capability::ReadSharedStorage)
                    .await
            })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(inbox.pending_len(), 2);
        assert!(inbox.deliver(second, PermissionDecision::Denied));
        assert!(inbox.deliver(first, PermissionDecision::Granted));

        assert_eq!(
            first_task.await.expect("first task"),
            PermissionDecision::Granted
        );
        assert_eq!(
            second_task.await.expect("second task"),
            PermissionDecision::Denied
        );
    }
}
